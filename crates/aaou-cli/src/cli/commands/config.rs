//! `aaou config` – show where the config lives and what is in effect.

use aaou_core::config::{self, AaouConfig};
use anyhow::Result;

pub fn run_config(cfg: &AaouConfig) -> Result<()> {
    match config::config_path() {
        Ok(path) => println!("# {}", path.display()),
        Err(e) => println!("# no config file ({e:#})"),
    }
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
