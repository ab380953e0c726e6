//! `aaou open` – validate, assemble and launch.

use std::sync::Arc;

use aaou_core::config::AaouConfig;
use aaou_core::launcher::SystemLauncher;
use aaou_core::protocol::Protocol;
use aaou_core::url_request::UrlOpener;
use anyhow::Result;

pub fn run_open(cfg: &AaouConfig, protocol: Protocol, url: &str) -> Result<()> {
    let opener = UrlOpener::new(Arc::new(SystemLauncher)).with_launch(cfg.launch);
    let opened = opener.open(protocol, Some(url.as_bytes()))?;
    if opener.launches() {
        println!("opened {opened}");
    } else {
        println!("launch disabled in config, would open {opened}");
    }
    Ok(())
}
