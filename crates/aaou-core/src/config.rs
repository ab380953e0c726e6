use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::protocol::Protocol;

/// Directory name under the XDG config/state homes.
pub const APP_DIR: &str = "agsappopenurl";

/// Plugin configuration loaded from `~/.config/agsappopenurl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AaouConfig {
    /// Pass validated URLs to the browser. `false` only logs them (useful while testing a game).
    #[serde(default = "default_launch")]
    pub launch: bool,
    /// Write a tracing log file under the XDG state dir from inside the engine.
    #[serde(default)]
    pub file_log: bool,
    /// Protocol the CLI uses when `--protocol` is not given.
    #[serde(default)]
    pub default_protocol: Protocol,
}

fn default_launch() -> bool {
    true
}

impl Default for AaouConfig {
    fn default() -> Self {
        Self {
            launch: default_launch(),
            file_log: false,
            default_protocol: Protocol::Https,
        }
    }
}

#[cfg(unix)]
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_DIR)?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

#[cfg(not(unix))]
pub fn config_path() -> Result<PathBuf> {
    anyhow::bail!("no config directory on this platform")
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AaouConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] with an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<AaouConfig> {
    if !path.exists() {
        let default_cfg = AaouConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: AaouConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Read the config file if present and valid, otherwise defaults. Never writes.
///
/// Used inside the engine process, where a missing or broken config must not
/// stop the game.
pub fn load_or_default() -> AaouConfig {
    let path = match config_path() {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!("no config path ({e:#}), using defaults");
            return AaouConfig::default();
        }
    };
    load_or_default_at(&path)
}

/// Like [`load_or_default`] with an explicit path.
pub fn load_or_default_at(path: &Path) -> AaouConfig {
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(_) => return AaouConfig::default(),
    };
    match toml::from_str(&data) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("ignoring invalid config at {}: {e}", path.display());
            AaouConfig::default()
        }
    }
}
