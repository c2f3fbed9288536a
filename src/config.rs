// SPDX-License-Identifier: MPL-2.0
//! Host-surface configuration, loaded from and saved to a `settings.toml`
//! file under the platform configuration directory.
//!
//! # Examples
//!
//! ```no_run
//! use iced_notify::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.notification_duration_ms = Some(3000);
//! config::save(&config).expect("failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedNotify";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// UI language, e.g. `"en-US"`. `None` defers to the system locale.
    pub language: Option<String>,
    /// Default auto-dismiss duration for info and success notifications,
    /// in milliseconds. `None` uses the built-in fallback.
    #[serde(default)]
    pub notification_duration_ms: Option<u64>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
