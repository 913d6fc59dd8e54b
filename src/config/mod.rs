// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Every field is optional: a missing file, a missing field, or an
//! unparsable file all resolve to defaults so a broken config can never
//! keep the card from opening.
//!
//! # Examples
//!
//! ```no_run
//! use snowletter::config::{self, Config};
//!
//! let mut config = config::load(None).unwrap_or_default();
//! config.signature = Some("With love".to_string());
//! config::save(&config, None).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Snowletter";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to a text file supplying the letter body.
    #[serde(default)]
    pub letter_path: Option<PathBuf>,
    /// Path to the photo shown on the envelope.
    #[serde(default)]
    pub photo_path: Option<PathBuf>,
    /// Closing signature line rendered under the letter.
    #[serde(default)]
    pub signature: Option<String>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Resolves the config file path, honoring an explicit directory override
/// (from the `--config-dir` flag) over the platform config directory.
pub fn config_path(dir_override: Option<&Path>) -> Option<PathBuf> {
    match dir_override {
        Some(dir) => Some(dir.join(CONFIG_FILE)),
        None => default_config_path(),
    }
}

pub fn load(dir_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_path(dir_override) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config, dir_override: Option<&Path>) -> Result<()> {
    if let Some(path) = config_path(dir_override) {
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
