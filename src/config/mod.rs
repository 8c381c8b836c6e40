//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! The Unsplash access key is resolved separately from the file: the
//! `ICED_GALLERY_ACCESS_KEY` environment variable always wins, with the
//! config file's `access_key` entry as a fallback for development setups.
//! A missing key is not an error here; requests simply fail upstream and
//! surface in the UI.

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedGallery";

/// Environment variable consulted first for the Unsplash access key.
pub const ACCESS_KEY_ENV: &str = "ICED_GALLERY_ACCESS_KEY";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Override for the search endpoint, mainly for testing against a stub.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Fallback access key when the environment variable is unset.
    #[serde(default)]
    pub access_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::System,
            endpoint: None,
            access_key: None,
        }
    }
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

/// Resolves the access key from the environment, then the config file.
/// Empty values are treated as absent.
pub fn resolve_access_key(config: &Config) -> Option<String> {
    std::env::var(ACCESS_KEY_ENV)
        .ok()
        .filter(|key| !key.is_empty())
        .or_else(|| config.access_key.clone().filter(|key| !key.is_empty()))
}
