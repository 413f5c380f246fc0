//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/entrynav/config.toml`

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::entry::Library;
use crate::error::Result;

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// General settings
    pub general: GeneralConfig,
    /// UI display settings
    pub ui: UiConfig,
    /// Named libraries (`[[library]]` tables)
    #[serde(rename = "library")]
    pub libraries: Vec<Library>,
}

/// General application settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Show hidden files by default
    pub show_hidden: bool,
    /// Ask before deleting entries
    pub confirm_delete: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            confirm_delete: true,
        }
    }
}

/// UI display settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show file sizes in the entry list
    pub show_size: bool,
    /// Date format string (strftime-style) for the details panel
    pub date_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_size: true,
            date_format: "%Y-%m-%d %H:%M".to_string(),
        }
    }
}

impl ConfigFile {
    /// Get the config directory path (~/.config/entrynav)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("entrynav"))
    }

    /// Get the config file path (~/.config/entrynav/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist or can't be parsed
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default config");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
