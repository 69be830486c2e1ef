//! Configuration module for the clex driver.
//!
//! This module handles loading, saving, and locating `clex.toml`.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ClexError, Result};
use crate::report::ReportFormat;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "clex.toml";

/// Driver configuration.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Directory that receives report files.
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Report format.
    #[serde(default)]
    pub format: ReportFormat,

    /// Print the token listing to stdout after scanning.
    #[serde(default)]
    pub print_listing: bool,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("log")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            format: ReportFormat::default(),
            print_listing: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/clex/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ClexError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ClexError::Config(format!("Failed to parse configuration: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ClexError::Config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("clex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("clex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
