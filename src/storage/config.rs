//! User configuration
//!
//! Read from `config.toml` in the platform config directory. Everything is
//! optional; a missing file means defaults.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Default output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DefaultFormat {
    #[default]
    Text,
    Json,
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Output format when `--format` is not given
    pub default_format: DefaultFormat,

    /// Profile file location override
    pub profile: Option<PathBuf>,
}

impl Config {
    /// Returns the config directory, if one can be determined
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "tickit", "tickit").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads the configuration from the default location
    pub fn load() -> Result<Self> {
        let config_dir = match Self::config_dir() {
            Some(dir) => dir,
            None => return Ok(Self::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        toml::from_str(&content).context("Failed to parse config")
    }
}
