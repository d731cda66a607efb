//! Configuration for audiodeck.
//!
//! Read from `~/.config/audiodeck/config.toml` when present; every field has
//! a default, so a missing or partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::api::home::DEFAULT_HOME_HOST;
use crate::api::search::{DEFAULT_SEARCH_HOST, DEFAULT_SEARCH_PATH};
use crate::api::transport::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Host serving the home-sections endpoint.
    pub home_host: String,
    /// Host serving the search endpoint.
    pub search_host: String,
    /// Path of the search endpoint on `search_host`.
    pub search_path: String,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
    /// Quiescence window for the search debounce, in milliseconds.
    pub debounce_ms: u64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_host: DEFAULT_HOME_HOST.to_string(),
            search_host: DEFAULT_SEARCH_HOST.to_string(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            debounce_ms: 200,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    /// when no config file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// `~/.config/audiodeck/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("audiodeck").join("config.toml"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
