//! Configuration loading
//!
//! Settings live in `<config_dir>/itemdeck/config.yaml`. Every field has a
//! default, so a missing file (or a partial one) is fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    APP_NAME, DEFAULT_BASE_URL, DEFAULT_LOG_FILE, DEFAULT_TIMEOUT_SECS, DOCS_PATH, ITEMS_PATH,
};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend base URL, without trailing slash
    pub base_url: String,
    /// Total request timeout in seconds
    pub timeout_secs: u64,
    /// Where tracing output is written
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Falls back to the current directory if there is no platform config
    /// directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join(APP_NAME).join("config.yaml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?
        };

        config.validated()
    }

    /// Normalise and check the loaded values.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();

        if self.base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "base_url must not be empty".to_string(),
            });
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                message: format!("base_url '{}' must start with http:// or https://", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                message: "timeout_secs must be greater than zero".to_string(),
            });
        }

        Ok(self)
    }

    pub fn items_url(&self) -> String {
        format!("{}{}", self.base_url, ITEMS_PATH)
    }

    pub fn docs_url(&self) -> String {
        format!("{}{}", self.base_url, DOCS_PATH)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
