use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Where the running configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    BuiltIn,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::BuiltIn => f.write_str("built-in defaults"),
        }
    }
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/shopfront/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("shopfront").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()` with [`ConfigSource::BuiltIn`].
    pub fn load() -> Result<(Self, ConfigSource), ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok((Config::default(), ConfigSource::BuiltIn));
        }

        let config = Self::load_from(&path)?;
        Ok((config, ConfigSource::File(path)))
    }

    /// Loads, parses and validates the config file at `path`.
    ///
    /// Unlike [`Config::load`], a missing file is an error: an explicit path
    /// given by the user must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The product has at least one variant and unique variant ids
    /// - Price and shipping fee are non-negative
    /// - The currency symbol is not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.product
            .check()
            .map_err(|message| ConfigError::ValidationError { message })?;

        let fee = self.shop.shipping_fee;
        if !(fee.is_finite() && fee >= 0.0) {
            return Err(ConfigError::ValidationError {
                message: format!("Shipping fee must be non-negative, got {}", fee),
            });
        }

        if self.shop.currency.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Currency symbol must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
