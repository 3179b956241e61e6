use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable that overrides the configured service endpoint.
pub const ENDPOINT_ENV_VAR: &str = "TAP_COUNTER_ENDPOINT";

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

/// Directory holding the config file, the stored name and the log file.
///
/// Uses `~/.config/tap-counter` on Unix/macOS, or the platform equivalent via
/// `dirs::config_dir()`. Falls back to the current directory.
pub fn app_dir() -> PathBuf {
    let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config_dir.join("tap-counter")
}

impl Config {
    /// Returns the path to the default configuration file.
    pub fn config_path() -> PathBuf {
        app_dir().join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

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

    /// Applies the endpoint environment override, if set and non-empty.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV_VAR) {
            let endpoint = endpoint.trim();
            if !endpoint.is_empty() {
                self.service.endpoint = Some(endpoint.to_string());
            }
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The endpoint, when present, is an absolute http(s) URL
    /// - Durations, timeout and leaderboard limit are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(endpoint) = &self.service.endpoint {
            let url = reqwest::Url::parse(endpoint).map_err(|e| ConfigError::ValidationError {
                message: format!("Invalid endpoint '{}': {}", endpoint, e),
            })?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(ConfigError::ValidationError {
                    message: format!("Endpoint '{}' must use http or https", endpoint),
                });
            }
        }

        let non_zero = [
            ("service.request_timeout_seconds", u64::from(self.service.request_timeout_seconds)),
            ("service.leaderboard_limit", self.service.leaderboard_limit as u64),
            ("gestures.long_press_ms", self.gestures.long_press_ms),
            ("feedback.success_duration_ms", self.feedback.success_duration_ms),
            ("feedback.error_duration_ms", self.feedback.error_duration_ms),
            ("feedback.shake_duration_ms", self.feedback.shake_duration_ms),
        ];
        if let Some((key, _)) = non_zero.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::ValidationError {
                message: format!("'{}' must be greater than zero", key),
            });
        }

        Ok(())
    }
}
