//! Text configuration management.
//!
//! Handles loading configuration from TOML files and environment variables.
//! Nothing is read implicitly: the defaults apply until a caller asks for a
//! file or the environment.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding [`TextConfig::pattern_timeout_ms`].
pub const ENV_PATTERN_TIMEOUT_MS: &str = "SEQKIT_PATTERN_TIMEOUT_MS";

/// Default per-pass ceiling in milliseconds.
pub const DEFAULT_PATTERN_TIMEOUT_MS: u64 = 100;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Pattern timeout must be positive.
    #[error("Invalid pattern timeout: {0}ms. Must be greater than zero")]
    InvalidTimeout(u64),

    /// File could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment variable could not be parsed.
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Text pipeline configuration.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use seqkit_text::TextConfig;
///
/// let config = TextConfig::default();
/// assert_eq!(config.pattern_timeout(), Duration::from_millis(100));
///
/// let strict = TextConfig::from_toml_str("pattern_timeout_ms = 20").unwrap();
/// assert_eq!(strict.pattern_timeout_ms, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Ceiling for a single pattern pass, in milliseconds.
    pub pattern_timeout_ms: u64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            pattern_timeout_ms: DEFAULT_PATTERN_TIMEOUT_MS,
        }
    }
}

impl TextConfig {
    /// Ceiling for a single pattern pass.
    pub fn pattern_timeout(&self) -> Duration {
        Duration::from_millis(self.pattern_timeout_ms)
    }

    /// Load configuration from environment variables over the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TextConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pattern_timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout(self.pattern_timeout_ms));
        }
        Ok(())
    }

    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(raw) = std::env::var(ENV_PATTERN_TIMEOUT_MS) {
            self.pattern_timeout_ms = raw.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{} is not a number: {:?}", ENV_PATTERN_TIMEOUT_MS, raw))
            })?;
        }
        Ok(())
    }
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. Environment variables
/// 2. Config file
/// 3. Default values
pub fn build_config(file: Option<&Path>) -> Result<TextConfig, ConfigError> {
    let mut config = match file {
        Some(path) => TextConfig::from_file(path)?,
        None => TextConfig::default(),
    };

    config.apply_env()?;
    config.validate()?;

    tracing::debug!(
        pattern_timeout_ms = config.pattern_timeout_ms,
        from_file = file.is_some(),
        "built text configuration"
    );
    Ok(config)
}
