//! # Configuration
//!
//! Runtime settings for the [`OrderSystem`](crate::lifecycle::OrderSystem), read from TOML.
//! Every field has a default, so an empty document is a valid configuration.
//!
//! ```toml
//! [actors]
//! channel_buffer = 32
//!
//! [logging]
//! filter = "info"
//! format = "compact"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable the demo binary reads the configuration path from.
pub const CONFIG_PATH_ENV: &str = "ORDER_RECIPE_CONFIG";

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Parse(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemConfig {
    #[serde(default)]
    pub actors: ActorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings shared by every store actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActorConfig {
    /// Capacity of each store's request channel.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer: usize,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            channel_buffer: default_channel_buffer(),
        }
    }
}

fn default_channel_buffer() -> usize {
    32
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl SystemConfig {
    /// Reads, parses and validates a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Loads the file named by [`CONFIG_PATH_ENV`], or the defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.actors.channel_buffer == 0 {
            return Err(ConfigError::Validation(
                "actors.channel_buffer must be greater than 0".into(),
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter cannot be empty".into(),
            ));
        }
        Ok(())
    }
}

impl FromStr for SystemConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: SystemConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: SystemConfig = "".parse().unwrap();
        assert_eq!(config, SystemConfig::default());
        assert_eq!(config.actors.channel_buffer, 32);
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_parse_full_document() {
        let config: SystemConfig = r#"
            [actors]
            channel_buffer = 8

            [logging]
            filter = "order_recipe=debug"
            format = "json"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.actors.channel_buffer, 8);
        assert_eq!(config.logging.filter, "order_recipe=debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_zero_channel_buffer_is_rejected() {
        let result = "[actors]\nchannel_buffer = 0\n".parse::<SystemConfig>();
        assert!(
            matches!(result, Err(ConfigError::Validation(msg)) if msg.contains("channel_buffer"))
        );
    }

    #[test]
    fn test_empty_filter_is_rejected() {
        let result = "[logging]\nfilter = \"  \"\n".parse::<SystemConfig>();
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_unknown_format_is_a_parse_error() {
        let result = "[logging]\nformat = \"pretty\"\n".parse::<SystemConfig>();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_key_is_a_parse_error() {
        let result = "[actors]\nchannel_bufer = 4\n".parse::<SystemConfig>();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[actors]\nchannel_buffer = 4").unwrap();

        let config = SystemConfig::from_file(file.path()).unwrap();
        assert_eq!(config.actors.channel_buffer, 4);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = SystemConfig::from_file(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
