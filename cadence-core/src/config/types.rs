//! Configuration data structures for Cadence Core.
//!
//! These structs are populated by deserializing a TOML document. Fields not
//! present in the source fall back to the defaults in [`super::defaults`];
//! unknown fields are rejected via `#[serde(deny_unknown_fields)]`.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults;
use crate::error::ConfigError;

/// Configuration for the logging subsystem.
///
/// Consumed by `cadence_core::logging` when installing the global subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum log level to record. Valid values (case-insensitive):
    /// "trace", "debug", "info", "warn", "error".
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional path of a file logs should also be written to.
    /// `None` disables file logging.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// Format of log output: "text" or "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

impl LoggingConfig {
    /// Checks that `level` and `format` carry known values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "unknown log level '{}'",
                    other
                )))
            }
        }
        match self.format.to_lowercase().as_str() {
            "text" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "unknown log format '{}'",
                    other
                )))
            }
        }
        Ok(())
    }
}

/// Root configuration structure for the Cadence core system.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    /// Logging subsystem configuration.
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
}

impl CoreConfig {
    /// Validates every section of the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logging.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn logging_config_default_values() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.file_path, None);
        assert_eq!(config.format, "text");
    }

    #[test]
    fn logging_config_validate_is_case_insensitive() {
        let config = LoggingConfig {
            level: "DEBUG".to_string(),
            format: "JSON".to_string(),
            file_path: None,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn core_config_validate_propagates_logging_failure() {
        let config = CoreConfig {
            logging: LoggingConfig {
                level: "silly".to_string(),
                ..LoggingConfig::default()
            },
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
