//! Default configuration values.
//!
//! These functions back the `serde` `default` attributes on the configuration
//! structures so a partial (or empty) document still produces a usable config.

use crate::config::LoggingConfig;
use std::path::PathBuf;

/// Default `LoggingConfig`, used when the `[logging]` section is absent.
pub(super) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

/// Default log level (`"info"`).
pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// Default log file path (`None`, file logging disabled).
pub(super) fn default_log_file_path() -> Option<PathBuf> {
    None
}

/// Default log format (`"text"`).
pub(super) fn default_log_format() -> String {
    "text".to_string()
}
