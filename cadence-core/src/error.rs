//! Error handling for the Cadence core layer.
//!
//! This module defines the error types shared by the infrastructure layer,
//! built on `thiserror`. The main type is [`CoreError`], which wraps the more
//! specific [`ConfigError`] and [`LoggingError`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for the Cadence infrastructure layer.
///
/// Domain crates wrap this where an infrastructure failure needs to bubble up;
/// within `cadence-core` it is the common return type of fallible setup code.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration parsing or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors that occur while initializing the logging system.
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// Filesystem operations that fail outside of config/logging specifics,
    /// e.g. creating the directory a log file lives in.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O errors not covered by a more specific variant.
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for unexpected internal errors within the core library.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}

/// Error type for configuration handling.
///
/// Typically wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid TOML.
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but carries invalid values.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Error type for logging initialization and operation.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The logging system could not be initialized, e.g. because a global
    /// subscriber is already installed or the configured level is unknown.
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),

    /// An I/O error occurred while setting up a log writer.
    #[error("Logging I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
