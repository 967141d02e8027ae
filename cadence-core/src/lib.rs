//! Core infrastructure layer for Cadence.
//!
//! Provides the foundational pieces shared by the higher layers: error types,
//! logging initialization built on `tracing`, configuration types with TOML
//! parsing and validation, and small filesystem utilities.

pub mod config;
pub mod error;
pub mod logging;
pub mod utils;

pub use config::{parse_config, CoreConfig, LoggingConfig};
pub use error::{ConfigError, CoreError, LoggingError};
pub use logging::{init_logging, init_minimal_logging};
