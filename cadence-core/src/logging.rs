//! Logging setup for Cadence Core.
//!
//! Built on the `tracing` ecosystem: a console layer always, plus an optional
//! daily-rolling file layer (text or JSON) driven by [`LoggingConfig`].

use crate::config::LoggingConfig;
use crate::error::{CoreError, LoggingError};
use crate::utils;

use once_cell::sync::Lazy;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Keeps the file writer's guard alive for the lifetime of the process so
/// buffered log lines are flushed on shutdown.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Initializes a minimal logging setup directed at `stderr`.
///
/// Intended for tests and early startup before configuration is parsed.
/// Filters via `RUST_LOG`, defaulting to "info". Errors (e.g. a subscriber is
/// already installed) are ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Builds the rolling file layer and its flush guard.
fn create_file_layer(
    log_path: &Path,
    format: &str,
) -> Result<(Box<dyn Layer<Registry> + Send + Sync + 'static>, WorkerGuard), CoreError> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            utils::fs::ensure_dir_exists(parent)?;
        }
    }

    let file_appender = tracing_appender::rolling::daily(
        log_path.parent().unwrap_or_else(|| Path::new(".")),
        log_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("cadence.log")),
    );
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    match format.to_lowercase().as_str() {
        "json" => {
            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking_writer)
                .with_ansi(false);
            Ok((Box::new(layer), guard))
        }
        _ => {
            let layer = fmt::layer()
                .with_writer(non_blocking_writer)
                .with_ansi(false);
            Ok((Box::new(layer), guard))
        }
    }
}

/// Installs the global `tracing` subscriber according to `config`.
///
/// A console layer is always installed; a file layer is added when
/// `config.file_path` is set. With `is_reload` the call tolerates an already
/// installed subscriber instead of failing.
///
/// # Errors
///
/// Returns [`CoreError::Logging`] when the configured level is unknown or the
/// global subscriber cannot be set on initial setup.
pub fn init_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), CoreError> {
    let level_str = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE.to_string(),
        "debug" => Level::DEBUG.to_string(),
        "info" => Level::INFO.to_string(),
        "warn" => Level::WARN.to_string(),
        "error" => Level::ERROR.to_string(),
        invalid => {
            return Err(CoreError::Logging(LoggingError::InitializationFailure(
                format!("Invalid log level in config: {}", invalid),
            )))
        }
    };

    let stdout_filter = EnvFilter::new(level_str.clone());
    let stdout_layer = match config.format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(stdout)
            .with_ansi(false)
            .with_filter(stdout_filter)
            .boxed(),
        _ => fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(stdout_filter)
            .boxed(),
    };

    let mut new_file_guard: Option<WorkerGuard> = None;
    let file_layer_opt: Option<Box<dyn Layer<Registry> + Send + Sync + 'static>> =
        if let Some(log_path) = &config.file_path {
            let file_filter = EnvFilter::new(level_str);
            let (base_layer, guard) = create_file_layer(log_path, &config.format)?;
            new_file_guard = Some(guard);
            Some(base_layer.with_filter(file_filter).boxed())
        } else {
            None
        };

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync + 'static>> = vec![stdout_layer];
    if let Some(file_layer) = file_layer_opt {
        layers.push(file_layer);
    }

    let result = Registry::default().with(layers).try_init();

    match LOG_WORKER_GUARD.lock() {
        Ok(mut guard_slot) => {
            // Dropping the previous guard flushes any pending file output.
            *guard_slot = new_file_guard;
        }
        Err(e) => {
            eprintln!(
                "[ERROR] Failed to lock LOG_WORKER_GUARD: {}. Log flushing may be affected.",
                e
            );
        }
    }

    match result {
        Ok(()) => Ok(()),
        Err(e) if is_reload => {
            eprintln!(
                "[INFO] Logging re-initialization attempted; previous subscriber persists: {}",
                e
            );
            Ok(())
        }
        Err(e) => Err(CoreError::Logging(LoggingError::InitializationFailure(
            format!("Failed to set global tracing subscriber: {}", e),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn init_logging_rejects_unknown_level() {
        let config = LoggingConfig {
            level: "loudest".to_string(),
            file_path: None,
            format: "text".to_string(),
        };
        let result = init_logging(&config, false);
        assert!(matches!(
            result,
            Err(CoreError::Logging(LoggingError::InitializationFailure(_)))
        ));
    }

    #[test]
    fn create_file_layer_creates_missing_parent_dir() {
        let tmp = TempDir::new().unwrap();
        let log_path: PathBuf = tmp.path().join("nested").join("cadence.log");
        let (_layer, _guard) = create_file_layer(&log_path, "text").unwrap();
        assert!(log_path.parent().unwrap().is_dir());
    }

    #[test]
    fn init_minimal_logging_is_idempotent() {
        init_minimal_logging();
        init_minimal_logging();
    }

    #[test]
    fn init_logging_as_reload_tolerates_existing_subscriber() {
        init_minimal_logging();
        let config = LoggingConfig::default();
        assert!(init_logging(&config, true).is_ok());
    }
}
