//! Configuration handling for Cadence Core.
//!
//! Configuration is carried as TOML and deserialized into [`CoreConfig`].
//! There is no on-disk lookup here: callers hand the document to
//! [`parse_config`] as a string and get validated types back.

mod defaults;
mod types;

pub use types::{CoreConfig, LoggingConfig};

use crate::error::ConfigError;

/// Parses and validates a TOML configuration document.
///
/// Missing fields fall back to the defaults declared on the types; unknown
/// fields are rejected.
pub fn parse_config(document: &str) -> Result<CoreConfig, ConfigError> {
    let config: CoreConfig = toml::from_str(document)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_empty_document_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "text");
        assert_eq!(config.logging.file_path, None);
    }

    #[test]
    fn parse_overrides_logging_section() {
        let config = parse_config(
            r#"
            [logging]
            level = "debug"
            format = "json"
            file_path = "logs/cadence.log"
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(
            config.logging.file_path,
            Some(std::path::PathBuf::from("logs/cadence.log"))
        );
    }

    #[test]
    fn parse_rejects_unknown_fields() {
        let result = parse_config(
            r#"
            [logging]
            verbosity = "high"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn parse_rejects_invalid_level() {
        let result = parse_config(
            r#"
            [logging]
            level = "loud"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn parse_rejects_invalid_format() {
        let result = parse_config(
            r#"
            [logging]
            format = "xml"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
