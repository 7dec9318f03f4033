//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values that take precedence over the file (the binary's CLI flags).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

impl ConfigOverrides {
    fn apply(&self, config: &mut RelayConfig) {
        if let Some(bind) = &self.bind_address {
            config.listener.bind_address = bind.clone();
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
    }
}

/// Parse configuration from TOML text without validating it.
pub fn parse_config(content: &str) -> Result<RelayConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load configuration from an optional TOML file, apply overrides, then
/// validate the merged result.
///
/// With no file every section keeps its default.
pub fn load_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<RelayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => RelayConfig::default(),
    };
    overrides.apply(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, RelayConfig::default());
        assert_eq!(config.listener.bind_address, "127.0.0.1:8082");
        assert_eq!(config.upstream.timeout_secs, None);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = parse_config(
            r#"
            [listener]
            bind_address = "127.0.0.1:9000"

            [upstream]
            timeout_secs = 15
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.listener.relay_path, "/proxy");
        assert_eq!(config.upstream.timeout_secs, Some(15));
        assert_eq!(config.response.content_type, "application/json");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = parse_config("[listener\nbind_address = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_config(
            Some(Path::new("/nonexistent/cors-relay.toml")),
            &ConfigOverrides::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn no_file_and_no_overrides_is_the_default() {
        let config = load_config(None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config, RelayConfig::default());
    }

    #[test]
    fn overrides_win_over_file() {
        let path = std::env::temp_dir().join(format!("cors-relay-{}.toml", uuid::Uuid::new_v4()));
        fs::write(
            &path,
            "[listener]\nbind_address = \"127.0.0.1:9000\"\nrelay_path = \"/fetch\"\n",
        )
        .unwrap();

        let overrides = ConfigOverrides {
            bind_address: Some("127.0.0.1:9100".into()),
            log_level: Some("debug".into()),
        };
        let config = load_config(Some(&path), &overrides);
        let _ = fs::remove_file(&path);
        let config = config.unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:9100");
        assert_eq!(config.listener.relay_path, "/fetch");
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn overrides_are_validated() {
        let overrides = ConfigOverrides {
            bind_address: Some("not-an-address".into()),
            log_level: None,
        };
        let err = load_config(None, &overrides).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation(ref errors)
                if errors == &[ValidationError::BindAddress("not-an-address".into())]
        ));
    }
}
