//! Error types for the fallible edges of the crate.
//!
//! The tracker itself never fails. Errors only come from parsing
//! (panel names, driver commands, server payloads) and from loading
//! configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type InfoResult<T> = Result<T, InfoError>;

/// Errors raised while parsing input or loading configuration.
#[derive(Debug, Error)]
pub enum InfoError {
    /// A panel name did not match any known panel.
    #[error("Unknown panel: {name}")]
    UnknownPanel { name: String },

    /// A driver command line could not be understood.
    #[error("Unknown command: {line}")]
    UnknownCommand { line: String },

    /// Configuration value was present but unusable.
    #[error("Invalid configuration for {key}: {message}")]
    InvalidConfig { key: String, message: String },

    /// Failed to read a configuration file.
    #[error("Failed to read {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON payload could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error outside of config loading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InfoError {
    /// Build an [`InfoError::InvalidConfig`].
    pub fn invalid_config(key: impl Into<String>, message: impl Into<String>) -> Self {
        InfoError::InvalidConfig {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Whether the error came from user-supplied input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            InfoError::UnknownPanel { .. } | InfoError::UnknownCommand { .. } | InfoError::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_panel_message() {
        let err = InfoError::UnknownPanel {
            name: "toolbar".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown panel: toolbar");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_invalid_config_message() {
        let err = InfoError::invalid_config("refresh_interval", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for refresh_interval: must be greater than zero"
        );
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: InfoError = json_err.into();
        assert!(matches!(err, InfoError::Json(_)));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: InfoError = io_err.into();
        assert!(matches!(err, InfoError::Io(_)));
    }
}
