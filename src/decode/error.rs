//! Decoder error type.

use thiserror::Error;

/// A redirection document did not match the expected schema.
///
/// The parser's own error is kept as the source, so callers can inspect the
/// exact location or missing field.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid YAML redirection document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON redirection document: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    /// Format whose parser rejected the input.
    pub fn format(&self) -> super::Format {
        match self {
            DecodeError::Yaml(_) => super::Format::Yaml,
            DecodeError::Json(_) => super::Format::Json,
        }
    }
}
