//! Redirection document decoders.
//!
//! # Data Flow
//! ```text
//! raw bytes (YAML or JSON)
//!     → parse_yaml / parse_json (serde into RedirectionTable)
//!     → RedirectionTable::into_map (last wins)
//!     → Dispatcher::new(map, fallback)
//! ```
//!
//! # Design Decisions
//! - One schema type shared by both formats: a sequence of `{path, url}`
//! - Parser errors are surfaced as the source of [`DecodeError`], never replaced
//! - Empty or whitespace-only input means zero redirections in every format
//! - Decoders never touch the filesystem; see `config::loader` for that

pub mod error;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::redirect::RedirectionTable;
use crate::routing::Dispatcher;

pub use error::DecodeError;

/// Supported redirection document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Guess the format from a file extension (`.yaml`, `.yml`, `.json`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
        }
    }

    /// Parse `bytes` as a redirection table in this format.
    pub fn parse(self, bytes: &[u8]) -> Result<RedirectionTable, DecodeError> {
        match self {
            Format::Yaml => parse_yaml(bytes),
            Format::Json => parse_json(bytes),
        }
    }

    /// Parse `bytes` and build a dispatcher over the result.
    pub fn decode<F>(self, bytes: &[u8], fallback: F) -> Result<Dispatcher<F>, DecodeError> {
        let table = self.parse(bytes)?;
        tracing::debug!(format = self.name(), entries = table.len(), "Decoded redirections");
        Ok(Dispatcher::new(table.into_map(), fallback))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a format name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown redirection format `{0}` (expected yaml or json)")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

/// Parse a YAML redirection document.
pub fn parse_yaml(bytes: &[u8]) -> Result<RedirectionTable, DecodeError> {
    if is_blank(bytes) {
        return Ok(RedirectionTable::default());
    }
    Ok(serde_yaml::from_slice(bytes)?)
}

/// Parse a JSON redirection document.
pub fn parse_json(bytes: &[u8]) -> Result<RedirectionTable, DecodeError> {
    if is_blank(bytes) {
        return Ok(RedirectionTable::default());
    }
    Ok(serde_json::from_slice(bytes)?)
}

/// Build a dispatcher from a YAML document such as:
///
/// ```yaml
/// - path: /some-path
///   url: https://www.some-url.com/demo
/// ```
///
/// Paths missing from the document are served by `fallback`. The only error
/// is a document that does not parse into the schema above.
pub fn decode_yaml<F>(bytes: &[u8], fallback: F) -> Result<Dispatcher<F>, DecodeError> {
    Format::Yaml.decode(bytes, fallback)
}

/// Build a dispatcher from a JSON document such as:
///
/// ```json
/// [{"path": "/some-path", "url": "https://www.some-url.com/demo"}]
/// ```
pub fn decode_json<F>(bytes: &[u8], fallback: F) -> Result<Dispatcher<F>, DecodeError> {
    Format::Json.decode(bytes, fallback)
}
