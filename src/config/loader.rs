//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::decode::{DecodeError, Format};
use crate::routing::Dispatcher;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    #[error("cannot tell the format of {}; use a .yaml, .yml or .json extension or set it explicitly", .0.display())]
    UnknownFormat(PathBuf),

    #[error("{}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn read(path: &Path) -> Result<Vec<u8>, ConfigError> {
    fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and deserialize a TOML file without semantic checks.
///
/// Callers that layer overrides on top (command-line flags) validate the
/// merged result themselves.
pub fn parse_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let raw = read(path)?;
    let content = String::from_utf8_lossy(&raw);
    Ok(toml::from_str(&content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = parse_config(path)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Read a redirection document and build a dispatcher from it.
///
/// `format` overrides the guess made from the file extension.
pub fn load_redirects<F>(
    path: &Path,
    format: Option<Format>,
    fallback: F,
) -> Result<Dispatcher<F>, ConfigError> {
    let format = format
        .or_else(|| Format::from_path(path))
        .ok_or_else(|| ConfigError::UnknownFormat(path.to_path_buf()))?;

    let raw = read(path)?;
    let dispatcher = format
        .decode(&raw, fallback)
        .map_err(|source| ConfigError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        format = %format,
        redirections = dispatcher.len(),
        "Redirections loaded"
    );
    Ok(dispatcher)
}
