//! Built-in fallback services.
//!
//! The dispatcher accepts any `tower::Service`; these are the ones the
//! `redirector` binary can be configured with. Each is an axum [`Router`]
//! with a single catch-all fallback handler.

pub mod upstream;

use axum::{http::StatusCode, Router};
use thiserror::Error;

use crate::config::{FallbackConfig, FallbackMode};

pub use upstream::upstream;

/// Error building a fallback from configuration.
#[derive(Debug, Error)]
pub enum FallbackError {
    #[error("fallback mode `upstream` needs an upstream address")]
    MissingUpstream,

    #[error("invalid upstream address `{addr}`: {source}")]
    InvalidUpstream {
        addr: String,
        #[source]
        source: axum::http::uri::InvalidUri,
    },
}

/// Answer every request with 200 and `text`.
pub fn greeting(text: impl Into<String>) -> Router {
    let text: String = text.into();
    Router::new().fallback(move || {
        let text = text.clone();
        async move { text }
    })
}

/// Answer every request with 404.
pub fn not_found() -> Router {
    Router::new().fallback(|| async { (StatusCode::NOT_FOUND, "404 page not found") })
}

/// Build the fallback described by `config`.
pub fn from_config(config: &FallbackConfig) -> Result<Router, FallbackError> {
    match config.mode {
        FallbackMode::Greeting => Ok(greeting(config.greeting.clone())),
        FallbackMode::NotFound => Ok(not_found()),
        FallbackMode::Upstream => {
            let addr = config
                .upstream
                .as_deref()
                .ok_or(FallbackError::MissingUpstream)?;
            upstream(addr)
        }
    }
}
