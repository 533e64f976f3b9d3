//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted; the redirection document itself is
//!   checked by the decoders

use thiserror::Error;

use crate::config::schema::{AppConfig, FallbackMode};

/// A semantic problem in an otherwise well-formed config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address is empty")]
    EmptyBindAddress,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("fallback.upstream is required when fallback.mode = \"upstream\"")]
    MissingUpstream,

    #[error("fallback.upstream `{0}` is not a host:port address")]
    InvalidUpstream(String),
}

pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.trim().is_empty() {
        errors.push(ValidationError::EmptyBindAddress);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.fallback.mode == FallbackMode::Upstream {
        match config.fallback.upstream.as_deref() {
            None => errors.push(ValidationError::MissingUpstream),
            Some(addr) if !is_host_port(addr) => {
                errors.push(ValidationError::InvalidUpstream(addr.to_string()));
            }
            Some(_) => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_host_port(addr: &str) -> bool {
    match addr.rsplit_once(':') {
        Some((host, port)) => !host.is_empty() && port.parse::<u16>().is_ok(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(validate_config(&AppConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = AppConfig::default();
        config.listener.bind_address = " ".into();
        config.timeouts.request_secs = 0;
        config.fallback.mode = FallbackMode::Upstream;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyBindAddress,
                ValidationError::ZeroRequestTimeout,
                ValidationError::MissingUpstream,
            ]
        );
    }

    #[test]
    fn test_upstream_address_shape() {
        let mut config = AppConfig::default();
        config.fallback.mode = FallbackMode::Upstream;

        config.fallback.upstream = Some("backend.internal:3000".into());
        assert!(validate_config(&config).is_ok());

        config.fallback.upstream = Some("http://backend".into());
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::InvalidUpstream("http://backend".into())])
        );
    }
}
