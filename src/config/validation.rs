//! Configuration validation.
//!
//! Clap handles syntax; this module checks values that parse but
//! cannot work. Validation is a pure function over [`ServiceConfig`] and
//! returns every violation, not just the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic problem with the configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("bind address {0:?} is not a valid socket address")]
    BindAddress(String),

    #[error("{0} timeout must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("max body size must be greater than zero")]
    ZeroBodyLimit,
}

/// Check a configuration before it is accepted into the system.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.shutdown_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("shutdown"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request"));
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
