//! Process-level error types.
//!
//! Client-facing failures (bad request bodies, policy rejections) live next to
//! the payment handler in [`crate::http::handlers`]; everything here is fatal
//! to the process.

use std::time::Duration;

use thiserror::Error;

use crate::config::validation::ValidationError;
use crate::routing::RouteError;

/// Errors that terminate the service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration failed semantic validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Route registration failed.
    #[error("routing error: {0}")]
    Routing(#[from] RouteError),

    /// The listening socket could not be acquired.
    #[error("failed to bind {address}: {source}")]
    Bind {
        /// Address we attempted to bind.
        address: String,
        /// Underlying socket error.
        source: std::io::Error,
    },

    /// The accept loop failed while serving.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    /// In-flight requests did not drain before the deadline.
    #[error("graceful shutdown exceeded {0:?} deadline")]
    ShutdownTimeout(Duration),

    /// The Prometheus exporter could not be installed.
    #[error("metrics exporter error: {0}")]
    Metrics(String),
}

/// Configuration was rejected; carries every violation found.
#[derive(Error, Debug)]
#[error("{}", format_violations(.0))]
pub struct ConfigError(pub Vec<ValidationError>);

fn format_violations(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
