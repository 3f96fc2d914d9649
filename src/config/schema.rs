//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! Every section has a `Default` so a bare environment yields a runnable
//! service on port 8080.

use std::net::SocketAddr;

use clap::ValueEnum;

/// Root configuration for the payment service.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request size limits.
    pub security: SecurityConfig,

    /// Payment pipeline settings.
    pub payments: PaymentConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Deadline for draining in-flight requests after a termination signal.
    pub shutdown_secs: u64,

    /// Per-request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            shutdown_secs: 30,
            request_secs: 30,
        }
    }
}

/// Request size limits.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// How payment identifiers are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PaymentIdScheme {
    /// `pay_<unix-seconds>`; collides within the same second.
    Timestamp,
    /// `pay_<unix-seconds>_<uuid>`.
    #[default]
    Unique,
}

#[derive(Debug, Clone, Default)]
pub struct PaymentConfig {
    pub id_scheme: PaymentIdScheme,

    /// Reject non-positive amounts, malformed currencies and empty fields.
    pub strict_validation: bool,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    pub log_format: LogFormat,

    /// Prometheus exporter bind address; exporter disabled when unset.
    pub metrics_address: Option<SocketAddr>,
}
