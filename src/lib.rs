//! Payment service library.
//!
//! A small HTTP service: three health routes and a `POST /payments` route that
//! answers every well-formed request with a completed payment. The interesting
//! part is the lifecycle: the listener runs on a background task while the main
//! task waits for SIGINT/SIGTERM, then drains in-flight requests under a
//! deadline.
//!
//! # Modules
//!
//! - [`config`]: CLI/environment configuration and validation
//! - [`error`]: Process-level error types
//! - [`routing`]: Route table with explicit dispatch
//! - [`health`]: Health report model
//! - [`payments`]: Payment types, ID generation, validation policy
//! - [`http`]: Axum server, handlers and middleware
//! - [`lifecycle`]: State machine, shutdown coordination, signals
//! - [`observability`]: Logging and metrics

pub mod config;
pub mod error;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod payments;
pub mod routing;

pub use config::ServiceConfig;
pub use error::{Result, ServiceError};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
