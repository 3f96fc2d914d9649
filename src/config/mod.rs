//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI flags / environment variables
//!     → loader.rs (clap parse, env fallback, defaults)
//!     → ServiceConfig (sectioned schema)
//!     → validation.rs (semantic checks, all errors collected)
//!     → shared by value with the server at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults; `PORT` alone is enough to move the listener
//! - No configuration file is read

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, Cli};
pub use schema::{
    ListenerConfig, LogFormat, ObservabilityConfig, PaymentConfig, PaymentIdScheme, ServiceConfig,
};
