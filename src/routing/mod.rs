//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     register(method, path, name, handler) × N
//!     → router.rs (RouteTable, conflict checks)
//!     → build() → RouteIndex + axum Router (frozen)
//!
//! Per request:
//!     axum Router dispatches to the handler (404 / 405 otherwise)
//!     RouteIndex::dispatch names the route for logs and metrics
//! ```
//!
//! # Design Decisions
//! - Routes registered once at startup, immutable at runtime
//! - Exact method + path; no globals, the table is passed explicitly

pub mod router;

pub use router::{Dispatch, Route, RouteError, RouteIndex, RouteTable};
