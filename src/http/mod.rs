//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, accept loop, graceful drain)
//!     → request.rs (assign / propagate x-request-id, tracing span)
//!     → middleware/ (CORS, timeout, metrics)
//!     → routing::RouteTable (method + path → handler)
//!     → handlers.rs (health report, payment synthesis)
//!     → JSON response
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod server;

pub use handlers::PaymentError;
pub use request::X_REQUEST_ID;
pub use server::{route_table, AppState, HttpServer};
