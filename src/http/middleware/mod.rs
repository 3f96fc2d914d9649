//! HTTP middleware specific to this service.

pub mod cors;
pub mod metrics;

pub use cors::cors_layer;
pub use metrics::track_requests;
