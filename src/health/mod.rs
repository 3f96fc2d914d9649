//! Health reporting.
//!
//! Liveness, readiness and the generic health route all return the same
//! [`HealthStatus`]; none of them probe dependencies.

pub mod status;

pub use status::{HealthStatus, ServiceInfo, ServiceStatus, SERVICE_NAME};
