//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (tracing events, pretty or JSON)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Prometheus scrape (only when METRICS_ADDRESS is set)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through spans via the `x-request-id` header
//! - Metrics are cheap facade calls; without an exporter they do nothing

pub mod logging;
pub mod metrics;
