//! Metrics collection and exposition.
//!
//! # Metrics
//! - `payment_service_requests_total` (counter): by method, route, status
//! - `payment_service_request_duration_seconds` (histogram): by method, route
//! - `payment_service_in_flight_requests` (gauge)
//! - `payment_service_payments_total` (counter): by outcome
//!
//! Recording goes through the `metrics` facade and is a no-op until an
//! exporter is installed.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::error::ServiceError;

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), ServiceError> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| ServiceError::Metrics(e.to_string()))?;

    tracing::info!(address = %addr, "Prometheus exporter listening");
    Ok(())
}

/// Record a completed request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    counter!(
        "payment_service_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        "payment_service_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn request_started() {
    gauge!("payment_service_in_flight_requests").increment(1.0);
}

pub fn request_finished() {
    gauge!("payment_service_in_flight_requests").decrement(1.0);
}

/// Record a payment outcome: `completed`, `rejected` or `invalid_body`.
pub fn record_payment(outcome: &'static str) {
    counter!("payment_service_payments_total", "outcome" => outcome).increment(1);
}
