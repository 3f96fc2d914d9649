//! Per-request metrics, labelled by the route the request dispatched to.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::observability::metrics;
use crate::routing::{Dispatch, RouteIndex};

/// Keeps the in-flight gauge balanced even if the request future is dropped.
struct InFlight;

impl InFlight {
    fn start() -> Self {
        metrics::request_started();
        InFlight
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        metrics::request_finished();
    }
}

/// Label used for a dispatch outcome.
pub fn route_label(dispatch: &Dispatch<'_>) -> &'static str {
    match dispatch {
        Dispatch::Matched(route) => route.name,
        Dispatch::MethodNotAllowed { .. } => "method_not_allowed",
        Dispatch::NotFound => "unmatched",
    }
}

pub async fn track_requests(
    State(index): State<RouteIndex>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let route = route_label(&index.dispatch(&method, request.uri().path()));

    let _in_flight = InFlight::start();
    let response = next.run(request).await;

    let status = response.status();
    metrics::record_request(method.as_str(), route, status.as_u16(), start);
    tracing::debug!(
        route,
        status = status.as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Request completed"
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteTable;
    use axum::http::Method;

    async fn ok() {}

    #[test]
    fn labels_follow_dispatch() {
        let mut table: RouteTable = RouteTable::new();
        table
            .register(Method::POST, "/payments", "payments.create", ok)
            .unwrap();
        let (index, _) = table.build();

        assert_eq!(
            route_label(&index.dispatch(&Method::POST, "/payments")),
            "payments.create"
        );
        assert_eq!(
            route_label(&index.dispatch(&Method::GET, "/payments")),
            "method_not_allowed"
        );
        assert_eq!(route_label(&index.dispatch(&Method::GET, "/x")), "unmatched");
    }
}
