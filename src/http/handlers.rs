//! Route handlers.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::health::HealthStatus;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::payments::{PaymentRequest, PaymentResponse, PolicyViolation};

/// Client-side failures of `POST /payments`.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Body is not JSON or does not match the request shape.
    #[error("Invalid request body")]
    InvalidBody,

    /// Decoded fine but the configured policy refused it.
    #[error("{0}")]
    Rejected(#[from] PolicyViolation),
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let status = match self {
            PaymentError::InvalidBody => StatusCode::BAD_REQUEST,
            PaymentError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, self.to_string()).into_response()
    }
}

/// `GET /health`, `/health/ready`, `/health/live`. Always 200.
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus::now(&state.service))
}

/// `POST /payments`.
pub async fn create_payment(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PaymentResponse>, PaymentError> {
    let request = PaymentRequest::from_json(&body).map_err(|e| {
        metrics::record_payment("invalid_body");
        tracing::debug!(error = %e, "Malformed payment body");
        PaymentError::InvalidBody
    })?;

    let response = state.payments.process(request).map_err(|violation| {
        metrics::record_payment("rejected");
        tracing::info!(reason = %violation, "Payment rejected by policy");
        PaymentError::from(violation)
    })?;

    metrics::record_payment("completed");
    tracing::info!(
        payment_id = %response.payment_id,
        amount = response.amount,
        currency = %response.currency,
        "Payment completed"
    );
    Ok(Json(response))
}
