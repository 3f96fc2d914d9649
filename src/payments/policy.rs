//! Pluggable validation applied before a payment is synthesized.

use std::fmt::Debug;
use std::sync::Arc;

use thiserror::Error;

use crate::payments::types::PaymentRequest;

/// Why a policy refused a payment.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolicyViolation {
    #[error("amount must be a positive number, got {0}")]
    NonPositiveAmount(f64),

    #[error("currency {0:?} is not a three-letter uppercase code")]
    InvalidCurrency(String),

    #[error("{0} must not be empty")]
    MissingField(&'static str),
}

/// Decides whether a decoded payment may proceed.
pub trait PaymentPolicy: Send + Sync + Debug {
    fn check(&self, request: &PaymentRequest) -> Result<(), PolicyViolation>;
}

/// Accepts everything, including zero and negative amounts.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl PaymentPolicy for AcceptAll {
    fn check(&self, _request: &PaymentRequest) -> Result<(), PolicyViolation> {
        Ok(())
    }
}

/// Minimal business checks on amount, currency and required fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicPolicy;

impl PaymentPolicy for BasicPolicy {
    fn check(&self, request: &PaymentRequest) -> Result<(), PolicyViolation> {
        if !(request.amount.is_finite() && request.amount > 0.0) {
            return Err(PolicyViolation::NonPositiveAmount(request.amount));
        }

        let currency = &request.currency;
        if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(PolicyViolation::InvalidCurrency(currency.clone()));
        }

        if request.customer_id.trim().is_empty() {
            return Err(PolicyViolation::MissingField("customer_id"));
        }
        if request.method.trim().is_empty() {
            return Err(PolicyViolation::MissingField("method"));
        }

        Ok(())
    }
}

/// Policy for the `strict_validation` setting.
pub fn policy_for(strict: bool) -> Arc<dyn PaymentPolicy> {
    if strict {
        Arc::new(BasicPolicy)
    } else {
        Arc::new(AcceptAll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount: f64, currency: &str) -> PaymentRequest {
        PaymentRequest {
            customer_id: "c1".into(),
            amount,
            currency: currency.into(),
            method: "card".into(),
            reference: "r1".into(),
        }
    }

    #[test]
    fn accept_all_takes_negative_amounts() {
        assert!(AcceptAll.check(&request(-10.0, "whatever")).is_ok());
        assert!(AcceptAll.check(&PaymentRequest::default()).is_ok());
    }

    #[test]
    fn basic_policy_accepts_well_formed_payment() {
        assert_eq!(BasicPolicy.check(&request(100.5, "USD")), Ok(()));
    }

    #[test]
    fn basic_policy_rejects_non_positive_amounts() {
        assert_eq!(
            BasicPolicy.check(&request(0.0, "USD")),
            Err(PolicyViolation::NonPositiveAmount(0.0))
        );
        assert!(BasicPolicy.check(&request(-1.0, "USD")).is_err());
    }

    #[test]
    fn basic_policy_rejects_bad_currency() {
        for currency in ["usd", "US", "USDT", "", "U$D"] {
            assert!(
                matches!(
                    BasicPolicy.check(&request(1.0, currency)),
                    Err(PolicyViolation::InvalidCurrency(_))
                ),
                "{currency} should be rejected"
            );
        }
    }

    #[test]
    fn basic_policy_requires_customer_and_method() {
        let mut req = request(1.0, "EUR");
        req.method = " ".into();
        assert_eq!(
            BasicPolicy.check(&req),
            Err(PolicyViolation::MissingField("method"))
        );

        req.customer_id.clear();
        assert_eq!(
            BasicPolicy.check(&req),
            Err(PolicyViolation::MissingField("customer_id"))
        );
    }
}
