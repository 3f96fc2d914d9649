//! Payment synthesis.
//!
//! No ledger, gateway or persistence sits behind this: an accepted request
//! is answered with a `completed` payment immediately.

use std::sync::Arc;

use time::OffsetDateTime;

use crate::config::PaymentConfig;
use crate::payments::ids::PaymentIdGenerator;
use crate::payments::policy::{policy_for, PaymentPolicy, PolicyViolation};
use crate::payments::types::{PaymentRequest, PaymentResponse, PaymentStatus};

#[derive(Debug, Clone)]
pub struct PaymentProcessor {
    ids: Arc<dyn PaymentIdGenerator>,
    policy: Arc<dyn PaymentPolicy>,
}

impl PaymentProcessor {
    pub fn new(ids: Arc<dyn PaymentIdGenerator>, policy: Arc<dyn PaymentPolicy>) -> Self {
        Self { ids, policy }
    }

    pub fn from_config(config: &PaymentConfig) -> Self {
        Self::new(
            config.id_scheme.generator(),
            policy_for(config.strict_validation),
        )
    }

    /// Run the policy, then stamp an ID and `processed_at`.
    ///
    /// `amount` and `currency` are echoed verbatim.
    pub fn process(&self, request: PaymentRequest) -> Result<PaymentResponse, PolicyViolation> {
        self.policy.check(&request)?;

        let now = OffsetDateTime::now_utc();
        Ok(PaymentResponse {
            payment_id: self.ids.next_id(now),
            status: PaymentStatus::Completed,
            amount: request.amount,
            currency: request.currency,
            processed_at: now,
        })
    }
}

impl Default for PaymentProcessor {
    fn default() -> Self {
        Self::from_config(&PaymentConfig::default())
    }
}
