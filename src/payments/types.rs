//! Payment request/response types.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Inbound payment.
///
/// Decoding is lenient: keys match case-insensitively, absent or `null`
/// fields keep their zero value and unknown fields are ignored. A value of
/// the wrong type is still an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentRequest {
    pub customer_id: String,
    pub amount: f64,
    pub currency: String,
    pub method: String,
    /// Accepted but not used for idempotency.
    pub reference: String,
}

impl PaymentRequest {
    /// Decode the first JSON value in `body`; anything after it is ignored.
    /// A top-level `null` yields the zero-value request.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Self>>();
        match values.next() {
            Some(request) => Ok(request?.unwrap_or_default()),
            None => Err(de::Error::custom("empty request body")),
        }
    }
}

enum Field {
    CustomerId,
    Amount,
    Currency,
    Method,
    Reference,
}

impl Field {
    fn lookup(key: &str) -> Option<Self> {
        const FIELDS: [(&str, Field); 5] = [
            ("customer_id", Field::CustomerId),
            ("amount", Field::Amount),
            ("currency", Field::Currency),
            ("method", Field::Method),
            ("reference", Field::Reference),
        ];
        FIELDS
            .into_iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, field)| field)
    }
}

struct PaymentRequestVisitor;

impl<'de> Visitor<'de> for PaymentRequestVisitor {
    type Value = PaymentRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a payment request object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut request = PaymentRequest::default();

        // Later duplicates overwrite earlier ones; `null` leaves the field alone.
        while let Some(key) = map.next_key::<String>()? {
            let slot = match Field::lookup(&key) {
                Some(Field::Amount) => {
                    if let Some(amount) = map.next_value::<Option<f64>>()? {
                        request.amount = amount;
                    }
                    continue;
                }
                Some(Field::CustomerId) => &mut request.customer_id,
                Some(Field::Currency) => &mut request.currency,
                Some(Field::Method) => &mut request.method,
                Some(Field::Reference) => &mut request.reference,
                None => {
                    map.next_value::<IgnoredAny>()?;
                    continue;
                }
            };
            if let Some(value) = map.next_value::<Option<String>>()? {
                *slot = value;
            }
        }

        Ok(request)
    }
}

impl<'de> Deserialize<'de> for PaymentRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PaymentRequestVisitor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
}

/// Result of an accepted payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub payment_id: String,
    pub status: PaymentStatus,
    pub amount: f64,
    pub currency: String,
    #[serde(with = "time::serde::rfc3339")]
    pub processed_at: OffsetDateTime,
}
