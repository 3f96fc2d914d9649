//! Payment identifier generation.

use std::fmt::Debug;
use std::sync::Arc;

use time::OffsetDateTime;
use uuid::Uuid;

use crate::config::PaymentIdScheme;

/// Source of payment identifiers.
pub trait PaymentIdGenerator: Send + Sync + Debug {
    fn next_id(&self, at: OffsetDateTime) -> String;
}

/// `pay_<unix-seconds>`. Two payments in the same second share an ID.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIds;

impl PaymentIdGenerator for TimestampIds {
    fn next_id(&self, at: OffsetDateTime) -> String {
        format!("pay_{}", at.unix_timestamp())
    }
}

/// `pay_<unix-seconds>_<uuid-v4>`. Sorts by second, unique within it.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniqueIds;

impl PaymentIdGenerator for UniqueIds {
    fn next_id(&self, at: OffsetDateTime) -> String {
        format!("pay_{}_{}", at.unix_timestamp(), Uuid::new_v4().simple())
    }
}

impl PaymentIdScheme {
    pub fn generator(self) -> Arc<dyn PaymentIdGenerator> {
        match self {
            PaymentIdScheme::Timestamp => Arc::new(TimestampIds),
            PaymentIdScheme::Unique => Arc::new(UniqueIds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use time::macros::datetime;

    const AT: OffsetDateTime = datetime!(2023-11-14 22:13:20 UTC);

    #[test]
    fn timestamp_ids_collide_within_a_second() {
        let ids = TimestampIds;
        assert_eq!(ids.next_id(AT), "pay_1700000000");
        assert_eq!(ids.next_id(AT), ids.next_id(AT));
    }

    #[test]
    fn unique_ids_keep_timestamp_prefix() {
        let id = UniqueIds.next_id(AT);
        let suffix = id.strip_prefix("pay_1700000000_").unwrap();
        assert_eq!(suffix.len(), 32);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn unique_ids_do_not_collide_within_a_second() {
        let ids: HashSet<_> = (0..1000).map(|_| UniqueIds.next_id(AT)).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn scheme_selects_generator() {
        assert_eq!(
            PaymentIdScheme::Timestamp.generator().next_id(AT),
            "pay_1700000000"
        );
        assert!(PaymentIdScheme::Unique
            .generator()
            .next_id(AT)
            .starts_with("pay_1700000000_"));
    }
}
