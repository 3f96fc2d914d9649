//! Payment pipeline.
//!
//! # Data Flow
//! ```text
//! PaymentRequest (decoded by the HTTP handler)
//!     → policy.rs (PaymentPolicy::check; AcceptAll by default)
//!     → ids.rs (PaymentIdGenerator)
//!     → processor.rs (PaymentResponse, status = completed)
//! ```
//!
//! # Design Decisions
//! - Stateless: nothing outlives a single request
//! - Validation and ID generation are trait objects chosen at startup
//! - `reference` is carried but not used for idempotency

pub mod ids;
pub mod policy;
pub mod processor;
pub mod types;

pub use ids::{PaymentIdGenerator, TimestampIds, UniqueIds};
pub use policy::{AcceptAll, BasicPolicy, PaymentPolicy, PolicyViolation};
pub use processor::PaymentProcessor;
pub use types::{PaymentRequest, PaymentResponse, PaymentStatus};
