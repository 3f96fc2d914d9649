//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Validate config → Bind listener → spawn accept loop → Serving
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Shutdown::trigger → stop accepting
//!     → drain in-flight requests (bounded by deadline) → Stopped
//!
//! Signals (signals.rs):
//!     install handlers before bind → SIGTERM/SIGINT → trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Bind failure is fatal; nothing is served on a partial start
//! - Shutdown has a deadline; work still running after it is abandoned
//! - State is published on a watch channel (state.rs) for observers and tests

pub mod shutdown;
pub mod signals;
pub mod state;

pub use shutdown::{Shutdown, ShutdownListener};
pub use signals::{TerminationSignal, TerminationSignals};
pub use state::{Lifecycle, LifecycleState};
