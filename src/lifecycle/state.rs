//! Server lifecycle state machine.
//!
//! # States
//! ```text
//! Starting ──bound──▶ Serving ──signal──▶ ShuttingDown ──drained/deadline──▶ Stopped
//!     └──────────────── bind/serve failure ───────────────────────────────────▲
//! ```

use std::fmt;

use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Starting,
    Serving,
    ShuttingDown,
    Stopped,
}

impl LifecycleState {
    /// Whether `self → next` is a legal transition.
    pub fn can_transition_to(self, next: LifecycleState) -> bool {
        use LifecycleState::*;
        matches!(
            (self, next),
            (Starting, Serving)
                | (Serving, ShuttingDown)
                | (ShuttingDown, Stopped)
                | (Starting, Stopped)
                | (Serving, Stopped)
        )
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleState::Starting => "starting",
            LifecycleState::Serving => "serving",
            LifecycleState::ShuttingDown => "shutting_down",
            LifecycleState::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// Publishes the current [`LifecycleState`] to any number of observers.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    tx: watch::Sender<LifecycleState>,
}

impl Lifecycle {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(LifecycleState::Starting);
        Self { tx }
    }

    pub fn state(&self) -> LifecycleState {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<LifecycleState> {
        self.tx.subscribe()
    }

    /// Move to `next`. Illegal transitions are logged and ignored.
    pub fn transition(&self, next: LifecycleState) -> bool {
        let mut applied = false;
        self.tx.send_if_modified(|current| {
            if current.can_transition_to(next) {
                tracing::info!(from = %current, to = %next, "Lifecycle transition");
                *current = next;
                applied = true;
            } else {
                tracing::warn!(from = %current, to = %next, "Rejected lifecycle transition");
            }
            applied
        });
        applied
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
