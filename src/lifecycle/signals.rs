//! OS signal handling.
//!
//! SIGINT and SIGTERM both request a graceful shutdown. Non-unix targets
//! only see Ctrl+C.
//!
//! Handlers are registered by [`TerminationSignals::install`], not on first
//! poll, so a signal arriving between startup and the serve loop is still
//! caught rather than killing the process.

use std::fmt;
use std::io;

use tokio::signal;

/// Which signal ended the serving phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for TerminationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationSignal::Interrupt => f.write_str("SIGINT"),
            TerminationSignal::Terminate => f.write_str("SIGTERM"),
        }
    }
}

/// Registered listeners for the termination signals.
#[derive(Debug)]
pub struct TerminationSignals {
    #[cfg(unix)]
    interrupt: signal::unix::Signal,
    #[cfg(unix)]
    terminate: signal::unix::Signal,
}

impl TerminationSignals {
    /// Register the handlers. Must be called inside a tokio runtime.
    pub fn install() -> io::Result<Self> {
        #[cfg(unix)]
        {
            use signal::unix::SignalKind;

            Ok(Self {
                interrupt: signal::unix::signal(SignalKind::interrupt())?,
                terminate: signal::unix::signal(SignalKind::terminate())?,
            })
        }

        #[cfg(not(unix))]
        {
            Ok(Self {})
        }
    }

    /// Wait for the next termination signal.
    pub async fn recv(&mut self) -> io::Result<TerminationSignal> {
        #[cfg(unix)]
        {
            tokio::select! {
                _ = self.interrupt.recv() => Ok(TerminationSignal::Interrupt),
                _ = self.terminate.recv() => Ok(TerminationSignal::Terminate),
            }
        }

        #[cfg(not(unix))]
        {
            signal::ctrl_c().await?;
            Ok(TerminationSignal::Interrupt)
        }
    }
}
