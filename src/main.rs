//! Payment service binary.
//!
//! ```text
//! parse CLI/env → validate → bind → serve (background task)
//!     → wait for SIGINT/SIGTERM → drain (≤ shutdown deadline) → exit
//! ```
//!
//! Any startup failure or a missed shutdown deadline exits non-zero.

use std::process::ExitCode;

use clap::Parser;

use payment_service::config::{load_config, Cli};
use payment_service::lifecycle::TerminationSignals;
use payment_service::observability::{logging, metrics};
use payment_service::{HttpServer, ServiceError};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_format);

    tracing::info!("payment-service v{} starting", env!("CARGO_PKG_VERSION"));

    match run(cli).await {
        Ok(()) => {
            tracing::info!("Server exited");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Payment service terminated");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), ServiceError> {
    let config = load_config(cli)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        shutdown_timeout_secs = config.timeouts.shutdown_secs,
        request_timeout_secs = config.timeouts.request_secs,
        payment_id_scheme = ?config.payments.id_scheme,
        strict_validation = config.payments.strict_validation,
        "Configuration loaded"
    );

    if let Some(addr) = config.observability.metrics_address {
        metrics::init_metrics(addr)?;
    }

    let signals = TerminationSignals::install();
    let server = HttpServer::new(&config)?;
    let listener = server.bind(&config.listener.bind_address).await?;

    server
        .run(listener, async move {
            let received = match signals {
                Ok(mut signals) => signals.recv().await,
                Err(e) => Err(e),
            };
            match received {
                Ok(signal) => tracing::info!(%signal, "Shutdown signal received"),
                Err(e) => tracing::error!(
                    error = %e,
                    "Cannot listen for termination signals, shutting down"
                ),
            }
        })
        .await
}
