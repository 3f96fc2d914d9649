//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::{routing::get, Router};
use payment_service::lifecycle::{Lifecycle, LifecycleState, Shutdown};
use payment_service::{HttpServer, ServiceError};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A running server on an ephemeral port.
pub struct RunningServer {
    pub addr: SocketAddr,
    pub lifecycle: Lifecycle,
    pub shutdown: Shutdown,
    /// Simulates SIGTERM.
    pub signal: oneshot::Sender<()>,
    pub handle: JoinHandle<Result<(), ServiceError>>,
}

/// Router with a handler that sleeps for `delay` before answering "done".
pub fn slow_router(delay: Duration) -> Router {
    Router::new()
        .route(
            "/slow",
            get(move || async move {
                tokio::time::sleep(delay).await;
                "done"
            }),
        )
        .route("/fast", get(|| async { "fast" }))
}

/// Bind `server` to 127.0.0.1:0 and run it until `signal` fires.
pub async fn start(server: HttpServer) -> RunningServer {
    let lifecycle = server.lifecycle();
    let shutdown = server.shutdown_handle();
    let listener = server.bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (signal, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server.run(listener, async move {
        let _ = rx.await;
    }));

    wait_for_state(&lifecycle, LifecycleState::Serving).await;

    RunningServer {
        addr,
        lifecycle,
        shutdown,
        signal,
        handle,
    }
}

pub async fn wait_for_state(lifecycle: &Lifecycle, state: LifecycleState) {
    let mut rx = lifecycle.subscribe();
    tokio::time::timeout(Duration::from_secs(5), rx.wait_for(|s| *s == state))
        .await
        .expect("timed out waiting for lifecycle state")
        .expect("lifecycle channel closed");
}

/// Client with pooling disabled so every request opens a fresh connection.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
