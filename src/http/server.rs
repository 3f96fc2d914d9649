//! HTTP server setup and lifecycle control.
//!
//! # Responsibilities
//! - Register the service's routes in a [`RouteTable`]
//! - Wire up middleware (request ID, tracing, CORS, timeout, body limit, metrics)
//! - Bind the listener (failure is fatal)
//! - Serve on a background task until a termination signal arrives
//! - Drain in-flight requests within the shutdown deadline

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{extract::DefaultBodyLimit, http::Method, middleware, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::health::ServiceInfo;
use crate::http::handlers;
use crate::http::middleware::{cors_layer, track_requests};
use crate::http::request::{make_span, propagate_request_id, set_request_id};
use crate::lifecycle::{Lifecycle, LifecycleState, Shutdown};
use crate::payments::PaymentProcessor;
use crate::routing::{RouteError, RouteTable};

/// Application state injected into handlers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub service: ServiceInfo,
    pub payments: PaymentProcessor,
}

impl AppState {
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            service: ServiceInfo::default(),
            payments: PaymentProcessor::from_config(&config.payments),
        }
    }
}

/// Register every route the service exposes.
pub fn route_table() -> Result<RouteTable<AppState>, RouteError> {
    let mut table = RouteTable::new();
    table
        .register(Method::GET, "/health", "health", handlers::health)?
        .register(Method::GET, "/health/ready", "health.ready", handlers::health)?
        .register(Method::GET, "/health/live", "health.live", handlers::health)?
        .register(
            Method::POST,
            "/payments",
            "payments.create",
            handlers::create_payment,
        )?;
    Ok(table)
}

/// HTTP server for the payment service.
pub struct HttpServer {
    router: Router,
    shutdown_timeout: Duration,
    lifecycle: Lifecycle,
    shutdown: Shutdown,
}

impl HttpServer {
    /// Create a server exposing the service's routes.
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let router = Self::build_router(config, AppState::from_config(config))?;
        Ok(Self::with_router(
            router,
            Duration::from_secs(config.timeouts.shutdown_secs),
        ))
    }

    /// Create a server around an arbitrary router.
    pub fn with_router(router: Router, shutdown_timeout: Duration) -> Self {
        Self {
            router,
            shutdown_timeout,
            lifecycle: Lifecycle::new(),
            shutdown: Shutdown::new(),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Result<Router, RouteError> {
        let (index, router) = route_table()?.build();

        let layers = ServiceBuilder::new()
            .layer(set_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(make_span))
            .layer(propagate_request_id())
            .layer(cors_layer())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )));

        Ok(router
            .layer(middleware::from_fn_with_state(index, track_requests))
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            .with_state(state)
            .layer(layers))
    }

    /// The fully layered router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Observer for the server's lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle.clone()
    }

    /// Handle that starts a graceful shutdown when triggered.
    pub fn shutdown_handle(&self) -> Shutdown {
        self.shutdown.clone()
    }

    /// Bind the listening socket. On failure the server moves to `Stopped`.
    pub async fn bind(&self, address: &str) -> Result<TcpListener, ServiceError> {
        let bound = async {
            let listener = TcpListener::bind(address).await?;
            let local_addr = listener.local_addr()?;
            Ok::<_, std::io::Error>((listener, local_addr))
        }
        .await;

        match bound {
            Ok((listener, local_addr)) => {
                tracing::info!(address = %local_addr, "Listener bound");
                Ok(listener)
            }
            Err(source) => {
                self.lifecycle.transition(LifecycleState::Stopped);
                Err(ServiceError::Bind {
                    address: address.to_string(),
                    source,
                })
            }
        }
    }

    /// Serve until `signal` resolves (or the shutdown handle fires), then
    /// drain in-flight requests for at most the shutdown deadline.
    ///
    /// Requests still running at the deadline are abandoned and
    /// [`ServiceError::ShutdownTimeout`] is returned.
    pub async fn run<F>(self, listener: TcpListener, signal: F) -> Result<(), ServiceError>
    where
        F: Future<Output = ()>,
    {
        let addr = listener.local_addr().map_err(ServiceError::Serve)?;
        let mut stop_accepting = self.shutdown.subscribe();
        let mut external = self.shutdown.subscribe();
        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        let mut server = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move { stop_accepting.recv().await })
                .await
        });

        self.lifecycle.transition(LifecycleState::Serving);
        tracing::info!(address = %addr, "HTTP server serving");

        tokio::select! {
            _ = signal => {}
            _ = external.recv() => {}
            res = &mut server => {
                self.lifecycle.transition(LifecycleState::Stopped);
                tracing::error!("HTTP server stopped before a shutdown was requested");
                return flatten(res).and_then(|()| {
                    Err(ServiceError::Serve(std::io::Error::other(
                        "accept loop exited unexpectedly",
                    )))
                });
            }
        }

        self.lifecycle.transition(LifecycleState::ShuttingDown);
        self.shutdown.trigger();
        tracing::info!(
            deadline_secs = self.shutdown_timeout.as_secs_f64(),
            "Shutting down server, draining in-flight requests"
        );

        let drained = tokio::time::timeout(self.shutdown_timeout, &mut server).await;
        self.lifecycle.transition(LifecycleState::Stopped);

        match drained {
            Ok(res) => {
                flatten(res)?;
                tracing::info!("HTTP server stopped");
                Ok(())
            }
            Err(_) => {
                tracing::error!(
                    deadline_secs = self.shutdown_timeout.as_secs_f64(),
                    "Server forced to shutdown, abandoning in-flight requests"
                );
                Err(ServiceError::ShutdownTimeout(self.shutdown_timeout))
            }
        }
    }
}

fn flatten(
    res: Result<std::io::Result<()>, tokio::task::JoinError>,
) -> Result<(), ServiceError> {
    match res {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(ServiceError::Serve(e)),
        Err(join) => Err(ServiceError::Serve(std::io::Error::other(join))),
    }
}
