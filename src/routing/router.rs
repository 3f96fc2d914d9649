//! Route registration and dispatch.
//!
//! # Responsibilities
//! - Register handlers by exact method + path
//! - Answer "which route is this?" for a method/path pair
//! - Freeze into an axum `Router` once startup is done
//!
//! # Design Decisions
//! - Immutable after [`RouteTable::build`] (shared without locks)
//! - Exact path matching only; no wildcards or parameters
//! - Explicit `NotFound` / `MethodNotAllowed` rather than a silent default

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::handler::Handler;
use axum::http::Method;
use axum::routing::{on, MethodFilter, MethodRouter};
use axum::Router;
use thiserror::Error;

/// Error raised while building the routing table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The same method + path was registered twice.
    #[error("route {method} {path} registered twice")]
    RouteConflict { method: Method, path: &'static str },

    /// Method has no axum filter (e.g. CONNECT, TRACE).
    #[error("method {0} cannot be routed")]
    UnsupportedMethod(Method),
}

/// A registered route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    /// Stable identifier used for logs and metric labels.
    pub name: &'static str,
}

/// Outcome of looking up a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch<'a> {
    Matched(&'a Route),
    /// Path is known but not for this method.
    MethodNotAllowed { allowed: Vec<Method> },
    NotFound,
}

/// Read-only view of the registered routes, kept after the table is built.
#[derive(Debug, Clone, Default)]
pub struct RouteIndex {
    routes: Arc<Vec<Route>>,
}

impl RouteIndex {
    /// Look up a method/path pair. HEAD is treated as GET.
    pub fn dispatch(&self, method: &Method, path: &str) -> Dispatch<'_> {
        dispatch_in(&self.routes, method, path)
    }

    /// All registered routes in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

fn dispatch_in<'a>(routes: &'a [Route], method: &Method, path: &str) -> Dispatch<'a> {
    let effective = if method == Method::HEAD {
        &Method::GET
    } else {
        method
    };

    let mut allowed = Vec::new();
    for route in routes.iter().filter(|r| r.path == path) {
        if &route.method == effective {
            return Dispatch::Matched(route);
        }
        allowed.push(route.method.clone());
    }

    if allowed.is_empty() {
        Dispatch::NotFound
    } else {
        Dispatch::MethodNotAllowed { allowed }
    }
}

/// Mutable routing table used during startup.
pub struct RouteTable<S = ()> {
    routes: Vec<Route>,
    methods: BTreeMap<&'static str, MethodRouter<S>>,
}

impl<S> RouteTable<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            methods: BTreeMap::new(),
        }
    }

    /// Register `handler` for an exact method and path.
    pub fn register<H, T>(
        &mut self,
        method: Method,
        path: &'static str,
        name: &'static str,
        handler: H,
    ) -> Result<&mut Self, RouteError>
    where
        H: Handler<T, S>,
        T: 'static,
    {
        if self
            .routes
            .iter()
            .any(|r| r.path == path && r.method == method)
        {
            return Err(RouteError::RouteConflict { method, path });
        }

        let filter = MethodFilter::try_from(method.clone())
            .map_err(|_| RouteError::UnsupportedMethod(method.clone()))?;

        let endpoint = on(filter, handler);
        let merged = match self.methods.remove(path) {
            Some(existing) => existing.merge(endpoint),
            None => endpoint,
        };
        self.methods.insert(path, merged);

        self.routes.push(Route { method, path, name });
        Ok(self)
    }

    /// Look up a method/path pair against the routes registered so far.
    pub fn dispatch(&self, method: &Method, path: &str) -> Dispatch<'_> {
        dispatch_in(&self.routes, method, path)
    }

    /// Freeze the table into a lookup index and an axum router.
    pub fn build(self) -> (RouteIndex, Router<S>) {
        let router = self
            .methods
            .into_iter()
            .fold(Router::new(), |router, (path, methods)| {
                router.route(path, methods)
            });

        let index = RouteIndex {
            routes: Arc::new(self.routes),
        };
        (index, router)
    }
}

impl<S> Default for RouteTable<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
