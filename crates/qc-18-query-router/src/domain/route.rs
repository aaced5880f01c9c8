//! # Route Table
//!
//! Insertion-ordered registry of query routes shared by every router bound
//! to the same table.
//!
//! ## Concurrency
//!
//! Registration happens during start-up only. Dispatch takes a read lock just
//! long enough to clone the matched handler, so handlers never run under the
//! lock and concurrent dispatches do not serialize on each other.

use crate::config::{DuplicateRoutePolicy, QueryRouterConfig};
use crate::domain::errors::RouterViolation;
use crate::domain::query::{QueryRequest, QueryResponse};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Type-erased route body: decode, snapshot, handler, envelope.
pub type RouteHandler = Arc<dyn Fn(&QueryRequest) -> QueryResponse + Send + Sync>;

/// Identity of the application owning a route.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApplicationId(String);

impl ApplicationId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One registered query endpoint. Immutable once inserted.
pub struct Route {
    owner: ApplicationId,
    path: String,
    has_request: bool,
    handler: RouteHandler,
}

impl Route {
    pub fn new(
        owner: ApplicationId,
        path: impl Into<String>,
        has_request: bool,
        handler: RouteHandler,
    ) -> Self {
        Self {
            owner,
            path: path.into(),
            has_request,
            handler,
        }
    }

    pub fn owner(&self) -> &ApplicationId {
        &self.owner
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("owner", &self.owner)
            .field("path", &self.path)
            .field("has_request", &self.has_request)
            .finish_non_exhaustive()
    }
}

/// Snapshot of a registered route for introspection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteInfo {
    pub owner: ApplicationId,
    pub path: String,
    pub has_request: bool,
}

/// Whether `path` is a cross-application query (e.g. peer filtering).
pub fn is_reserved_path(path: &str, reserved_prefixes: &[String]) -> bool {
    reserved_prefixes
        .iter()
        .any(|prefix| !prefix.is_empty() && path.starts_with(prefix.as_str()))
}

/// Check that `app` may register `path`.
pub fn check_route_path(
    path: &str,
    app: &ApplicationId,
    reserved_prefixes: &[String],
) -> Result<(), RouterViolation> {
    if path.is_empty() || app.as_str().is_empty() {
        return Err(RouterViolation::ForeignPath {
            path: path.to_string(),
            app: app.to_string(),
        });
    }
    if is_reserved_path(path, reserved_prefixes) || path.starts_with(app.as_str()) {
        return Ok(());
    }
    Err(RouterViolation::ForeignPath {
        path: path.to_string(),
        app: app.to_string(),
    })
}

/// Shared, insertion-ordered route registry.
pub struct RouteTable {
    config: QueryRouterConfig,
    routes: RwLock<Vec<Route>>,
}

impl RouteTable {
    pub fn new(config: QueryRouterConfig) -> Self {
        Self {
            config,
            routes: RwLock::new(Vec::new()),
        }
    }

    /// Create a table meant to be shared by several routers.
    pub fn shared(config: QueryRouterConfig) -> Arc<Self> {
        Arc::new(Self::new(config))
    }

    pub fn config(&self) -> &QueryRouterConfig {
        &self.config
    }

    /// Append a route, applying the duplicate-path policy.
    pub fn insert(&self, route: Route) -> Result<(), RouterViolation> {
        let mut routes = self.routes.write();

        if self.config.duplicate_routes == DuplicateRoutePolicy::Reject
            && routes
                .iter()
                .any(|r| r.path == route.path && r.owner == route.owner)
        {
            return Err(RouterViolation::DuplicatePath {
                path: route.path,
                app: route.owner.to_string(),
            });
        }

        if let Some(existing) = routes.iter().find(|r| r.path == route.path) {
            match self.config.duplicate_routes {
                DuplicateRoutePolicy::Allow => {}
                DuplicateRoutePolicy::Warn | DuplicateRoutePolicy::Reject => {
                    warn!(
                        path = %route.path,
                        existing_owner = %existing.owner,
                        new_owner = %route.owner,
                        "[QueryRouter] Duplicate route path, first registration wins"
                    );
                }
            }
        }

        routes.push(route);
        Ok(())
    }

    /// First route matching `path`, optionally restricted to `owner`.
    pub fn find(&self, path: &str, owner: Option<&ApplicationId>) -> Option<RouteHandler> {
        self.routes
            .read()
            .iter()
            .filter(|r| owner.map_or(true, |o| &r.owner == o))
            .find(|r| r.path == path)
            .map(|r| Arc::clone(&r.handler))
    }

    /// Registered routes in insertion order.
    pub fn routes(&self) -> Vec<RouteInfo> {
        self.routes
            .read()
            .iter()
            .map(|r| RouteInfo {
                owner: r.owner.clone(),
                path: r.path.clone(),
                has_request: r.has_request,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.routes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.read().is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(QueryRouterConfig::default())
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &*self.routes.read())
            .finish()
    }
}
