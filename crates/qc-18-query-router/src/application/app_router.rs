//! # Application Query Router (bound)
//!
//! Per-application view of a route table, used for registration and for
//! owner-filtered dispatch.
//!
//! ## Registration Rules
//!
//! - Paths must start with the application name, or carry a reserved
//!   cross-application prefix (`/p2p/filter/` by default)
//! - Duplicate paths follow `QueryRouterConfig::duplicate_routes`
//! - Violations panic at start-up; they never reach a live query

use crate::adapters::BincodeCodec;
use crate::application::dispatch;
use crate::domain::{
    check_route_path, ApplicationId, QueryRequest, QueryResponse, Route, RouteHandler,
    RouteTable, RouterViolation,
};
use crate::ports::{Application, QueryCodec, QueryRouting};
use serde::de::DeserializeOwned;
use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::info;

/// Query router bound to one application.
pub struct AppQueryRouter<A: Application, C: QueryCodec = BincodeCodec> {
    table: Arc<RouteTable>,
    app: Arc<A>,
    id: ApplicationId,
    _codec: PhantomData<fn() -> C>,
}

impl<A: Application, C: QueryCodec> AppQueryRouter<A, C> {
    pub(crate) fn new(table: Arc<RouteTable>, app: Arc<A>) -> Self {
        let id = ApplicationId::new(app.name());
        info!(app = %id, "[QueryRouter] Router bound to application");
        Self {
            table,
            app,
            id,
            _codec: PhantomData,
        }
    }

    pub fn app(&self) -> &Arc<A> {
        &self.app
    }

    pub fn application_id(&self) -> &ApplicationId {
        &self.id
    }

    pub fn table(&self) -> &Arc<RouteTable> {
        &self.table
    }

    /// A bound router cannot be rebound.
    ///
    /// # Panics
    ///
    /// Always.
    #[track_caller]
    pub fn with_app<B: Application>(&self, _app: Arc<B>) -> ! {
        RouterViolation::AlreadyBound.raise()
    }

    /// Register a route whose query carries no payload.
    ///
    /// # Panics
    ///
    /// If `path` is not owned by this application, or duplicates an
    /// existing path under the `Reject` policy.
    #[track_caller]
    pub fn add_route<F, E>(&self, path: &str, handler: F)
    where
        F: Fn(&A::Snapshot) -> Result<Option<Vec<u8>>, E> + Send + Sync + 'static,
        E: Display,
    {
        let body = dispatch::without_request(Arc::clone(&self.app), handler);
        self.register(path, false, body);
    }

    /// Register a route whose payload is decoded into `Req` before the
    /// handler runs.
    ///
    /// # Panics
    ///
    /// Same as [`AppQueryRouter::add_route`].
    #[track_caller]
    pub fn add_route_with_request<Req, F, E>(&self, path: &str, handler: F)
    where
        Req: DeserializeOwned + 'static,
        F: Fn(&A::Snapshot, Req) -> Result<Option<Vec<u8>>, E> + Send + Sync + 'static,
        E: Display,
    {
        let body = dispatch::with_request::<A, C, Req, F, E>(Arc::clone(&self.app), handler);
        self.register(path, true, body);
    }

    #[track_caller]
    fn register(&self, path: &str, has_request: bool, body: RouteHandler) {
        if let Err(violation) =
            check_route_path(path, &self.id, &self.table.config().reserved_prefixes)
        {
            violation.raise();
        }

        let route = Route::new(self.id.clone(), path, has_request, body);
        if let Err(violation) = self.table.insert(route) {
            violation.raise();
        }

        info!(app = %self.id, path, has_request, "[QueryRouter] Route registered");
    }

    /// Dispatch restricted to routes owned by this application.
    pub fn route(&self, request: &QueryRequest) -> QueryResponse {
        dispatch::dispatch(&self.table, Some(&self.id), request)
    }
}

impl<A: Application, C: QueryCodec> Clone for AppQueryRouter<A, C> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            app: Arc::clone(&self.app),
            id: self.id.clone(),
            _codec: PhantomData,
        }
    }
}

impl<A: Application, C: QueryCodec> QueryRouting for AppQueryRouter<A, C> {
    fn route(&self, request: &QueryRequest) -> QueryResponse {
        AppQueryRouter::route(self, request)
    }
}

impl<A: Application, C: QueryCodec> fmt::Debug for AppQueryRouter<A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppQueryRouter")
            .field("app", &self.id)
            .field("table", &self.table)
            .finish()
    }
}
