//! # Query Router (unbound)
//!
//! Holds a route table and exists to be bound to exactly one application.
//!
//! Unlike [`AppQueryRouter`], dispatch here scans routes of *every* owner,
//! so a process-wide dispatcher can answer queries before (or without) any
//! application-specific binding.

use crate::adapters::BincodeCodec;
use crate::application::app_router::AppQueryRouter;
use crate::application::dispatch;
use crate::config::QueryRouterConfig;
use crate::domain::{QueryRequest, QueryResponse, RouteInfo, RouterViolation, RouteTable};
use crate::ports::{Application, QueryCodec, QueryRouting};
use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Unbound query router.
pub struct QueryRouter<C: QueryCodec = BincodeCodec> {
    table: Arc<RouteTable>,
    bound: AtomicBool,
    _codec: PhantomData<fn() -> C>,
}

impl QueryRouter<BincodeCodec> {
    /// Router over a fresh table with default configuration.
    pub fn new() -> Self {
        Self::with_config(QueryRouterConfig::default())
    }

    pub fn with_config(config: QueryRouterConfig) -> Self {
        Self::with_table(RouteTable::shared(config))
    }
}

impl Default for QueryRouter<BincodeCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: QueryCodec> QueryRouter<C> {
    /// Router over an existing (possibly shared) table.
    pub fn with_table(table: Arc<RouteTable>) -> Self {
        Self {
            table,
            bound: AtomicBool::new(false),
            _codec: PhantomData,
        }
    }

    pub fn table(&self) -> &Arc<RouteTable> {
        &self.table
    }

    /// Bind this router to `app`.
    ///
    /// # Panics
    ///
    /// If this router was already bound.
    #[track_caller]
    pub fn with_app<A: Application>(&self, app: Arc<A>) -> AppQueryRouter<A, C> {
        if self.bound.swap(true, Ordering::AcqRel) {
            RouterViolation::AlreadyBound.raise();
        }
        AppQueryRouter::new(Arc::clone(&self.table), app)
    }

    /// Routes need an owning application.
    ///
    /// # Panics
    ///
    /// Always. Call [`QueryRouter::with_app`] first.
    #[track_caller]
    pub fn add_route<H>(&self, path: &str, _handler: H) -> ! {
        tracing::error!(path, "[QueryRouter] Route registered without application");
        RouterViolation::NoApplication.raise()
    }

    pub fn is_bound(&self) -> bool {
        self.bound.load(Ordering::Acquire)
    }

    pub fn routes(&self) -> Vec<RouteInfo> {
        self.table.routes()
    }

    /// Dispatch across all registered routes regardless of owner.
    pub fn route(&self, request: &QueryRequest) -> QueryResponse {
        dispatch::dispatch(&self.table, None, request)
    }
}

impl<C: QueryCodec> QueryRouting for QueryRouter<C> {
    fn route(&self, request: &QueryRequest) -> QueryResponse {
        QueryRouter::route(self, request)
    }
}

impl<C: QueryCodec> fmt::Debug for QueryRouter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryRouter")
            .field("bound", &self.is_bound())
            .field("table", &self.table)
            .finish()
    }
}
