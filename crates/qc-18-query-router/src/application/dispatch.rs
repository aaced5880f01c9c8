//! # Dispatch Pipeline
//!
//! Builds the type-erased body of a route and runs table lookups.
//!
//! ## Process
//!
//! 1. Decode the payload if the route declares a request type
//!    (failure: `InvalidFormat`)
//! 2. Resolve the snapshot at the requested height
//!    (failure: `TransactionFailed`, info = provider error)
//! 3. Invoke the handler
//!    - `Err(e)` → `TransactionFailed`, info = `e`
//!    - `Ok(None)` → `NotFound`
//!    - `Ok(Some(bytes))` → `Ok`, value = bytes

use crate::domain::{ApplicationId, QueryRequest, QueryResponse, RouteHandler, RouteTable};
use crate::ports::{Application, QueryCodec};
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::sync::Arc;
use tracing::debug;

/// Route body for a handler that takes a decoded request.
pub(crate) fn with_request<A, C, Req, F, E>(app: Arc<A>, handler: F) -> RouteHandler
where
    A: Application,
    C: QueryCodec,
    Req: DeserializeOwned + 'static,
    F: Fn(&A::Snapshot, Req) -> Result<Option<Vec<u8>>, E> + Send + Sync + 'static,
    E: Display,
{
    Arc::new(move |request: &QueryRequest| {
        let decoded = match C::decode::<Req>(&request.data) {
            Ok(decoded) => decoded,
            Err(e) => return QueryResponse::invalid_format(e.to_string()),
        };
        execute(app.as_ref(), request, |snapshot| handler(snapshot, decoded))
    })
}

/// Route body for a payload-less handler. The payload is ignored.
pub(crate) fn without_request<A, F, E>(app: Arc<A>, handler: F) -> RouteHandler
where
    A: Application,
    F: Fn(&A::Snapshot) -> Result<Option<Vec<u8>>, E> + Send + Sync + 'static,
    E: Display,
{
    Arc::new(move |request: &QueryRequest| execute(app.as_ref(), request, &handler))
}

fn execute<A, F, E>(app: &A, request: &QueryRequest, invoke: F) -> QueryResponse
where
    A: Application,
    F: FnOnce(&A::Snapshot) -> Result<Option<Vec<u8>>, E>,
    E: Display,
{
    let snapshot = match app.get_state(request.height) {
        Ok(snapshot) => snapshot,
        Err(e) => return QueryResponse::transaction_failed(e.to_string()),
    };

    match invoke(&snapshot) {
        Ok(Some(value)) => QueryResponse::ok(value),
        Ok(None) => QueryResponse::not_found(),
        Err(e) => QueryResponse::transaction_failed(e.to_string()),
    }
}

/// Look up `request.path` (restricted to `owner` when given) and run it.
pub(crate) fn dispatch(
    table: &RouteTable,
    owner: Option<&ApplicationId>,
    request: &QueryRequest,
) -> QueryResponse {
    // The handler runs after the table lock is released.
    let response = match table.find(&request.path, owner) {
        Some(handler) => handler(request),
        None => QueryResponse::not_found(),
    };

    debug!(
        app = owner.map_or("*", ApplicationId::as_str),
        path = %request.path,
        height = %request.height,
        code = %response.code,
        "[QueryRouter] Query routed"
    );

    response
}
