//! # Inbound Ports

use crate::domain::{QueryRequest, QueryResponse};

/// Dispatch seam used by the consensus engine's query path.
///
/// Implemented by both router states. Never panics: every outcome is a
/// response code.
pub trait QueryRouting: Send + Sync {
    fn route(&self, request: &QueryRequest) -> QueryResponse;
}
