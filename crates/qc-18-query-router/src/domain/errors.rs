//! # Domain Errors
//!
//! Recoverable errors surface to callers as response codes. Construction-time
//! misuse of the router is a `RouterViolation` and always panics.

use thiserror::Error;

/// State snapshot resolution errors.
///
/// The `Display` text is forwarded verbatim as the response `info`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// Application has not committed any block yet.
    #[error("no committed blocks")]
    NoCommittedBlocks,

    /// Height is older than the retained history.
    #[error("height {height} pruned, earliest available is {earliest}")]
    HeightPruned { height: u64, earliest: u64 },

    /// Height is newer than the latest committed block.
    #[error("height {height} not available, latest is {latest}")]
    HeightUnavailable { height: u64, latest: u64 },

    /// Application-specific failure (storage, not ready, ...).
    #[error("state unavailable: {0}")]
    Unavailable(String),
}

/// Request codec errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("malformed query payload: {0}")]
    Decode(String),

    #[error("failed to encode query response: {0}")]
    Encode(String),
}

/// Construction-time contract violations.
///
/// These indicate a defect in application wiring, never bad runtime data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterViolation {
    #[error("router: no application configured, call with_app first")]
    NoApplication,

    #[error("router: application already configured")]
    AlreadyBound,

    #[error("router: route {path:?} must start with application name {app:?}")]
    ForeignPath { path: String, app: String },

    #[error("router: route {path:?} already registered by {app:?}")]
    DuplicatePath { path: String, app: String },
}

impl RouterViolation {
    /// Abort start-up with this violation.
    #[track_caller]
    pub fn raise(self) -> ! {
        panic!("{}", self)
    }
}
