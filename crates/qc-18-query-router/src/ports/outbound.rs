//! # Outbound Ports
//!
//! Collaborators the router depends on but does not implement.

use crate::domain::{BlockHeight, CodecError, SnapshotError};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A pluggable state-machine application.
pub trait Application: Send + Sync + 'static {
    /// Immutable, read-only view of the application state at one height.
    type Snapshot: 'static;

    /// Application name. Every owned route path starts with it.
    fn name(&self) -> &str;

    /// State snapshot provider.
    fn get_state(&self, height: BlockHeight) -> Result<Self::Snapshot, SnapshotError>;
}

/// Request codec. Decodes payloads into typed requests and encodes
/// handler results.
pub trait QueryCodec: Send + Sync + 'static {
    fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError>;

    fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError>;
}
