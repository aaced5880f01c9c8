//! # Query Router Configuration

use serde::{Deserialize, Serialize};

/// Reserved prefix for Tendermint peer-filter queries
/// (`/p2p/filter/addr/<addr>`, `/p2p/filter/id/<id>`).
pub const P2P_FILTER_PREFIX: &str = "/p2p/filter/";

/// What to do when a path is registered more than once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateRoutePolicy {
    /// Keep both; the first registration wins at dispatch.
    Allow,
    /// Like `Allow`, but log a warning.
    #[default]
    Warn,
    /// Refuse a second registration of a path by the same application.
    Reject,
}

/// Query router configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryRouterConfig {
    /// Path prefixes any application may register (cross-application queries).
    pub reserved_prefixes: Vec<String>,

    /// Duplicate path handling.
    pub duplicate_routes: DuplicateRoutePolicy,
}

impl Default for QueryRouterConfig {
    fn default() -> Self {
        Self {
            reserved_prefixes: vec![P2P_FILTER_PREFIX.to_string()],
            duplicate_routes: DuplicateRoutePolicy::Warn,
        }
    }
}

impl QueryRouterConfig {
    /// Strict configuration for tests: duplicates are wiring bugs.
    pub fn for_testing() -> Self {
        Self {
            duplicate_routes: DuplicateRoutePolicy::Reject,
            ..Self::default()
        }
    }
}
