//! # QC-18 Query Router
//!
//! Routes read-only ABCI queries to the application that owns them.
//!
//! **Subsystem ID:** 18
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Several independently developed applications (ledger, registry, staking,
//! scheduler, ...) share one consensus instance. A query arrives as
//! `(path, height, data)`; the router resolves the path to a registered
//! handler, decodes the payload, opens the owning application's snapshot at
//! `height`, runs the handler and maps the outcome to a response code.
//!
//! ## Two-Phase Construction
//!
//! ```text
//! QueryRouter (unbound) ──with_app(app)──→ AppQueryRouter (bound)
//!        │                                        │
//!        │ route(): all owners                    │ add_route*(): tagged with app
//!        ↓                                        │ route(): own routes only
//!   RouteTable (shared, insertion-ordered) ←──────┘
//! ```
//!
//! ## Outcome Mapping
//!
//! | Outcome | Code | info |
//! |---------|------|------|
//! | no matching route | `NotFound` | empty |
//! | payload does not decode | `InvalidFormat` | codec error |
//! | snapshot unavailable | `TransactionFailed` | provider error |
//! | handler error | `TransactionFailed` | handler error |
//! | handler found nothing | `NotFound` | empty |
//! | handler result | `Ok` | empty |
//!
//! ## Usage
//!
//! ```rust,ignore
//! let table = RouteTable::shared(QueryRouterConfig::default());
//! let ledger = QueryRouter::with_table(Arc::clone(&table)).with_app(ledger_app);
//!
//! ledger.add_route_with_request("ledger.Balance", |state: &LedgerSnapshot, q: BalanceQuery| {
//!     BincodeCodec::encode(&state.balance(&q.account)).map(Some)
//! });
//!
//! // Consensus query path
//! let global: QueryRouter = QueryRouter::with_table(table);
//! let response = global.route(&request);
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::{BincodeCodec, VersionedState};
pub use application::{AppQueryRouter, QueryRouter};
pub use config::{DuplicateRoutePolicy, QueryRouterConfig, P2P_FILTER_PREFIX};
pub use domain::{
    check_route_path, is_reserved_path, ApplicationId, BlockHeight, CodecError, QueryRequest,
    QueryResponse, ResponseCode, RouteInfo, RouteTable, RouterViolation, SnapshotError,
};
pub use ports::{Application, QueryCodec, QueryRouting};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
