//! # Test Fixtures
//!
//! Minimal ledger and staking applications backed by `VersionedState`.

use qc_18_query_router::{
    AppQueryRouter, Application, BincodeCodec, BlockHeight, QueryCodec, QueryRequest,
    SnapshotError, VersionedState,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Once};
use thiserror::Error;

static TRACING: Once = Once::new();

/// Install a `fmt` subscriber honouring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Request body of `ledger.Balance` and `staking.Balance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceQuery {
    pub account: String,
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid account: empty name")]
    EmptyAccount,

    #[error(transparent)]
    Codec(#[from] qc_18_query_router::CodecError),
}

/// Balances at one height.
#[derive(Debug, Clone, Default)]
pub struct Balances {
    pub accounts: HashMap<String, u64>,
}

impl Balances {
    pub fn with(mut self, account: &str, amount: u64) -> Self {
        self.accounts.insert(account.to_string(), amount);
        self
    }
}

/// Account ledger application.
pub struct LedgerApp {
    pub state: VersionedState<Balances>,
}

impl LedgerApp {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: VersionedState::new(),
        })
    }
}

impl Application for LedgerApp {
    type Snapshot = Arc<Balances>;

    fn name(&self) -> &str {
        "ledger"
    }

    fn get_state(&self, height: BlockHeight) -> Result<Self::Snapshot, SnapshotError> {
        self.state.get(height)
    }
}

/// Escrowed stake per account.
pub struct StakingApp {
    pub state: VersionedState<Balances>,
}

impl StakingApp {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: VersionedState::new(),
        })
    }
}

impl Application for StakingApp {
    type Snapshot = Arc<Balances>;

    fn name(&self) -> &str {
        "staking"
    }

    fn get_state(&self, height: BlockHeight) -> Result<Self::Snapshot, SnapshotError> {
        self.state.get(height)
    }
}

fn balance_of(balances: &Balances, query: BalanceQuery) -> Result<Option<Vec<u8>>, LedgerError> {
    if query.account.is_empty() {
        return Err(LedgerError::EmptyAccount);
    }
    match balances.accounts.get(&query.account) {
        Some(amount) => Ok(Some(BincodeCodec::encode(amount)?)),
        None => Ok(None),
    }
}

/// `ledger.Balance` and `ledger.Accounts`.
pub fn register_ledger_routes(router: &AppQueryRouter<LedgerApp>) {
    router.add_route_with_request("ledger.Balance", |state: &Arc<Balances>, q: BalanceQuery| {
        balance_of(state, q)
    });
    router.add_route("ledger.Accounts", |state: &Arc<Balances>| {
        let mut names: Vec<&String> = state.accounts.keys().collect();
        names.sort();
        BincodeCodec::encode(&names).map(Some)
    });
}

/// `staking.Balance`.
pub fn register_staking_routes(router: &AppQueryRouter<StakingApp>) {
    router.add_route_with_request("staking.Balance", |state: &Arc<Balances>, q: BalanceQuery| {
        balance_of(state, q)
    });
}

pub fn balance_request(path: &str, height: BlockHeight, account: &str) -> QueryRequest {
    let data = BincodeCodec::encode(&BalanceQuery {
        account: account.to_string(),
    })
    .expect("encode query");
    QueryRequest::new(path, height, data)
}
