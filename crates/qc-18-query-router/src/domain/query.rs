//! # Query Envelopes
//!
//! Inbound `QueryRequest` and outbound `QueryResponse` as exchanged with the
//! consensus engine's ABCI query path.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested state version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockHeight {
    /// Latest committed state.
    Latest,
    /// State as of a specific block.
    At(u64),
}

impl BlockHeight {
    /// Convert an ABCI height. Tendermint uses 0 for "latest".
    pub fn from_abci(height: i64) -> Self {
        if height <= 0 {
            BlockHeight::Latest
        } else {
            BlockHeight::At(height as u64)
        }
    }

    /// Inverse of [`BlockHeight::from_abci`].
    pub fn to_abci(self) -> i64 {
        match self {
            BlockHeight::Latest => 0,
            BlockHeight::At(h) => h.min(i64::MAX as u64) as i64,
        }
    }
}

impl From<u64> for BlockHeight {
    fn from(height: u64) -> Self {
        if height == 0 {
            BlockHeight::Latest
        } else {
            BlockHeight::At(height)
        }
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockHeight::Latest => write!(f, "latest"),
            BlockHeight::At(h) => write!(f, "{}", h),
        }
    }
}

/// Inbound query envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Route key.
    pub path: String,
    /// Requested state version.
    pub height: BlockHeight,
    /// Opaque encoded request payload.
    pub data: Vec<u8>,
}

impl QueryRequest {
    /// Create a request with a payload.
    pub fn new(path: impl Into<String>, height: BlockHeight, data: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            height,
            data,
        }
    }

    /// Create a payload-less request against the latest state.
    pub fn latest(path: impl Into<String>) -> Self {
        Self::new(path, BlockHeight::Latest, Vec::new())
    }
}

/// Outcome classification understood by the consensus engine.
///
/// Numeric values follow the node's consensus API code registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum ResponseCode {
    Ok = 0,
    InvalidFormat = 3,
    TransactionFailed = 4,
    NotFound = 6,
}

impl ResponseCode {
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    pub fn is_ok(self) -> bool {
        self == ResponseCode::Ok
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResponseCode::Ok => "OK",
            ResponseCode::InvalidFormat => "INVALID_FORMAT",
            ResponseCode::TransactionFailed => "TRANSACTION_FAILED",
            ResponseCode::NotFound => "NOT_FOUND",
        };
        f.write_str(name)
    }
}

/// Outbound response envelope.
///
/// `info` is only populated on `InvalidFormat` and `TransactionFailed`;
/// `value` is only populated on `Ok`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub code: ResponseCode,
    pub info: String,
    pub value: Vec<u8>,
}

impl QueryResponse {
    pub fn ok(value: Vec<u8>) -> Self {
        Self {
            code: ResponseCode::Ok,
            info: String::new(),
            value,
        }
    }

    pub fn not_found() -> Self {
        Self {
            code: ResponseCode::NotFound,
            info: String::new(),
            value: Vec::new(),
        }
    }

    pub fn invalid_format(info: impl Into<String>) -> Self {
        Self {
            code: ResponseCode::InvalidFormat,
            info: info.into(),
            value: Vec::new(),
        }
    }

    pub fn transaction_failed(info: impl Into<String>) -> Self {
        Self {
            code: ResponseCode::TransactionFailed,
            info: info.into(),
            value: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.code.is_ok()
    }
}
