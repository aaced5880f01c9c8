//! # Quantum-Chain Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Sample applications (ledger, staking) + log setup
//! └── integration/      # Cross-application query routing
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p qc-tests
//!
//! # With router logs
//! RUST_LOG=qc_18_query_router=debug cargo test -p qc-tests -- --nocapture
//! ```

#![allow(dead_code)]

pub mod fixtures;
