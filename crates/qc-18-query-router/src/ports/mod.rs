//! # Ports
//!
//! - `inbound`: what the consensus engine calls (`QueryRouting`)
//! - `outbound`: what the router needs from applications and the codec

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
