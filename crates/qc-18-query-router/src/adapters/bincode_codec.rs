//! # Bincode Codec
//!
//! Default `QueryCodec`, the same wire encoding subsystems use on the bus.

use crate::domain::CodecError;
use crate::ports::QueryCodec;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// `bincode` 1.x with its default (fixed-int, little-endian) options.
#[derive(Clone, Copy, Debug, Default)]
pub struct BincodeCodec;

impl QueryCodec for BincodeCodec {
    fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
        bincode::deserialize(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }

    fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
        bincode::serialize(value).map_err(|e| CodecError::Encode(e.to_string()))
    }
}
