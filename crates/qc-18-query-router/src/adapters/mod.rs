pub mod bincode_codec;
pub mod versioned_state;

pub use bincode_codec::BincodeCodec;
pub use versioned_state::VersionedState;
