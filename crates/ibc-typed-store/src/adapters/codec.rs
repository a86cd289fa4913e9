//! Codec adapters.
//!
//! `BincodeCodec` is used for persisted state. `JsonCodec` is used for
//! external query responses and message sign bytes only.

use crate::domain::errors::CodecError;
use crate::ports::outbound::Codec;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Default codec for persisted values, using bincode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BincodeCodec;

impl Codec for BincodeCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        bincode::serialize(value).map_err(|e| CodecError::Encode {
            message: e.to_string(),
        })
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        bincode::deserialize(bytes).map_err(|e| CodecError::Decode {
            message: e.to_string(),
        })
    }
}

/// JSON codec for human-facing output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(|e| CodecError::Encode {
            message: e.to_string(),
        })
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode {
            message: e.to_string(),
        })
    }
}
