//! # Payload Codecs
//!
//! `PayloadCodec` implementations for common inner message shapes.

use crate::ports::outbound::{CodecError, PayloadCodec};
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// Bincode codec for any serde message type.
///
/// Fixed-width little-endian integers; trailing bytes after the message are
/// rejected on decode, so each message has exactly one valid encoding.
pub struct BincodeCodec<T> {
    _message: PhantomData<fn() -> T>,
}

impl<T> BincodeCodec<T> {
    /// Create a new bincode codec.
    pub fn new() -> Self {
        Self {
            _message: PhantomData,
        }
    }
}

impl<T> Default for BincodeCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for BincodeCodec<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for BincodeCodec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BincodeCodec").finish()
    }
}

impl<T> PayloadCodec for BincodeCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    type Message = T;

    fn encode(&self, message: &T) -> Result<Vec<u8>, CodecError> {
        options()
            .serialize(message)
            .map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode(&self, payload: &[u8]) -> Result<T, CodecError> {
        options()
            .deserialize(payload)
            .map_err(|e| CodecError::Decode(e.to_string()))
    }
}

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_fixint_encoding()
}

/// Identity codec: the message is the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawBytesCodec;

impl PayloadCodec for RawBytesCodec {
    type Message = Vec<u8>;

    fn encode(&self, message: &Vec<u8>) -> Result<Vec<u8>, CodecError> {
        Ok(message.clone())
    }

    fn decode(&self, payload: &[u8]) -> Result<Vec<u8>, CodecError> {
        Ok(payload.to_vec())
    }
}
