//! # Outbound Ports (Driven Ports / SPI)
//!
//! The inner message serialization contract. The consensus layer owns its
//! message type and its byte format; envelopes only carry the bytes.

use thiserror::Error;

/// Error from a payload codec.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The message could not be serialized
    #[error("Encode failed: {0}")]
    Encode(String),

    /// The payload bytes are not a valid message
    #[error("Decode failed: {0}")]
    Decode(String),
}

/// Serializes inner consensus messages to and from envelope payloads.
///
/// Encoding must be deterministic if callers deduplicate envelopes by
/// payload bytes: two equal messages should encode to equal bytes.
pub trait PayloadCodec: Send + Sync {
    /// The consensus message type carried in the payload.
    type Message;

    /// Serialize a message into payload bytes.
    fn encode(&self, message: &Self::Message) -> Result<Vec<u8>, CodecError>;

    /// Deserialize payload bytes of a verified envelope.
    fn decode(&self, payload: &[u8]) -> Result<Self::Message, CodecError>;
}
