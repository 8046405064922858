//! # Envelope Errors
//!
//! Error types for envelope decoding, signing and opening.
//!
//! A failed signature check on its own is not an error: `verify` returns
//! `false`. The variants below cover the operations that have something
//! more to say than a boolean.

use thiserror::Error;

/// Errors that can occur while handling signed envelopes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    /// A received axis is wider than 32 bytes (malformed peer input)
    #[error("Invalid axis length: {len} bytes exceeds 32")]
    InvalidAxisLength { len: usize },

    /// Payload cannot be signed or accepted under the configured limit
    #[error("Payload too large: {size} bytes > {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },

    /// The inner payload codec failed to encode or decode a message
    #[error("Payload codec error: {0}")]
    Payload(String),

    /// Envelope wire framing could not be encoded or decoded
    #[error("Wire format error: {0}")]
    Wire(String),

    /// The signature primitive refused to sign the digest
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Signature does not validate against the embedded sender coordinate
    #[error("Envelope signature verification failed")]
    VerificationFailed,

    /// Envelope is validly signed, but by someone other than the expected sender
    #[error("Sender mismatch: expected {expected}, got {actual}")]
    SenderMismatch { expected: String, actual: String },
}

/// Result type for envelope operations
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;
