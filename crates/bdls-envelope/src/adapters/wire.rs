//! # Envelope Wire Framing
//!
//! Explicit length-prefixed encoding of a [`SignedEnvelope`] for transport.
//!
//! ## Layout
//!
//! ```text
//! version  u32 LE
//! x        u64 LE length (32) || 32 bytes
//! y        u64 LE length (32) || 32 bytes
//! payload  u64 LE length      || bytes
//! r        u64 LE length      || minimal big-endian bytes
//! s        u64 LE length      || minimal big-endian bytes
//! ```
//!
//! Decoding is bounded by the configured payload limit plus a fixed allowance
//! for the header and scalars, and rejects trailing bytes. An axis wider than
//! 32 bytes is a recoverable decode error. Decoding never verifies.

use crate::config::EnvelopeConfig;
use crate::domain::envelope::SignedEnvelope;
use crate::domain::errors::{EnvelopeError, EnvelopeResult};
use bincode::Options;
use tracing::warn;

/// Allowance for everything except the payload body.
pub const FRAME_OVERHEAD: u64 = 1024;

/// Encode an envelope for the wire.
pub fn encode(envelope: &SignedEnvelope) -> EnvelopeResult<Vec<u8>> {
    options()
        .serialize(envelope)
        .map_err(|e| EnvelopeError::Wire(e.to_string()))
}

/// Decode an envelope received from a peer.
pub fn decode(bytes: &[u8], config: &EnvelopeConfig) -> EnvelopeResult<SignedEnvelope> {
    let limit = config.payload_limit() as u64 + FRAME_OVERHEAD;
    if bytes.len() as u64 > limit {
        warn!(frame_len = bytes.len(), limit, "rejecting oversized envelope frame");
        return Err(EnvelopeError::Wire(format!(
            "frame of {} bytes exceeds limit of {limit} bytes",
            bytes.len()
        )));
    }

    // bincode ignores `with_limit` for slice input, so the length check above
    // is the bound.
    options()
        .deserialize::<SignedEnvelope>(bytes)
        .map_err(|e| {
            warn!(frame_len = bytes.len(), error = %e, "rejecting malformed envelope frame");
            EnvelopeError::Wire(e.to_string())
        })
}

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
}
