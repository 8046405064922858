//! # Envelope Digest
//!
//! Domain-separated BLAKE2b-256 over the signed fields of an envelope:
//!
//! ```text
//! blake2b256(prefix || version_le32 || X || Y || len_le32(payload) || payload)
//! ```
//!
//! The axes are fixed width and the payload is length-prefixed, so no two
//! distinct field tuples share a preimage.

use super::axis::Axis;
use crate::config::EnvelopeConfig;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

/// BLAKE2b with a 256-bit output, unkeyed.
pub type Blake2b256 = Blake2b<U32>;

/// 32-byte envelope digest.
pub type Hash = [u8; 32];

/// Computes envelope digests under a fixed domain-separation prefix.
#[derive(Debug, Clone, Copy)]
pub struct DigestBuilder<'a> {
    prefix: &'a [u8],
}

impl<'a> DigestBuilder<'a> {
    /// Builder for an explicit prefix.
    pub fn new(prefix: &'a [u8]) -> Self {
        Self { prefix }
    }

    /// Builder using the configured signature prefix.
    pub fn from_config(config: &'a EnvelopeConfig) -> Self {
        Self::new(config.signature_prefix.as_bytes())
    }

    /// Hash the signed fields in their fixed order.
    ///
    /// # Panics
    ///
    /// Panics if `payload` is longer than `u32::MAX` bytes; the length field
    /// cannot represent it. Callers bound the payload before hashing.
    pub fn digest(&self, version: u32, x: &Axis, y: &Axis, payload: &[u8]) -> Hash {
        let payload_len = match u32::try_from(payload.len()) {
            Ok(len) => len,
            Err(_) => panic!(
                "payload of {} bytes exceeds the 32-bit length field",
                payload.len()
            ),
        };

        let mut hasher = Blake2b256::new();
        hasher.update(self.prefix);
        hasher.update(version.to_le_bytes());
        hasher.update(x.as_bytes());
        hasher.update(y.as_bytes());
        hasher.update(payload_len.to_le_bytes());
        hasher.update(payload);
        hasher.finalize().into()
    }
}
