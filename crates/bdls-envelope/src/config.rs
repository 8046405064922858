//! Envelope configuration.
//!
//! Carries the domain-separation prefix, the protocol version stamped on
//! every signed envelope, and the payload bound. The curve is fixed to
//! secp256k1 by the types used throughout the crate.

use std::env;
use tracing::warn;

/// Prefix hashed ahead of every envelope digest.
pub const SIGNATURE_PREFIX: &str = "==BDLS CONSENSUS MESSAGE==";

/// Current envelope protocol version.
pub const PROTOCOL_VERSION: u32 = 1;

/// Default upper bound on a serialized inner message (4 MiB).
pub const DEFAULT_MAX_PAYLOAD_SIZE: usize = 4 * 1024 * 1024;

/// Configuration shared by signing, verification and wire decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeConfig {
    /// Domain-separation prefix for the digest
    pub signature_prefix: String,

    /// Version written by `sign` and hashed into every digest
    pub protocol_version: u32,

    /// Largest payload accepted for signing, verification and decoding
    pub max_payload_size: usize,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            signature_prefix: SIGNATURE_PREFIX.to_string(),
            protocol_version: PROTOCOL_VERSION,
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
        }
    }
}

impl EnvelopeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `BDLS_SIGNATURE_PREFIX`: Digest prefix (default: `==BDLS CONSENSUS MESSAGE==`)
    /// - `BDLS_PROTOCOL_VERSION`: Protocol version (default: 1)
    /// - `BDLS_MAX_PAYLOAD_SIZE`: Payload bound in bytes (default: 4194304)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            signature_prefix: env::var("BDLS_SIGNATURE_PREFIX")
                .unwrap_or(defaults.signature_prefix),

            protocol_version: parse_env("BDLS_PROTOCOL_VERSION")
                .unwrap_or(defaults.protocol_version),

            max_payload_size: parse_env("BDLS_MAX_PAYLOAD_SIZE")
                .unwrap_or(defaults.max_payload_size),
        }
    }

    /// Override the digest prefix.
    pub fn with_signature_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.signature_prefix = prefix.into();
        self
    }

    /// Override the protocol version.
    pub fn with_protocol_version(mut self, version: u32) -> Self {
        self.protocol_version = version;
        self
    }

    /// Override the payload bound.
    pub fn with_max_payload_size(mut self, size: usize) -> Self {
        self.max_payload_size = size;
        self
    }

    /// Largest payload both the bound and the 32-bit length field admit.
    pub fn payload_limit(&self) -> usize {
        self.max_payload_size.min(u32::MAX as usize)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}
