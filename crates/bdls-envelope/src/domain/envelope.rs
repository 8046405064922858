//! # Signed Envelope (secp256k1 ECDSA)
//!
//! The authenticated unit validators exchange. An envelope carries its
//! sender's public key coordinates, so verification needs nothing beyond
//! the envelope itself and the shared configuration.
//!
//! ## Security Notes
//!
//! - The digest covers `version`, `x`, `y` and `payload`; changing any of
//!   them after signing invalidates the signature.
//! - Signing uses RFC 6979 nonces hedged with fresh randomness from the
//!   supplied RNG.
//! - Signatures are produced with low S. Verification accepts both `s` and
//!   `n - s`, as plain ECDSA does, so envelopes from non-normalizing signers
//!   verify.
//! - `r` and `s` are stored in minimal big-endian form; verification
//!   accepts any leading-zero padding up to the scalar width.
//! - Off-curve coordinates and out-of-range scalars make `verify` return
//!   `false`; they are never errors or panics.

use super::axis::Axis;
use super::coordinate::Coordinate;
use super::digest::{DigestBuilder, Hash};
use super::errors::{EnvelopeError, EnvelopeResult};
use crate::config::EnvelopeConfig;
use k256::ecdsa::signature::hazmat::{PrehashVerifier, RandomizedPrehashSigner};
use k256::ecdsa::{Signature, SigningKey};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

/// Width of an ECDSA scalar on secp256k1.
const SCALAR_SIZE: usize = 32;

/// A consensus payload signed by the validator whose key it names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedEnvelope {
    /// Protocol version the envelope was signed under
    pub version: u32,
    /// Sender public key X axis
    pub x: Axis,
    /// Sender public key Y axis
    pub y: Axis,
    /// Serialized inner consensus message
    pub payload: Vec<u8>,
    /// Signature R scalar, minimal big-endian
    pub r: Vec<u8>,
    /// Signature S scalar, minimal big-endian
    pub s: Vec<u8>,
}

impl SignedEnvelope {
    /// An empty, unsigned envelope.
    pub fn new() -> Self {
        Self::default()
    }

    /// The sender identity named by this envelope's axes.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::from_axes(&self.x, &self.y)
    }

    /// Digest of the signed fields under the configured prefix.
    ///
    /// # Panics
    ///
    /// Panics if the payload exceeds `u32::MAX` bytes. `sign` and `verify`
    /// reject such payloads before hashing.
    pub fn digest(&self, config: &EnvelopeConfig) -> Hash {
        DigestBuilder::from_config(config).digest(self.version, &self.x, &self.y, &self.payload)
    }

    /// Sign `payload` with `private_key`, using the operating system RNG.
    pub fn sign(
        &mut self,
        config: &EnvelopeConfig,
        payload: Vec<u8>,
        private_key: &SigningKey,
    ) -> EnvelopeResult<()> {
        self.sign_with_rng(config, payload, private_key, &mut OsRng)
    }

    /// Sign `payload` with `private_key`.
    ///
    /// Sets `version`, `x`, `y` and `payload`, then stores the signature
    /// scalars in `r` and `s`. The envelope is left untouched on error.
    ///
    /// # Panics
    ///
    /// Panics if the key's coordinates do not fit the axis width (see
    /// [`Coordinate::from_public_key`]).
    pub fn sign_with_rng<R: CryptoRng + RngCore>(
        &mut self,
        config: &EnvelopeConfig,
        payload: Vec<u8>,
        private_key: &SigningKey,
        rng: &mut R,
    ) -> EnvelopeResult<()> {
        check_payload_size(payload.len(), config)?;

        let sender = Coordinate::from_public_key(private_key.verifying_key());
        let (x, y) = (sender.x(), sender.y());
        let digest = DigestBuilder::from_config(config).digest(
            config.protocol_version,
            &x,
            &y,
            &payload,
        );

        let signature: Signature = private_key
            .sign_prehash_with_rng(rng, &digest)
            .map_err(|e| EnvelopeError::Signing(e.to_string()))?;
        let sig_bytes = signature.to_bytes();

        self.version = config.protocol_version;
        self.x = x;
        self.y = y;
        self.payload = payload;
        self.r = minimal_be(&sig_bytes[..SCALAR_SIZE]);
        self.s = minimal_be(&sig_bytes[SCALAR_SIZE..]);
        Ok(())
    }

    /// Check the signature against the embedded sender coordinate.
    ///
    /// Returns `false` for any tampered, malformed, foreign-version or
    /// foreign-key envelope. A payload above `config.payload_limit()` is
    /// rejected before hashing, so a validly signed envelope still fails
    /// against a receiver whose limit it exceeds.
    pub fn verify(&self, config: &EnvelopeConfig) -> bool {
        if check_payload_size(self.payload.len(), config).is_err() {
            return false;
        }

        let digest = self.digest(config);

        let public_key = match self.coordinate().to_verifying_key() {
            Some(key) => key,
            None => return false,
        };

        let signature = match signature_from_scalars(&self.r, &self.s) {
            Some(sig) => sig,
            None => return false,
        };
        // k256 only accepts low S
        let signature = signature.normalize_s().unwrap_or(signature);

        public_key.verify_prehash(&digest, &signature).is_ok()
    }
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

fn check_payload_size(size: usize, config: &EnvelopeConfig) -> EnvelopeResult<()> {
    let limit = config.payload_limit();
    if size > limit {
        return Err(EnvelopeError::PayloadTooLarge { size, limit });
    }
    Ok(())
}

/// Strip leading zero bytes from a big-endian integer.
fn minimal_be(bytes: &[u8]) -> Vec<u8> {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    bytes[start..].to_vec()
}

/// Left-pad a big-endian integer to scalar width, ignoring leading zeros.
fn pad_scalar(bytes: &[u8]) -> Option<[u8; SCALAR_SIZE]> {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[start..];
    if significant.len() > SCALAR_SIZE {
        return None;
    }

    let mut scalar = [0u8; SCALAR_SIZE];
    scalar[SCALAR_SIZE - significant.len()..].copy_from_slice(significant);
    Some(scalar)
}

/// Rebuild a k256 signature; `None` for oversized, zero or out-of-range scalars.
fn signature_from_scalars(r: &[u8], s: &[u8]) -> Option<Signature> {
    let mut sig_bytes = [0u8; 2 * SCALAR_SIZE];
    sig_bytes[..SCALAR_SIZE].copy_from_slice(&pad_scalar(r)?);
    sig_bytes[SCALAR_SIZE..].copy_from_slice(&pad_scalar(s)?);
    Signature::from_slice(&sig_bytes).ok()
}

// =============================================================================
// TEST HELPERS
// =============================================================================


// =============================================================================
// UNIT TESTS
// =============================================================================
