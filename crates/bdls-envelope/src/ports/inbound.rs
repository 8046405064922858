//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of the envelope layer.

use crate::domain::coordinate::Coordinate;
use crate::domain::envelope::SignedEnvelope;
use crate::domain::errors::EnvelopeResult;
use k256::ecdsa::SigningKey;

/// Result of verifying many envelopes at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchVerificationResult {
    /// Per-envelope outcome, in input order
    pub results: Vec<bool>,
    /// Whether all verifications passed
    pub all_valid: bool,
    /// Count of valid envelopes
    pub valid_count: usize,
    /// Count of invalid envelopes
    pub invalid_count: usize,
}

impl BatchVerificationResult {
    /// Create a batch result from individual results.
    pub fn from_results(results: Vec<bool>) -> Self {
        let valid_count = results.iter().filter(|&&valid| valid).count();
        let invalid_count = results.len() - valid_count;
        let all_valid = invalid_count == 0;

        Self {
            results,
            all_valid,
            valid_count,
            invalid_count,
        }
    }
}

/// Primary envelope API.
///
/// Implementations must be thread-safe (`Send + Sync`): consensus
/// rounds sign and verify from many tasks at once.
pub trait EnvelopeApi: Send + Sync {
    /// The consensus message type carried in envelopes.
    type Message;

    /// Serialize `message` and sign it as the holder of `private_key`.
    fn sign(
        &self,
        message: &Self::Message,
        private_key: &SigningKey,
    ) -> EnvelopeResult<SignedEnvelope>;

    /// Check an envelope's signature against its embedded sender.
    ///
    /// A `false` result means "reject the message"; it is never fatal.
    fn verify(&self, envelope: &SignedEnvelope) -> bool;

    /// Verify, and require that the sender is `expected`.
    fn verify_sender(
        &self,
        envelope: &SignedEnvelope,
        expected: &Coordinate,
    ) -> EnvelopeResult<()>;

    /// Verify, then decode the payload into a message.
    ///
    /// Unverified payloads are never handed to the codec.
    fn open(&self, envelope: &SignedEnvelope) -> EnvelopeResult<Self::Message>;

    /// Verify many envelopes in parallel.
    fn batch_verify(&self, envelopes: &[SignedEnvelope]) -> BatchVerificationResult;
}
