//! # Envelope Service
//!
//! Application service layer that implements the `EnvelopeApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`EnvelopeApi`)
//! - Uses the outbound port (`PayloadCodec`) for inner message bytes
//! - Delegates hashing and signature math to the domain layer

use crate::config::EnvelopeConfig;
use crate::domain::coordinate::Coordinate;
use crate::domain::envelope::SignedEnvelope;
use crate::domain::errors::{EnvelopeError, EnvelopeResult};
use crate::ports::inbound::{BatchVerificationResult, EnvelopeApi};
use crate::ports::outbound::PayloadCodec;
use k256::ecdsa::SigningKey;
use rayon::prelude::*;
use tracing::debug;

/// Envelope service.
///
/// Holds the shared configuration and the consensus layer's payload codec.
/// Stateless otherwise; share it behind an `Arc` across tasks.
pub struct EnvelopeService<C: PayloadCodec> {
    config: EnvelopeConfig,
    codec: C,
}

impl<C: PayloadCodec> EnvelopeService<C> {
    /// Create a new envelope service.
    ///
    /// # Arguments
    /// * `config` - Prefix, version and payload bound
    /// * `codec` - Serialization of the inner consensus message
    pub fn new(config: EnvelopeConfig, codec: C) -> Self {
        Self { config, codec }
    }

    /// The configuration this service signs and verifies under.
    pub fn config(&self) -> &EnvelopeConfig {
        &self.config
    }

    /// The payload codec.
    pub fn codec(&self) -> &C {
        &self.codec
    }
}

impl<C: PayloadCodec> EnvelopeApi for EnvelopeService<C> {
    type Message = C::Message;

    fn sign(
        &self,
        message: &Self::Message,
        private_key: &SigningKey,
    ) -> EnvelopeResult<SignedEnvelope> {
        let payload = self
            .codec
            .encode(message)
            .map_err(|e| EnvelopeError::Payload(e.to_string()))?;

        let mut envelope = SignedEnvelope::new();
        envelope.sign(&self.config, payload, private_key)?;

        debug!(
            version = envelope.version,
            sender = %envelope.coordinate(),
            payload_len = envelope.payload.len(),
            "signed envelope"
        );
        Ok(envelope)
    }

    fn verify(&self, envelope: &SignedEnvelope) -> bool {
        let valid = envelope.verify(&self.config);
        if !valid {
            debug!(
                version = envelope.version,
                sender = %envelope.coordinate(),
                payload_len = envelope.payload.len(),
                "envelope failed verification"
            );
        }
        valid
    }

    fn verify_sender(
        &self,
        envelope: &SignedEnvelope,
        expected: &Coordinate,
    ) -> EnvelopeResult<()> {
        if !self.verify(envelope) {
            return Err(EnvelopeError::VerificationFailed);
        }

        if !expected.matches(&envelope.x, &envelope.y) {
            let actual = envelope.coordinate();
            debug!(%expected, %actual, "envelope signed by unexpected sender");
            return Err(EnvelopeError::SenderMismatch {
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }

        Ok(())
    }

    fn open(&self, envelope: &SignedEnvelope) -> EnvelopeResult<Self::Message> {
        if !self.verify(envelope) {
            return Err(EnvelopeError::VerificationFailed);
        }

        self.codec
            .decode(&envelope.payload)
            .map_err(|e| EnvelopeError::Payload(e.to_string()))
    }

    fn batch_verify(&self, envelopes: &[SignedEnvelope]) -> BatchVerificationResult {
        let results: Vec<bool> = envelopes
            .par_iter()
            .map(|envelope| envelope.verify(&self.config))
            .collect();

        let batch = BatchVerificationResult::from_results(results);
        debug!(
            total = envelopes.len(),
            invalid = batch.invalid_count,
            "batch verification complete"
        );
        batch
    }
}
