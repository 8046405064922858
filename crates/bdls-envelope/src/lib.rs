//! # BDLS Signed Envelope
//!
//! Self-certifying message envelope for BDLS consensus. A validator's
//! secp256k1 public key coordinates and an opaque consensus payload are
//! hashed with a domain-separated BLAKE2b-256 digest and signed with ECDSA.
//! Any receiver can verify an envelope from its own contents, with no key
//! registry.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Axis codec, coordinates, digest, envelope; no I/O
//! - **Ports Layer** (`ports/`): Inbound API and the outbound payload codec contract
//! - **Adapters Layer** (`adapters/`): Bincode/raw payload codecs, wire framing
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Security Notes
//!
//! - **Domain separation**: every digest starts with `==BDLS CONSENSUS MESSAGE==`
//! - **Version binding**: the protocol version is hashed, so a signature does
//!   not survive a change of the version field
//! - **Replay**: not handled here; round and height numbers inside the payload
//!   are the consensus layer's responsibility
//!
//! ## Example
//!
//! ```rust
//! use bdls_envelope::{EnvelopeApi, EnvelopeConfig, EnvelopeService, RawBytesCodec};
//! use k256::ecdsa::SigningKey;
//!
//! let service = EnvelopeService::new(EnvelopeConfig::default(), RawBytesCodec);
//! let key = SigningKey::random(&mut rand::thread_rng());
//!
//! let mut envelope = service.sign(&b"hello-bdls".to_vec(), &key).unwrap();
//! assert!(service.verify(&envelope));
//!
//! envelope.payload = b"hello-bdlt".to_vec();
//! assert!(!service.verify(&envelope));
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::codec::{BincodeCodec, RawBytesCodec};
pub use config::{EnvelopeConfig, PROTOCOL_VERSION, SIGNATURE_PREFIX};
pub use domain::axis::{Axis, SIZE_AXIS};
pub use domain::coordinate::{Coordinate, SIZE_COORDINATE};
pub use domain::digest::{DigestBuilder, Hash};
pub use domain::envelope::SignedEnvelope;
pub use domain::errors::{EnvelopeError, EnvelopeResult};
pub use ports::inbound::{BatchVerificationResult, EnvelopeApi};
pub use ports::outbound::{CodecError, PayloadCodec};
pub use service::EnvelopeService;
