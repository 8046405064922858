//! Fuzz target for envelope verification.
//!
//! Field-level fuzzing: arbitrary axes, payloads and scalars must yield
//! `false` or `true`, never a panic, and the same answer twice.
//!
//! ## Running
//!
//! ```bash
//! cd crates/bdls-envelope
//! cargo +nightly fuzz run fuzz_envelope_verify
//! ```

#![no_main]

use bdls_envelope::{Axis, EnvelopeConfig, SignedEnvelope};
use libfuzzer_sys::fuzz_target;

/// Fuzz input structure for envelope verification.
#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    version: u32,
    x: [u8; 32],
    y: [u8; 32],
    payload: Vec<u8>,
    r: Vec<u8>,
    s: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let envelope = SignedEnvelope {
        version: input.version,
        x: Axis::from_bytes(input.x),
        y: Axis::from_bytes(input.y),
        payload: input.payload,
        r: input.r,
        s: input.s,
    };
    let config = EnvelopeConfig::default();

    let first = envelope.verify(&config);
    let second = envelope.verify(&config);
    assert_eq!(first, second);
});
