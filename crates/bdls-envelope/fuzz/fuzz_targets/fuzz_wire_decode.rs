//! Fuzz target for envelope wire decoding.
//!
//! Arbitrary frames come straight from the network, so decoding and
//! verifying them must never panic.
//!
//! ## Running
//!
//! ```bash
//! cd crates/bdls-envelope
//! cargo +nightly fuzz run fuzz_wire_decode
//! ```

#![no_main]

use bdls_envelope::adapters::wire;
use bdls_envelope::EnvelopeConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let config = EnvelopeConfig::default().with_max_payload_size(64 * 1024);

    if let Ok(envelope) = wire::decode(data, &config) {
        assert!(wire::encode(&envelope).is_ok());
        let _ = envelope.verify(&config);
    }
});
