//! # Envelope Properties
//!
//! Properties every implementation of the envelope must hold:
//!
//! 1. Axis round-trip for inputs of 0..=32 bytes
//! 2. Axis overflow is a decode error
//! 3. Digest determinism
//! 4. Digest avalanche across all signed fields
//! 5. Sign/verify round-trip
//! 6. Tamper detection
//! 7. Cross-version rejection
//! 8. Wrong-key rejection
//! 9. Fixed-width, length-delimited digest input

#[cfg(test)]
mod tests {
    use bdls_envelope::{
        Axis, Coordinate, DigestBuilder, EnvelopeConfig, EnvelopeError, SignedEnvelope,
        SIGNATURE_PREFIX, SIZE_AXIS,
    };
    use k256::ecdsa::SigningKey;
    use rand::{Rng, RngCore};
    use std::collections::HashSet;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn generate_key() -> SigningKey {
        SigningKey::random(&mut rand::thread_rng())
    }

    fn random_bytes(len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len];
        rand::thread_rng().fill_bytes(&mut bytes);
        bytes
    }

    fn sign(config: &EnvelopeConfig, payload: &[u8], key: &SigningKey) -> SignedEnvelope {
        let mut envelope = SignedEnvelope::new();
        envelope
            .sign(config, payload.to_vec(), key)
            .expect("signing failed");
        envelope
    }

    // =============================================================================
    // AXIS CODEC
    // =============================================================================

    #[test]
    fn test_axis_roundtrip_left_pads() {
        for _ in 0..200 {
            let len = rand::thread_rng().gen_range(0..=SIZE_AXIS);
            let input = random_bytes(len);

            let encoded = Axis::decode(&input).unwrap().encode();

            let mut expected = [0u8; SIZE_AXIS];
            expected[SIZE_AXIS - len..].copy_from_slice(&input);
            assert_eq!(encoded, expected);
        }
    }

    #[test]
    fn test_axis_overflow_is_decode_error() {
        for len in SIZE_AXIS + 1..SIZE_AXIS + 40 {
            let input = random_bytes(len);
            assert_eq!(
                Axis::decode(&input),
                Err(EnvelopeError::InvalidAxisLength { len })
            );
        }
    }

    // =============================================================================
    // DIGEST
    // =============================================================================

    #[test]
    fn test_digest_deterministic() {
        let config = EnvelopeConfig::default();
        let envelope = sign(&config, b"determinism", &generate_key());

        let first = envelope.digest(&config);
        for _ in 0..50 {
            assert_eq!(envelope.digest(&config), first);
            assert_eq!(envelope.clone().digest(&config), first);
        }
    }

    #[test]
    fn test_digest_pinned_vector() {
        let builder = DigestBuilder::new(SIGNATURE_PREFIX.as_bytes());
        let x = Axis::from_bytes([0x01; SIZE_AXIS]);
        let y = Axis::from_bytes([0x02; SIZE_AXIS]);

        let digest = builder.digest(1, &x, &y, b"hello-bdls");
        assert_eq!(
            hex::encode(digest),
            "2413586166051dc479cff4ba210d4b67d7de14b551b3323ff11313e9c67b1804"
        );
        assert_eq!(
            DigestBuilder::from_config(&EnvelopeConfig::default()).digest(1, &x, &y, b"hello-bdls"),
            digest
        );
    }

    #[test]
    fn test_known_answer_signature() {
        let config = EnvelopeConfig::default();
        let secret =
            hex::decode("0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20")
                .unwrap();
        let key = SigningKey::from_slice(&secret).unwrap();

        let envelope = SignedEnvelope {
            version: 1,
            x: Axis::decode(
                &hex::decode("84bf7562262bbd6940085748f3be6afa52ae317155181ece31b66351ccffa4b0")
                    .unwrap(),
            )
            .unwrap(),
            y: Axis::decode(
                &hex::decode("8cc43d63b2859d469fee15f31c9edb5324266e6fd0407e87382d60fc4511acd8")
                    .unwrap(),
            )
            .unwrap(),
            payload: b"hello-bdls".to_vec(),
            r: hex::decode("31a61d8714d575ce8221c8c5857bf18eba90ab63d5167541387fe8aaa53e22e9")
                .unwrap(),
            s: hex::decode("22a2fa04e993e427245900b3a17f90dc466b0bd804003369f338746212fb11cc")
                .unwrap(),
        };

        assert_eq!(
            envelope.coordinate(),
            Coordinate::from_public_key(key.verifying_key())
        );
        assert_eq!(
            hex::encode(envelope.digest(&config)),
            "dff7b85c511efc7871695083cca0bb1b1cdc455fd5a5b7b607a92e65257128fc"
        );
        assert!(envelope.verify(&config));

        // A fresh signature from the same key signs the same digest.
        let resigned = sign(&config, b"hello-bdls", &key);
        assert_eq!(resigned.x, envelope.x);
        assert_eq!(resigned.y, envelope.y);
        assert_eq!(resigned.digest(&config), envelope.digest(&config));
    }

    #[test]
    fn test_digest_avalanche() {
        let config = EnvelopeConfig::default();
        let base = sign(&config, &random_bytes(64), &generate_key());

        let mut seen = HashSet::new();
        assert!(seen.insert(base.digest(&config)));

        for bit in 0..32 {
            let mut e = base.clone();
            e.version ^= 1 << bit;
            assert!(seen.insert(e.digest(&config)), "version bit {bit}");
        }
        for byte in 0..SIZE_AXIS {
            for bit in 0..8 {
                let mut x = base.x.encode();
                x[byte] ^= 1 << bit;
                let mut e = base.clone();
                e.x = Axis::from_bytes(x);
                assert!(seen.insert(e.digest(&config)), "x byte {byte} bit {bit}");

                let mut y = base.y.encode();
                y[byte] ^= 1 << bit;
                let mut e = base.clone();
                e.y = Axis::from_bytes(y);
                assert!(seen.insert(e.digest(&config)), "y byte {byte} bit {bit}");
            }
        }
        for byte in 0..base.payload.len() {
            for bit in 0..8 {
                let mut e = base.clone();
                e.payload[byte] ^= 1 << bit;
                assert!(seen.insert(e.digest(&config)), "payload byte {byte} bit {bit}");
            }
        }
    }

    #[test]
    fn test_digest_ignores_signature_fields() {
        let config = EnvelopeConfig::default();
        let envelope = sign(&config, b"payload", &generate_key());

        let mut stripped = envelope.clone();
        stripped.r.clear();
        stripped.s.clear();
        assert_eq!(envelope.digest(&config), stripped.digest(&config));
    }

    #[test]
    fn test_length_delimited_input() {
        // A minimal-width Y shifted into the payload concatenates to the
        // same bytes; the fixed-width axis and length field keep them apart.
        let builder = DigestBuilder::new(SIGNATURE_PREFIX.as_bytes());
        let x = Axis::from_bytes([0x33; SIZE_AXIS]);

        let y_a = Axis::decode(&[0xAA, 0xBB, 0xCC]).unwrap();
        let y_b = Axis::decode(&[0xAA, 0xBB]).unwrap();
        let payload_a: &[u8] = &[0xDD];
        let payload_b: &[u8] = &[0xCC, 0xDD];
        assert_eq!(
            [&[0xAA, 0xBB, 0xCC][..], payload_a].concat(),
            [&[0xAA, 0xBB][..], payload_b].concat()
        );

        assert_ne!(
            builder.digest(1, &x, &y_a, payload_a),
            builder.digest(1, &x, &y_b, payload_b)
        );

        // Same bytes split differently between payloads of equal total
        let p1 = [0u8; 3];
        let p2 = [0u8; 4];
        assert_ne!(
            builder.digest(1, &x, &y_a, &p1),
            builder.digest(1, &x, &y_a, &p2)
        );
    }

    // =============================================================================
    // SIGN / VERIFY
    // =============================================================================

    #[test]
    fn test_sign_verify_roundtrip() {
        let config = EnvelopeConfig::default();
        for len in [0usize, 1, 31, 32, 33, 1024, 64 * 1024] {
            let envelope = sign(&config, &random_bytes(len), &generate_key());
            assert!(envelope.verify(&config), "payload len {len}");
        }
    }

    #[test]
    fn test_tamper_detection() {
        let config = EnvelopeConfig::default();
        let original = sign(&config, b"prepare height=7 round=2", &generate_key());
        assert!(original.verify(&config));

        let mut payload = original.clone();
        payload.payload.push(0);
        assert!(!payload.verify(&config));

        let mut truncated = original.clone();
        truncated.payload.pop();
        assert!(!truncated.verify(&config));

        let mut x = original.clone();
        let mut bytes = x.x.encode();
        bytes[7] ^= 0x10;
        x.x = Axis::from_bytes(bytes);
        assert!(!x.verify(&config));

        let mut y = original.clone();
        let mut bytes = y.y.encode();
        bytes[31] ^= 0x01;
        y.y = Axis::from_bytes(bytes);
        assert!(!y.verify(&config));

        let mut version = original;
        version.version = 0;
        assert!(!version.verify(&config));
    }

    #[test]
    fn test_cross_version_rejection() {
        let key = generate_key();
        let v1 = EnvelopeConfig::default().with_protocol_version(1);
        let v2 = EnvelopeConfig::default().with_protocol_version(2);

        let signed_v1 = sign(&v1, b"commit", &key);
        let signed_v2 = sign(&v2, b"commit", &key);
        assert_eq!(signed_v1.coordinate(), signed_v2.coordinate());
        assert_eq!(signed_v1.payload, signed_v2.payload);
        assert_ne!(signed_v1.digest(&v1), signed_v2.digest(&v2));

        let mut replayed = signed_v1;
        replayed.version = 2;
        assert!(!replayed.verify(&v2));
    }

    #[test]
    fn test_wrong_key_rejection() {
        let config = EnvelopeConfig::default();
        let mut envelope = sign(&config, b"decide", &generate_key());

        let other = Coordinate::from_public_key(generate_key().verifying_key());
        envelope.x = other.x();
        envelope.y = other.y();
        assert!(!envelope.verify(&config));
    }

    #[test]
    fn test_transplanted_signature_rejected() {
        let config = EnvelopeConfig::default();
        let key = generate_key();
        let a = sign(&config, b"lock A", &key);
        let mut b = sign(&config, b"lock B", &key);

        b.r = a.r.clone();
        b.s = a.s.clone();
        assert!(!b.verify(&config));
    }

    #[test]
    fn test_example_scenario() {
        let config = EnvelopeConfig::default();
        let key = generate_key();

        let mut envelope = sign(&config, b"hello-bdls", &key);
        assert_eq!(envelope.version, 1);
        assert!(envelope.verify(&config));

        envelope.payload = b"hello-bdlt".to_vec();
        assert!(!envelope.verify(&config));
    }
}
