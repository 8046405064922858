//! # Public Key Axis
//!
//! Fixed-width big-endian encoding of one affine coordinate (X or Y) of a
//! secp256k1 public key.
//!
//! Two decoding paths exist and they fail differently:
//!
//! - [`Axis::decode`] handles bytes received from peers and returns
//!   [`EnvelopeError::InvalidAxisLength`] for anything wider than 32 bytes.
//! - [`Axis::from_key_component`] handles components of a key this process
//!   holds. A component wider than 32 bytes means the key is not on the
//!   configured curve, which is a programming error, so it panics.

use super::errors::{EnvelopeError, EnvelopeResult};
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Size in bytes of an X or Y axis.
pub const SIZE_AXIS: usize = 32;

/// One coordinate component of a public key, left-padded to 32 bytes.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Axis([u8; SIZE_AXIS]);

impl Axis {
    /// Wrap an already canonical 32-byte value.
    pub const fn from_bytes(bytes: [u8; SIZE_AXIS]) -> Self {
        Self(bytes)
    }

    /// Decode a big-endian unsigned integer of at most 32 bytes.
    ///
    /// Shorter input keeps its value: leading zero bytes are restored on the
    /// left. No curve validation happens here.
    pub fn decode(data: &[u8]) -> EnvelopeResult<Self> {
        if data.len() > SIZE_AXIS {
            return Err(EnvelopeError::InvalidAxisLength { len: data.len() });
        }

        let mut axis = [0u8; SIZE_AXIS];
        axis[SIZE_AXIS - data.len()..].copy_from_slice(data);
        Ok(Self(axis))
    }

    /// Decode a component of a locally held public key.
    ///
    /// # Panics
    ///
    /// Panics if `component` is wider than 32 bytes. Keys generated on
    /// secp256k1 never produce such a component.
    pub fn from_key_component(component: &[u8]) -> Self {
        match Self::decode(component) {
            Ok(axis) => axis,
            Err(e) => panic!("local public key is not a secp256k1 key: {e}"),
        }
    }

    /// The canonical 32-byte encoding.
    pub fn encode(&self) -> [u8; SIZE_AXIS] {
        self.0
    }

    /// Borrow the canonical 32-byte encoding.
    pub fn as_bytes(&self) -> &[u8; SIZE_AXIS] {
        &self.0
    }
}

impl AsRef<[u8]> for Axis {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; SIZE_AXIS]> for Axis {
    fn from(bytes: [u8; SIZE_AXIS]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Axis({})", hex::encode(self.0))
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

// =============================================================================
// SERDE
// =============================================================================

impl Serialize for Axis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

impl<'de> Deserialize<'de> for Axis {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_bytes(AxisVisitor)
    }
}

/// Accepts byte strings (bincode) and byte sequences (JSON).
struct AxisVisitor;

impl<'de> Visitor<'de> for AxisVisitor {
    type Value = Axis;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at most {SIZE_AXIS} big-endian bytes")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Axis, E> {
        Axis::decode(v).map_err(E::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Axis, A::Error> {
        let mut bytes = Vec::with_capacity(SIZE_AXIS);
        let mut len = 0usize;
        while let Some(byte) = seq.next_element::<u8>()? {
            if len < SIZE_AXIS {
                bytes.push(byte);
            }
            len += 1;
        }

        if len > SIZE_AXIS {
            return Err(de::Error::custom(EnvelopeError::InvalidAxisLength {
                len,
            }));
        }
        Axis::decode(&bytes).map_err(de::Error::custom)
    }
}
