//! # Sender Coordinate
//!
//! The 64-byte `X || Y` identity of a validator's public key. Coordinates
//! are comparison keys only; the envelope carries the two axes separately.

use super::axis::{Axis, SIZE_AXIS};
use k256::ecdsa::VerifyingKey;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use std::fmt;
use subtle::ConstantTimeEq;

/// Size in bytes of a coordinate (X axis followed by Y axis).
pub const SIZE_COORDINATE: usize = 2 * SIZE_AXIS;

/// SEC1 tag for an uncompressed point.
const SEC1_UNCOMPRESSED: u8 = 0x04;

/// Concatenated X and Y axes of a public key.
#[serde_as]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate(#[serde_as(as = "Bytes")] [u8; SIZE_COORDINATE]);

impl Coordinate {
    /// Build a coordinate from two axes.
    pub fn from_axes(x: &Axis, y: &Axis) -> Self {
        let mut coord = [0u8; SIZE_COORDINATE];
        coord[..SIZE_AXIS].copy_from_slice(x.as_bytes());
        coord[SIZE_AXIS..].copy_from_slice(y.as_bytes());
        Self(coord)
    }

    /// Coordinate of a locally held public key.
    ///
    /// # Panics
    ///
    /// Panics if the key's affine components do not fit the axis width,
    /// which cannot happen for a valid secp256k1 key.
    pub fn from_public_key(public_key: &VerifyingKey) -> Self {
        let point = public_key.to_encoded_point(false);
        let (x, y) = match (point.x(), point.y()) {
            (Some(x), Some(y)) => (x, y),
            _ => panic!("uncompressed public key is missing an affine coordinate"),
        };

        Self::from_axes(
            &Axis::from_key_component(x.as_slice()),
            &Axis::from_key_component(y.as_slice()),
        )
    }

    /// True iff both halves equal the given axes.
    pub fn matches(&self, x: &Axis, y: &Axis) -> bool {
        let x_eq = self.0[..SIZE_AXIS].ct_eq(&x.as_bytes()[..]);
        let y_eq = self.0[SIZE_AXIS..].ct_eq(&y.as_bytes()[..]);
        (x_eq & y_eq).into()
    }

    /// The X axis.
    pub fn x(&self) -> Axis {
        let mut axis = [0u8; SIZE_AXIS];
        axis.copy_from_slice(&self.0[..SIZE_AXIS]);
        Axis::from_bytes(axis)
    }

    /// The Y axis.
    pub fn y(&self) -> Axis {
        let mut axis = [0u8; SIZE_AXIS];
        axis.copy_from_slice(&self.0[SIZE_AXIS..]);
        Axis::from_bytes(axis)
    }

    /// Raw `X || Y` bytes.
    pub fn as_bytes(&self) -> &[u8; SIZE_COORDINATE] {
        &self.0
    }

    /// Reconstruct the secp256k1 public key.
    ///
    /// Returns `None` when `(x, y)` is not a point on the curve. Received
    /// coordinates are untrusted, so this is an ordinary outcome.
    pub fn to_verifying_key(&self) -> Option<VerifyingKey> {
        let mut sec1 = [0u8; 1 + SIZE_COORDINATE];
        sec1[0] = SEC1_UNCOMPRESSED;
        sec1[1..].copy_from_slice(&self.0);
        VerifyingKey::from_sec1_bytes(&sec1).ok()
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({})", hex::encode(self.0))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
