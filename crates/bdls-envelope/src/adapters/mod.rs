//! # Adapters Layer
//!
//! Concrete payload codecs and the envelope wire framing.

pub mod codec;
pub mod wire;
