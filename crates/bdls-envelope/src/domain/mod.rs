//! # Domain Layer
//!
//! Pure envelope logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod axis;
pub mod coordinate;
pub mod digest;
pub mod envelope;
pub mod errors;
