//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API the consensus layer calls
//! - **Outbound (Driven)**: The payload serialization the consensus layer supplies

pub mod inbound;
pub mod outbound;
