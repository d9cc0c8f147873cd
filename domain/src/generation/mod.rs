//! Generation attempt lifecycle
//!
//! - [`phase::GenerationPhase`]: per-attempt state machine
//! - [`result::GenerationResult`]: terminal outcome of an attempt

pub mod phase;
pub mod result;
