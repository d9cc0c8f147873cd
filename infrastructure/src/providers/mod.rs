//! Generation service providers

pub mod gemini;

pub use gemini::{GeminiClient, GeminiConfig};
