//! Google Gemini provider
//!
//! Implements [`GenerationClient`](quizgen_application::GenerationClient)
//! over the `generateContent` REST endpoint.

mod client;
mod types;

pub use client::{GeminiClient, GeminiConfig};
