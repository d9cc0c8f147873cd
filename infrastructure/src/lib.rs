//! Infrastructure layer for quizgen
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the Gemini client, configuration file loading,
//! credential lookup and the JSONL generation log.

pub mod config;
pub mod credentials;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBehaviorConfig, FileConfig, FileGeminiConfig,
    FileLoggingConfig, FileOutputConfig, FileQuizConfig, FileReplConfig,
};
pub use credentials::{CredentialError, resolve_api_key};
pub use logging::JsonlGenerationLogger;
pub use providers::{GeminiClient, GeminiConfig};
