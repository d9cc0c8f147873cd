//! Generation client port
//!
//! Defines the interface for the hosted text-generation service.

use async_trait::async_trait;
use quizgen_domain::Model;
use thiserror::Error;

/// Errors that can occur while calling the generation service
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Service returned no text")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Client for the generation service
///
/// One long-lived instance per application session. Implementations hold no
/// queue; callers serialize requests themselves.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// The model every request is sent to
    fn model(&self) -> &Model;

    /// Send a prompt and await the complete, non-streamed response text
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}
