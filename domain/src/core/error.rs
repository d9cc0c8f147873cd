//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Blank or whitespace-only topic; rejected before any request
    #[error("Topic cannot be empty")]
    EmptyTopic,
}
