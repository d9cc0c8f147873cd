//! Generation outcome value objects

use crate::quiz::question::QuizQuestionSet;

/// Message shown for any failure the user can only retry.
const RETRY_MESSAGE: &str = "Something went wrong while fetching the questions. Please try again.";

/// Error taxonomy of a generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Blank topic; no request was made
    EmptyTopic,
    /// Required credential absent
    MissingCredential,
    /// The generation service call did not complete successfully
    GenerationFailed,
    /// Sanitization, parsing or shape validation failed
    InvalidFormat,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyTopic => "empty_topic",
            ErrorKind::MissingCredential => "missing_credential",
            ErrorKind::GenerationFailed => "generation_failed",
            ErrorKind::InvalidFormat => "invalid_format",
        }
    }

    /// The user-displayable message for this kind.
    ///
    /// `GenerationFailed` and `InvalidFormat` are indistinguishable here.
    pub fn user_message(&self) -> &'static str {
        match self {
            ErrorKind::EmptyTopic => "Please enter a topic for the quiz.",
            ErrorKind::MissingCredential => "Configuration error: API key not found.",
            ErrorKind::GenerationFailed | ErrorKind::InvalidFormat => RETRY_MESSAGE,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of one generation attempt.
///
/// Replaces any earlier result entirely; results are never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    Success(QuizQuestionSet),
    Failure {
        kind: ErrorKind,
        /// Descriptive message for diagnostics
        message: String,
    },
}

impl GenerationResult {
    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        GenerationResult::Failure {
            kind,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success(_))
    }

    pub fn questions(&self) -> Option<&QuizQuestionSet> {
        match self {
            GenerationResult::Success(set) => Some(set),
            GenerationResult::Failure { .. } => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            GenerationResult::Success(_) => None,
            GenerationResult::Failure { kind, .. } => Some(*kind),
        }
    }

    /// What to show the end user on failure
    pub fn user_message(&self) -> Option<&'static str> {
        self.error_kind().map(|kind| kind.user_message())
    }
}
