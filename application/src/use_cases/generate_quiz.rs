//! Generate Quiz use case
//!
//! Runs one attempt of the prompt-to-structured-data pipeline:
//!
//! 1. Validate the topic (blank topics never reach the client)
//! 2. Build the prompt from the fixed template
//! 3. Call the [`GenerationClient`] once, under timeout and cancellation
//! 4. Sanitize, parse and validate the raw text into a [`QuizQuestionSet`]

use crate::config::BehaviorConfig;
use crate::ports::generation_client::{GatewayError, GenerationClient};
use crate::ports::generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use quizgen_domain::{
    ErrorKind, GenerationPhase, Model, QuizFormatError, QuizPromptTemplate, QuizQuestionSet, Topic,
    parse_quiz_response, sanitize, truncate,
};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Bytes of raw response text included in debug logs.
const RAW_PREVIEW_BYTES: usize = 200;

/// Errors that can occur during one generation attempt
#[derive(Error, Debug)]
pub enum GenerateQuizError {
    #[error("Topic cannot be empty")]
    EmptyTopic,

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Generation failed: {0}")]
    GenerationFailed(#[source] GatewayError),

    #[error("Invalid response format: {0}")]
    InvalidFormat(#[from] QuizFormatError),

    #[error("Operation cancelled")]
    Cancelled,
}

impl GenerateQuizError {
    /// Map to the user-facing error taxonomy. Cancellation has no kind.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            GenerateQuizError::EmptyTopic => Some(ErrorKind::EmptyTopic),
            GenerateQuizError::MissingCredential(_) => Some(ErrorKind::MissingCredential),
            GenerateQuizError::GenerationFailed(_) => Some(ErrorKind::GenerationFailed),
            GenerateQuizError::InvalidFormat(_) => Some(ErrorKind::InvalidFormat),
            GenerateQuizError::Cancelled => None,
        }
    }

    /// Message safe to show the end user; never includes raw model text
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.user_message(),
            None => "Generation cancelled.",
        }
    }

    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GenerateQuizError::Cancelled)
    }
}

impl From<GatewayError> for GenerateQuizError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::MissingCredential(msg) => GenerateQuizError::MissingCredential(msg),
            other => GenerateQuizError::GenerationFailed(other),
        }
    }
}

/// Input for the GenerateQuiz use case
#[derive(Debug, Clone)]
pub struct GenerateQuizInput {
    /// Topic exactly as the user typed it
    pub topic: String,
    /// Aborts the in-flight request when cancelled
    pub cancellation_token: Option<CancellationToken>,
}

impl GenerateQuizInput {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            cancellation_token: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }
}

/// Use case for generating one quiz
#[derive(Clone)]
pub struct GenerateQuizUseCase {
    client: Arc<dyn GenerationClient>,
    behavior: BehaviorConfig,
    generation_logger: Arc<dyn GenerationLogger>,
}

impl GenerateQuizUseCase {
    pub fn new(client: Arc<dyn GenerationClient>, behavior: BehaviorConfig) -> Self {
        Self {
            client,
            behavior,
            generation_logger: Arc::new(NoGenerationLogger),
        }
    }

    /// Create with a generation logger.
    pub fn with_generation_logger(mut self, logger: Arc<dyn GenerationLogger>) -> Self {
        self.generation_logger = logger;
        self
    }

    pub fn model(&self) -> &Model {
        self.client.model()
    }

    pub fn behavior(&self) -> &BehaviorConfig {
        &self.behavior
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: GenerateQuizInput,
    ) -> Result<QuizQuestionSet, GenerateQuizError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: GenerateQuizInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<QuizQuestionSet, GenerateQuizError> {
        let Ok(topic) = Topic::parse(&input.topic) else {
            debug!("Rejecting blank topic without a request");
            progress.on_phase_change(GenerationPhase::Failed(ErrorKind::EmptyTopic));
            return Err(GenerateQuizError::EmptyTopic);
        };

        let model = self.client.model();
        info!(topic = %topic, model = %model, "Generating quiz");

        let prompt = QuizPromptTemplate::build(&topic);
        progress.on_phase_change(GenerationPhase::Requesting);
        progress.on_request_start(&topic, model);
        self.generation_logger.log(GenerationEvent::new(
            "prompt_sent",
            serde_json::json!({
                "topic": topic.as_str(),
                "model": model.as_str(),
                "prompt": prompt,
            }),
        ));

        let raw = match self
            .request(&prompt, input.cancellation_token.as_ref())
            .await
        {
            Ok(raw) => raw,
            Err(GenerateQuizError::Cancelled) => {
                info!("Generation cancelled");
                progress.on_phase_change(GenerationPhase::Idle);
                return Err(GenerateQuizError::Cancelled);
            }
            Err(e) => {
                warn!(error = %e, "Generation request failed");
                self.generation_logger.log(GenerationEvent::new(
                    "generation_failed",
                    serde_json::json!({ "error": e.to_string() }),
                ));
                if let Some(kind) = e.kind() {
                    progress.on_phase_change(GenerationPhase::Failed(kind));
                }
                return Err(e);
            }
        };

        progress.on_response_received(raw.len());
        progress.on_phase_change(GenerationPhase::Validating);
        debug!(
            bytes = raw.len(),
            stripped = ?sanitize(&raw).stripped,
            preview = %truncate(&raw, RAW_PREVIEW_BYTES),
            "Received raw response"
        );
        self.generation_logger.log(GenerationEvent::new(
            "response_received",
            serde_json::json!({ "bytes": raw.len(), "raw": raw }),
        ));

        match parse_quiz_response(&raw, &self.behavior.policy) {
            Ok(set) => {
                info!(questions = set.len(), "Quiz generated");
                self.generation_logger.log(GenerationEvent::new(
                    "quiz_generated",
                    serde_json::json!({ "topic": topic.as_str(), "questions": set }),
                ));
                progress.on_phase_change(GenerationPhase::Succeeded);
                Ok(set)
            }
            Err(e) => {
                warn!(error = %e, "Model response failed validation");
                self.generation_logger.log(GenerationEvent::new(
                    "validation_failed",
                    serde_json::json!({ "error": e.to_string(), "raw": e.raw() }),
                ));
                progress.on_phase_change(GenerationPhase::Failed(ErrorKind::InvalidFormat));
                Err(GenerateQuizError::InvalidFormat(e))
            }
        }
    }

    /// Send the prompt, applying the configured timeout and the optional
    /// cancellation token.
    async fn request(
        &self,
        prompt: &str,
        cancellation_token: Option<&CancellationToken>,
    ) -> Result<String, GenerateQuizError> {
        let call = self.call_client(prompt);

        let result = match cancellation_token {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => return Err(GenerateQuizError::Cancelled),
                    result = call => result,
                }
            }
            None => call.await,
        };

        result.map_err(GenerateQuizError::from)
    }

    async fn call_client(&self, prompt: &str) -> Result<String, GatewayError> {
        let raw = match self.behavior.timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.client.generate(prompt))
                .await
                .map_err(|_| GatewayError::Timeout)??,
            None => self.client.generate(prompt).await?,
        };
        if raw.trim().is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(raw)
    }
}
