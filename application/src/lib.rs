//! Application layer for quizgen
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    generation_client::{GatewayError, GenerationClient},
    generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::generate_quiz::{GenerateQuizError, GenerateQuizInput, GenerateQuizUseCase};
pub use use_cases::quiz_session::{QuizSession, SessionSlot, TriggerOutcome};
