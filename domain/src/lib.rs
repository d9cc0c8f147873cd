//! Domain layer for quizgen
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Prompt-to-structured-data pipeline
//!
//! - **Prompt**: [`QuizPromptTemplate`] turns a [`Topic`] into a fixed
//!   instruction that over-specifies the JSON contract.
//! - **Sanitization**: [`sanitize`] strips the Markdown fence artifacts the
//!   model is known to wrap around its JSON.
//! - **Shape validation**: [`parse_quiz_response`] parses and checks every
//!   question against the [`QuizQuestion`] contract, all-or-nothing.
//!
//! ## Attempts
//!
//! Each generation attempt walks the [`GenerationPhase`] state machine and
//! ends in a [`GenerationResult`], which replaces any earlier result wholesale.

pub mod config;
pub mod core;
pub mod generation;
pub mod prompt;
pub mod quiz;

// Re-export commonly used types
pub use config::OutputFormat;
pub use self::core::{error::DomainError, model::Model, string::truncate};
pub use generation::{
    phase::{GenerationPhase, PhaseTransitionError},
    result::{ErrorKind, GenerationResult},
};
pub use prompt::{QUESTIONS_COUNT, QuizPromptTemplate};
pub use quiz::{
    answer::{AnswerError, AnswerOutcome, OptionState, QuestionAttempt, QuizScore},
    parsing::{QuizFormatError, parse_quiz_response, sanitize_and_validate},
    question::{QuizQuestion, QuizQuestionSet},
    sanitize::{FencePattern, Sanitized, sanitize},
    topic::Topic,
    validation::{
        CountPolicy, OPTIONS_PER_QUESTION, ShapeViolation, ValidationPolicy, validate_questions,
    },
};
