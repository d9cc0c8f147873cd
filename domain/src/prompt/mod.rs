//! Prompt domain
//!
//! The single fixed template used to ask the model for a quiz.

mod template;

pub use template::{QUESTIONS_COUNT, QuizPromptTemplate};
