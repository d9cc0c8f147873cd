//! Presentation layer for quizgen
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, interactive quiz play and the REPL.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use chat::QuizRepl;
pub use cli::commands::{Cli, CountPolicyArg, OutputFormatArg};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::QuizFormatter;
pub use progress::reporter::ProgressReporter;
pub use quiz::{QuizPlayer, QuizRunner, RunStatus};
