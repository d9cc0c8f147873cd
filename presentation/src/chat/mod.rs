//! Interactive quiz module
//!
//! Provides a readline-based loop that generates a quiz for every topic typed.

mod repl;

pub use repl::{QuizRepl, ReplCommand};
