//! Interactive quiz play and generation runs

pub mod player;
pub mod runner;

pub use player::{QuizPlayer, parse_answer};
pub use runner::{QuizRunner, RunStatus};
