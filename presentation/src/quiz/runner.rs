//! One generation run from topic to rendered output
//!
//! Shared by the single-shot command and the interactive loop. Ctrl-C while a
//! request is in flight cancels that request only.

use crate::config::OutputConfig;
use crate::output::console::QuizFormatter;
use crate::progress::reporter::ProgressReporter;
use crate::quiz::player::QuizPlayer;
use colored::Colorize;
use quizgen_application::{NoProgress, QuizSession, TriggerOutcome};
use quizgen_domain::{ErrorKind, GenerationResult, OutputFormat, QuizQuestionSet};
use std::io::IsTerminal;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Succeeded,
    Failed(ErrorKind),
    Cancelled,
    /// A previous run was still in flight.
    Busy,
}

impl RunStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, RunStatus::Succeeded)
    }
}

pub struct QuizRunner {
    session: Arc<QuizSession>,
    output: OutputConfig,
    show_progress: bool,
    play: bool,
}

impl QuizRunner {
    pub fn new(session: Arc<QuizSession>, output: OutputConfig) -> Self {
        Self {
            session,
            output,
            show_progress: true,
            play: true,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set whether to answer quizzes interactively
    pub fn with_play(mut self, play: bool) -> Self {
        self.play = play;
        self
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn format(&self) -> OutputFormat {
        self.output.format
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        self.output.format = format;
    }

    pub fn play_enabled(&self) -> bool {
        self.play
    }

    pub fn set_play(&mut self, play: bool) {
        self.play = play;
    }

    /// Replace the topic, generate, and print the outcome.
    pub async fn run_topic(&self, topic: &str) -> RunStatus {
        if !self.session.set_topic(topic) {
            return RunStatus::Busy;
        }
        self.run_current().await
    }

    /// Generate again for the current topic.
    pub async fn run_current(&self) -> RunStatus {
        let outcome = self.generate().await;
        self.render(outcome)
    }

    async fn generate(&self) -> TriggerOutcome {
        let token = CancellationToken::new();
        let watcher = {
            let token = token.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    token.cancel();
                }
            })
        };

        let outcome = if self.show_progress {
            let progress = ProgressReporter::new();
            self.session
                .generate_with_cancellation(&progress, token)
                .await
        } else {
            self.session
                .generate_with_cancellation(&NoProgress, token)
                .await
        };

        watcher.abort();
        outcome
    }

    fn render(&self, outcome: TriggerOutcome) -> RunStatus {
        match outcome {
            TriggerOutcome::Completed(GenerationResult::Success(set)) => {
                self.present(&set);
                RunStatus::Succeeded
            }
            TriggerOutcome::Completed(GenerationResult::Failure { kind, .. }) => {
                eprintln!("{}", QuizFormatter::format_error(kind.user_message()));
                RunStatus::Failed(kind)
            }
            TriggerOutcome::Cancelled => {
                eprintln!("{}", "Generation cancelled.".yellow());
                RunStatus::Cancelled
            }
            TriggerOutcome::Ignored => RunStatus::Busy,
        }
    }

    fn present(&self, set: &QuizQuestionSet) {
        let topic = self.session.snapshot().topic.trim().to_string();

        if self.should_play() {
            println!("{}\n", format!("Quiz: {}", topic).bold());
            if let Err(e) = QuizPlayer::play(set) {
                eprintln!("{}", QuizFormatter::format_error(&e.to_string()));
            }
            return;
        }

        println!("{}", QuizFormatter::format(&topic, set, self.output.format));
    }

    fn should_play(&self) -> bool {
        self.play
            && self.output.format == OutputFormat::Quiz
            && std::io::stdin().is_terminal()
            && std::io::stdout().is_terminal()
    }
}
