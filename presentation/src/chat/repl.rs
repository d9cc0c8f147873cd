//! REPL (Read-Eval-Print Loop) for generating successive quizzes

use crate::config::ReplConfig;
use crate::quiz::runner::{QuizRunner, RunStatus};
use quizgen_domain::OutputFormat;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Slash commands understood by the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Quit,
    /// Generate again for the last topic
    Retry,
    /// Switch the output format
    Format(OutputFormat),
    /// Turn interactive answering on or off
    Play(bool),
    Status,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`.
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();

        match (name, arg) {
            ("/quit" | "/exit" | "/q", _) => ReplCommand::Quit,
            ("/help" | "/h" | "/?", _) => ReplCommand::Help,
            ("/retry" | "/r", _) => ReplCommand::Retry,
            ("/quiz", _) => ReplCommand::Format(OutputFormat::Quiz),
            ("/answers", _) => ReplCommand::Format(OutputFormat::Answers),
            ("/json", _) => ReplCommand::Format(OutputFormat::Json),
            ("/play", None | Some("on")) => ReplCommand::Play(true),
            ("/play", Some("off")) => ReplCommand::Play(false),
            ("/status", _) => ReplCommand::Status,
            _ => ReplCommand::Unknown(line.to_string()),
        }
    }
}

/// Interactive quiz REPL
pub struct QuizRepl {
    runner: QuizRunner,
    config: ReplConfig,
}

impl QuizRepl {
    pub fn new(runner: QuizRunner, config: ReplConfig) -> Self {
        Self { runner, config }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("topic> ") {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(ReplCommand::parse(line)).await {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    println!();
                    self.runner.run_topic(line).await;
                    println!();
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            quizgen - Interactive            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.runner.session().model());
        println!("Type a topic to get five multiple-choice questions.");
        println!("Press Ctrl-C while generating to cancel the request.");
        println!();
        Self::print_commands();
    }

    fn print_commands() {
        println!("Commands:");
        println!("  /help, /h, /?        - Show this help");
        println!("  /retry, /r           - New questions for the last topic");
        println!("  /quiz /answers /json - Switch output format");
        println!("  /play [on|off]       - Toggle answering interactively");
        println!("  /status              - Show the current settings");
        println!("  /quit, /exit, /q     - Exit");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => {
                println!();
                Self::print_commands();
            }
            ReplCommand::Retry => {
                if self.runner.session().snapshot().topic.trim().is_empty() {
                    println!("No topic yet. Type one first.");
                } else {
                    println!();
                    if self.runner.run_current().await == RunStatus::Busy {
                        println!("A quiz is already being generated.");
                    }
                    println!();
                }
            }
            ReplCommand::Format(format) => {
                self.runner.set_format(format);
                println!("Output format: {}", format);
            }
            ReplCommand::Play(play) => {
                self.runner.set_play(play);
                println!("Interactive answering {}", if play { "on" } else { "off" });
            }
            ReplCommand::Status => {
                let slot = self.runner.session().snapshot();
                println!();
                println!("Model:  {}", self.runner.session().model());
                println!("Format: {}", self.runner.format());
                println!("Play:   {}", self.runner.play_enabled());
                println!("Topic:  {}", slot.topic);
                println!("Phase:  {}", slot.phase);
                println!();
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }
}
