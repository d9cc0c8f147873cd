//! CLI command definitions

use clap::{Parser, ValueEnum};
use quizgen_domain::{CountPolicy, OutputFormat};
use std::path::PathBuf;

/// Output format for generated quizzes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Questions and lettered options, answers hidden
    Quiz,
    /// Questions with the correct option marked
    Answers,
    /// The validated question set as JSON
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Quiz => OutputFormat::Quiz,
            OutputFormatArg::Answers => OutputFormat::Answers,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// How strictly the number of generated questions is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CountPolicyArg {
    /// Accept any non-empty number of questions
    Lenient,
    /// Require exactly five questions
    Exact,
    /// Require at least five and keep the first five
    Truncate,
}

impl From<CountPolicyArg> for CountPolicy {
    fn from(arg: CountPolicyArg) -> Self {
        match arg {
            CountPolicyArg::Lenient => CountPolicy::Lenient,
            CountPolicyArg::Exact => CountPolicy::Exact,
            CountPolicyArg::Truncate => CountPolicy::Truncate,
        }
    }
}

/// CLI arguments for quizgen
#[derive(Parser, Debug)]
#[command(name = "quizgen")]
#[command(author, version, about = "Generate multiple-choice quizzes on any topic with Gemini")]
#[command(long_about = r#"
quizgen asks Google Gemini for five multiple-choice questions about a topic,
validates the answer and prints the quiz. By default you then answer each
question interactively by typing A-D.

The API key is read from GEMINI_API_KEY (or the variable named by
gemini.api_key_env). A .env file in the working directory is loaded first.

Configuration files are loaded from (in priority order):
1. QUIZGEN_* environment variables (e.g. QUIZGEN_GEMINI__MODEL)
2. --config <path>     Explicit config file
3. ./quizgen.toml      Project-level config
4. ~/.config/quizgen/config.toml   Global config

Example:
  quizgen "The solar system"
  quizgen -o answers --no-play "Rust ownership"
  quizgen -o json "World War II" > quiz.json
  quizgen --chat
"#)]
pub struct Cli {
    /// Quiz topic (not required in chat mode)
    pub topic: Option<String>,

    /// Start interactive mode and generate quizzes for successive topics
    #[arg(short, long)]
    pub chat: bool,

    /// Gemini model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Question count policy for validating the response
    #[arg(long, value_enum, value_name = "POLICY")]
    pub count_policy: Option<CountPolicyArg>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Print the quiz without answering it interactively
    #[arg(long)]
    pub no_play: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Append pipeline events as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    pub generation_log: Option<PathBuf>,
}
