//! CLI entrypoint for quizgen
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use quizgen_application::{GenerateQuizUseCase, QuizSession};
use quizgen_domain::{ErrorKind, Model};
use quizgen_infrastructure::{
    ConfigLoader, FileConfig, GeminiClient, GeminiConfig, JsonlGenerationLogger, resolve_api_key,
};
use quizgen_presentation::{
    Cli, OutputConfig, QuizFormatter, QuizRepl, QuizRunner, ReplConfig, RunStatus,
    output::console::set_color_enabled,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // The API key usually lives in .env next to the project
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    let log_guard = init_tracing(cli.verbose, cli.log_file.as_deref())?;

    if let Ok(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    info!("Starting quizgen");

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    let issues = config.validate();
    if !issues.is_empty() {
        let details: Vec<String> = issues.iter().map(|issue| format!("  - {}", issue)).collect();
        bail!("Invalid configuration:\n{}", details.join("\n"));
    }

    set_color_enabled(config.output.color && !cli.no_color);

    // The credential is resolved once, before any request
    let api_key = match resolve_api_key(&config.gemini) {
        Ok(key) => key,
        Err(e) => {
            eprintln!(
                "{}",
                QuizFormatter::format_error(ErrorKind::MissingCredential.user_message())
            );
            bail!("{}", e);
        }
    };

    // === Dependency Injection ===
    let client = Arc::new(GeminiClient::new(GeminiConfig {
        api_key,
        model: config.gemini.model.clone(),
        base_url: config.gemini.base_url.clone(),
    })?);

    let mut use_case = GenerateQuizUseCase::new(client, config.to_behavior_config());
    if let Some(path) = config.logging.generation_log.as_deref() {
        match JsonlGenerationLogger::new(path) {
            Some(logger) => {
                info!("Writing generation log to {}", logger.path().display());
                use_case = use_case.with_generation_logger(Arc::new(logger));
            }
            None => warn!("Generation log disabled: could not open {}", path),
        }
    }

    let session = Arc::new(QuizSession::new(use_case));

    let output = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default(),
    };
    let runner = QuizRunner::new(session, output)
        .with_progress(!cli.quiet && config.repl.show_progress)
        .with_play(!cli.no_play && config.repl.play);

    // Interactive mode
    if cli.chat {
        let repl_config = ReplConfig {
            history_file: config.repl.history_file.clone(),
        };
        let mut repl = QuizRepl::new(runner, repl_config);
        repl.run().await?;
        return Ok(());
    }

    // Single topic mode - topic is required
    let Some(topic) = cli.topic else {
        bail!("Topic is required. Use --chat for interactive mode.");
    };

    let status = runner.run_topic(&topic).await;
    if !status.is_success() {
        drop(log_guard);
        std::process::exit(exit_code(status));
    }

    Ok(())
}

/// Apply command-line flags over the merged file configuration.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(model) = &cli.model {
        let Ok(model) = model.parse::<Model>();
        config.gemini.model = model;
    }
    if let Some(timeout) = cli.timeout {
        config.behavior.timeout_seconds = timeout;
    }
    if let Some(policy) = cli.count_policy {
        config.quiz.question_count_policy = policy.into();
    }
    if let Some(path) = &cli.generation_log {
        config.logging.generation_log = Some(path.display().to_string());
    }
}

/// Initialize logging based on verbosity level. `RUST_LOG` wins when set.
///
/// With `--log-file` records go to that file; otherwise to stderr so they
/// never mix with quiz output on stdout.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory)?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn exit_code(status: RunStatus) -> i32 {
    match status {
        RunStatus::Succeeded => 0,
        RunStatus::Cancelled => 130,
        RunStatus::Failed(_) | RunStatus::Busy => 1,
    }
}
