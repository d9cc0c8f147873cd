//! Configuration file loading for quizgen
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUIZGEN_`-prefixed environment variables (`QUIZGEN_GEMINI__MODEL`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./quizgen.toml` or `./.quizgen.toml`
//! 4. Global: `$XDG_CONFIG_HOME/quizgen/config.toml` (or `~/.config/quizgen/config.toml`)
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, FileBehaviorConfig, FileConfig,
    FileGeminiConfig, FileLoggingConfig, FileOutputConfig, FileQuizConfig, FileReplConfig,
    LEGACY_API_KEY_ENV,
};
pub use loader::ConfigLoader;
