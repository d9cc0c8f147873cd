//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod behavior;
mod gemini;
mod logging;
mod output;
mod quiz;
mod repl;

pub use behavior::FileBehaviorConfig;
pub use gemini::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, FileGeminiConfig, LEGACY_API_KEY_ENV};
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use quiz::FileQuizConfig;
pub use repl::FileReplConfig;

use quizgen_application::BehaviorConfig;
use quizgen_domain::ValidationPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("behavior.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("gemini.model cannot be empty")]
    EmptyModelName,

    #[error("gemini.api_key_env cannot be empty")]
    EmptyApiKeyEnv,

    #[error("gemini.base_url must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generation service settings
    pub gemini: FileGeminiConfig,
    /// Request behavior
    pub behavior: FileBehaviorConfig,
    /// Response validation settings
    pub quiz: FileQuizConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Structured event log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.behavior.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if self.gemini.model.as_str().trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if self.gemini.api_key_env.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyApiKeyEnv);
        }
        let base_url = self.gemini.base_url.trim();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            issues.push(ConfigValidationError::InvalidBaseUrl(base_url.to_string()));
        }

        issues
    }

    /// Convert to the application's behavior settings.
    pub fn to_behavior_config(&self) -> BehaviorConfig {
        BehaviorConfig::with_timeout_seconds(self.behavior.timeout_seconds).with_policy(
            ValidationPolicy::default().with_count_policy(self.quiz.question_count_policy),
        )
    }
}
