//! Gemini configuration from TOML (`[gemini]` section)

use quizgen_domain::Model;
use serde::{Deserialize, Serialize};

/// Environment variable holding the API key unless overridden.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Variable name used by earlier browser builds; still consulted as a fallback.
pub const LEGACY_API_KEY_ENV: &str = "VITE_GOOGLE_GEMINI_API_KEY";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Raw Gemini configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model every request is sent to
    pub model: Model,
    /// Inline API key. Prefer `api_key_env`.
    pub api_key: Option<String>,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Service root, without the `/v1beta` path
    pub base_url: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
