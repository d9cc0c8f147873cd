//! API key resolution
//!
//! The key is looked up once at startup, in order: inline `gemini.api_key`,
//! the variable named by `gemini.api_key_env`, then the legacy
//! `VITE_GOOGLE_GEMINI_API_KEY`. Blank values count as missing.

use crate::config::{FileGeminiConfig, LEGACY_API_KEY_ENV};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("API key not found: set {env} (or {LEGACY_API_KEY_ENV}) or gemini.api_key")]
    NotFound { env: String },
}

/// Resolve the API key from the config and the process environment.
pub fn resolve_api_key(config: &FileGeminiConfig) -> Result<String, CredentialError> {
    resolve_api_key_with(config, |name| std::env::var(name).ok())
}

/// Resolve the API key using `lookup` for environment access.
pub fn resolve_api_key_with<F>(
    config: &FileGeminiConfig,
    lookup: F,
) -> Result<String, CredentialError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = non_blank(config.api_key.clone()) {
        warn!("Using API key from config file; prefer {}", config.api_key_env);
        return Ok(key);
    }

    let env = config.api_key_env.trim();
    if let Some(key) = non_blank(lookup(env)) {
        debug!(env, "Resolved API key from environment");
        return Ok(key);
    }

    if env != LEGACY_API_KEY_ENV
        && let Some(key) = non_blank(lookup(LEGACY_API_KEY_ENV))
    {
        debug!(env = LEGACY_API_KEY_ENV, "Resolved API key from legacy variable");
        return Ok(key);
    }

    Err(CredentialError::NotFound {
        env: env.to_string(),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
