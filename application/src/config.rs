//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as the API timeout and validation strictness.

use quizgen_domain::ValidationPolicy;
use std::time::Duration;

/// Timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Application behavior configuration.
///
/// Controls runtime behavior of the generation pipeline.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Maximum time to wait for the generation service before giving up.
    pub timeout: Option<Duration>,
    /// Strictness of response shape validation.
    pub policy: ValidationPolicy,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)),
            policy: ValidationPolicy::default(),
        }
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with a timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(seconds)),
            ..Self::default()
        }
    }

    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.map(Duration::from_secs),
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }
}
