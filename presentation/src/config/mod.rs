//! Presentation-level configuration
//!
//! Resolved settings for output formatting and the interactive loop, after
//! CLI flags have been applied over the file configuration.

use quizgen_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// REPL configuration for the presentation layer
///
/// Progress and play switches live on the runner the REPL drives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplConfig {
    /// Path to history file
    pub history_file: Option<String>,
}

impl ReplConfig {
    /// Resolved history file location.
    ///
    /// A leading `~/` expands to the home directory. Without a configured
    /// path the history lives in the user data directory.
    pub fn history_path(&self) -> Option<PathBuf> {
        match self.history_file.as_deref() {
            Some(path) => match path.strip_prefix("~/") {
                Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
                None => Some(PathBuf::from(path)),
            },
            None => dirs::data_dir().map(|d| d.join("quizgen").join("history.txt")),
        }
    }
}
