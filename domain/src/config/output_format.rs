//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for a generated quiz
///
/// This is a domain concept representing how a validated
/// [`QuizQuestionSet`](crate::QuizQuestionSet) should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered questions with lettered options (default)
    #[default]
    Quiz,
    /// Questions with the correct option marked
    Answers,
    /// The validated question array as JSON
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Quiz => "quiz",
            OutputFormat::Answers => "answers",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_quiz() {
        assert_eq!(OutputFormat::default(), OutputFormat::Quiz);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Answers).unwrap();
        assert_eq!(json, "\"answers\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
