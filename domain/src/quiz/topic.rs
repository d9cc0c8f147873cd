//! Topic value object

use crate::core::error::DomainError;
use serde::Serialize;

/// The subject a quiz is generated about (Value Object)
///
/// Always non-empty and trimmed. Blank input is rejected before any
/// request is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Topic {
    content: String,
}

impl Topic {
    /// Create a topic from user input, trimming surrounding whitespace.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyTopic);
        }
        Ok(Self {
            content: trimmed.to_string(),
        })
    }

    /// Get the topic text
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for Topic {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Topic::parse(s)
    }
}

impl TryFrom<String> for Topic {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Topic::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_is_trimmed() {
        let topic = Topic::parse("  Roman history \n").unwrap();
        assert_eq!(topic.as_str(), "Roman history");
    }

    #[test]
    fn test_blank_topics_are_rejected() {
        assert_eq!(Topic::parse(""), Err(DomainError::EmptyTopic));
        assert_eq!(Topic::parse("   "), Err(DomainError::EmptyTopic));
        assert_eq!(Topic::parse("\t\n"), Err(DomainError::EmptyTopic));
        assert!(Topic::try_from(String::from(" ")).is_err());
    }

    #[test]
    fn test_try_from_str() {
        let topic: Topic = "Photosynthesis".try_into().unwrap();
        assert_eq!(topic.to_string(), "Photosynthesis");
    }
}
