//! Raw response → validated question set.
//!
//! Three sequential stages, each pure:
//!
//! 1. [`sanitize`] the raw text (fence stripping + trim)
//! 2. strict JSON parse into a [`serde_json::Value`]
//! 3. [`validate_questions`] against the shape contract
//!
//! Any failure rejects the whole batch; no partial results escape.

use crate::generation::result::{ErrorKind, GenerationResult};
use crate::quiz::question::QuizQuestionSet;
use crate::quiz::sanitize::sanitize;
use crate::quiz::validation::{ShapeViolation, ValidationPolicy, validate_questions};
use thiserror::Error;

/// Why a raw model response could not become a [`QuizQuestionSet`].
///
/// Both variants keep the untouched raw text for diagnostics. It is meant
/// for logs, never for end users.
#[derive(Error, Debug)]
pub enum QuizFormatError {
    #[error("response is not valid JSON: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        raw: String,
    },

    #[error("response JSON does not match the quiz shape: {violation}")]
    Shape {
        #[source]
        violation: ShapeViolation,
        raw: String,
    },
}

impl QuizFormatError {
    /// The raw response text exactly as the model returned it
    pub fn raw(&self) -> &str {
        match self {
            QuizFormatError::Parse { raw, .. } | QuizFormatError::Shape { raw, .. } => raw,
        }
    }

    /// The shape violation, if parsing succeeded but validation did not
    pub fn violation(&self) -> Option<&ShapeViolation> {
        match self {
            QuizFormatError::Shape { violation, .. } => Some(violation),
            QuizFormatError::Parse { .. } => None,
        }
    }
}

/// Sanitize, parse and validate a raw model response.
pub fn parse_quiz_response(
    raw: &str,
    policy: &ValidationPolicy,
) -> Result<QuizQuestionSet, QuizFormatError> {
    let sanitized = sanitize(raw);

    let value: serde_json::Value =
        serde_json::from_str(sanitized.text).map_err(|source| QuizFormatError::Parse {
            source,
            raw: raw.to_string(),
        })?;

    let questions =
        validate_questions(&value, policy).map_err(|violation| QuizFormatError::Shape {
            violation,
            raw: raw.to_string(),
        })?;

    Ok(QuizQuestionSet::new(questions))
}

/// [`parse_quiz_response`] folded into a [`GenerationResult`].
///
/// Failures become `Failure(InvalidFormat, message)` where the message is
/// the descriptive error, not the raw text.
pub fn sanitize_and_validate(raw: &str, policy: &ValidationPolicy) -> GenerationResult {
    match parse_quiz_response(raw, policy) {
        Ok(set) => GenerationResult::Success(set),
        Err(e) => GenerationResult::failure(ErrorKind::InvalidFormat, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::validation::CountPolicy;

    fn policy() -> ValidationPolicy {
        ValidationPolicy::default()
    }

    #[test]
    fn test_accepts_minimal_valid_batch() {
        let raw = r#"[{"question":"Q1","options":["A","B","C","D"],"correct":"B"}]"#;
        let set = parse_quiz_response(raw, &policy()).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.questions()[0].correct(), "B");
    }

    #[test]
    fn test_fenced_response_is_accepted() {
        let raw = "```json\n[{\"question\":\"Q\",\"options\":[\"A\",\"B\",\"C\",\"D\"],\"correct\":\"A\"}]\n```";
        match sanitize_and_validate(raw, &policy()) {
            GenerationResult::Success(set) => {
                assert_eq!(set.len(), 1);
                assert_eq!(set.questions()[0].correct(), "A");
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_fenced_and_bare_json_parse_identically() {
        let bare = r#"[{"question":"Q","options":["A","B","C","D"],"correct":"D"}]"#;
        let fenced = format!("```json\n{}\n```", bare);
        assert_eq!(
            parse_quiz_response(bare, &policy()).unwrap(),
            parse_quiz_response(&fenced, &policy()).unwrap()
        );
    }

    #[test]
    fn test_not_json_is_invalid_format() {
        let err = parse_quiz_response("not json", &policy()).unwrap_err();
        assert!(matches!(err, QuizFormatError::Parse { .. }));
        assert_eq!(err.raw(), "not json");
        assert!(err.violation().is_none());

        let result = sanitize_and_validate("not json", &policy());
        assert_eq!(result.error_kind(), Some(ErrorKind::InvalidFormat));
    }

    #[test]
    fn test_shape_error_keeps_raw_text() {
        let raw = "```json\n{\"question\":\"Q\"}\n```";
        let err = parse_quiz_response(raw, &policy()).unwrap_err();
        assert_eq!(err.raw(), raw);
        assert_eq!(
            err.violation(),
            Some(&ShapeViolation::NotAnArray { found: "an object" })
        );
    }

    #[test]
    fn test_single_bad_question_rejects_batch() {
        let raw = r#"[
            {"question":"Q1","options":["A","B","C","D"],"correct":"A"},
            {"question":"Q2","options":["A","B","C","D"],"correct":"X"}
        ]"#;
        let result = sanitize_and_validate(raw, &policy());
        assert!(!result.is_success());
        assert!(result.questions().is_none());
    }

    #[test]
    fn test_failure_message_describes_violation() {
        let raw = r#"[{"question":"Q","options":["A","B","C"],"correct":"A"}]"#;
        match sanitize_and_validate(raw, &policy()) {
            GenerationResult::Failure { kind, message } => {
                assert_eq!(kind, ErrorKind::InvalidFormat);
                assert!(message.contains("expected 4 options, got 3"), "{}", message);
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_policy_is_applied() {
        let raw = r#"[{"question":"Q","options":["A","B","C","D"],"correct":"A"}]"#;
        let strict = policy().with_count_policy(CountPolicy::Exact);
        let err = parse_quiz_response(raw, &strict).unwrap_err();
        assert!(matches!(
            err.violation(),
            Some(ShapeViolation::WrongQuestionCount { .. })
        ));
    }
}
