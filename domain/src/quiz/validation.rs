//! Shape validation for parsed quiz JSON.
//!
//! Walks a [`serde_json::Value`] and either produces typed
//! [`QuizQuestion`]s or the first [`ShapeViolation`] found. Question numbers
//! in violations are 1-based, matching how questions are shown to users.

use crate::prompt::QUESTIONS_COUNT;
use crate::quiz::question::QuizQuestion;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use thiserror::Error;

/// Number of answer options every question must carry.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// How the validator treats a question count different from the one the
/// prompt asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountPolicy {
    /// Accept any non-zero number of questions (default)
    #[default]
    Lenient,
    /// Reject unless exactly the expected number came back
    Exact,
    /// Require at least the expected number and drop the extras
    Truncate,
}

impl CountPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountPolicy::Lenient => "lenient",
            CountPolicy::Exact => "exact",
            CountPolicy::Truncate => "truncate",
        }
    }
}

impl std::fmt::Display for CountPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CountPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(CountPolicy::Lenient),
            "exact" | "strict" => Ok(CountPolicy::Exact),
            "truncate" => Ok(CountPolicy::Truncate),
            other => Err(format!(
                "unknown count policy '{}' (expected lenient, exact or truncate)",
                other
            )),
        }
    }
}

/// Strictness settings for [`validate_questions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub question_count: CountPolicy,
    pub expected_questions: usize,
    pub options_per_question: usize,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            question_count: CountPolicy::default(),
            expected_questions: QUESTIONS_COUNT,
            options_per_question: OPTIONS_PER_QUESTION,
        }
    }
}

impl ValidationPolicy {
    pub fn with_count_policy(mut self, policy: CountPolicy) -> Self {
        self.question_count = policy;
        self
    }
}

/// A specific way in which parsed JSON fails the question contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeViolation {
    #[error("expected a JSON array of questions, found {found}")]
    NotAnArray { found: &'static str },

    #[error("the question array is empty")]
    NoQuestions,

    #[error("expected exactly {expected} questions, got {found}")]
    WrongQuestionCount { expected: usize, found: usize },

    #[error("expected at least {expected} questions, got {found}")]
    TooFewQuestions { expected: usize, found: usize },

    #[error("question {number}: expected an object, found {found}")]
    NotAnObject { number: usize, found: &'static str },

    #[error("question {number}: missing field `{field}`")]
    MissingField { number: usize, field: &'static str },

    #[error("question {number}: field `{field}` must be {expected}, found {found}")]
    WrongType {
        number: usize,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("question {number}: question text is empty")]
    EmptyQuestion { number: usize },

    #[error("question {number}: option {position} must be a string, found {found}")]
    OptionNotText {
        number: usize,
        position: usize,
        found: &'static str,
    },

    #[error("question {number}: expected {expected} options, got {found}")]
    WrongOptionCount {
        number: usize,
        expected: usize,
        found: usize,
    },

    #[error("question {number}: option {option:?} is listed more than once")]
    DuplicateOption { number: usize, option: String },

    #[error("question {number}: correct answer {correct:?} is not one of the options")]
    CorrectNotInOptions { number: usize, correct: String },
}

/// Validate a parsed value against the question contract.
///
/// All-or-nothing: the first violation rejects the whole batch.
pub fn validate_questions(
    value: &Value,
    policy: &ValidationPolicy,
) -> Result<Vec<QuizQuestion>, ShapeViolation> {
    let items = value.as_array().ok_or(ShapeViolation::NotAnArray {
        found: json_kind(value),
    })?;

    if items.is_empty() {
        return Err(ShapeViolation::NoQuestions);
    }

    let expected = policy.expected_questions;
    match policy.question_count {
        CountPolicy::Exact if items.len() != expected => {
            return Err(ShapeViolation::WrongQuestionCount {
                expected,
                found: items.len(),
            });
        }
        CountPolicy::Truncate if items.len() < expected => {
            return Err(ShapeViolation::TooFewQuestions {
                expected,
                found: items.len(),
            });
        }
        _ => {}
    }

    let mut questions = items
        .iter()
        .enumerate()
        .map(|(i, item)| validate_question(i + 1, item, policy.options_per_question))
        .collect::<Result<Vec<_>, _>>()?;

    if policy.question_count == CountPolicy::Truncate {
        questions.truncate(expected);
    }

    Ok(questions)
}

fn validate_question(
    number: usize,
    item: &Value,
    options_per_question: usize,
) -> Result<QuizQuestion, ShapeViolation> {
    let obj = item.as_object().ok_or(ShapeViolation::NotAnObject {
        number,
        found: json_kind(item),
    })?;

    let question = text_field(obj, number, "question")?;
    if question.trim().is_empty() {
        return Err(ShapeViolation::EmptyQuestion { number });
    }

    let raw_options = field(obj, number, "options")?;
    let raw_options = raw_options.as_array().ok_or(ShapeViolation::WrongType {
        number,
        field: "options",
        expected: "an array",
        found: json_kind(raw_options),
    })?;

    let options = raw_options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            option
                .as_str()
                .map(str::to_string)
                .ok_or(ShapeViolation::OptionNotText {
                    number,
                    position: i + 1,
                    found: json_kind(option),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if options.len() != options_per_question {
        return Err(ShapeViolation::WrongOptionCount {
            number,
            expected: options_per_question,
            found: options.len(),
        });
    }

    let mut seen = HashSet::new();
    if let Some(duplicate) = options.iter().find(|o| !seen.insert(o.as_str())) {
        return Err(ShapeViolation::DuplicateOption {
            number,
            option: duplicate.clone(),
        });
    }

    let correct = text_field(obj, number, "correct")?;
    let correct_index = options.iter().position(|o| o == correct).ok_or_else(|| {
        ShapeViolation::CorrectNotInOptions {
            number,
            correct: correct.to_string(),
        }
    })?;

    Ok(QuizQuestion::new(
        question.to_string(),
        options,
        correct.to_string(),
        correct_index,
    ))
}

fn field<'a>(
    obj: &'a Map<String, Value>,
    number: usize,
    name: &'static str,
) -> Result<&'a Value, ShapeViolation> {
    obj.get(name)
        .ok_or(ShapeViolation::MissingField { number, field: name })
}

fn text_field<'a>(
    obj: &'a Map<String, Value>,
    number: usize,
    name: &'static str,
) -> Result<&'a str, ShapeViolation> {
    let value = field(obj, number, name)?;
    value.as_str().ok_or(ShapeViolation::WrongType {
        number,
        field: name,
        expected: "a string",
        found: json_kind(value),
    })
}

/// Human-readable JSON type name for diagnostics
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn question(text: &str, correct: &str) -> Value {
        json!({"question": text, "options": ["A", "B", "C", "D"], "correct": correct})
    }

    fn batch(n: usize) -> Value {
        Value::Array((0..n).map(|i| question(&format!("Q{}", i + 1), "A")).collect())
    }

    fn lenient() -> ValidationPolicy {
        ValidationPolicy::default()
    }

    #[test]
    fn test_accepts_single_well_formed_question() {
        let value = json!([{"question":"Q1","options":["A","B","C","D"],"correct":"B"}]);
        let questions = validate_questions(&value, &lenient()).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct(), "B");
        assert_eq!(questions[0].correct_index(), 1);
    }

    #[test]
    fn test_rejects_top_level_object() {
        let value = json!({"questions": [question("Q", "A")]});
        assert_eq!(
            validate_questions(&value, &lenient()),
            Err(ShapeViolation::NotAnArray { found: "an object" })
        );
    }

    #[test]
    fn test_rejects_empty_array() {
        assert_eq!(
            validate_questions(&json!([]), &lenient()),
            Err(ShapeViolation::NoQuestions)
        );
    }

    #[test]
    fn test_rejects_missing_correct() {
        let value = json!([{"question":"Q","options":["A","B","C","D"]}]);
        assert_eq!(
            validate_questions(&value, &lenient()),
            Err(ShapeViolation::MissingField {
                number: 1,
                field: "correct"
            })
        );
    }

    #[test]
    fn test_rejects_correct_not_in_options() {
        let value = json!([question("Q1", "A"), question("Q2", "E")]);
        assert_eq!(
            validate_questions(&value, &lenient()),
            Err(ShapeViolation::CorrectNotInOptions {
                number: 2,
                correct: "E".to_string()
            })
        );
    }

    #[test]
    fn test_correct_match_is_case_sensitive() {
        let value = json!([question("Q", "a")]);
        assert!(matches!(
            validate_questions(&value, &lenient()),
            Err(ShapeViolation::CorrectNotInOptions { .. })
        ));
    }

    #[test]
    fn test_rejects_fewer_than_four_options() {
        let value = json!([{"question":"Q","options":["A","B","C"],"correct":"A"}]);
        assert_eq!(
            validate_questions(&value, &lenient()),
            Err(ShapeViolation::WrongOptionCount {
                number: 1,
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_rejects_more_than_four_options() {
        let value = json!([{"question":"Q","options":["A","B","C","D","E"],"correct":"A"}]);
        assert!(matches!(
            validate_questions(&value, &lenient()),
            Err(ShapeViolation::WrongOptionCount { found: 5, .. })
        ));
    }

    #[test]
    fn test_rejects_non_text_option() {
        let value = json!([{"question":"Q","options":["A",2,"C","D"],"correct":"A"}]);
        assert_eq!(
            validate_questions(&value, &lenient()),
            Err(ShapeViolation::OptionNotText {
                number: 1,
                position: 2,
                found: "a number"
            })
        );
    }

    #[test]
    fn test_rejects_duplicate_options() {
        let value = json!([{"question":"Q","options":["A","A","C","D"],"correct":"A"}]);
        assert_eq!(
            validate_questions(&value, &lenient()),
            Err(ShapeViolation::DuplicateOption {
                number: 1,
                option: "A".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_wrong_field_types() {
        let value = json!([{"question": 7, "options": ["A","B","C","D"], "correct": "A"}]);
        assert!(matches!(
            validate_questions(&value, &lenient()),
            Err(ShapeViolation::WrongType { field: "question", .. })
        ));

        let value = json!([{"question": "Q", "options": "A,B,C,D", "correct": "A"}]);
        assert!(matches!(
            validate_questions(&value, &lenient()),
            Err(ShapeViolation::WrongType { field: "options", .. })
        ));
    }

    #[test]
    fn test_rejects_blank_question_text() {
        let value = json!([question("  ", "A")]);
        assert_eq!(
            validate_questions(&value, &lenient()),
            Err(ShapeViolation::EmptyQuestion { number: 1 })
        );
    }

    #[test]
    fn test_rejects_non_object_element() {
        let value = json!([question("Q", "A"), "oops"]);
        assert_eq!(
            validate_questions(&value, &lenient()),
            Err(ShapeViolation::NotAnObject {
                number: 2,
                found: "a string"
            })
        );
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let value = json!([{
            "question": "Q", "options": ["A","B","C","D"], "correct": "C",
            "explanation": "because"
        }]);
        let questions = validate_questions(&value, &lenient()).unwrap();
        assert_eq!(questions[0].correct(), "C");
    }

    #[test]
    fn test_options_order_is_preserved() {
        let value = json!([{"question":"Q","options":["D","C","B","A"],"correct":"B"}]);
        let questions = validate_questions(&value, &lenient()).unwrap();
        assert_eq!(questions[0].options(), &["D", "C", "B", "A"]);
        assert_eq!(questions[0].correct_index(), 2);
    }

    #[test]
    fn test_lenient_count_accepts_any_number() {
        assert_eq!(validate_questions(&batch(3), &lenient()).unwrap().len(), 3);
        assert_eq!(validate_questions(&batch(7), &lenient()).unwrap().len(), 7);
    }

    #[test]
    fn test_exact_count_policy() {
        let policy = lenient().with_count_policy(CountPolicy::Exact);
        assert_eq!(validate_questions(&batch(5), &policy).unwrap().len(), 5);
        assert_eq!(
            validate_questions(&batch(4), &policy),
            Err(ShapeViolation::WrongQuestionCount {
                expected: 5,
                found: 4
            })
        );
        assert!(validate_questions(&batch(6), &policy).is_err());
    }

    #[test]
    fn test_truncate_count_policy() {
        let policy = lenient().with_count_policy(CountPolicy::Truncate);
        let questions = validate_questions(&batch(7), &policy).unwrap();
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[4].question(), "Q5");
        assert_eq!(
            validate_questions(&batch(2), &policy),
            Err(ShapeViolation::TooFewQuestions {
                expected: 5,
                found: 2
            })
        );
    }

    #[test]
    fn test_truncate_still_validates_dropped_questions() {
        let policy = lenient().with_count_policy(CountPolicy::Truncate);
        let mut items = batch(5).as_array().unwrap().clone();
        items.push(question("Q6", "Z"));
        assert!(matches!(
            validate_questions(&Value::Array(items), &policy),
            Err(ShapeViolation::CorrectNotInOptions { number: 6, .. })
        ));
    }

    #[test]
    fn test_count_policy_from_str() {
        assert_eq!("exact".parse::<CountPolicy>(), Ok(CountPolicy::Exact));
        assert_eq!("Truncate".parse::<CountPolicy>(), Ok(CountPolicy::Truncate));
        assert_eq!("lenient".parse::<CountPolicy>(), Ok(CountPolicy::Lenient));
        assert!("pad".parse::<CountPolicy>().is_err());
    }

    #[test]
    fn test_violation_messages_are_one_based() {
        let violation = ShapeViolation::MissingField {
            number: 3,
            field: "options",
        };
        assert_eq!(violation.to_string(), "question 3: missing field `options`");
    }
}
