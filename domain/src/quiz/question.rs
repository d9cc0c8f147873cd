//! Quiz question entities

use serde::Serialize;

/// A single validated multiple-choice question.
///
/// Only produced by [`parse_quiz_response`](crate::quiz::parsing::parse_quiz_response),
/// so `correct` is always present verbatim in `options` and the option order
/// is exactly the order the model returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    question: String,
    options: Vec<String>,
    correct: String,
    #[serde(skip)]
    correct_index: usize,
}

impl QuizQuestion {
    pub(crate) fn new(
        question: String,
        options: Vec<String>,
        correct: String,
        correct_index: usize,
    ) -> Self {
        debug_assert_eq!(options.get(correct_index), Some(&correct));
        Self {
            question,
            options,
            correct,
            correct_index,
        }
    }

    /// The question text
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The answer options, in model order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The correct answer, identical to one entry of [`options`](Self::options)
    pub fn correct(&self) -> &str {
        &self.correct
    }

    /// Position of the correct answer within [`options`](Self::options)
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Check whether `option` is the correct answer (exact match)
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct == option
    }
}

/// The ordered batch of validated questions handed to rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuizQuestionSet {
    questions: Vec<QuizQuestion>,
}

impl QuizQuestionSet {
    pub(crate) fn new(questions: Vec<QuizQuestion>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuizQuestion> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a QuizQuestionSet {
    type Item = &'a QuizQuestion;
    type IntoIter = std::slice::Iter<'a, QuizQuestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
