//! Answering a validated question.
//!
//! The first selection locks the question and reveals the correct answer.

use crate::quiz::question::{QuizQuestion, QuizQuestionSet};
use thiserror::Error;

/// Display state of one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    /// Question not answered yet; option can be picked
    Open,
    /// Picked and correct
    SelectedCorrect,
    /// Picked and wrong
    SelectedIncorrect,
    /// Not picked, but the correct answer
    RevealedCorrect,
    /// Not picked and wrong
    Dimmed,
}

/// Outcome of selecting an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect { correct_index: usize },
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("question already answered")]
    AlreadyAnswered,

    #[error("option {index} is out of range (question has {len} options)")]
    OptionOutOfRange { index: usize, len: usize },
}

/// One user's attempt at one question.
#[derive(Debug, Clone)]
pub struct QuestionAttempt<'a> {
    question: &'a QuizQuestion,
    selected: Option<usize>,
}

impl<'a> QuestionAttempt<'a> {
    pub fn new(question: &'a QuizQuestion) -> Self {
        Self {
            question,
            selected: None,
        }
    }

    /// One fresh attempt per question, in order
    pub fn for_set(set: &'a QuizQuestionSet) -> Vec<Self> {
        set.iter().map(Self::new).collect()
    }

    pub fn question(&self) -> &'a QuizQuestion {
        self.question
    }

    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select an option by index. Only the first selection counts.
    pub fn select(&mut self, index: usize) -> Result<AnswerOutcome, AnswerError> {
        if self.selected.is_some() {
            return Err(AnswerError::AlreadyAnswered);
        }
        let len = self.question.options().len();
        if index >= len {
            return Err(AnswerError::OptionOutOfRange { index, len });
        }

        self.selected = Some(index);
        let correct_index = self.question.correct_index();
        if index == correct_index {
            Ok(AnswerOutcome::Correct)
        } else {
            Ok(AnswerOutcome::Incorrect { correct_index })
        }
    }

    pub fn is_correct(&self) -> bool {
        self.selected == Some(self.question.correct_index())
    }

    pub fn option_state(&self, index: usize) -> OptionState {
        let Some(selected) = self.selected else {
            return OptionState::Open;
        };
        let is_correct = index == self.question.correct_index();
        match (index == selected, is_correct) {
            (true, true) => OptionState::SelectedCorrect,
            (true, false) => OptionState::SelectedIncorrect,
            (false, true) => OptionState::RevealedCorrect,
            (false, false) => OptionState::Dimmed,
        }
    }

    pub fn option_states(&self) -> Vec<OptionState> {
        (0..self.question.options().len())
            .map(|i| self.option_state(i))
            .collect()
    }
}

/// Tally over a set of attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizScore {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
}

impl QuizScore {
    pub fn from_attempts(attempts: &[QuestionAttempt<'_>]) -> Self {
        Self {
            total: attempts.len(),
            answered: attempts.iter().filter(|a| a.is_answered()).count(),
            correct: attempts.iter().filter(|a| a.is_correct()).count(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.answered == self.total
    }

    /// Percentage of all questions answered correctly, 0-100
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.correct * 100) / self.total) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::parsing::parse_quiz_response;
    use crate::quiz::validation::ValidationPolicy;

    fn set() -> QuizQuestionSet {
        parse_quiz_response(
            r#"[
                {"question":"Q1","options":["A","B","C","D"],"correct":"C"},
                {"question":"Q2","options":["A","B","C","D"],"correct":"A"}
            ]"#,
            &ValidationPolicy::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_unanswered_options_are_open() {
        let set = set();
        let attempt = QuestionAttempt::new(&set.questions()[0]);
        assert!(!attempt.is_answered());
        assert!(attempt.option_states().iter().all(|s| *s == OptionState::Open));
    }

    #[test]
    fn test_correct_selection() {
        let set = set();
        let mut attempt = QuestionAttempt::new(&set.questions()[0]);
        assert_eq!(attempt.select(2), Ok(AnswerOutcome::Correct));
        assert_eq!(
            attempt.option_states(),
            vec![
                OptionState::Dimmed,
                OptionState::Dimmed,
                OptionState::SelectedCorrect,
                OptionState::Dimmed
            ]
        );
    }

    #[test]
    fn test_incorrect_selection_reveals_answer() {
        let set = set();
        let mut attempt = QuestionAttempt::new(&set.questions()[0]);
        assert_eq!(
            attempt.select(0),
            Ok(AnswerOutcome::Incorrect { correct_index: 2 })
        );
        assert_eq!(attempt.option_state(0), OptionState::SelectedIncorrect);
        assert_eq!(attempt.option_state(2), OptionState::RevealedCorrect);
        assert_eq!(attempt.option_state(3), OptionState::Dimmed);
    }

    #[test]
    fn test_selection_locks_question() {
        let set = set();
        let mut attempt = QuestionAttempt::new(&set.questions()[0]);
        attempt.select(0).unwrap();
        assert_eq!(attempt.select(2), Err(AnswerError::AlreadyAnswered));
        assert_eq!(attempt.selected(), Some(0));
        assert!(!attempt.is_correct());
    }

    #[test]
    fn test_out_of_range_selection_does_not_lock() {
        let set = set();
        let mut attempt = QuestionAttempt::new(&set.questions()[0]);
        assert_eq!(
            attempt.select(4),
            Err(AnswerError::OptionOutOfRange { index: 4, len: 4 })
        );
        assert!(!attempt.is_answered());
    }

    #[test]
    fn test_score() {
        let set = set();
        let mut attempts = QuestionAttempt::for_set(&set);
        attempts[0].select(2).unwrap();
        let partial = QuizScore::from_attempts(&attempts);
        assert_eq!(partial.answered, 1);
        assert!(!partial.is_complete());

        attempts[1].select(3).unwrap();
        let score = QuizScore::from_attempts(&attempts);
        assert_eq!(
            score,
            QuizScore {
                total: 2,
                answered: 2,
                correct: 1
            }
        );
        assert!(score.is_complete());
        assert_eq!(score.percentage(), 50);
    }
}
