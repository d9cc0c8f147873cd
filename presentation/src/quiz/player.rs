//! Answering a quiz question by question
//!
//! Each question accepts one answer (a letter `A`-`D` or a number `1`-`4`).
//! The first valid answer locks the question and reveals the correct option.

use crate::output::console::{QuizFormatter, option_letter};
use quizgen_domain::{QuestionAttempt, QuizQuestionSet, QuizScore};
use rustyline::DefaultEditor;
use std::io::{self, Write};

/// Parse a typed answer into an option index.
pub fn parse_answer(input: &str, option_count: usize) -> Option<usize> {
    let input = input.trim();
    let mut chars = input.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };

    let index = if c.is_ascii_alphabetic() {
        (c.to_ascii_uppercase() as usize).checked_sub('A' as usize)?
    } else {
        c.to_digit(10)?.checked_sub(1)? as usize
    };

    (index < option_count).then_some(index)
}

/// Plays a question set against a line source
pub struct QuizPlayer;

impl QuizPlayer {
    /// Play interactively on the terminal.
    pub fn play(set: &QuizQuestionSet) -> io::Result<QuizScore> {
        let mut editor = DefaultEditor::new().map_err(|e| io::Error::other(e.to_string()))?;
        let mut stdout = io::stdout();
        Self::play_with(set, |prompt| editor.readline(prompt).ok(), &mut stdout)
    }

    /// Play reading answers from `read_line`.
    ///
    /// `read_line` returning `None` stops the game early; the score then
    /// covers only the questions answered so far.
    pub fn play_with<R, W>(
        set: &QuizQuestionSet,
        mut read_line: R,
        out: &mut W,
    ) -> io::Result<QuizScore>
    where
        R: FnMut(&str) -> Option<String>,
        W: Write,
    {
        let mut attempts = QuestionAttempt::for_set(set);

        'questions: for (number, attempt) in attempts.iter_mut().enumerate() {
            write!(out, "{}", QuizFormatter::format_attempt(number, attempt))?;
            let option_count = attempt.question().options().len();
            let last = option_letter(option_count.saturating_sub(1));
            let prompt = format!("Your answer (A-{}): ", last);

            loop {
                out.flush()?;
                let Some(line) = read_line(&prompt) else {
                    writeln!(out)?;
                    break 'questions;
                };
                let Some(index) = parse_answer(&line, option_count) else {
                    writeln!(out, "Please type a letter from A to {}.", last)?;
                    continue;
                };
                if attempt.select(index).is_ok() {
                    break;
                }
            }

            writeln!(out)?;
            write!(out, "{}", QuizFormatter::format_attempt(number, attempt))?;
            writeln!(out, "{}\n", QuizFormatter::format_verdict(attempt))?;
        }

        let score = QuizScore::from_attempts(&attempts);
        write!(out, "{}", QuizFormatter::format_score(&score))?;
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizgen_domain::{ValidationPolicy, parse_quiz_response};
    use std::collections::VecDeque;

    fn set() -> QuizQuestionSet {
        colored::control::set_override(false);
        parse_quiz_response(
            r#"[
                {"question":"2 + 2?","options":["3","4","5","6"],"correct":"4"},
                {"question":"Capital of France?","options":["Rome","Madrid","Paris","Berlin"],"correct":"Paris"},
                {"question":"H2O is?","options":["Water","Salt","Iron","Gold"],"correct":"Water"}
            ]"#,
            &ValidationPolicy::default(),
        )
        .unwrap()
    }

    fn scripted(lines: &[&str]) -> impl FnMut(&str) -> Option<String> {
        let mut lines: VecDeque<String> = lines.iter().map(|l| l.to_string()).collect();
        move |_prompt| lines.pop_front()
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("a", 4), Some(0));
        assert_eq!(parse_answer(" D ", 4), Some(3));
        assert_eq!(parse_answer("2", 4), Some(1));
        assert_eq!(parse_answer("e", 4), None);
        assert_eq!(parse_answer("0", 4), None);
        assert_eq!(parse_answer("5", 4), None);
        assert_eq!(parse_answer("ab", 4), None);
        assert_eq!(parse_answer("", 4), None);
        assert_eq!(parse_answer("é", 4), None);
    }

    #[test]
    fn test_full_game_scores_answers() {
        let mut out = Vec::new();
        let score = QuizPlayer::play_with(&set(), scripted(&["b", "A", "1"]), &mut out).unwrap();

        assert_eq!(score.total, 3);
        assert_eq!(score.answered, 3);
        assert_eq!(score.correct, 2);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Correct!"));
        assert!(text.contains("Incorrect. The answer was C) Paris"));
        assert!(text.contains("Score: 2/3 (66%)"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let mut out = Vec::new();
        let score =
            QuizPlayer::play_with(&set(), scripted(&["x", "", "B", "c", "a"]), &mut out).unwrap();

        assert_eq!(score.correct, 3);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Please type a letter from A to D.").count(), 2);
    }

    #[test]
    fn test_end_of_input_stops_early() {
        let mut out = Vec::new();
        let score = QuizPlayer::play_with(&set(), scripted(&["b"]), &mut out).unwrap();

        assert_eq!(score.answered, 1);
        assert_eq!(score.correct, 1);
        assert!(!score.is_complete());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1 of 3 questions answered"));
    }
}
