//! Console output formatter for generated quizzes

use colored::{ColoredString, Colorize};
use quizgen_domain::{
    OutputFormat, OptionState, QuestionAttempt, QuizQuestion, QuizQuestionSet, QuizScore,
};

/// Formats quizzes for console display
pub struct QuizFormatter;

impl QuizFormatter {
    /// Format a question set in the requested format
    pub fn format(topic: &str, set: &QuizQuestionSet, format: OutputFormat) -> String {
        match format {
            OutputFormat::Quiz => Self::format_quiz(topic, set),
            OutputFormat::Answers => Self::format_answers(topic, set),
            OutputFormat::Json => Self::format_json(set),
        }
    }

    /// Questions and options, answers hidden
    pub fn format_quiz(topic: &str, set: &QuizQuestionSet) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(topic));
        output.push('\n');

        for (index, question) in set.iter().enumerate() {
            output.push_str(&Self::question_line(index, question));
            for (position, option) in question.options().iter().enumerate() {
                output.push_str(&format!("   {}) {}\n", option_letter(position), option));
            }
            output.push('\n');
        }

        output
    }

    /// Questions with the correct option marked
    pub fn format_answers(topic: &str, set: &QuizQuestionSet) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(topic));
        output.push('\n');

        for (index, question) in set.iter().enumerate() {
            output.push_str(&Self::question_line(index, question));
            for (position, option) in question.options().iter().enumerate() {
                let line = format!("{}) {}", option_letter(position), option);
                if position == question.correct_index() {
                    output.push_str(&format!(" {} {}\n", "*".green().bold(), line.green()));
                } else {
                    output.push_str(&format!("   {}\n", line));
                }
            }
            output.push('\n');
        }

        output
    }

    /// Format as JSON
    pub fn format_json(set: &QuizQuestionSet) -> String {
        serde_json::to_string_pretty(set).unwrap_or_else(|_| "[]".to_string())
    }

    /// One question with every option styled by its answer state
    pub fn format_attempt(number: usize, attempt: &QuestionAttempt<'_>) -> String {
        let question = attempt.question();
        let mut output = Self::question_line(number, question);

        for (position, option) in question.options().iter().enumerate() {
            let state = attempt.option_state(position);
            let line = format!("{}) {}", option_letter(position), option);
            output.push_str(&format!(" {} {}\n", state_marker(state), style_option(&line, state)));
        }

        output
    }

    /// Verdict shown right after an answer
    pub fn format_verdict(attempt: &QuestionAttempt<'_>) -> String {
        if attempt.is_correct() {
            format!("{}", "Correct!".green().bold())
        } else {
            let question = attempt.question();
            format!(
                "{} The answer was {}) {}",
                "Incorrect.".red().bold(),
                option_letter(question.correct_index()),
                question.correct()
            )
        }
    }

    pub fn format_score(score: &QuizScore) -> String {
        let summary = format!(
            "Score: {}/{} ({}%)",
            score.correct,
            score.total,
            score.percentage()
        );
        let mut output = format!("{}\n{}", Self::rule(), summary.bold());
        if !score.is_complete() {
            output.push_str(&format!(
                "\n{}",
                format!("{} of {} questions answered", score.answered, score.total).dimmed()
            ));
        }
        output.push_str(&format!("\n{}\n", Self::rule()));
        output
    }

    /// User-facing error line
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    fn header(topic: &str) -> String {
        let title = format!("Quiz: {}", topic);
        format!("{}\n{:^60}\n{}", Self::rule(), title.bold(), Self::rule())
    }

    fn rule() -> ColoredString {
        "=".repeat(60).cyan()
    }

    fn question_line(index: usize, question: &QuizQuestion) -> String {
        format!(
            "{} {}\n",
            format!("{}.", index + 1).cyan().bold(),
            question.question().bold()
        )
    }
}

/// Turn colored output off for the whole process.
///
/// Passing `true` keeps the default terminal detection.
pub fn set_color_enabled(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

/// Letter shown for the option at `position` (A, B, C, ...)
pub fn option_letter(position: usize) -> char {
    u8::try_from(position)
        .ok()
        .and_then(|p| b'A'.checked_add(p))
        .map(char::from)
        .filter(char::is_ascii_uppercase)
        .unwrap_or('?')
}

fn state_marker(state: OptionState) -> ColoredString {
    match state {
        OptionState::Open => " ".normal(),
        OptionState::SelectedCorrect => "✓".green().bold(),
        OptionState::SelectedIncorrect => "✗".red().bold(),
        OptionState::RevealedCorrect => "→".green(),
        OptionState::Dimmed => " ".normal(),
    }
}

fn style_option(line: &str, state: OptionState) -> ColoredString {
    match state {
        OptionState::Open => line.normal(),
        OptionState::SelectedCorrect => line.green().bold(),
        OptionState::SelectedIncorrect => line.red().bold(),
        OptionState::RevealedCorrect => line.green(),
        OptionState::Dimmed => line.dimmed(),
    }
}
