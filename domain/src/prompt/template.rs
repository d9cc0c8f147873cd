//! Prompt template for quiz generation

use crate::quiz::topic::Topic;
use crate::quiz::validation::OPTIONS_PER_QUESTION;

/// Number of questions the prompt asks for.
pub const QUESTIONS_COUNT: usize = 5;

/// Template for the quiz generation prompt
///
/// The prompt is written in English and does not ask for another language,
/// so generated quizzes come out in English whatever language the topic is in.
pub struct QuizPromptTemplate;

impl QuizPromptTemplate {
    /// Build the prompt for a validated topic
    pub fn build(topic: &Topic) -> String {
        Self::build_raw(topic.as_str())
    }

    /// Build the prompt for arbitrary text.
    ///
    /// Callers are expected to have rejected blank topics already; this
    /// never fails and never alters the topic.
    pub fn build_raw(topic: &str) -> String {
        format!(
            r#"Generate {count} multiple-choice questions about {topic}. Produce valid JSON in the following EXACT format (an array of objects):
[
  {{ "question": "Text of question 1", "options": ["Option A", "Option B", "Option C", "Option D"], "correct": "Option C" }},
  {{ "question": "Text of question 2", "options": ["Alt 1", "Alt 2", "Alt 3", "Alt 4"], "correct": "Alt 1" }},
  ...
]
IMPORTANT: Each question must have EXACTLY {options} alternatives in the "options" array. Make sure the value of "correct" is character-for-character identical to one of the strings in "options". Return ONLY the JSON array, with no additional text, no Markdown and no code fences such as ```json ... ```."#,
            count = QUESTIONS_COUNT,
            topic = topic,
            options = OPTIONS_PER_QUESTION,
        )
    }
}
