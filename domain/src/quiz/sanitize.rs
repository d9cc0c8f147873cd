//! Fence stripping for raw model output.
//!
//! The model is asked for bare JSON but regularly wraps it in a Markdown
//! code fence anyway. This is not a Markdown parser: only the wrapper
//! patterns listed in [`FencePattern`] are recognized, and only at the
//! outer edges of the text. Anything else is left for the JSON parser to
//! reject.

/// Language tags accepted after an opening fence, longest first so that
/// `json` is not mistaken for `js` followed by `on`.
const LANGUAGE_TAGS: &[&str] = &["javascript", "json", "JSON", "js"];

const FENCE: &str = "```";

/// A wrapper pattern the sanitizer knows how to strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FencePattern {
    /// Leading ```` ``` ```` with an optional language tag
    OpeningFence,
    /// Trailing ```` ``` ````
    ClosingFence,
    /// Trailing newline followed by a lone backtick
    StrayBacktick,
}

impl FencePattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            FencePattern::OpeningFence => "opening_fence",
            FencePattern::ClosingFence => "closing_fence",
            FencePattern::StrayBacktick => "stray_backtick",
        }
    }
}

/// Result of sanitizing raw model text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized<'a> {
    /// Parse-ready text, trimmed
    pub text: &'a str,
    /// Patterns removed, in the order they were stripped
    pub stripped: Vec<FencePattern>,
}

impl Sanitized<'_> {
    /// True when the input needed no cleanup beyond trimming
    pub fn was_clean(&self) -> bool {
        self.stripped.is_empty()
    }
}

/// Strip known fence artifacts from both ends of `raw` and trim it.
///
/// Patterns are applied repeatedly until none matches, so the result is a
/// fixed point: `sanitize(sanitize(x).text).text == sanitize(x).text`.
pub fn sanitize(raw: &str) -> Sanitized<'_> {
    let mut text = raw.trim();
    let mut stripped = Vec::new();

    loop {
        if let Some(rest) = text.strip_prefix(FENCE) {
            text = strip_language_tag(rest).trim();
            stripped.push(FencePattern::OpeningFence);
            continue;
        }

        if let Some(rest) = text.strip_suffix(FENCE) {
            text = rest.trim();
            stripped.push(FencePattern::ClosingFence);
            continue;
        }

        if let Some(rest) = text.strip_suffix("\n`") {
            text = rest.trim();
            stripped.push(FencePattern::StrayBacktick);
            continue;
        }

        break;
    }

    Sanitized { text, stripped }
}

/// Remove a known language tag directly following an opening fence.
fn strip_language_tag(rest: &str) -> &str {
    for tag in LANGUAGE_TAGS {
        if let Some(after) = rest.strip_prefix(tag) {
            let boundary = after
                .chars()
                .next()
                .is_none_or(|c| !c.is_ascii_alphanumeric());
            if boundary {
                return after;
            }
        }
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN: &str = r#"[{"question":"Q","options":["A","B","C","D"],"correct":"A"}]"#;

    #[test]
    fn test_clean_json_is_untouched() {
        let result = sanitize(CLEAN);
        assert_eq!(result.text, CLEAN);
        assert!(result.was_clean());
    }

    #[test]
    fn test_json_fence_is_stripped() {
        let raw = format!("```json\n{}\n```", CLEAN);
        let result = sanitize(&raw);
        assert_eq!(result.text, CLEAN);
        assert_eq!(
            result.stripped,
            vec![FencePattern::OpeningFence, FencePattern::ClosingFence]
        );
    }

    #[test]
    fn test_bare_fence_and_surrounding_whitespace() {
        let raw = format!("\n\n```\n  {}  \n```\n", CLEAN);
        assert_eq!(sanitize(&raw).text, CLEAN);
    }

    #[test]
    fn test_other_language_tags() {
        for tag in ["JSON", "javascript", "js"] {
            let raw = format!("```{}\n{}\n```", tag, CLEAN);
            assert_eq!(sanitize(&raw).text, CLEAN, "tag {}", tag);
        }
    }

    #[test]
    fn test_single_line_fence() {
        let raw = format!("```json{}```", CLEAN);
        assert_eq!(sanitize(&raw).text, CLEAN);
    }

    #[test]
    fn test_stray_trailing_backtick() {
        let raw = format!("```json\n{}\n`", CLEAN);
        let result = sanitize(&raw);
        assert_eq!(result.text, CLEAN);
        assert!(result.stripped.contains(&FencePattern::StrayBacktick));
    }

    #[test]
    fn test_unknown_tag_is_not_treated_as_language() {
        // "jsonl" is not an allowed tag, so only the fence itself goes
        let result = sanitize("```jsonl\n[]\n```");
        assert_eq!(result.text, "jsonl\n[]");
    }

    #[test]
    fn test_inner_backticks_are_preserved() {
        let raw = r#"[{"question":"What does ``` start in Markdown?","options":["a","b","c","d"],"correct":"a"}]"#;
        assert_eq!(sanitize(raw).text, raw);
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = [
            CLEAN.to_string(),
            format!("```json\n{}\n```", CLEAN),
            format!("```\n{}\n`", CLEAN),
            "not json".to_string(),
            "```".to_string(),
            String::new(),
        ];
        for input in inputs {
            let once = sanitize(&input).text;
            let twice = sanitize(once).text;
            assert_eq!(once, twice, "input {:?}", input);
        }
    }

    #[test]
    fn test_lone_fence_becomes_empty() {
        assert_eq!(sanitize("```").text, "");
        assert_eq!(sanitize("```json").text, "");
    }
}
