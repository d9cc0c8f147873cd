//! String helpers for log previews.

const ELLIPSIS: &str = "...";

/// Shorten `s` to at most `max_bytes` bytes, ending in `...` when cut.
///
/// The cut always lands on a UTF-8 character boundary.
pub fn truncate(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        return s.to_string();
    }

    let budget = max_bytes.saturating_sub(ELLIPSIS.len());
    let end = s
        .char_indices()
        .map(|(start, c)| start + c.len_utf8())
        .take_while(|&end| end <= budget)
        .last()
        .unwrap_or(0);

    format!("{}{}", &s[..end], ELLIPSIS)
}
