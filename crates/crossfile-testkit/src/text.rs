use serde_json::Value;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Coerces a JSON scalar to text.
///
/// Strings are trimmed and blank strings have no textual form; booleans
/// and numbers render to their literal form; null, arrays, and objects
/// yield `None`.
pub fn string_value(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Collapses whitespace runs to single spaces and trims the ends.
pub fn collapse_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strips diacritics by NFKD decomposition, dropping combining marks.
///
/// Characters with no latin decomposition pass through unchanged, so
/// non-latin scripts survive rather than disappearing.
pub fn latinize(text: &str) -> String {
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}
