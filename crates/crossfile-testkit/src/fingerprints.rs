use std::collections::BTreeSet;

use crate::text::latinize;

/// Computes a token-sort blocking fingerprint.
///
/// The text is latinized and lower-cased, each token is reduced to its
/// alphanumeric characters, and the unique tokens are joined in sorted
/// order. Two values that differ only in token order, case, punctuation,
/// or diacritics collide on the same key. Returns `None` when no key
/// material remains.
pub fn make_fingerprint(text: &str) -> Option<String> {
    let latin = latinize(text).to_lowercase();
    let mut tokens = BTreeSet::new();
    for token in latin.split_whitespace() {
        let cleaned: String = token.chars().filter(|c| c.is_alphanumeric()).collect();
        if !cleaned.is_empty() {
            tokens.insert(cleaned);
        }
    }
    if tokens.is_empty() {
        return None;
    }
    Some(tokens.into_iter().collect::<Vec<_>>().join(" "))
}
