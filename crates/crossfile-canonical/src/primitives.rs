use serde_json::Value;

/// Host-supplied primitive parsers the canonicalization pipeline is built on.
///
/// Implementations must be pure functions of their arguments: no internal
/// state, no panics on arbitrary input, and `None` (never an error) for
/// input that cannot be parsed. Caching, rate limiting, and retry policy
/// for expensive parsers belong to the host, not to callers of this trait.
///
/// Pipeline idempotence leans on a few obligations: `collapse_spaces`,
/// `latinize`, and `make_fingerprint` must be stable under re-application,
/// and `parse_country` must resolve an already-resolved code to itself.
pub trait Primitives: Send + Sync {
    /// Coerces an arbitrary JSON scalar to text.
    ///
    /// Returns `None` when no usable textual form exists (null, empty or
    /// blank strings, arrays, objects).
    fn string_value(&self, raw: &Value) -> Option<String>;

    /// Collapses internal whitespace runs to single spaces and trims.
    fn collapse_spaces(&self, text: &str) -> String;

    /// Transliterates text to its closest latin form.
    fn latinize(&self, text: &str) -> String;

    /// Parses a date, preferring the explicit format hint when given.
    ///
    /// Returns `None` when the text is not recognizable as a full or
    /// partial date.
    fn parse_date(&self, text: &str, format_hint: Option<&str>) -> Option<String>;

    /// Whether the text is a valid partial (`YYYY`, `YYYY-MM`) or full date.
    fn is_partial_date(&self, text: &str) -> bool;

    /// Resolves a country name or code to a canonical code.
    fn parse_country(&self, text: &str) -> Option<String>;

    /// Parses a phone number, optionally biased by a country hint.
    fn parse_phone(&self, text: &str, country_hint: Option<&str>) -> Option<String>;

    /// Validates and canonicalizes an email address.
    fn parse_email(&self, text: &str) -> Option<String>;

    /// Computes a blocking fingerprint over the text.
    ///
    /// Returns `None` when no key material remains after reduction.
    fn make_fingerprint(&self, text: &str) -> Option<String>;
}
