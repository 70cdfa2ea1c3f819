use crossfile_canonical::Primitives;
use serde_json::Value;

use crate::{countries, dates, emails, fingerprints, phones, text};

/// Deterministic reference implementation of the primitive parser contract.
///
/// Wires the standalone helpers in this crate into the
/// [`Primitives`] trait so the canonicalization pipeline can run without a
/// production host. Stateless and copyable; one instance serves all
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferencePrimitives;

impl Primitives for ReferencePrimitives {
    fn string_value(&self, raw: &Value) -> Option<String> {
        text::string_value(raw)
    }

    fn collapse_spaces(&self, value: &str) -> String {
        text::collapse_spaces(value)
    }

    fn latinize(&self, value: &str) -> String {
        text::latinize(value)
    }

    fn parse_date(&self, value: &str, format_hint: Option<&str>) -> Option<String> {
        dates::parse_date(value, format_hint)
    }

    fn is_partial_date(&self, value: &str) -> bool {
        dates::is_partial_date(value)
    }

    fn parse_country(&self, value: &str) -> Option<String> {
        countries::parse_country(value)
    }

    fn parse_phone(&self, value: &str, country_hint: Option<&str>) -> Option<String> {
        phones::parse_phone(value, country_hint)
    }

    fn parse_email(&self, value: &str) -> Option<String> {
        emails::parse_email(value)
    }

    fn make_fingerprint(&self, value: &str) -> Option<String> {
        fingerprints::make_fingerprint(value)
    }
}
