use regex::Regex;

/// Validates and canonicalizes an email address, lower-casing the result.
///
/// Structural check only: one `@`, a non-empty local part, and a dotted
/// domain. Deliverability is out of scope.
pub fn parse_email(text: &str) -> Option<String> {
    let candidate = text.trim().to_lowercase();
    let pattern = Regex::new(r"^[a-z0-9][a-z0-9._%+-]*@[a-z0-9][a-z0-9.-]*\.[a-z]{2,}$")
        .expect("invalid regex");
    if pattern.is_match(&candidate) {
        Some(candidate)
    } else {
        None
    }
}
