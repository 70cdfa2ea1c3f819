use chrono::NaiveDate;
use regex::Regex;

/// Formats tried in order when no explicit hint is configured.
const FALLBACK_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%m/%d/%Y", "%Y/%m/%d"];

/// Parses a date to `YYYY-MM-DD`, or to a zero-padded partial form.
///
/// An explicit format hint wins when it matches. Otherwise the fixed
/// candidate list is tried, and partial `YYYY` / `YYYY-MM` inputs pass
/// through re-padded. Returns `None` for anything else.
pub fn parse_date(text: &str, format_hint: Option<&str>) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Some(format) = format_hint {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }
    for format in FALLBACK_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }
    partial_date(text)
}

/// Whether the text is a valid partial (`YYYY`, `YYYY-MM`) or full
/// (`YYYY-MM-DD`) date, with month and day in plausible ranges.
pub fn is_partial_date(text: &str) -> bool {
    let pattern = Regex::new(r"^\d{4}(?:-(\d{2})(?:-(\d{2}))?)?$").expect("invalid regex");
    let captures = match pattern.captures(text) {
        Some(captures) => captures,
        None => return false,
    };
    let month_ok = captures
        .get(1)
        .map_or(true, |m| matches!(m.as_str().parse::<u32>(), Ok(1..=12)));
    let day_ok = captures
        .get(2)
        .map_or(true, |d| matches!(d.as_str().parse::<u32>(), Ok(1..=31)));
    month_ok && day_ok
}

fn partial_date(text: &str) -> Option<String> {
    let pattern = Regex::new(r"^(\d{4})(?:-(\d{1,2}))?$").expect("invalid regex");
    let captures = pattern.captures(text)?;
    let year = captures.get(1)?.as_str();
    match captures.get(2) {
        None => Some(year.to_string()),
        Some(month) => {
            let month: u32 = month.as_str().parse().ok()?;
            if (1..=12).contains(&month) {
                Some(format!("{}-{:02}", year, month))
            } else {
                None
            }
        }
    }
}
