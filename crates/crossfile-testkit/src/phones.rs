/// Dial codes for the country hints recognized by the reference parser.
const DIAL_CODES: &[(&str, &str)] = &[
    ("ae", "971"),
    ("am", "374"),
    ("at", "43"),
    ("au", "61"),
    ("az", "994"),
    ("ba", "387"),
    ("be", "32"),
    ("bg", "359"),
    ("br", "55"),
    ("by", "375"),
    ("ca", "1"),
    ("ch", "41"),
    ("cn", "86"),
    ("cz", "420"),
    ("de", "49"),
    ("dk", "45"),
    ("ee", "372"),
    ("eg", "20"),
    ("es", "34"),
    ("fi", "358"),
    ("fr", "33"),
    ("gb", "44"),
    ("ge", "995"),
    ("gr", "30"),
    ("hr", "385"),
    ("hu", "36"),
    ("ie", "353"),
    ("il", "972"),
    ("in", "91"),
    ("it", "39"),
    ("jp", "81"),
    ("kz", "7"),
    ("lt", "370"),
    ("lv", "371"),
    ("md", "373"),
    ("me", "382"),
    ("mk", "389"),
    ("mx", "52"),
    ("ng", "234"),
    ("nl", "31"),
    ("no", "47"),
    ("nz", "64"),
    ("pl", "48"),
    ("pt", "351"),
    ("ro", "40"),
    ("rs", "381"),
    ("ru", "7"),
    ("sa", "966"),
    ("se", "46"),
    ("si", "386"),
    ("sk", "421"),
    ("tr", "90"),
    ("ua", "380"),
    ("us", "1"),
    ("uz", "998"),
    ("za", "27"),
];

/// Characters accepted as separators inside a phone number.
const SEPARATORS: &str = " -().\u{a0}/";

/// Normalizes a phone number to a `+`-prefixed digit string.
///
/// `+` and `00` international prefixes are accepted directly; national
/// numbers need a country hint, which supplies the dial code (a national
/// trunk `0` is dropped). Numbers containing anything other than digits
/// and common separators, or falling outside the 7-15 digit envelope,
/// are rejected.
pub fn parse_phone(text: &str, country_hint: Option<&str>) -> Option<String> {
    let trimmed = text.trim();
    let (international, rest) = if let Some(rest) = trimmed.strip_prefix('+') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix("00") {
        (true, rest)
    } else {
        (false, trimmed)
    };
    if rest
        .chars()
        .any(|c| !c.is_ascii_digit() && !SEPARATORS.contains(c))
    {
        return None;
    }
    let digits: String = rest.chars().filter(|c| c.is_ascii_digit()).collect();

    if international {
        if (7..=15).contains(&digits.len()) {
            return Some(format!("+{}", digits));
        }
        return None;
    }

    let hint = country_hint?.trim().to_lowercase();
    let dial = DIAL_CODES
        .iter()
        .find(|(code, _)| *code == hint)
        .map(|(_, dial)| *dial)?;
    let national = digits.strip_prefix('0').unwrap_or(&digits);
    let full = format!("{}{}", dial, national);
    if (7..=15).contains(&full.len()) {
        Some(format!("+{}", full))
    } else {
        None
    }
}
