/// English country names and common aliases, mapped to ISO 3166-1 alpha-2
/// codes. Not exhaustive; hosts needing full coverage plug in their own
/// resolver.
const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("albania", "al"),
    ("america", "us"),
    ("armenia", "am"),
    ("australia", "au"),
    ("austria", "at"),
    ("azerbaijan", "az"),
    ("belarus", "by"),
    ("belgium", "be"),
    ("bosnia and herzegovina", "ba"),
    ("brazil", "br"),
    ("bulgaria", "bg"),
    ("canada", "ca"),
    ("china", "cn"),
    ("croatia", "hr"),
    ("cyprus", "cy"),
    ("czech republic", "cz"),
    ("czechia", "cz"),
    ("denmark", "dk"),
    ("egypt", "eg"),
    ("england", "gb"),
    ("estonia", "ee"),
    ("finland", "fi"),
    ("france", "fr"),
    ("georgia", "ge"),
    ("germany", "de"),
    ("great britain", "gb"),
    ("greece", "gr"),
    ("hungary", "hu"),
    ("iceland", "is"),
    ("india", "in"),
    ("ireland", "ie"),
    ("israel", "il"),
    ("italy", "it"),
    ("japan", "jp"),
    ("kazakhstan", "kz"),
    ("kosovo", "xk"),
    ("latvia", "lv"),
    ("lithuania", "lt"),
    ("luxembourg", "lu"),
    ("malta", "mt"),
    ("mexico", "mx"),
    ("moldova", "md"),
    ("montenegro", "me"),
    ("netherlands", "nl"),
    ("new zealand", "nz"),
    ("nigeria", "ng"),
    ("north macedonia", "mk"),
    ("norway", "no"),
    ("poland", "pl"),
    ("portugal", "pt"),
    ("romania", "ro"),
    ("russia", "ru"),
    ("russian federation", "ru"),
    ("saudi arabia", "sa"),
    ("serbia", "rs"),
    ("slovakia", "sk"),
    ("slovenia", "si"),
    ("south africa", "za"),
    ("spain", "es"),
    ("sweden", "se"),
    ("switzerland", "ch"),
    ("turkey", "tr"),
    ("uk", "gb"),
    ("ukraine", "ua"),
    ("united arab emirates", "ae"),
    ("united kingdom", "gb"),
    ("united states", "us"),
    ("united states of america", "us"),
    ("usa", "us"),
    ("uzbekistan", "uz"),
];

/// Resolves a country name or alpha-2 code to a lower-case alpha-2 code.
///
/// Name aliases are checked first (so `uk` resolves to `gb`), then any
/// bare two-letter token is taken to be a code. Codes resolve to
/// themselves, keeping resolution idempotent.
pub fn parse_country(text: &str) -> Option<String> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    for (name, code) in COUNTRY_NAMES {
        if *name == needle {
            return Some((*code).to_string());
        }
    }
    if needle.len() == 2 && needle.chars().all(|c| c.is_ascii_lowercase()) {
        return Some(needle);
    }
    None
}
