use crossfile_testkit::{countries, dates, emails, fingerprints, phones, text};
use serde_json::json;

#[test]
fn string_value_coerces_scalars_only() {
    assert_eq!(text::string_value(&json!("  hello ")).as_deref(), Some("hello"));
    assert_eq!(text::string_value(&json!("   ")), None);
    assert_eq!(text::string_value(&json!(null)), None);
    assert_eq!(text::string_value(&json!(3.5)).as_deref(), Some("3.5"));
    assert_eq!(text::string_value(&json!(false)).as_deref(), Some("false"));
    assert_eq!(text::string_value(&json!(["a"])), None);
    assert_eq!(text::string_value(&json!({"a": 1})), None);
}

#[test]
fn collapse_spaces_flattens_runs() {
    assert_eq!(text::collapse_spaces(" a \t b\n\nc  "), "a b c");
    assert_eq!(text::collapse_spaces(""), "");
    assert_eq!(text::collapse_spaces("plain"), "plain");
}

#[test]
fn latinize_strips_diacritics() {
    assert_eq!(text::latinize("José"), "Jose");
    assert_eq!(text::latinize("Åse"), "Ase");
    assert_eq!(text::latinize("café"), "cafe");
    // Non-latin scripts pass through rather than disappearing.
    assert_eq!(text::latinize("Москва"), "Москва");
}

#[test]
fn parse_date_prefers_the_hint() {
    assert_eq!(
        dates::parse_date("05/03/1988", Some("%d/%m/%Y")).as_deref(),
        Some("1988-03-05")
    );
    assert_eq!(
        dates::parse_date("05/03/1988", None).as_deref(),
        Some("1988-05-03")
    );
}

#[test]
fn parse_date_tries_fixed_candidates() {
    assert_eq!(dates::parse_date("1988-03-05", None).as_deref(), Some("1988-03-05"));
    assert_eq!(dates::parse_date("03.05.1988", None).as_deref(), Some("1988-05-03"));
    assert_eq!(dates::parse_date("1988/03/05", None).as_deref(), Some("1988-03-05"));
}

#[test]
fn parse_date_pads_partial_forms() {
    assert_eq!(dates::parse_date("1988", None).as_deref(), Some("1988"));
    assert_eq!(dates::parse_date("1988-3", None).as_deref(), Some("1988-03"));
    assert_eq!(dates::parse_date("1988-13", None), None);
    assert_eq!(dates::parse_date("soon", None), None);
    assert_eq!(dates::parse_date("", None), None);
}

#[test]
fn is_partial_date_checks_shape_and_ranges() {
    assert!(dates::is_partial_date("1988"));
    assert!(dates::is_partial_date("1988-03"));
    assert!(dates::is_partial_date("1988-03-05"));
    assert!(!dates::is_partial_date("88"));
    assert!(!dates::is_partial_date("1988-13"));
    assert!(!dates::is_partial_date("1988-03-45"));
    assert!(!dates::is_partial_date("1988-3"));
    assert!(!dates::is_partial_date("hello"));
}

#[test]
fn parse_country_resolves_names_and_codes() {
    assert_eq!(countries::parse_country("Germany").as_deref(), Some("de"));
    assert_eq!(countries::parse_country("UNITED KINGDOM").as_deref(), Some("gb"));
    assert_eq!(countries::parse_country("uk").as_deref(), Some("gb"));
    assert_eq!(countries::parse_country("DE").as_deref(), Some("de"));
    assert_eq!(countries::parse_country("Atlantis"), None);
    assert_eq!(countries::parse_country(""), None);
}

#[test]
fn parse_country_is_idempotent_on_codes() {
    let resolved = countries::parse_country("Czech Republic").unwrap();
    assert_eq!(countries::parse_country(&resolved).as_deref(), Some("cz"));
}

#[test]
fn parse_phone_accepts_international_prefixes() {
    assert_eq!(
        phones::parse_phone("+49 (30) 90 18 20", None).as_deref(),
        Some("+4930901820")
    );
    assert_eq!(
        phones::parse_phone("0049 30 901820", None).as_deref(),
        Some("+4930901820")
    );
}

#[test]
fn parse_phone_uses_the_country_hint_for_national_numbers() {
    assert_eq!(
        phones::parse_phone("030 901820", Some("de")).as_deref(),
        Some("+4930901820")
    );
    assert_eq!(phones::parse_phone("030 901820", None), None);
    assert_eq!(phones::parse_phone("030 901820", Some("zz")), None);
}

#[test]
fn parse_phone_rejects_garbage() {
    assert_eq!(phones::parse_phone("extension 12", None), None);
    assert_eq!(phones::parse_phone("+12", None), None);
    assert_eq!(phones::parse_phone("+1234567890123456", None), None);
    assert_eq!(phones::parse_phone("", None), None);
}

#[test]
fn parse_email_validates_structure() {
    assert_eq!(
        emails::parse_email(" User@Example.COM ").as_deref(),
        Some("user@example.com")
    );
    assert_eq!(emails::parse_email("no-at-sign"), None);
    assert_eq!(emails::parse_email("two@@example.com"), None);
    assert_eq!(emails::parse_email("user@nodot"), None);
    assert_eq!(emails::parse_email("@example.com"), None);
}

#[test]
fn make_fingerprint_is_order_and_case_insensitive() {
    let a = fingerprints::make_fingerprint("Main Street 12");
    let b = fingerprints::make_fingerprint("12 MAIN street!");
    assert_eq!(a.as_deref(), Some("12 main street"));
    assert_eq!(a, b);
}

#[test]
fn make_fingerprint_dedupes_tokens() {
    assert_eq!(
        fingerprints::make_fingerprint("la la Land").as_deref(),
        Some("la land")
    );
}

#[test]
fn make_fingerprint_rejects_empty_material() {
    assert_eq!(fingerprints::make_fingerprint("---"), None);
    assert_eq!(fingerprints::make_fingerprint("   "), None);
    assert_eq!(fingerprints::make_fingerprint(""), None);
}

#[test]
fn make_fingerprint_is_idempotent() {
    let once = fingerprints::make_fingerprint("Kracauer, Siegfried").unwrap();
    assert_eq!(fingerprints::make_fingerprint(&once), Some(once.clone()));
}
