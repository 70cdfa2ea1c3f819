use std::collections::BTreeSet;
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::FieldConfig;
use crate::primitives::Primitives;
use crate::RecordJson;

/// Inverted-index bucket a property type's normalized values populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexCategory {
    /// Person and organization names.
    Names,
    /// Calendar dates, possibly partial.
    Dates,
    /// Resolved country codes.
    Countries,
    /// Postal addresses.
    Addresses,
    /// Telephone numbers.
    Phones,
    /// Email addresses.
    Emails,
    /// Registration and document identifiers.
    Identifiers,
}

impl IndexCategory {
    /// Bucket name as used by downstream index configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            IndexCategory::Names => "names",
            IndexCategory::Dates => "dates",
            IndexCategory::Countries => "countries",
            IndexCategory::Addresses => "addresses",
            IndexCategory::Phones => "phones",
            IndexCategory::Emails => "emails",
            IndexCategory::Identifiers => "identifiers",
        }
    }
}

impl fmt::Display for IndexCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field type governing how raw values are cleaned, normalized, and
/// fingerprinted.
///
/// The set is closed: field schemas select a variant through
/// [`resolve_type`](crate::registry::resolve_type), and each variant
/// overrides only the pipeline stages where its behavior differs from the
/// generic string treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    /// Generic free-text field.
    String,
    /// Person or organization name.
    Name,
    /// Web address.
    Url,
    /// Calendar date, possibly partial.
    Date,
    /// Country name or code.
    Country,
    /// Postal address.
    Address,
    /// Telephone number.
    Phone,
    /// Email address.
    Email,
    /// Registration or document identifier.
    Identifier,
}

impl PropertyType {
    /// All registered property types, in registry order.
    pub const ALL: [PropertyType; 9] = [
        PropertyType::String,
        PropertyType::Name,
        PropertyType::Url,
        PropertyType::Date,
        PropertyType::Country,
        PropertyType::Address,
        PropertyType::Phone,
        PropertyType::Email,
        PropertyType::Identifier,
    ];

    /// Registered name of this type.
    pub const fn name(self) -> &'static str {
        match self {
            PropertyType::String => "string",
            PropertyType::Name => "name",
            PropertyType::Url => "url",
            PropertyType::Date => "date",
            PropertyType::Country => "country",
            PropertyType::Address => "address",
            PropertyType::Phone => "phone",
            PropertyType::Email => "email",
            PropertyType::Identifier => "identifier",
        }
    }

    /// Inverted-index bucket this type's normalized values populate, if any.
    pub const fn index_invert(self) -> Option<IndexCategory> {
        match self {
            PropertyType::String | PropertyType::Url => None,
            PropertyType::Name => Some(IndexCategory::Names),
            PropertyType::Date => Some(IndexCategory::Dates),
            PropertyType::Country => Some(IndexCategory::Countries),
            PropertyType::Address => Some(IndexCategory::Addresses),
            PropertyType::Phone => Some(IndexCategory::Phones),
            PropertyType::Email => Some(IndexCategory::Emails),
            PropertyType::Identifier => Some(IndexCategory::Identifiers),
        }
    }

    /// Cleans a raw field value into its display form.
    ///
    /// Coerces the raw value to text and collapses whitespace; the parsing
    /// variants (date, country, phone, email) then run their parser over
    /// the collapsed text and fall back to it when parsing fails, so data a
    /// user entered is never dropped. Returns `None` only when the raw
    /// value has no usable textual form at all. Never errors.
    pub fn clean(
        self,
        primitives: &dyn Primitives,
        raw: &Value,
        _record: &RecordJson,
        config: &FieldConfig,
    ) -> Option<String> {
        let value = primitives.string_value(raw)?;
        let value = primitives.collapse_spaces(&value);
        if value.is_empty() {
            return None;
        }
        let parsed = match self {
            PropertyType::Date => primitives.parse_date(&value, config.format.as_deref()),
            PropertyType::Country => primitives.parse_country(&value),
            PropertyType::Phone => primitives.parse_phone(&value, config.country.as_deref()),
            PropertyType::Email => primitives.parse_email(&value),
            _ => return Some(value),
        };
        if parsed.is_none() {
            debug!(property = self.name(), "parser fallback to cleaned text");
        }
        Some(parsed.unwrap_or(value))
    }

    /// Normalizes a batch of cleaned values into comparison forms.
    ///
    /// Runs [`normalize_value`](Self::normalize_value) over every input,
    /// discards values that yield no candidate, and unions the rest into a
    /// single set. Normalizing an already-normalized set again yields the
    /// same set; iteration order is not meaningful.
    pub fn normalize<I, S>(self, primitives: &dyn Primitives, values: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut results = BTreeSet::new();
        for value in values {
            results.extend(self.normalize_value(primitives, value.as_ref()));
        }
        results
    }

    /// Produces zero, one, or several candidate comparison forms for a
    /// single cleaned value.
    ///
    /// Strict counterpart to [`clean`](Self::clean): a value that fails
    /// structural validation yields nothing here rather than a best-effort
    /// form, so malformed input cannot pollute the comparison index.
    pub fn normalize_value(self, primitives: &dyn Primitives, value: &str) -> Vec<String> {
        match self {
            PropertyType::Name => {
                let collapsed = primitives.collapse_spaces(value);
                if collapsed.is_empty() {
                    return Vec::new();
                }
                // Re-collapse: dropping combining marks can leave double spaces.
                let latin = primitives.collapse_spaces(&primitives.latinize(&collapsed));
                let mut forms = vec![collapsed];
                if !latin.is_empty() {
                    forms.push(latin);
                }
                forms
            }
            PropertyType::Date => {
                if primitives.is_partial_date(value) {
                    vec![value.to_string()]
                } else {
                    Vec::new()
                }
            }
            PropertyType::Country => primitives.parse_country(value).into_iter().collect(),
            PropertyType::Address => primitives.make_fingerprint(value).into_iter().collect(),
            PropertyType::Email => primitives.parse_email(value).into_iter().collect(),
            PropertyType::Identifier => {
                let strip = Regex::new(r"[^A-Za-z0-9]").expect("invalid regex");
                let stripped = strip.replace_all(value, "").to_uppercase();
                if stripped.is_empty() {
                    Vec::new()
                } else {
                    vec![stripped]
                }
            }
            PropertyType::String | PropertyType::Url | PropertyType::Phone => self
                .clean(
                    primitives,
                    &Value::String(value.to_string()),
                    &RecordJson::Null,
                    &FieldConfig::default(),
                )
                .into_iter()
                .collect(),
        }
    }

    /// Computes blocking fingerprints over a batch of values.
    ///
    /// Defaults to no fingerprints. Name fields produce one blocking key
    /// per value and drop the values the fingerprint function cannot key;
    /// absent keys never appear in the result.
    pub fn fingerprint<I, S>(self, primitives: &dyn Primitives, values: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // TODO: decide whether address/phone/email keys should also feed
        // blocking; today only names do.
        match self {
            PropertyType::Name => values
                .into_iter()
                .filter_map(|value| primitives.make_fingerprint(value.as_ref()))
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
