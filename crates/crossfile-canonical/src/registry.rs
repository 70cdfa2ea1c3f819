use tracing::warn;

use crate::errors::ResolveError;
use crate::property::PropertyType;

/// Name-to-variant mapping; the single source of truth for registered
/// property types.
///
/// `uri` aliases `url`. The table is process-wide immutable state and is
/// safe to share across threads without synchronization.
const REGISTRY: &[(&str, PropertyType)] = &[
    ("string", PropertyType::String),
    ("name", PropertyType::Name),
    ("date", PropertyType::Date),
    ("country", PropertyType::Country),
    ("address", PropertyType::Address),
    ("phone", PropertyType::Phone),
    ("email", PropertyType::Email),
    ("url", PropertyType::Url),
    ("uri", PropertyType::Url),
    ("identifier", PropertyType::Identifier),
];

/// Looks up a property type by its configured name.
///
/// Lookup is case-insensitive and ignores surrounding whitespace. Fails
/// with [`ResolveError::UnknownType`] when the name matches no registered
/// type; this indicates a misconfigured field schema and must propagate
/// to the caller rather than be swallowed.
pub fn resolve_type(name: &str) -> Result<PropertyType, ResolveError> {
    let trimmed = name.trim();
    let needle = trimmed.to_lowercase();
    for (registered, property) in REGISTRY {
        if *registered == needle {
            return Ok(*property);
        }
    }
    warn!(name = trimmed, "unknown property type");
    Err(ResolveError::UnknownType {
        name: trimmed.to_string(),
    })
}
