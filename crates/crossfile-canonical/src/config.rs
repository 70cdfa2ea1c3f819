use serde::{Deserialize, Serialize};

/// Per-field options recognized by the cleaning pipeline.
///
/// Field schemas attach one of these to each mapped column. Unrecognized
/// keys are ignored on deserialization; the pipeline reads, never mutates,
/// the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Date parsing hint (strftime-style format string); consumed only by
    /// the `date` type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Phone parsing country hint (ISO 3166-1 alpha-2); consumed only by
    /// the `phone` type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}
