//! Fingerprint command implementation.

use crossfile_canonical::{resolve_type, FieldConfig, RecordJson};
use crossfile_testkit::ReferencePrimitives;
use serde_json::json;

use crate::input;

pub fn run(
    type_name: String,
    json: bool,
    values: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let property = resolve_type(&type_name)?;
    let config = FieldConfig::default();
    let primitives = ReferencePrimitives;
    let record = RecordJson::Null;
    let values = input::gather_values(values)?;

    let cleaned: Vec<String> = values
        .iter()
        .filter_map(|value| {
            let raw = serde_json::Value::String(value.clone());
            property.clean(&primitives, &raw, &record, &config)
        })
        .collect();
    let fingerprints = property.fingerprint(&primitives, &cleaned);

    if json {
        println!(
            "{}",
            serde_json::to_string(&json!({
                "type": property.name(),
                "fingerprints": fingerprints,
            }))?
        );
    } else {
        for fingerprint in fingerprints {
            println!("{}", fingerprint);
        }
    }
    Ok(())
}
