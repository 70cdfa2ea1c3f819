//! Normalize command implementation.

use crossfile_canonical::{resolve_type, FieldConfig, RecordJson};
use crossfile_testkit::ReferencePrimitives;
use serde_json::json;

use crate::input;

pub fn run(
    type_name: String,
    format: Option<String>,
    country: Option<String>,
    json: bool,
    values: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let property = resolve_type(&type_name)?;
    let config = FieldConfig { format, country };
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
    let normalized = property.normalize(&primitives, &cleaned);

    if json {
        println!(
            "{}",
            serde_json::to_string(&json!({
                "type": property.name(),
                "normalized": normalized,
            }))?
        );
    } else {
        for value in normalized {
            println!("{}", value);
        }
    }
    Ok(())
}
