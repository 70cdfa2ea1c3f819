//! Clean command implementation.

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

    for value in values {
        let raw = serde_json::Value::String(value.clone());
        let cleaned = property.clean(&primitives, &raw, &record, &config);
        if json {
            println!(
                "{}",
                serde_json::to_string(&json!({
                    "raw": value,
                    "cleaned": cleaned,
                }))?
            );
        } else {
            match cleaned {
                Some(cleaned) => println!("{}", cleaned),
                None => println!("-"),
            }
        }
    }
    Ok(())
}
