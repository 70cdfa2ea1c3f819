//! Types command implementation.

use crossfile_canonical::PropertyType;
use serde_json::json;

use crate::output;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        for property in PropertyType::ALL {
            println!(
                "{}",
                serde_json::to_string(&json!({
                    "name": property.name(),
                    "index_invert": property.index_invert(),
                }))?
            );
        }
        return Ok(());
    }

    output::print_types_header();
    for property in PropertyType::ALL {
        println!("{}", output::format_type_row(property));
    }
    Ok(())
}
