//! Output formatting utilities.

use crossfile_canonical::PropertyType;

/// Prints the types table header.
pub fn print_types_header() {
    println!("{:<12} {}", "TYPE", "INDEX");
    println!("{}", "-".repeat(30));
}

/// Formats one registered type as a table row.
pub fn format_type_row(property: PropertyType) -> String {
    let bucket = property
        .index_invert()
        .map(|category| category.as_str())
        .unwrap_or("-");
    format!("{:<12} {}", property.name(), bucket)
}
