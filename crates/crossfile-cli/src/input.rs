//! Value input helpers.

use std::io::{self, BufRead};

/// Returns the argument values, or stdin lines when no arguments were
/// given.
pub fn gather_values(values: Vec<String>) -> Result<Vec<String>, io::Error> {
    if !values.is_empty() {
        return Ok(values);
    }
    let stdin = io::stdin();
    let mut collected = Vec::new();
    for line in stdin.lock().lines() {
        collected.push(line?);
    }
    Ok(collected)
}
