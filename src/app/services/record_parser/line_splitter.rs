//! Quote-aware splitting of data lines into raw fields

use crate::constants::{FIELD_DELIMITER, QUOTE_CHAR};

/// Split a data line on commas outside double-quoted regions
///
/// A quote character toggles the quoted state and is never copied into the
/// output; a comma inside a quoted region is literal. There is no escaped
/// quote handling: `""` simply toggles twice. Each field is trimmed.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            QUOTE_CHAR => in_quotes = !in_quotes,
            FIELD_DELIMITER if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());
    fields
}
