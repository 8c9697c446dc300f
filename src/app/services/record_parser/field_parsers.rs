//! Field parsing utilities for registration rows
//!
//! This module provides helper functions for extracting and converting
//! individual fields. Numeric parsing is deliberately lenient: a value is
//! read from its leading numeric prefix, and anything that cannot be read, is
//! negative, or is not finite becomes 0.

use std::sync::LazyLock;

use regex::Regex;

use super::column_mapping::{ColumnMapping, RecordField};
use crate::{Error, Result};

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+").expect("integer pattern is valid"));

static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?").expect("float pattern is valid")
});

/// Parse the leading integer of a value, defaulting to 0
///
/// `"2022"`, `"2022.0"` and `"2022 (est)"` all read as 2022. Empty, non-numeric,
/// negative and out-of-range values read as 0.
pub fn lenient_u32(value: &str) -> u32 {
    LEADING_INTEGER
        .find(value.trim())
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .filter(|n| *n >= 0)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

/// Parse the leading decimal number of a value, defaulting to 0
pub fn lenient_f64(value: &str) -> f64 {
    LEADING_FLOAT
        .find(value.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite() && *n >= 0.0)
        .unwrap_or(0.0)
}

/// Get the raw value of a field
///
/// Returns `Ok(None)` when the header has no column for the field, and an
/// error when the column exists but the row has no value at that index.
pub fn get_field<'a>(
    fields: &'a [String],
    mapping: &ColumnMapping,
    field: RecordField,
    line_index: usize,
) -> Result<Option<&'a str>> {
    let Some(index) = mapping.get_index(field) else {
        return Ok(None);
    };

    fields
        .get(index)
        .map(|value| Some(value.as_str()))
        .ok_or_else(|| {
            Error::field_extraction(
                line_index,
                format!(
                    "no value for column {} ('{}'), row has {} fields",
                    index,
                    field.name(),
                    fields.len()
                ),
            )
        })
}

/// Parse a string field, defaulting to empty when the column is absent
pub fn parse_string(
    fields: &[String],
    mapping: &ColumnMapping,
    field: RecordField,
    line_index: usize,
) -> Result<String> {
    Ok(get_field(fields, mapping, field, line_index)?
        .unwrap_or_default()
        .to_string())
}

/// Parse an integer field, defaulting to 0
pub fn parse_u32(
    fields: &[String],
    mapping: &ColumnMapping,
    field: RecordField,
    line_index: usize,
) -> Result<u32> {
    Ok(get_field(fields, mapping, field, line_index)?
        .map(lenient_u32)
        .unwrap_or(0))
}

/// Parse a decimal field, defaulting to 0
pub fn parse_f64(
    fields: &[String],
    mapping: &ColumnMapping,
    field: RecordField,
    line_index: usize,
) -> Result<f64> {
    Ok(get_field(fields, mapping, field, line_index)?
        .map(lenient_f64)
        .unwrap_or(0.0))
}
