//! Field coercion utilities for product rows
//!
//! This module provides helper functions for extracting and coercing typed
//! values from the tokens of a data row. All numeric parsing follows an
//! invariant textual convention: ASCII digits, `.` as the decimal separator,
//! no grouping characters, no exponent. The host locale is never consulted.

use super::column_mapping::{ColumnMapping, LogicalField};
use crate::{Error, Result};

/// Get the trimmed token for a logical field from a data row.
///
/// Text fields may legitimately be empty; numeric coercion of an empty token
/// fails downstream.
pub fn get_field<'a>(
    tokens: &[&'a str],
    mapping: &ColumnMapping,
    field: LogicalField,
) -> Result<&'a str> {
    let index = mapping.index_of(field).ok_or_else(|| {
        Error::data_validation(format!("column '{}' not resolved", field.label()))
    })?;

    let value = tokens.get(index).ok_or_else(|| {
        Error::data_validation(format!("no value for column '{}'", field.label()))
    })?;

    Ok(value.trim())
}

/// Parse an i32 field from a data row
pub fn parse_required_i32(
    tokens: &[&str],
    mapping: &ColumnMapping,
    field: LogicalField,
) -> Result<i32> {
    let value = get_field(tokens, mapping, field)?;

    value.parse::<i32>().map_err(|e| {
        Error::data_validation(format!(
            "invalid integer for {}: '{}' ({})",
            field.label(),
            value,
            e
        ))
    })
}

/// Parse a decimal field from a data row using the invariant convention.
///
/// The token shape is validated explicitly before conversion: an optional
/// sign, ASCII digits, at most one `.`. Values such as `1,5`, `1_000`,
/// `1e3`, `NaN` or `inf` are rejected even where `f64::from_str` would
/// accept them.
pub fn parse_required_decimal(
    tokens: &[&str],
    mapping: &ColumnMapping,
    field: LogicalField,
) -> Result<f64> {
    let value = get_field(tokens, mapping, field)?;

    if !is_fixed_format_decimal(value) {
        return Err(Error::data_validation(format!(
            "invalid decimal for {}: '{}' (expected digits with optional '.' separator)",
            field.label(),
            value
        )));
    }

    value.parse::<f64>().map_err(|e| {
        Error::data_validation(format!(
            "invalid decimal for {}: '{}' ({})",
            field.label(),
            value,
            e
        ))
    })
}

/// Parse a text field from a data row (trimmed, may be empty)
pub fn parse_required_string(
    tokens: &[&str],
    mapping: &ColumnMapping,
    field: LogicalField,
) -> Result<String> {
    let value = get_field(tokens, mapping, field)?;
    Ok(value.to_string())
}

/// Check that a token is a fixed-format decimal: optional sign, at least one
/// ASCII digit, at most one `.`, nothing else.
fn is_fixed_format_decimal(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);

    let mut seen_digit = false;
    let mut seen_point = false;

    for byte in digits.bytes() {
        match byte {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }

    seen_digit
}

#[cfg(test)]
mod tests {
    use super::is_fixed_format_decimal;

    #[test]
    fn test_fixed_format_decimal_shapes() {
        assert!(is_fixed_format_decimal("9.99"));
        assert!(is_fixed_format_decimal("0"));
        assert!(is_fixed_format_decimal("-12.5"));
        assert!(is_fixed_format_decimal("+3"));
        assert!(is_fixed_format_decimal(".5"));
        assert!(is_fixed_format_decimal("5."));

        assert!(!is_fixed_format_decimal(""));
        assert!(!is_fixed_format_decimal("."));
        assert!(!is_fixed_format_decimal("-"));
        assert!(!is_fixed_format_decimal("9,99"));
        assert!(!is_fixed_format_decimal("1.2.3"));
        assert!(!is_fixed_format_decimal("1e3"));
        assert!(!is_fixed_format_decimal("NaN"));
        assert!(!is_fixed_format_decimal("inf"));
        assert!(!is_fixed_format_decimal("1 000"));
    }
}
