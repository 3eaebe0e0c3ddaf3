//! Individual data row parsing
//!
//! This module turns one post-header data line into a [`Product`], or an
//! error the orchestrating parser treats as a row skip. A record is
//! all-or-nothing: if any of the five fields fails to coerce, no partial
//! record is constructed.

use super::column_mapping::{ColumnMapping, LogicalField};
use super::field_parsers::{parse_required_decimal, parse_required_i32, parse_required_string};
use crate::app::models::Product;
use crate::constants::FIELD_DELIMITER;
use crate::{Error, Result};

/// Parse a single data row against the resolved header mapping.
///
/// The row is split on the field delimiter and rejected outright when its
/// token count differs from the header's. Errors returned here are row-level
/// skip signals, not file-level failures.
pub fn parse_product_row(line: &str, mapping: &ColumnMapping) -> Result<Product> {
    let tokens: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    if tokens.len() != mapping.column_count {
        return Err(Error::data_validation(format!(
            "expected {} fields, found {}",
            mapping.column_count,
            tokens.len()
        )));
    }

    let id = parse_required_i32(&tokens, mapping, LogicalField::Id)?;
    let name = parse_required_string(&tokens, mapping, LogicalField::Name)?;
    let price = parse_required_decimal(&tokens, mapping, LogicalField::Price)?;
    let category = parse_required_string(&tokens, mapping, LogicalField::Category)?;
    let stock = parse_required_i32(&tokens, mapping, LogicalField::Stock)?;

    Ok(Product {
        id,
        name,
        price,
        category,
        stock,
    })
}
