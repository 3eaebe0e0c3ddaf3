//! Header resolution for the fixed product schema
//!
//! This module resolves the five logical product fields against the observed
//! header row. Source files exist with German and English headers, so each
//! logical field carries an explicit alias set.

use std::collections::HashMap;

use crate::constants::{FIELD_DELIMITER, header_aliases};
use crate::{Error, Result};

/// The five logical fields every product file must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalField {
    Id,
    Name,
    Price,
    Category,
    Stock,
}

impl LogicalField {
    /// All logical fields in output order
    pub const ALL: [LogicalField; 5] = [
        LogicalField::Id,
        LogicalField::Name,
        LogicalField::Price,
        LogicalField::Category,
        LogicalField::Stock,
    ];

    /// Header aliases accepted for this field (matched case-insensitively)
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            LogicalField::Id => header_aliases::ID,
            LogicalField::Name => header_aliases::NAME,
            LogicalField::Price => header_aliases::PRICE,
            LogicalField::Category => header_aliases::CATEGORY,
            LogicalField::Stock => header_aliases::STOCK,
        }
    }

    /// Human-readable label for error messages
    pub fn label(&self) -> &'static str {
        match self {
            LogicalField::Id => "Id",
            LogicalField::Name => "Name",
            LogicalField::Price => "Preis/Price",
            LogicalField::Category => "Kategorie/Category",
            LogicalField::Stock => "Bestand/Stock",
        }
    }
}

/// Resolved column positions for one file's header row.
///
/// Built once per file immediately after the header line is read, then
/// read-only for the remainder of that file's processing.
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Logical field to zero-based column index
    field_to_index: HashMap<LogicalField, usize>,

    /// Number of tokens in the header row; data rows must match this exactly
    pub column_count: usize,
}

impl ColumnMapping {
    /// Resolve the header line into column positions.
    ///
    /// The line is split on the field delimiter and each token is trimmed.
    /// For every logical field the first token (by position) matching one of
    /// its aliases wins, so duplicate header columns resolve to the leftmost
    /// occurrence. Extra columns are ignored.
    ///
    /// Fails with [`Error::MissingColumns`] listing every unresolvable field;
    /// this aborts processing of the whole file.
    pub fn resolve(header_line: &str, file: &str) -> Result<Self> {
        let tokens: Vec<&str> = header_line
            .split(FIELD_DELIMITER)
            .map(str::trim)
            .collect();

        let mut field_to_index = HashMap::new();
        let mut missing = Vec::new();

        for field in LogicalField::ALL {
            let position = tokens.iter().position(|token| {
                field
                    .aliases()
                    .iter()
                    .any(|alias| token.eq_ignore_ascii_case(alias))
            });

            match position {
                Some(index) => {
                    field_to_index.insert(field, index);
                }
                None => missing.push(field.label()),
            }
        }

        if !missing.is_empty() {
            return Err(Error::missing_columns(file, missing.join(", ")));
        }

        Ok(ColumnMapping {
            field_to_index,
            column_count: tokens.len(),
        })
    }

    /// Get the column index for a logical field.
    ///
    /// Every field is guaranteed present after a successful [`resolve`].
    ///
    /// [`resolve`]: ColumnMapping::resolve
    pub fn index_of(&self, field: LogicalField) -> Option<usize> {
        self.field_to_index.get(&field).copied()
    }
}
