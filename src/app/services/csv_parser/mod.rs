//! Tolerant CSV parser for semicolon-delimited product files
//!
//! This module provides a lossy-tolerant parser for the product CSV dialect:
//! comment and blank lines are filtered out, the header row is resolved
//! against a fixed logical schema with localized alias support, and malformed
//! data rows are skipped instead of failing the whole file.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and cancellation polling
//! - [`line_filter`] - Blank and comment line filtering
//! - [`column_mapping`] - Header resolution for the five logical fields
//! - [`record_parser`] - Individual data row processing
//! - [`field_parsers`] - Utility functions for typed field coercion
//! - [`stats`] - Parsing statistics and result structures

pub mod column_mapping;
pub mod field_parsers;
pub mod line_filter;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::{ColumnMapping, LogicalField};
pub use line_filter::filter_content_lines;
pub use parser::{ParseOutcome, ProductCsvParser};
pub use stats::{ParseResult, ParseStats};
