//! Parsing statistics and result structures
//!
//! This module provides types for tracking row-level success rates and
//! organizing parsed records for downstream export.

use crate::app::models::Product;

/// Parsing result with records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed product records in original file order
    pub products: Vec<Product>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of data rows encountered (header excluded)
    pub data_rows: usize,

    /// Number of records successfully parsed
    pub records_parsed: usize,

    /// Number of rows skipped due to structural or coercion failures
    pub rows_skipped: usize,

    /// Per-row skip reasons for diagnostics
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            data_rows: 0,
            records_parsed: 0,
            rows_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.data_rows == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.data_rows as f64) * 100.0
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
