//! Data models for batch conversion
//!
//! This module contains the core data structures for representing parsed
//! product records and the JSON export envelope written per input file.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single parsed product record.
///
/// A `Product` only exists if all five fields of its source row coerced
/// successfully; partially parsed rows are discarded by the row parser and
/// never reach this type. Field declaration order is the serialization order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Numeric identifier. Uniqueness is not enforced; duplicate ids pass
    /// through unmodified.
    pub id: i32,

    /// Product name, whitespace-trimmed at parse time
    pub name: String,

    /// Price parsed with the invariant decimal convention (`.` separator)
    pub price: f64,

    /// Product category
    pub category: String,

    /// Units in stock
    pub stock: i32,
}

/// Export envelope written as the JSON document for one input file.
///
/// Constructed fresh per file and never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductExport {
    /// File name (not path) of the source CSV file
    pub source_file: String,

    /// Conversion timestamp, ISO-8601 extended format in UTC
    pub converted_at: String,

    /// Exact count of records in `records`, not of input data lines
    pub record_count: usize,

    /// Parsed records in original file order; skipped rows are simply absent
    pub records: Vec<Product>,
}

impl ProductExport {
    /// Build an envelope for the given source file, stamped with the current
    /// UTC instant.
    pub fn new(source_file: impl Into<String>, records: Vec<Product>) -> Self {
        Self::with_timestamp(source_file, records, Utc::now())
    }

    /// Build an envelope with an explicit timestamp (deterministic tests)
    pub fn with_timestamp(
        source_file: impl Into<String>,
        records: Vec<Product>,
        converted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            source_file: source_file.into(),
            converted_at: converted_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            record_count: records.len(),
            records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_count_matches_records() {
        let records = vec![
            Product {
                id: 1,
                name: "Widget".to_string(),
                price: 9.99,
                category: "Tools".to_string(),
                stock: 42,
            },
            Product {
                id: 2,
                name: "Gadget".to_string(),
                price: 3.5,
                category: "Tools".to_string(),
                stock: 7,
            },
        ];

        let export = ProductExport::new("products.csv", records);
        assert_eq!(export.record_count, 2);
        assert_eq!(export.source_file, "products.csv");
    }

    #[test]
    fn test_empty_export() {
        let export = ProductExport::new("empty.csv", Vec::new());
        assert_eq!(export.record_count, 0);
        assert!(export.records.is_empty());
    }

    #[test]
    fn test_serialization_field_order() {
        let export = ProductExport::with_timestamp(
            "products.csv",
            vec![Product {
                id: 1,
                name: "Widget".to_string(),
                price: 9.99,
                category: "Tools".to_string(),
                stock: 42,
            }],
            chrono::DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        );

        let json = serde_json::to_string(&export).unwrap();

        // Top-level key order
        let source_pos = json.find("source_file").unwrap();
        let converted_pos = json.find("converted_at").unwrap();
        let count_pos = json.find("record_count").unwrap();
        let records_pos = json.find("\"records\"").unwrap();
        assert!(source_pos < converted_pos);
        assert!(converted_pos < count_pos);
        assert!(count_pos < records_pos);

        // Record key order: id, name, price, category, stock
        let id_pos = json.find("\"id\"").unwrap();
        let name_pos = json.find("\"name\"").unwrap();
        let price_pos = json.find("\"price\"").unwrap();
        let category_pos = json.find("\"category\"").unwrap();
        let stock_pos = json.find("\"stock\"").unwrap();
        assert!(id_pos < name_pos && name_pos < price_pos);
        assert!(price_pos < category_pos && category_pos < stock_pos);
    }

    #[test]
    fn test_timestamp_is_utc_iso8601() {
        let export = ProductExport::new("products.csv", Vec::new());
        assert!(export.converted_at.ends_with('Z'));
        assert!(
            chrono::DateTime::parse_from_rfc3339(&export.converted_at).is_ok(),
            "timestamp should be RFC 3339 / ISO-8601: {}",
            export.converted_at
        );
    }
}
