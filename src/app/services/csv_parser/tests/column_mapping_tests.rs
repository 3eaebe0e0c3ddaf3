//! Tests for header resolution and alias handling

use super::super::column_mapping::{ColumnMapping, LogicalField};
use crate::Error;

#[test]
fn test_german_header_resolves() {
    let mapping = ColumnMapping::resolve("Id;Name;Preis;Kategorie;Bestand", "test.csv").unwrap();

    assert_eq!(mapping.index_of(LogicalField::Id), Some(0));
    assert_eq!(mapping.index_of(LogicalField::Name), Some(1));
    assert_eq!(mapping.index_of(LogicalField::Price), Some(2));
    assert_eq!(mapping.index_of(LogicalField::Category), Some(3));
    assert_eq!(mapping.index_of(LogicalField::Stock), Some(4));
    assert_eq!(mapping.column_count, 5);
}

#[test]
fn test_english_header_resolves() {
    let mapping = ColumnMapping::resolve("id;name;price;category;stock", "test.csv").unwrap();

    assert_eq!(mapping.index_of(LogicalField::Price), Some(2));
    assert_eq!(mapping.index_of(LogicalField::Stock), Some(4));
}

#[test]
fn test_case_insensitive_and_reordered() {
    let mapping = ColumnMapping::resolve("BESTAND;kategorie;PREIS;name;ID", "test.csv").unwrap();

    assert_eq!(mapping.index_of(LogicalField::Stock), Some(0));
    assert_eq!(mapping.index_of(LogicalField::Category), Some(1));
    assert_eq!(mapping.index_of(LogicalField::Price), Some(2));
    assert_eq!(mapping.index_of(LogicalField::Name), Some(3));
    assert_eq!(mapping.index_of(LogicalField::Id), Some(4));
}

#[test]
fn test_tokens_are_trimmed() {
    let mapping =
        ColumnMapping::resolve(" Id ; Name ;  Preis ; Kategorie ; Bestand ", "test.csv").unwrap();
    assert_eq!(mapping.index_of(LogicalField::Price), Some(2));
}

#[test]
fn test_extra_columns_ignored_but_counted() {
    let mapping =
        ColumnMapping::resolve("Id;Name;Preis;Kategorie;Bestand;Lieferant", "test.csv").unwrap();

    assert_eq!(mapping.column_count, 6);
    assert_eq!(mapping.index_of(LogicalField::Stock), Some(4));
}

#[test]
fn test_missing_column_fails_with_names() {
    let result = ColumnMapping::resolve("Id;Name;Kategorie;Bestand", "test.csv");

    match result {
        Err(Error::MissingColumns { file, columns }) => {
            assert_eq!(file, "test.csv");
            assert!(columns.contains("Preis/Price"));
        }
        other => panic!("expected MissingColumns, got {:?}", other),
    }
}

#[test]
fn test_all_missing_columns_listed() {
    let result = ColumnMapping::resolve("foo;bar", "test.csv");

    match result {
        Err(Error::MissingColumns { columns, .. }) => {
            assert!(columns.contains("Id"));
            assert!(columns.contains("Name"));
            assert!(columns.contains("Preis/Price"));
            assert!(columns.contains("Kategorie/Category"));
            assert!(columns.contains("Bestand/Stock"));
        }
        other => panic!("expected MissingColumns, got {:?}", other),
    }
}

#[test]
fn test_duplicate_header_first_match_wins() {
    let mapping =
        ColumnMapping::resolve("Id;Preis;Name;Preis;Kategorie;Bestand", "test.csv").unwrap();
    assert_eq!(mapping.index_of(LogicalField::Price), Some(1));
}

#[test]
fn test_mixed_language_header() {
    let mapping = ColumnMapping::resolve("Id;Name;Price;Kategorie;Stock", "test.csv").unwrap();

    assert_eq!(mapping.index_of(LogicalField::Price), Some(2));
    assert_eq!(mapping.index_of(LogicalField::Category), Some(3));
    assert_eq!(mapping.index_of(LogicalField::Stock), Some(4));
}
