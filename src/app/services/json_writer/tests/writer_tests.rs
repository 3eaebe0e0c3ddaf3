//! Tests for envelope serialization and file output

use std::path::Path;

use tempfile::TempDir;

use super::super::writer::JsonWriter;
use crate::app::models::Product;

fn widget() -> Product {
    Product {
        id: 1,
        name: "Widget".to_string(),
        price: 9.99,
        category: "Tools".to_string(),
        stock: 42,
    }
}

#[test]
fn test_output_path_replaces_extension() {
    let writer = JsonWriter::new("/tmp/out");
    let path = writer.output_path_for(Path::new("/data/products.csv"));
    assert_eq!(path, Path::new("/tmp/out/products.json"));
}

#[tokio::test]
async fn test_write_export_creates_document() {
    let temp_dir = TempDir::new().unwrap();
    let writer = JsonWriter::new(temp_dir.path());

    let output = writer
        .write_export(Path::new("/data/products.csv"), vec![widget()])
        .await
        .unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(parsed["source_file"], "products.csv");
    assert_eq!(parsed["record_count"], 1);
    assert_eq!(parsed["records"][0]["id"], 1);
    assert_eq!(parsed["records"][0]["name"], "Widget");
    assert_eq!(parsed["records"][0]["price"], 9.99);
    assert_eq!(parsed["records"][0]["category"], "Tools");
    assert_eq!(parsed["records"][0]["stock"], 42);
}

#[tokio::test]
async fn test_write_export_pretty_prints() {
    let temp_dir = TempDir::new().unwrap();
    let writer = JsonWriter::new(temp_dir.path());

    let output = writer
        .write_export(Path::new("products.csv"), vec![widget()])
        .await
        .unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains('\n'), "document should be formatted");
}

#[tokio::test]
async fn test_empty_records_produce_valid_envelope() {
    let temp_dir = TempDir::new().unwrap();
    let writer = JsonWriter::new(temp_dir.path());

    let output = writer
        .write_export(Path::new("empty.csv"), Vec::new())
        .await
        .unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(parsed["record_count"], 0);
    assert_eq!(parsed["records"], serde_json::json!([]));
}

#[tokio::test]
async fn test_missing_output_directory_is_created() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b");
    let writer = JsonWriter::new(&nested);

    let output = writer
        .write_export(Path::new("products.csv"), vec![widget()])
        .await
        .unwrap();

    assert!(output.exists());
    assert!(output.starts_with(&nested));
}
