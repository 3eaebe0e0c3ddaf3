//! Application constants for the batch converter
//!
//! This module contains the input format constants, the logical schema
//! definition, and default values used throughout the application.

// =============================================================================
// Input Format
// =============================================================================

/// Field delimiter used by the supported CSV dialect
pub const FIELD_DELIMITER: char = ';';

/// Prefix marking a comment line (after leading whitespace is stripped)
pub const COMMENT_PREFIX: char = '#';

/// Input file extension (matched case-insensitively)
pub const CSV_EXTENSION: &str = "csv";

/// Output file extension
pub const JSON_EXTENSION: &str = "json";

// =============================================================================
// Logical Schema
// =============================================================================

/// Header aliases accepted for each logical field.
///
/// Source files exist with both German and English headers, so the localized
/// names are treated as an explicit alias set. Matching is case-insensitive.
pub mod header_aliases {
    pub const ID: &[&str] = &["id"];
    pub const NAME: &[&str] = &["name"];
    pub const PRICE: &[&str] = &["preis", "price"];
    pub const CATEGORY: &[&str] = &["kategorie", "category"];
    pub const STOCK: &[&str] = &["bestand", "stock"];
}

// =============================================================================
// Defaults
// =============================================================================

/// Default input directory when none is configured
pub const DEFAULT_INPUT_DIR: &str = "./data";

/// Default output directory when none is configured
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Target name used for the tracing env filter
pub const LOG_TARGET: &str = "batch_converter";

/// Config file name within the user config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name for config lookup
pub const APP_DIR_NAME: &str = "batch-converter";
