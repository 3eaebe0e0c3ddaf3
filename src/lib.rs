//! Batch Converter Library
//!
//! A Rust library for converting semicolon-delimited product CSV files into
//! structured JSON documents.
//!
//! This library provides tools for:
//! - Filtering comment and blank lines from raw CSV input
//! - Resolving the fixed product schema against localized header names
//! - Tolerant per-row parsing that skips malformed rows instead of failing
//! - Writing JSON export envelopes with a stable field order
//! - Cooperative cancellation of long-running conversions
//! - Comprehensive error handling and recovery

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod converter;
        pub mod csv_parser;
        pub mod json_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{Product, ProductExport};
pub use app::services::converter::{ConversionOutcome, FileConverter, ProgressSink};
pub use config::Config;

/// Result type alias for the batch converter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for batch conversion operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file or directory does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Header row lacks one or more required logical columns
    #[error("CSV file '{file}' is missing required columns: {columns}")]
    MissingColumns { file: String, columns: String },

    /// Output file could not be created or written
    #[error("Failed to write output file '{path}': {message}")]
    WriteFailed { path: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error (row-level; consumed by the row parser, never
    /// surfaced to the caller on its own)
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a missing columns error
    pub fn missing_columns(file: impl Into<String>, columns: impl Into<String>) -> Self {
        Self::MissingColumns {
            file: file.into(),
            columns: columns.into(),
        }
    }

    /// Create a write failure error
    pub fn write_failed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::WriteFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
