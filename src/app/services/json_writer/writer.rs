//! Export envelope serialization and file output

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::app::models::{Product, ProductExport};
use crate::constants::JSON_EXTENSION;
use crate::{Error, Result};

/// Writer for JSON export documents.
///
/// One writer instance targets one output directory; the directory is
/// created on first write if absent.
#[derive(Debug, Clone)]
pub struct JsonWriter {
    output_dir: PathBuf,
}

impl JsonWriter {
    /// Create a writer targeting the given output directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Destination path for a source file: output directory plus the source
    /// file's stem with a `.json` extension.
    pub fn output_path_for(&self, csv_path: &Path) -> PathBuf {
        let stem = csv_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());

        self.output_dir.join(stem).with_extension(JSON_EXTENSION)
    }

    /// Build the export envelope for `csv_path` and write it as formatted
    /// JSON. An empty record list produces a valid envelope with
    /// `record_count: 0`, not an error.
    ///
    /// Returns the path of the written document.
    pub async fn write_export(&self, csv_path: &Path, records: Vec<Product>) -> Result<PathBuf> {
        let source_file = csv_path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| csv_path.display().to_string());

        let export = ProductExport::new(source_file, records);
        let output_path = self.output_path_for(csv_path);

        // Serialize fully before touching the filesystem
        let json = serde_json::to_string_pretty(&export).map_err(|e| {
            Error::write_failed(
                output_path.display().to_string(),
                format!("serialization failed: {}", e),
            )
        })?;

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| {
                Error::write_failed(
                    self.output_dir.display().to_string(),
                    format!("could not create output directory: {}", e),
                )
            })?;

        tokio::fs::write(&output_path, json)
            .await
            .map_err(|e| Error::write_failed(output_path.display().to_string(), e.to_string()))?;

        debug!(
            "wrote {} records to {}",
            export.record_count,
            output_path.display()
        );

        Ok(output_path)
    }
}
