//! Single-file conversion orchestration

use std::path::{Path, PathBuf};

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::progress::ProgressSink;
use crate::app::services::csv_parser::parser::ParseOutcome;
use crate::app::services::csv_parser::{ParseStats, ProductCsvParser};
use crate::app::services::json_writer::JsonWriter;
use crate::{Error, Result};

/// Outcome of converting one file.
///
/// Cancellation is a distinct outcome, not a failure: the caller must tally
/// it separately and no output file exists for a cancelled conversion.
#[derive(Debug)]
pub enum ConversionOutcome {
    /// The file was converted and its JSON document written
    Completed(ConversionSummary),

    /// The cancellation signal fired mid-file; no output was written
    Cancelled,
}

/// Summary of one completed conversion
#[derive(Debug)]
pub struct ConversionSummary {
    /// Path of the written JSON document
    pub output_path: PathBuf,

    /// Row-level parsing statistics
    pub stats: ParseStats,
}

/// Converter running the full pipeline for one file at a time:
/// read, filter, resolve header, parse rows, write the export document.
#[derive(Debug)]
pub struct FileConverter {
    parser: ProductCsvParser,
    writer: JsonWriter,
}

impl FileConverter {
    /// Create a converter writing into the given output directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            parser: ProductCsvParser::new(),
            writer: JsonWriter::new(output_dir),
        }
    }

    /// Convert one CSV file into a JSON document.
    ///
    /// The cancellation token is polled at least once per data row; once it
    /// fires, no further rows are started and no output file is written for
    /// this file. Progress checkpoints (read complete, row counts, write
    /// complete) go to `progress`.
    pub async fn convert_file(
        &self,
        csv_path: &Path,
        token: &CancellationToken,
        progress: &dyn ProgressSink,
    ) -> Result<ConversionOutcome> {
        if !csv_path.exists() {
            return Err(Error::file_not_found(csv_path.display().to_string()));
        }

        let file_name = csv_path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| csv_path.display().to_string());

        info!("Converting {}", csv_path.display());
        progress.report("reading CSV file...");

        let content = tokio::fs::read_to_string(csv_path).await.map_err(|e| {
            Error::io(format!("failed to read {}", csv_path.display()), e)
        })?;

        progress.report("read complete, parsing data...");

        let result = match self.parser.parse_content(&content, &file_name, token)? {
            ParseOutcome::Completed(result) => result,
            ParseOutcome::Cancelled => {
                warn!("Conversion of {} cancelled, no output written", file_name);
                progress.report("conversion cancelled");
                return Ok(ConversionOutcome::Cancelled);
            }
        };

        progress.report(&format!(
            "{} records parsed from {} data rows ({} skipped)",
            result.stats.records_parsed, result.stats.data_rows, result.stats.rows_skipped
        ));

        progress.report("writing JSON file...");
        let stats = result.stats;
        let output_path = self.writer.write_export(csv_path, result.products).await?;

        if stats.data_rows == 0 {
            progress.report(&format!(
                "wrote empty result to {}",
                output_path.display()
            ));
        } else {
            progress.report(&format!("wrote {}", output_path.display()));
        }

        Ok(ConversionOutcome::Completed(ConversionSummary {
            output_path,
            stats,
        }))
    }
}
