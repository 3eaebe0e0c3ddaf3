//! Core parser orchestration
//!
//! Ties the pipeline stages together: line filtering, header resolution and
//! the row loop, with a cancellation poll between rows so a long file can be
//! interrupted promptly.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::column_mapping::ColumnMapping;
use super::line_filter::filter_content_lines;
use super::record_parser::parse_product_row;
use super::stats::{ParseResult, ParseStats};
use crate::Result;

/// Outcome of a parse run over one file's content
#[derive(Debug)]
pub enum ParseOutcome {
    /// Parsing ran to completion
    Completed(ParseResult),

    /// The cancellation signal fired; rows not yet processed were discarded
    Cancelled,
}

/// Tolerant parser for semicolon-delimited product CSV content
///
/// The parser favors availability over strict validation: rows that fail
/// structurally (wrong column count) or semantically (field coercion) are
/// skipped and counted, never surfaced as errors. Only an unresolvable
/// header aborts the file.
#[derive(Debug, Default)]
pub struct ProductCsvParser;

impl ProductCsvParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse the full content of one CSV file.
    ///
    /// `file` is used for log and error context only. The cancellation token
    /// is checked before any result is produced and once per row; on
    /// cancellation the current row may still complete but no further rows
    /// are started and no result is returned.
    ///
    /// A file with no content lines after filtering yields an empty
    /// [`ParseResult`], not an error; the header is not resolved in that
    /// case.
    pub fn parse_content(
        &self,
        content: &str,
        file: &str,
        token: &CancellationToken,
    ) -> Result<ParseOutcome> {
        let mut stats = ParseStats::new();
        let mut products = Vec::new();

        let content_lines = filter_content_lines(content.lines());
        debug!(
            "{}: {} content lines after filtering",
            file,
            content_lines.len()
        );

        if token.is_cancelled() {
            info!("{}: cancelled before parsing started", file);
            return Ok(ParseOutcome::Cancelled);
        }

        if content_lines.is_empty() {
            info!("{}: no data lines found", file);
            return Ok(ParseOutcome::Completed(ParseResult { products, stats }));
        }

        let mapping = ColumnMapping::resolve(content_lines[0], file)?;

        for line in &content_lines[1..] {
            if token.is_cancelled() {
                info!(
                    "{}: cancelled after {} of {} data rows",
                    file,
                    stats.data_rows,
                    content_lines.len() - 1
                );
                return Ok(ParseOutcome::Cancelled);
            }

            stats.data_rows += 1;

            match parse_product_row(line, &mapping) {
                Ok(product) => {
                    products.push(product);
                    stats.records_parsed += 1;
                }
                Err(e) => {
                    stats.rows_skipped += 1;
                    stats.errors.push(format!("row {}: {}", stats.data_rows, e));
                    debug!("{}: skipped row {}: {}", file, stats.data_rows, e);
                }
            }
        }

        info!(
            "{}: parsed {} records from {} data rows ({} skipped)",
            file, stats.records_parsed, stats.data_rows, stats.rows_skipped
        );

        Ok(ParseOutcome::Completed(ParseResult { products, stats }))
    }
}
