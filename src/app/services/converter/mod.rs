//! Per-file conversion pipeline
//!
//! Exposes the one operation the CLI consumes: convert the CSV file at a
//! path, writing the JSON document into a target directory, honoring a
//! cancellation token and reporting human-readable progress checkpoints to a
//! sink.
//!
//! Each file's pipeline run is independent: failure or cancellation in one
//! file never affects another file's already-completed output.

pub mod file_converter;
pub mod progress;

#[cfg(test)]
pub mod tests;

pub use file_converter::{ConversionOutcome, ConversionSummary, FileConverter};
pub use progress::{NoProgress, ProgressSink};
