//! JSON export writer for converted product files
//!
//! Builds the export envelope for one source file and writes it as a
//! formatted JSON document. Serialization happens fully in memory before a
//! single write call so a failed serialization never leaves a partial file
//! on disk.

pub mod writer;

#[cfg(test)]
pub mod tests;

pub use writer::JsonWriter;
