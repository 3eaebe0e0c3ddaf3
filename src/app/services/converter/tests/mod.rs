//! Unit tests for the per-file conversion pipeline
