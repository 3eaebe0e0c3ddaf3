//! Unit tests for the JSON export writer

pub mod writer_tests;
