//! Unit tests for the CSV parser components

pub mod column_mapping_tests;
