//! User input utilities for interactive CLI prompts
//!
//! This module provides the interactive file selection menu shown when the
//! input directory is scanned and no explicit file list was given.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::{Error, Result};

/// Display an interactive file selection menu and get user choice
///
/// Returns the selected files, or all files if "all" is chosen or the
/// input is empty.
pub fn prompt_file_selection(available_files: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if available_files.is_empty() {
        return Err(Error::configuration(
            "No CSV files available for selection".to_string(),
        ));
    }

    // Display menu
    println!("\nAvailable CSV files:");
    for (i, file) in available_files.iter().enumerate() {
        println!("  {}. {}", i + 1, file.display());
    }
    println!("  {}. all (default)", available_files.len() + 1);
    println!();

    // Get user input
    print!(
        "Select files to convert [{}]: ",
        available_files.len() + 1
    );
    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout".to_string(), e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

    parse_file_selection(input.trim(), available_files)
}

/// Parse a selection string ("3", "1,3", "all", empty) against the file list
fn parse_file_selection(input: &str, available_files: &[PathBuf]) -> Result<Vec<PathBuf>> {
    // Handle empty input (default to "all")
    if input.is_empty() {
        return Ok(available_files.to_vec());
    }

    if input == "all" || input == (available_files.len() + 1).to_string() {
        return Ok(available_files.to_vec());
    }

    // Handle comma-separated selections (covers single selection too)
    let mut selected = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        if let Ok(choice) = part.parse::<usize>() {
            if choice >= 1 && choice <= available_files.len() {
                selected.push(available_files[choice - 1].clone());
            } else {
                return Err(Error::data_validation(format!(
                    "Invalid selection '{}'. Please choose 1-{} or 'all'",
                    choice,
                    available_files.len()
                )));
            }
        } else {
            return Err(Error::data_validation(format!(
                "Invalid input '{}'. Please enter numbers separated by commas, or 'all'",
                part
            )));
        }
    }

    if selected.is_empty() {
        return Err(Error::data_validation(
            "No valid files selected".to_string(),
        ));
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files() -> Vec<PathBuf> {
        vec![
            PathBuf::from("data/products.csv"),
            PathBuf::from("data/inventory.csv"),
            PathBuf::from("data/prices.csv"),
        ]
    }

    #[test]
    fn test_empty_input_selects_all() {
        let files = files();
        assert_eq!(parse_file_selection("", &files).unwrap(), files);
    }

    #[test]
    fn test_all_keyword_and_last_index() {
        let files = files();
        assert_eq!(parse_file_selection("all", &files).unwrap(), files);
        assert_eq!(parse_file_selection("4", &files).unwrap(), files);
    }

    #[test]
    fn test_single_and_comma_selections() {
        let files = files();
        assert_eq!(
            parse_file_selection("2", &files).unwrap(),
            vec![files[1].clone()]
        );
        assert_eq!(
            parse_file_selection("1, 3", &files).unwrap(),
            vec![files[0].clone(), files[2].clone()]
        );
    }

    #[test]
    fn test_invalid_selections() {
        let files = files();
        assert!(parse_file_selection("0", &files).is_err());
        assert!(parse_file_selection("5", &files).is_err());
        assert!(parse_file_selection("abc", &files).is_err());
        assert!(parse_file_selection(",,,", &files).is_err());
    }

    #[test]
    fn test_empty_file_list_is_error() {
        let result = prompt_file_selection(&[]);
        assert!(result.is_err());
    }
}
