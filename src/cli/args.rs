//! Command-line argument definitions for the batch converter
//!
//! This module defines the complete CLI interface using clap derive API.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{Error, Result};

/// CLI arguments for the batch CSV to JSON converter
///
/// Converts semicolon-delimited product CSV files into structured JSON
/// documents, one JSON file per input file.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "batch-converter",
    version,
    about = "Convert semicolon-delimited product CSV files to JSON documents",
    long_about = "A batch conversion tool that reads semicolon-delimited product CSV files \
                  and writes one structured JSON document per input file. Header names are \
                  matched case-insensitively against German and English aliases, malformed \
                  data rows are skipped, and a running conversion can be cancelled with \
                  Ctrl+C without leaving partial output files behind."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the batch converter
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert product CSV files to JSON format (default command)
    Convert(ConvertArgs),
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input directory containing product CSV files
    ///
    /// Scanned non-recursively for files with a .csv extension.
    /// If not specified, defaults to ./data
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input directory containing product CSV files"
    )]
    pub input_path: Option<PathBuf>,

    /// Output directory for generated JSON documents
    ///
    /// Will be created if it doesn't exist. Each input file produces one
    /// JSON file with the same stem (products.csv -> products.json).
    /// If not specified, defaults to ./output
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for generated JSON documents"
    )]
    pub output_path: Option<PathBuf>,

    /// Specific CSV files to convert
    ///
    /// When given, only these files are converted and the input directory
    /// is not scanned. May be repeated for multiple files.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        help = "Specific CSV file to convert (may be repeated)"
    )]
    pub files: Vec<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file for default paths and logging. If not
    /// specified, looks for ~/.config/batch-converter/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Perform a dry run without actual conversion
    ///
    /// Lists the files that would be converted without reading them or
    /// creating any output files.
    #[arg(
        long = "dry-run",
        help = "Show what would be converted without creating output files"
    )]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Also disables the interactive file selection
    /// prompt and progress bars.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate input path exists (only if explicitly provided)
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input_path.display()
                )));
            }

            if !input_path.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is not a directory: {}",
                    input_path.display()
                )));
            }
        }

        // Validate config file exists if specified
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: None,
            files: Vec::new(),
            config_file: None,
            dry_run: false,
            verbose: 0,
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_convert_args_validation() {
        let temp_dir = TempDir::new().unwrap();

        let args = ConvertArgs {
            input_path: Some(temp_dir.path().to_path_buf()),
            ..Default::default()
        };
        assert!(args.validate().is_ok());

        // Nonexistent input path
        let args = ConvertArgs {
            input_path: Some(PathBuf::from("/nonexistent/path")),
            ..Default::default()
        };
        assert!(args.validate().is_err());

        // Nonexistent config file
        let args = ConvertArgs {
            config_file: Some(PathBuf::from("/nonexistent/config.toml")),
            ..Default::default()
        };
        assert!(args.validate().is_err());

        // No paths given at all is fine; defaults apply later
        let args = ConvertArgs::default();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_log_level() {
        let mut args = ConvertArgs::default();

        // Default level
        assert_eq!(args.get_log_level(), "warn");

        // Verbose levels
        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        // Quiet mode
        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let mut args = ConvertArgs::default();
        assert!(args.show_progress());

        args.quiet = true;
        assert!(!args.show_progress());
    }
}
