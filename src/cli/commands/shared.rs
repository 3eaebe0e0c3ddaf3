//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used by the
//! command implementations.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::cli::args::ConvertArgs;
use crate::config::Config;
use crate::constants::{CSV_EXTENSION, LOG_TARGET};
use crate::{Error, Result};

/// Batch statistics for reporting at the end of a run
#[derive(Debug, Clone, Default)]
pub struct BatchStats {
    /// Number of files converted successfully
    pub files_processed: usize,
    /// Number of files that failed with an error
    pub files_failed: usize,
    /// Number of files whose conversion was cancelled
    pub files_cancelled: usize,
    /// Total records written across all output documents
    pub records_converted: usize,
    /// Total malformed data rows skipped across all files
    pub rows_skipped: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl BatchStats {
    /// Total number of files the batch attempted
    pub fn files_attempted(&self) -> usize {
        self.files_processed + self.files_failed + self.files_cancelled
    }
}

/// Set up structured logging for the convert command
pub fn setup_logging(args: &ConvertArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    // Set up subscriber based on output format preference. try_init keeps
    // repeated invocations in the same process (tests) from panicking.
    if args.quiet {
        // Minimal logging for quiet mode
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init();
    } else {
        // Standard logging with timestamps
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (defaults -> file -> args)
pub fn load_configuration(args: &ConvertArgs) -> Result<Config> {
    info!("Loading configuration");

    // Determine config file path
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => {
            // Try default config file location
            default_config_path
                .as_ref()
                .filter(|path| path.exists())
                .map(|path| path.as_path())
        }
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No config file found, using defaults");
    }

    // Load with layered configuration
    let mut config = Config::load_layered(
        args.input_path.clone(),
        args.output_path.clone(),
        config_file,
    )?;

    // Apply CLI argument overrides
    apply_cli_overrides(&mut config, args)?;

    // Final validation
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &ConvertArgs) -> Result<()> {
    // Override path settings if explicitly provided
    if let Some(input_path) = &args.input_path {
        config.processing.input_path = input_path.clone();
    }
    if let Some(output_path) = &args.output_path {
        config.processing.output_path = output_path.clone();
    }

    // Override logging settings
    config.logging.level = args.get_log_level().to_string();

    Ok(())
}

/// Validate and prepare the output directory
pub fn prepare_directories(config: &Config) -> Result<()> {
    info!("Preparing output directory");

    config.ensure_output_directory()?;

    info!(
        "Output directory prepared: {}",
        config.processing.output_path.display()
    );
    Ok(())
}

/// Discover CSV files in the input directory (non-recursive)
pub fn discover_csv_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    use walkdir::WalkDir;

    let mut csv_files = Vec::new();

    for entry in WalkDir::new(input_dir).max_depth(1).follow_links(false) {
        let entry = entry.map_err(|e| {
            Error::configuration(format!(
                "Failed to read input directory '{}': {}",
                input_dir.display(),
                e
            ))
        })?;
        let path = entry.path();
        if path.is_file() {
            let is_csv = path
                .extension()
                .and_then(|s| s.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXTENSION));
            if is_csv {
                csv_files.push(path.to_path_buf());
            }
        }
    }

    // Sort files for consistent processing order
    csv_files.sort_by_key(|path| path.to_string_lossy().to_lowercase());

    debug!(
        "Discovered {} CSV files in {}",
        csv_files.len(),
        input_dir.display()
    );
    for file in &csv_files {
        debug!("  Found: {}", file.display());
    }

    Ok(csv_files)
}

/// Check if an error is critical enough to stop the whole batch
pub fn is_critical_error(error: &Error) -> bool {
    matches!(
        error,
        Error::Configuration { .. } | Error::ProcessingInterrupted { .. }
    )
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
