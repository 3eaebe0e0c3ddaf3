//! Convert command implementation for the batch converter CLI
//!
//! This module contains the complete batch conversion workflow including
//! configuration loading, file selection, per-file conversion, and the
//! final summary report.

use std::path::PathBuf;
use std::time::Instant;

use colored::*;
use indicatif::HumanDuration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use super::shared::{
    BatchStats, create_progress_bar, discover_csv_files, is_critical_error, load_configuration,
    prepare_directories, setup_logging,
};
use crate::app::services::converter::{ConversionOutcome, FileConverter};
use crate::cli::args::ConvertArgs;
use crate::config::Config;
use crate::{Error, Result};

/// Convert command runner
///
/// This function orchestrates the entire conversion workflow:
/// 1. Set up logging and configuration
/// 2. Validate inputs and create the output directory
/// 3. Select input files (explicit list, or directory scan with prompt)
/// 4. Convert each file, honoring the cancellation token
/// 5. Report summary statistics
pub async fn run_convert(args: ConvertArgs, token: CancellationToken) -> Result<BatchStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(&args)?;

    info!("Starting batch converter");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Load configuration with layered approach
    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    // Validate and prepare directories
    prepare_directories(&config)?;

    // Select files to convert
    let files = select_files(&args, &config).await?;

    if files.is_empty() {
        warn!(
            "No CSV files found in input directory: {}",
            config.processing.input_path.display()
        );
        if !args.quiet {
            println!(
                "No CSV files found in {}",
                config.processing.input_path.display()
            );
        }
        return Ok(BatchStats::default());
    }

    info!("Converting {} files", files.len());

    if args.dry_run {
        return run_dry_run(&config, &files);
    }

    // Convert each file
    let converter = FileConverter::new(config.processing.output_path.clone());
    let mut stats = BatchStats::default();

    let progress_bar = args
        .show_progress()
        .then(|| create_progress_bar(files.len() as u64, "Converting files"));

    let sink_bar = progress_bar.clone();
    let progress = move |message: &str| match &sink_bar {
        Some(bar) => bar.set_message(message.to_string()),
        None => debug!("{}", message),
    };

    for (i, file) in files.iter().enumerate() {
        info!("Converting file {} of {}: {}", i + 1, files.len(), file.display());

        match converter.convert_file(file, &token, &progress).await {
            Ok(ConversionOutcome::Completed(summary)) => {
                stats.files_processed += 1;
                stats.records_converted += summary.stats.records_parsed;
                stats.rows_skipped += summary.stats.rows_skipped;

                info!(
                    "Completed {}: {} records written to {}",
                    file.display(),
                    summary.stats.records_parsed,
                    summary.output_path.display()
                );
            }
            Ok(ConversionOutcome::Cancelled) => {
                warn!("Batch cancelled during {}", file.display());
                stats.files_cancelled += 1;

                // Remaining files are not started once cancellation fires
                break;
            }
            Err(e) => {
                error!("Failed to convert {}: {}", file.display(), e);
                stats.files_failed += 1;

                // Continue with other files unless it's a critical error
                if is_critical_error(&e) {
                    return Err(e);
                }
            }
        }

        if let Some(bar) = &progress_bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = &progress_bar {
        bar.finish_and_clear();
    }

    stats.processing_time = start_time.elapsed();

    if !args.quiet {
        print_summary(&stats);
    }

    Ok(stats)
}

/// Determine the set of files to convert from arguments and configuration
async fn select_files(args: &ConvertArgs, config: &Config) -> Result<Vec<PathBuf>> {
    // Explicit file list bypasses directory scanning entirely
    if !args.files.is_empty() {
        for file in &args.files {
            if !file.exists() {
                return Err(Error::file_not_found(file.display().to_string()));
            }
        }
        return Ok(args.files.clone());
    }

    let discovered = discover_csv_files(&config.processing.input_path)?;

    if discovered.is_empty() || args.quiet || args.dry_run {
        return Ok(discovered);
    }

    // Interactive mode: let the user pick from the discovered files. The
    // prompt blocks on stdin, so it runs on a blocking thread to keep the
    // shutdown signal branch in main pollable while it waits.
    info!(
        "Prompting user for file selection from {} discovered files",
        discovered.len()
    );
    let selected =
        tokio::task::spawn_blocking(move || crate::cli::input::prompt_file_selection(&discovered))
            .await
            .map_err(|e| {
                Error::configuration(format!("File selection prompt failed: {}", e))
            })??;
    info!("User selected {} files", selected.len());

    Ok(selected)
}

/// Perform a dry run showing what would be converted
fn run_dry_run(config: &Config, files: &[PathBuf]) -> Result<BatchStats> {
    info!("Performing dry run - no files will be created");

    println!("\nDry run - would convert {} files:", files.len());
    for file in files {
        let output = config
            .processing
            .output_path
            .join(file.file_stem().unwrap_or_default())
            .with_extension("json");
        println!("  {} -> {}", file.display(), output.display());
    }
    println!();

    Ok(BatchStats::default())
}

/// Print the colored end-of-batch summary
fn print_summary(stats: &BatchStats) {
    println!("\n{}", "Conversion Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Files processed:".bright_cyan(),
        stats.files_processed.to_string().bright_white()
    );
    if stats.files_failed > 0 {
        println!(
            "  {} {}",
            "Files failed:".bright_red(),
            stats.files_failed.to_string().bright_red().bold()
        );
    }
    if stats.files_cancelled > 0 {
        println!(
            "  {} {}",
            "Files cancelled:".bright_yellow(),
            stats.files_cancelled.to_string().bright_yellow().bold()
        );
    }
    println!(
        "  {} {}",
        "Records converted:".bright_cyan(),
        stats.records_converted.to_string().bright_white().bold()
    );
    if stats.rows_skipped > 0 {
        println!(
            "  {} {}",
            "Rows skipped:".bright_yellow(),
            stats.rows_skipped.to_string().bright_white()
        );
    }
    println!(
        "  {} {}",
        "Time elapsed:".bright_cyan(),
        HumanDuration(stats.processing_time).to_string().bright_white()
    );
}
