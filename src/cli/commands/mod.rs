//! Command implementations for the batch converter CLI
//!
//! This module contains the main command execution logic, progress reporting,
//! and error handling for the CLI interface.

pub mod convert;
pub mod shared;

// Re-export the main types and functions for convenience
pub use shared::BatchStats;

use tokio_util::sync::CancellationToken;

use crate::Result;
use crate::cli::args::{Args, Commands, ConvertArgs};

/// Main command runner for the batch converter
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
/// A bare invocation without a subcommand runs the convert workflow with
/// default arguments.
pub async fn run(args: Args, token: CancellationToken) -> Result<BatchStats> {
    match args.command {
        Some(Commands::Convert(convert_args)) => convert::run_convert(convert_args, token).await,
        None => convert::run_convert(ConvertArgs::default(), token).await,
    }
}
