//! Configuration management and validation.
//!
//! Configuration is layered: built-in defaults, then an optional TOML config
//! file, then CLI argument overrides applied by the command layer.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use crate::{Error, Result};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// File processing settings
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings controlling where files are read from and written to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Directory scanned for input CSV files
    pub input_path: PathBuf,

    /// Directory the JSON documents are written into
    pub output_path: PathBuf,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (error, warn, info, debug, trace)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Default config file location (~/.config/batch-converter/config.toml)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine config directory"))?;
        Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration using the layered approach (defaults -> file -> args)
    pub fn load_layered(
        input_path: Option<PathBuf>,
        output_path: Option<PathBuf>,
        config_file: Option<&Path>,
    ) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };

        if let Some(input_path) = input_path {
            config.processing.input_path = input_path;
        }
        if let Some(output_path) = output_path {
            config.processing.output_path = output_path;
        }

        Ok(config)
    }

    /// Validate the configuration before processing starts
    pub fn validate(&self) -> Result<()> {
        if !self.processing.input_path.exists() {
            return Err(Error::file_not_found(
                self.processing.input_path.display().to_string(),
            ));
        }

        if !self.processing.input_path.is_dir() {
            return Err(Error::configuration(format!(
                "Input path is not a directory: {}",
                self.processing.input_path.display()
            )));
        }

        Ok(())
    }

    /// Create the output directory if it does not exist
    pub fn ensure_output_directory(&self) -> Result<()> {
        if !self.processing.output_path.exists() {
            std::fs::create_dir_all(&self.processing.output_path).map_err(|e| {
                Error::configuration(format!(
                    "Failed to create output directory '{}': {}",
                    self.processing.output_path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}
