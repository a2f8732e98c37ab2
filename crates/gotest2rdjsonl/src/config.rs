//! Configuration for the gotest2rdjsonl command
//!
//! This module provides the command-line configuration: where to read
//! `go test -json` events from, how many output lines to keep as context,
//! and the logging level.

use std::path::PathBuf;

use clap::Parser;
use gotest_rdjson::DEFAULT_CAPACITY;

/// Convert `go test -json` output into reviewdog diagnostics (rdjsonl)
#[derive(Parser, Debug, Clone)]
#[command(name = "gotest2rdjsonl")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Input file (default: stdin)
    ///
    /// The file must contain the event stream printed by `go test -json`.
    #[arg(short, long, env = "GOTEST2RDJSONL_INPUT")]
    pub input: Option<PathBuf>,

    /// The number of buffering lines
    ///
    /// Output lines kept as context for each failed or skipped test. The
    /// location is taken from the last of these lines that names one.
    #[arg(
        short,
        long,
        env = "GOTEST2RDJSONL_BUF_LINES",
        default_value_t = DEFAULT_CAPACITY
    )]
    pub buf_lines: usize,

    /// Enable verbose logging (debug level)
    ///
    /// Logs every parsed event. Logs are written to stderr; stdout carries
    /// only diagnostics.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            buf_lines: DEFAULT_CAPACITY,
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the input path is specified but doesn't exist or
    /// is a directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref input) = self.input {
            if !input.exists() {
                return Err(ConfigError::InputNotFound(input.clone()));
            }
            if input.is_dir() {
                return Err(ConfigError::InputIsDirectory(input.clone()));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }

    /// Human-readable name of the input source
    #[must_use]
    pub fn input_name(&self) -> String {
        self.input
            .as_ref()
            .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input path not found
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Input path is a directory
    #[error("Input path is a directory: {0}")]
    InputIsDirectory(PathBuf),
}
