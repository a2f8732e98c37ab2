//! Command runner
//!
//! Opens the configured input, streams it through the converter, and
//! writes diagnostics to the given sink.

use std::fs::File;
use std::io::{Read, Write};

use anyhow::{Context, Result};
use gotest_rdjson::{RunSummary, stream};
use tracing::debug;

use crate::config::Config;

/// Open the input stream named by the configuration
///
/// # Errors
///
/// Returns an error if the input file cannot be opened.
pub fn open_input(config: &Config) -> Result<Box<dyn Read>> {
    match &config.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input stream {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdin().lock())),
    }
}

/// Convert the configured input, writing `rdjsonl` to `writer`
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the input cannot be
/// opened, a record fails to decode, or writing fails.
pub fn run<W: Write>(config: &Config, writer: W) -> Result<RunSummary> {
    config.validate()?;
    let input = open_input(config)?;
    debug!(
        input = %config.input_name(),
        buf_lines = config.buf_lines,
        "converting test events"
    );

    stream::run(input, writer, config.buf_lines)
        .with_context(|| format!("failed to convert {}", config.input_name()))
}
