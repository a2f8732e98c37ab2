//! gotest2rdjsonl: `go test -json` to reviewdog rdjsonl
//!
//! Reads test events from a file or stdin and prints one reviewdog
//! diagnostic per failed or skipped test whose output names a location.

use std::process::ExitCode;

use clap::Parser;
use gotest2rdjsonl::{app, config::Config};
use tracing::error;

fn main() -> ExitCode {
    let config = Config::parse();

    // stdout carries diagnostics, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    match app::run(&config, std::io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "conversion failed");
            ExitCode::FAILURE
        }
    }
}
