// Copyright (c) 2026 - present gotest2rdjsonl contributors
// SPDX-License-Identifier: MIT

//! Stream driver
//!
//! Reads `go test -json` events one at a time, feeds them through a
//! [`Converter`], and writes every emitted diagnostic as one compact JSON
//! line (`rdjsonl`). Each diagnostic is flushed before the next event is
//! read. A record that fails to decode ends the run; diagnostics already
//! written stay written.
//!
//! # Example
//!
//! ```
//! use gotest_rdjson::stream::run;
//!
//! let input = r#"{"Action":"output","Output":"a_test.go:3: boom\n"}
//! {"Action":"fail"}"#;
//! let mut out = Vec::new();
//! let summary = run(input.as_bytes(), &mut out, 3).unwrap();
//! assert_eq!(summary.diagnostics, 1);
//! assert!(String::from_utf8(out).unwrap().ends_with("}\n"));
//! ```

use std::io::{BufReader, Read, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::converter::{Converter, Step};
use crate::error::StreamError;
use crate::event::TestEvent;
use crate::rdf::Diagnostic;

/// Counters collected over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Events decoded
    pub events: usize,
    /// `fail` and `skip` events seen
    pub terminating: usize,
    /// Diagnostics written
    pub diagnostics: usize,
    /// Terminating events dropped for lack of a location
    pub suppressed: usize,
}

impl RunSummary {
    /// Whether every terminating event produced a diagnostic
    #[must_use]
    pub fn all_located(&self) -> bool {
        self.suppressed == 0
    }

    fn record(&mut self, step: &Step) {
        match step {
            Step::Emitted(_) => {
                self.terminating += 1;
                self.diagnostics += 1;
            }
            Step::Suppressed { .. } => {
                self.terminating += 1;
                self.suppressed += 1;
            }
            Step::Buffered | Step::Ignored | Step::Reset => {}
        }
    }
}

/// Convert an event stream into `rdjsonl` on `writer`
///
/// `capacity` is the number of output lines kept as context for each
/// failure or skip.
///
/// # Errors
///
/// Returns `StreamError::Decode` if a record is not a valid test event, and
/// `StreamError::Io` / `StreamError::Encode` if writing a diagnostic fails.
pub fn run<R: Read, W: Write>(
    reader: R,
    mut writer: W,
    capacity: usize,
) -> Result<RunSummary, StreamError> {
    let mut converter = Converter::new(capacity);
    let mut summary = RunSummary::default();

    let events =
        serde_json::Deserializer::from_reader(BufReader::new(reader)).into_iter::<TestEvent>();
    for event in events {
        let event = event.map_err(|source| StreamError::Decode {
            events: summary.events,
            source,
        })?;
        summary.events += 1;
        log_event(&event);

        let step = converter.process(event);
        summary.record(&step);
        if let Step::Emitted(diag) = step {
            write_diagnostic(&mut writer, &diag)?;
        }
    }

    info!(count = summary.diagnostics, "found diagnostics");
    Ok(summary)
}

/// Convert a complete event stream held in memory
///
/// # Errors
///
/// Returns `StreamError::Decode` if any record is not a valid test event.
pub fn convert(input: &str, capacity: usize) -> Result<Vec<Diagnostic>, StreamError> {
    let mut converter = Converter::new(capacity);
    let mut diagnostics = Vec::new();

    let events = serde_json::Deserializer::from_str(input).into_iter::<TestEvent>();
    for (index, event) in events.enumerate() {
        let event = event.map_err(|source| StreamError::Decode {
            events: index,
            source,
        })?;
        diagnostics.extend(converter.process(event).into_diagnostic());
    }

    Ok(diagnostics)
}

/// Write one diagnostic as a JSON line and flush
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
pub fn write_diagnostic<W: Write>(writer: &mut W, diag: &Diagnostic) -> Result<(), StreamError> {
    serde_json::to_writer(&mut *writer, diag).map_err(StreamError::Encode)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

fn log_event(event: &TestEvent) {
    debug!(
        action = %event.action,
        test = event.test.as_deref().unwrap_or_default(),
        package = event.package.as_deref().unwrap_or_default(),
        output = event.output_text(),
        "parsed event"
    );
}
