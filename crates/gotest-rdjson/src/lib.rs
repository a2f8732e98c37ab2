// Copyright (c) 2026 - present gotest2rdjsonl contributors
// SPDX-License-Identifier: MIT

//! gotest-rdjson: `go test -json` to reviewdog diagnostics
//!
//! This library crate turns the event stream printed by `go test -json`
//! into Reviewdog Diagnostic Format records, one per failed or skipped
//! test whose output names a source location.
//!
//! # Example
//!
//! ```no_run
//! use gotest_rdjson::{Converter, TestEvent, stream};
//!
//! // Convert a whole stream from stdin to stdout
//! let summary = stream::run(std::io::stdin().lock(), std::io::stdout().lock(), 3).unwrap();
//!
//! // Or drive the converter one event at a time
//! let mut converter = Converter::new(3);
//! converter.process(TestEvent::output("    foo_test.go:12: want 1, got 2\n"));
//! let diag = converter.process(TestEvent::new("fail")).into_diagnostic();
//! ```

pub mod converter;
pub mod error;
pub mod event;
pub mod location;
pub mod rdf;
pub mod stream;
pub mod window;

pub use converter::{Converter, Step, synthesize};
pub use error::StreamError;
pub use event::{Action, TestEvent};
pub use location::extract_location;
pub use rdf::{Diagnostic, Location, Position, Range, Severity};
pub use stream::{RunSummary, convert};
pub use window::{DEFAULT_CAPACITY, OutputWindow};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::converter::{Converter, Step};
    pub use crate::error::StreamError;
    pub use crate::event::{Action, TestEvent};
    pub use crate::rdf::{Diagnostic, Severity};
    pub use crate::stream::{RunSummary, run};
}
