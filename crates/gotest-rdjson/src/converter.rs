// Copyright (c) 2026 - present gotest2rdjsonl contributors
// SPDX-License-Identifier: MIT

//! Event classification and diagnostic synthesis
//!
//! [`Converter`] consumes one [`TestEvent`] at a time and keeps the recent
//! `output` lines in an [`OutputWindow`]. A `fail` or `skip` event turns the
//! buffered lines into a [`Diagnostic`]:
//!
//! | action   | effect                                        |
//! |----------|-----------------------------------------------|
//! | `output` | push onto the window                          |
//! | `fail`   | drain the window into an error diagnostic     |
//! | `skip`   | drain the window into an info diagnostic      |
//! | `run`    | nothing                                       |
//! | other    | reset the window without emitting             |
//!
//! `pause` and `cont` fall into the last row.
//!
//! # Example
//!
//! ```
//! use gotest_rdjson::{Converter, Step, TestEvent};
//!
//! let mut converter = Converter::new(3);
//! converter.process(TestEvent::output("foo/bar.go:42: boom"));
//! let step = converter.process(TestEvent::new("fail"));
//!
//! let diag = step.into_diagnostic().unwrap();
//! assert_eq!(diag.location.unwrap().line(), 42);
//! ```

use tracing::{debug, info, warn};

use crate::event::{Action, TestEvent};
use crate::location::extract_location;
use crate::rdf::{Diagnostic, Severity};
use crate::window::OutputWindow;

/// What processing one event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// An `output` event was buffered
    Buffered,
    /// A `run` event; the window was left untouched
    Ignored,
    /// Any other non-terminating action cleared the window
    Reset,
    /// A terminating event produced a diagnostic
    Emitted(Diagnostic),
    /// A terminating event produced nothing because no location was found
    Suppressed {
        /// The action that triggered synthesis
        action: Action,
    },
}

impl Step {
    /// The diagnostic produced by this step, if any
    #[must_use]
    pub fn into_diagnostic(self) -> Option<Diagnostic> {
        match self {
            Self::Emitted(diag) => Some(diag),
            _ => None,
        }
    }

    /// Whether this step handled a terminating event
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Emitted(_) | Self::Suppressed { .. })
    }
}

/// Stateful translator from test events to diagnostics
#[derive(Debug, Clone, Default)]
pub struct Converter {
    window: OutputWindow,
}

impl Converter {
    /// Create a converter keeping up to `capacity` output lines of context
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            window: OutputWindow::new(capacity),
        }
    }

    /// The window of buffered output events
    #[must_use]
    pub fn window(&self) -> &OutputWindow {
        &self.window
    }

    /// Apply one event to the converter state
    pub fn process(&mut self, event: TestEvent) -> Step {
        match event.action {
            Action::Output => {
                self.window.push(event);
                Step::Buffered
            }
            Action::Fail | Action::Skip => {
                let severity = event.action.severity().unwrap_or_default();
                let buffered = self.window.drain_and_clear();
                match synthesize(&buffered, severity) {
                    Some(diag) => {
                        info!(diagnostic = %diag, "found diagnostic");
                        Step::Emitted(diag)
                    }
                    None => {
                        warn!(
                            action = %event.action,
                            test = event.test.as_deref().unwrap_or_default(),
                            "event found but cannot determine the location"
                        );
                        Step::Suppressed {
                            action: event.action,
                        }
                    }
                }
            }
            Action::Run => Step::Ignored,
            _ => {
                if !self.window.is_empty() {
                    debug!(
                        action = %event.action,
                        dropped = self.window.len(),
                        "resetting output window"
                    );
                }
                self.window.reset();
                Step::Reset
            }
        }
    }
}

/// Build a diagnostic from buffered output events
///
/// The message is the concatenated output text. The location comes from
/// the last line that [`extract_location`] accepts; later lines override
/// earlier ones. Returns `None` when no line carries a location.
#[must_use]
pub fn synthesize(events: &[TestEvent], severity: Severity) -> Option<Diagnostic> {
    let message: String = events.iter().map(TestEvent::output_text).collect();
    let location = events
        .iter()
        .filter_map(|event| extract_location(event.output_text()))
        .last()?;

    Some(Diagnostic::new(message, severity, location))
}
