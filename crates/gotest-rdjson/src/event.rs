// Copyright (c) 2026 - present gotest2rdjsonl contributors
// SPDX-License-Identifier: MIT

//! `go test -json` event types
//!
//! Each line printed by `go test -json` (the `test2json` format) is one
//! [`TestEvent`]. Field names are matched case-insensitively, as Go's
//! `encoding/json` does. Unknown fields are ignored.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::rdf::Severity;

/// The `Action` field of a test event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    /// The test binary is about to start
    Start,
    /// A test has started running
    Run,
    /// A test has been paused
    Pause,
    /// A paused test has continued
    Cont,
    /// A test passed
    Pass,
    /// A benchmark printed log output but did not fail
    Bench,
    /// A test or package failed
    Fail,
    /// A line of captured output
    Output,
    /// A test was skipped
    Skip,
    /// Anything not in the `test2json` vocabulary
    Other(String),
}

impl Action {
    /// The action as spelled in the JSON stream
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Start => "start",
            Self::Run => "run",
            Self::Pause => "pause",
            Self::Cont => "cont",
            Self::Pass => "pass",
            Self::Bench => "bench",
            Self::Fail => "fail",
            Self::Output => "output",
            Self::Skip => "skip",
            Self::Other(action) => action,
        }
    }

    /// Whether this action triggers diagnostic synthesis
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Fail | Self::Skip)
    }

    /// Severity of the diagnostic a terminating action produces
    #[must_use]
    pub fn severity(&self) -> Option<Severity> {
        match self {
            Self::Fail => Some(Severity::Error),
            Self::Skip => Some(Severity::Info),
            _ => None,
        }
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<&str> for Action {
    fn from(action: &str) -> Self {
        match action {
            "start" => Self::Start,
            "run" => Self::Run,
            "pause" => Self::Pause,
            "cont" => Self::Cont,
            "pass" => Self::Pass,
            "bench" => Self::Bench,
            "fail" => Self::Fail,
            "output" => Self::Output,
            "skip" => Self::Skip,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Action {
    fn from(action: String) -> Self {
        match Self::from(action.as_str()) {
            Self::Other(_) => Self::Other(action),
            known => known,
        }
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        match action {
            Action::Other(action) => action,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single record from `go test -json`
///
/// Serialized with the PascalCase field names Go emits. Field names are
/// matched case-insensitively when decoding, and `null` reads as an absent
/// field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TestEvent {
    /// When the event was recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<FixedOffset>>,
    /// What happened
    pub action: Action,
    /// Go package under test
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Test name, absent for package-level events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
    /// Elapsed seconds, set on pass/fail/skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<f64>,
    /// Captured output line, set on output events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl<'de> Deserialize<'de> for TestEvent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TestEventVisitor)
    }
}

struct TestEventVisitor;

impl<'de> Visitor<'de> for TestEventVisitor {
    type Value = TestEvent;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a go test -json event object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut event = TestEvent::default();
        // repeated keys overwrite earlier ones
        while let Some(key) = map.next_key::<String>()? {
            match key.to_lowercase().as_str() {
                "time" => event.time = map.next_value()?,
                "action" => {
                    let action: Option<String> = map.next_value()?;
                    event.action = action.map(Action::from).unwrap_or_default();
                }
                "package" => event.package = map.next_value()?,
                "test" => event.test = map.next_value()?,
                "elapsed" => event.elapsed = map.next_value()?,
                "output" => event.output = map.next_value()?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(event)
    }
}

impl TestEvent {
    /// Create an event with only an action set
    #[must_use]
    pub fn new(action: impl Into<Action>) -> Self {
        Self {
            action: action.into(),
            ..Self::default()
        }
    }

    /// Create an `output` event carrying one line of text
    #[must_use]
    pub fn output(text: impl Into<String>) -> Self {
        Self {
            action: Action::Output,
            output: Some(text.into()),
            ..Self::default()
        }
    }

    /// Set the package name
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Set the test name
    #[must_use]
    pub fn with_test(mut self, test: impl Into<String>) -> Self {
        self.test = Some(test.into());
        self
    }

    /// Output text, or the empty string for events without output
    #[must_use]
    pub fn output_text(&self) -> &str {
        self.output.as_deref().unwrap_or_default()
    }
}
