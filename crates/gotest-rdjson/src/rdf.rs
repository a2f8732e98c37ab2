// Copyright (c) 2026 - present gotest2rdjsonl contributors
// SPDX-License-Identifier: MIT

//! Reviewdog Diagnostic Format types
//!
//! These mirror the `rdjsonl` diagnostic schema consumed by reviewdog
//! (`proto/rdf/jsonschema/Diagnostic.jsonschema`). Field names and nesting
//! are a compatibility surface: severities are encoded as integers, and
//! position fields are left out of the output when they are zero.
//!
//! ```
//! use gotest_rdjson::rdf::{Diagnostic, Location, Severity};
//!
//! let diag = Diagnostic::new("boom", Severity::Error, Location::at_line("foo.go", 3));
//! let json = serde_json::to_string(&diag).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"message":"boom","severity":1,"location":{"path":"foo.go","range":{"start":{"line":3},"end":{}}}}"#
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Severity
// ============================================================================

/// Diagnostic severity, serialized as its integer code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Severity {
    /// Unknown severity (0)
    #[default]
    Unknown = 0,
    /// Error (1)
    Error = 1,
    /// Warning (2)
    Warning = 2,
    /// Info (3)
    Info = 3,
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity as u8
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, String> {
        match code {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Error),
            2 => Ok(Self::Warning),
            3 => Ok(Self::Info),
            other => Err(format!("unknown severity code: {other}")),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "UNKNOWN_SEVERITY",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Location
// ============================================================================

fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// A position inside a file
///
/// Lines and columns are 1-based; zero means "not set".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Line number
    #[serde(default, skip_serializing_if = "is_zero")]
    pub line: i64,
    /// Column number
    #[serde(default, skip_serializing_if = "is_zero")]
    pub column: i64,
}

impl Position {
    /// A position carrying only a line number
    #[must_use]
    pub fn line(line: i64) -> Self {
        Self { line, column: 0 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, " line:{}", self.line)?;
        }
        if self.column > 0 {
            write!(f, " column:{}", self.column)?;
        }
        Ok(())
    }
}

/// A span between two positions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    /// Start position
    #[serde(default)]
    pub start: Position,
    /// End position
    #[serde(default)]
    pub end: Position,
}

/// A file path plus the range a diagnostic applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// File path as printed by the test output
    pub path: String,
    /// Range within the file
    #[serde(default)]
    pub range: Range,
}

impl Location {
    /// A location pointing at a single line of a file
    #[must_use]
    pub fn at_line(path: impl Into<String>, line: i64) -> Self {
        Self {
            path: path.into(),
            range: Range {
                start: Position::line(line),
                end: Position::default(),
            },
        }
    }

    /// The starting line number
    #[must_use]
    pub fn line(&self) -> i64 {
        self.range.start.line
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "path:{:?} start:{} end:{}",
            self.path, self.range.start, self.range.end
        )
    }
}

// ============================================================================
// Diagnostic
// ============================================================================

/// A single reviewdog diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Text of the buffered output lines
    pub message: String,
    /// Severity code
    pub severity: Severity,
    /// Where the diagnostic applies; `null` when unknown
    pub location: Option<Location>,
}

impl Diagnostic {
    /// Create a diagnostic anchored at a location
    #[must_use]
    pub fn new(message: impl Into<String>, severity: Severity, location: Location) -> Self {
        Self {
            message: message.into(),
            severity,
            location: Some(location),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "severity:{} message:{:?}", self.severity, self.message)?;
        if let Some(location) = &self.location {
            write!(f, " location:{{{location}}}")?;
        }
        Ok(())
    }
}
