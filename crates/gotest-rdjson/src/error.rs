// Copyright (c) 2026 - present gotest2rdjsonl contributors
// SPDX-License-Identifier: MIT

//! Error types for gotest-rdjson

use thiserror::Error;

/// Errors that abort an event stream conversion
#[derive(Debug, Error)]
pub enum StreamError {
    /// A record could not be decoded as a test event
    #[error("failed to parse JSON line after {events} events: {source}")]
    Decode {
        /// Number of events decoded successfully before the failure
        events: usize,
        /// Underlying decoder error
        #[source]
        source: serde_json::Error,
    },

    /// A diagnostic could not be encoded
    #[error("failed to encode diagnostic: {0}")]
    Encode(#[source] serde_json::Error),

    /// Writing to the diagnostic sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StreamError {
    /// Whether the failure came from malformed input rather than the sink
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
