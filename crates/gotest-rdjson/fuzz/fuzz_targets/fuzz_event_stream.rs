// Copyright (c) 2026 - present gotest2rdjsonl contributors
// SPDX-License-Identifier: MIT

//! Fuzz target for the stream driver
//!
//! Feeds arbitrary bytes as a `go test -json` stream and checks that every
//! written line decodes back into a located diagnostic.

#![no_main]

use libfuzzer_sys::fuzz_target;

use gotest_rdjson::{Diagnostic, Severity, stream::run};

fuzz_target!(|data: &[u8]| {
    let capacity = data.first().map_or(3, |b| usize::from(*b % 8));
    let mut out = Vec::new();

    // decode errors are expected, panics are not
    let written = match run(data, &mut out, capacity) {
        Ok(summary) => Some(summary.diagnostics),
        Err(_) => None,
    };

    let text = std::str::from_utf8(&out).expect("rdjsonl output is UTF-8");
    let mut lines = 0;
    for line in text.lines() {
        let diag: Diagnostic = serde_json::from_str(line).expect("each line is a diagnostic");
        assert!(diag.location.is_some(), "diagnostic without location: {line}");
        assert!(matches!(diag.severity, Severity::Error | Severity::Info));
        lines += 1;
    }
    if let Some(diagnostics) = written {
        assert_eq!(lines, diagnostics);
    }
});
