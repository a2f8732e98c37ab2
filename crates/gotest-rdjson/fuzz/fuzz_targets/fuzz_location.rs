// Copyright (c) 2026 - present gotest2rdjsonl contributors
// SPDX-License-Identifier: MIT

//! Fuzz target for the location heuristic

#![no_main]

use libfuzzer_sys::fuzz_target;

use gotest_rdjson::extract_location;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        if let Some(location) = extract_location(line) {
            assert!(line.contains(&location.path));
            assert_eq!(location.range.start.column, 0);
        }
    }
});
