// Copyright (c) 2026 - present gotest2rdjsonl contributors
// SPDX-License-Identifier: MIT

//! Location heuristic for free-text test output
//!
//! Go test failures print lines such as `    foo_test.go:42: expected 1`.
//! [`extract_location`] recovers the `(path, line)` pair from such a line.
//! It is a heuristic, not a grammar: any line of the form
//! `<path>:<integer>:<anything>` matches, and nothing else does.

use crate::rdf::Location;

/// Maximum number of `:`-separated fields considered
const MAX_FIELDS: usize = 3;

/// Try to read a `<path>:<line>:<rest>` location from one line of output
///
/// The line is trimmed of surrounding whitespace and split on `:` into at
/// most three fields. At least three fields are required and the second
/// must parse as a base-10 integer. The column is never populated.
///
/// ```
/// use gotest_rdjson::extract_location;
///
/// let loc = extract_location("    foo/bar.go:42: boom\n").unwrap();
/// assert_eq!(loc.path, "foo/bar.go");
/// assert_eq!(loc.line(), 42);
///
/// assert!(extract_location("--- FAIL: Test_ng (0.00s)").is_none());
/// ```
#[must_use]
pub fn extract_location(line: &str) -> Option<Location> {
    let mut fields = line.trim().splitn(MAX_FIELDS, ':');
    let path = fields.next()?;
    let line_number = fields.next()?;
    // the trailing message may be empty, but the separator must be there
    fields.next()?;

    let line_number: i64 = line_number.parse().ok()?;
    Some(Location::at_line(path, line_number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_extracts_path_and_line() {
        let loc = extract_location("foo/bar.go:42: boom").expect("Should match");
        assert_eq!(loc, Location::at_line("foo/bar.go", 42));
        assert_eq!(loc.range.start.column, 0);
    }

    #[test]
    fn test_trims_indentation_and_newline() {
        let loc = extract_location("        test_test.go:10: failing\n").expect("Should match");
        assert_eq!(loc.path, "test_test.go");
        assert_eq!(loc.line(), 10);
    }

    #[test]
    fn test_rest_may_contain_colons() {
        let loc = extract_location("a.go:7:12: unexpected: value").expect("Should match");
        assert_eq!(loc.path, "a.go");
        assert_eq!(loc.line(), 7);
    }

    #[test]
    fn test_empty_rest_still_matches() {
        let loc = extract_location("a.go:3:").expect("Should match");
        assert_eq!(loc.line(), 3);
    }

    #[test]
    fn test_two_fields_do_not_match() {
        assert_eq!(extract_location("a.go:3"), None);
        assert_eq!(extract_location("--- FAIL: Test_ng (0.00s)"), None);
    }

    #[test]
    fn test_no_separator_does_not_match() {
        assert_eq!(extract_location("=== RUN   Test_ok"), None);
        assert_eq!(extract_location(""), None);
        assert_eq!(extract_location("   \n"), None);
    }

    #[test]
    fn test_non_numeric_line_does_not_match() {
        assert_eq!(extract_location("panic: runtime error: index out of range"), None);
        assert_eq!(extract_location("a.go: 3: padded"), None);
        assert_eq!(extract_location("a.go:3x: suffix"), None);
    }

    #[test]
    fn test_signed_line_numbers_parse() {
        assert_eq!(extract_location("a.go:+5: x").map(|l| l.line()), Some(5));
        assert_eq!(extract_location("a.go:-1: x").map(|l| l.line()), Some(-1));
    }

    #[test]
    fn test_overflowing_line_does_not_match() {
        assert_eq!(extract_location("a.go:99999999999999999999: x"), None);
    }

    #[test]
    fn test_empty_path_is_accepted() {
        let loc = extract_location(":1: x").expect("Should match");
        assert_eq!(loc.path, "");
    }
}
