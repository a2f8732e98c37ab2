// Copyright (c) 2026 - present gotest2rdjsonl contributors
// SPDX-License-Identifier: MIT

//! Property-based tests for gotest-rdjson
//!
//! These tests use proptest to check the window bound, the relation between
//! terminating events and emitted diagnostics, and location selection over
//! arbitrary event sequences.

use proptest::prelude::*;

use gotest_rdjson::{Action, Converter, OutputWindow, Step, TestEvent, extract_location};

// ============================================================================
// Strategies
// ============================================================================

/// Output lines that never contain a location
fn plain_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("".to_string()),
        Just("=== RUN   TestX\n".to_string()),
        Just("--- FAIL: TestX (0.00s)\n".to_string()),
        Just("panic: runtime error: index out of range\n".to_string()),
        Just("日本語テスト\n".to_string()),
        "[a-zA-Z0-9 ]{0,40}",
    ]
}

/// Output lines that always contain a location
fn located_line() -> impl Strategy<Value = (String, i64, String)> {
    ("[a-z_/]{1,20}\\.go", 0i64..100_000, "[a-zA-Z0-9 ]{0,20}").prop_map(|(path, line, rest)| {
        let text = format!("    {path}:{line}: {rest}\n");
        (path, line, text)
    })
}

fn any_line() -> impl Strategy<Value = String> {
    prop_oneof![plain_line(), located_line().prop_map(|(_, _, text)| text)]
}

fn any_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Start),
        Just(Action::Run),
        Just(Action::Pause),
        Just(Action::Cont),
        Just(Action::Pass),
        Just(Action::Bench),
        Just(Action::Fail),
        Just(Action::Skip),
        "[a-z]{0,8}".prop_map(Action::from),
    ]
}

fn any_event() -> impl Strategy<Value = TestEvent> {
    prop_oneof![
        3 => any_line().prop_map(TestEvent::output),
        1 => any_action().prop_map(TestEvent::new),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn window_never_exceeds_capacity(
        capacity in 0usize..8,
        lines in prop::collection::vec(any_line(), 0..50),
    ) {
        let mut window = OutputWindow::new(capacity);
        for line in lines {
            window.push(TestEvent::output(line));
            prop_assert!(window.len() <= capacity);
        }
    }

    #[test]
    fn window_keeps_most_recent_lines(
        capacity in 1usize..8,
        lines in prop::collection::vec(any_line(), 0..50),
    ) {
        let mut window = OutputWindow::new(capacity);
        for line in &lines {
            window.push(TestEvent::output(line.clone()));
        }
        let kept: Vec<String> = window
            .drain_and_clear()
            .into_iter()
            .map(|e| e.output_text().to_string())
            .collect();
        let start = lines.len().saturating_sub(capacity);
        prop_assert_eq!(kept, lines[start..].to_vec());
    }

    #[test]
    fn diagnostics_never_exceed_terminating_events(
        capacity in 0usize..6,
        events in prop::collection::vec(any_event(), 0..80),
    ) {
        let mut converter = Converter::new(capacity);
        let mut terminating = 0usize;
        let mut emitted = 0usize;
        for event in events {
            if event.action.is_terminating() {
                terminating += 1;
            }
            let step = converter.process(event);
            prop_assert!(converter.window().len() <= capacity);
            if let Step::Emitted(diag) = step {
                prop_assert!(diag.location.is_some());
                emitted += 1;
            }
        }
        prop_assert!(emitted <= terminating);
    }

    #[test]
    fn every_located_window_emits(
        capacity in 1usize..6,
        tests in prop::collection::vec(
            (
                prop::collection::vec(plain_line(), 0..4),
                located_line(),
                prop::collection::vec(plain_line(), 0..6),
                prop::bool::ANY,
                prop::bool::ANY,
            ),
            0..20,
        ),
    ) {
        let mut converter = Converter::new(capacity);
        let mut terminating = 0usize;
        let mut emitted = 0usize;
        for (before, (path, line, text), mut after, skip, interleave_run) in tests {
            // keep the located line inside the window
            after.truncate(capacity - 1);
            converter.process(TestEvent::new("run"));
            for p in before {
                converter.process(TestEvent::output(p));
            }
            converter.process(TestEvent::output(text));
            for p in after {
                converter.process(TestEvent::output(p));
                if interleave_run {
                    converter.process(TestEvent::new("run"));
                }
            }
            terminating += 1;
            let action = if skip { "skip" } else { "fail" };
            let step = converter.process(TestEvent::new(action));
            if let Some(diag) = step.into_diagnostic() {
                emitted += 1;
                let location = diag.location;
                prop_assert_eq!(location.as_ref().map(|l| l.path.as_str()), Some(path.as_str()));
                prop_assert_eq!(location.map(|l| l.line()), Some(line));
            }
        }
        prop_assert_eq!(emitted, terminating);
    }

    #[test]
    fn unlocated_windows_never_emit(
        capacity in 0usize..6,
        tests in prop::collection::vec(
            (prop::collection::vec(plain_line(), 0..8), prop::bool::ANY),
            0..20,
        ),
    ) {
        let mut converter = Converter::new(capacity);
        for (lines, skip) in tests {
            for p in lines {
                converter.process(TestEvent::output(p));
            }
            let action = if skip { "skip" } else { "fail" };
            let step = converter.process(TestEvent::new(action));
            prop_assert!(step.is_terminating());
            prop_assert!(step.into_diagnostic().is_none());
        }
    }

    #[test]
    fn leading_plain_lines_do_not_change_location(
        plain in prop::collection::vec(plain_line(), 0..5),
        (path, line, text) in located_line(),
    ) {
        let mut converter = Converter::new(plain.len() + 1);
        for p in plain {
            converter.process(TestEvent::output(p));
        }
        converter.process(TestEvent::output(text));
        let diag = converter.process(TestEvent::new("fail")).into_diagnostic();
        let location = diag.and_then(|d| d.location);
        prop_assert_eq!(location.as_ref().map(|l| l.path.as_str()), Some(path.as_str()));
        prop_assert_eq!(location.map(|l| l.line()), Some(line));
    }

    #[test]
    fn later_location_overrides_earlier(
        (_, _, first) in located_line(),
        (path, line, second) in located_line(),
    ) {
        let mut converter = Converter::new(3);
        converter.process(TestEvent::output(first));
        converter.process(TestEvent::output(second));
        let diag = converter.process(TestEvent::new("skip")).into_diagnostic();
        let location = diag.and_then(|d| d.location);
        prop_assert_eq!(location.as_ref().map(|l| l.path.clone()), Some(path));
        prop_assert_eq!(location.map(|l| l.line()), Some(line));
    }

    #[test]
    fn run_never_mutates_window(
        lines in prop::collection::vec(any_line(), 0..5),
    ) {
        let mut converter = Converter::new(5);
        for line in lines {
            converter.process(TestEvent::output(line));
        }
        let before: Vec<TestEvent> = converter.window().iter().cloned().collect();
        prop_assert_eq!(converter.process(TestEvent::new("run")), Step::Ignored);
        let after: Vec<TestEvent> = converter.window().iter().cloned().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn extract_location_never_panics(line in ".*") {
        let _ = extract_location(&line);
    }
}
