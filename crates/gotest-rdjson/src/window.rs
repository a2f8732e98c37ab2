// Copyright (c) 2026 - present gotest2rdjsonl contributors
// SPDX-License-Identifier: MIT

//! Bounded window of recent output events

use std::collections::VecDeque;

use crate::event::TestEvent;

/// Default number of output lines kept as context
pub const DEFAULT_CAPACITY: usize = 3;

/// FIFO buffer holding the most recent `output` events
///
/// The window never holds more than `capacity` events. Pushing onto a full
/// window evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct OutputWindow {
    capacity: usize,
    events: VecDeque<TestEvent>,
}

impl OutputWindow {
    /// Create an empty window holding at most `capacity` events
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            // capped so a huge --buf-lines does not allocate up front
            events: VecDeque::with_capacity(capacity.min(64)),
        }
    }

    /// Append an event, evicting from the head when over capacity
    pub fn push(&mut self, event: TestEvent) {
        if self.capacity == 0 {
            return;
        }
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Take every buffered event in order, leaving the window empty
    pub fn drain_and_clear(&mut self) -> Vec<TestEvent> {
        self.events.drain(..).collect()
    }

    /// Discard every buffered event
    pub fn reset(&mut self) {
        self.events.clear();
    }

    /// Maximum number of events held
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of events currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the window holds no events
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over buffered events, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TestEvent> {
        self.events.iter()
    }
}

impl Default for OutputWindow {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
