//! `Logger` substitutes.

use std::cell::RefCell;
use std::collections::HashMap;

use super::CallLog;
use crate::collaborators::Logger;

/// Fake / null object: accepts everything and reports success.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl Logger for NullLog {
    fn write(&self, _message: &str) -> bool {
        true
    }
}

/// Stub: answers every write with a fixed result.
#[derive(Debug, Clone, Copy)]
pub struct StubLog {
    expected_result: bool,
}

impl StubLog {
    pub fn new(expected_result: bool) -> Self {
        Self { expected_result }
    }
}

impl Logger for StubLog {
    fn write(&self, _message: &str) -> bool {
        self.expected_result
    }
}

/// Hand-rolled mock: a stub that counts writes and keeps the last message.
#[derive(Debug)]
pub struct MockLog {
    expected_result: bool,
    calls: CallLog,
    last_message: RefCell<Option<String>>,
}

impl MockLog {
    pub const WRITE: &'static str = "write";

    pub fn new(expected_result: bool) -> Self {
        Self {
            expected_result,
            calls: CallLog::new(),
            last_message: RefCell::new(None),
        }
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.calls.count(operation)
    }

    pub fn call_counts(&self) -> HashMap<String, usize> {
        self.calls.snapshot()
    }

    pub fn last_message(&self) -> Option<String> {
        self.last_message.borrow().clone()
    }
}

impl Logger for MockLog {
    fn write(&self, message: &str) -> bool {
        self.calls.record(Self::WRITE);
        *self.last_message.borrow_mut() = Some(message.to_string());
        self.expected_result
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
