//! Test substitutes for the collaborator traits.
//!
//! Three escalating shapes per trait:
//! - fake: trivial working behaviour (`FakeMoney`, `NullLog`)
//! - stub: a pre-configured answer (`StubMoney`, `StubLog`)
//! - mock: a stub that also counts calls per operation (`MockMoney`, `MockLog`)
//!
//! Framework-generated mocks come from `mockall` in the test suites.

pub mod money;
pub mod log;

pub use log::{MockLog, NullLog, StubLog};
pub use money::{FakeMoney, MockMoney, StubMoney};

use std::cell::RefCell;
use std::collections::HashMap;

/// Invocation counts keyed by operation name.
///
/// Interior mutability lets the collaborator traits keep `&self` receivers.
#[derive(Debug, Default)]
pub struct CallLog {
    counts: RefCell<HashMap<String, usize>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one call for `operation`, creating the entry on first use.
    pub fn record(&self, operation: &str) {
        *self
            .counts
            .borrow_mut()
            .entry(operation.to_string())
            .or_insert(0) += 1;
    }

    /// Calls recorded for `operation`; 0 if it was never called.
    pub fn count(&self, operation: &str) -> usize {
        self.counts.borrow().get(operation).copied().unwrap_or(0)
    }

    /// Snapshot of every recorded operation.
    pub fn snapshot(&self) -> HashMap<String, usize> {
        self.counts.borrow().clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
