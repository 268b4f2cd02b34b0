//! `MoneyMaker` substitutes.

use std::collections::HashMap;

use super::CallLog;
use crate::collaborators::MoneyMaker;
use crate::types::Cash;

/// Fake: always makes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeMoney;

impl MoneyMaker for FakeMoney {
    fn make_money(&self) -> Cash {
        0
    }
}

/// Stub: always returns the amount it was built with.
#[derive(Debug, Clone, Copy)]
pub struct StubMoney {
    expected_amount: Cash,
}

impl StubMoney {
    pub fn new(expected_amount: Cash) -> Self {
        Self { expected_amount }
    }
}

impl MoneyMaker for StubMoney {
    fn make_money(&self) -> Cash {
        self.expected_amount
    }
}

/// Hand-rolled mock: a stub that counts its calls.
#[derive(Debug)]
pub struct MockMoney {
    expected_amount: Cash,
    calls: CallLog,
}

impl MockMoney {
    pub const MAKE_MONEY: &'static str = "make_money";

    pub fn new(expected_amount: Cash) -> Self {
        Self {
            expected_amount,
            calls: CallLog::new(),
        }
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.calls.count(operation)
    }

    pub fn call_counts(&self) -> HashMap<String, usize> {
        self.calls.snapshot()
    }
}

impl MoneyMaker for MockMoney {
    fn make_money(&self) -> Cash {
        self.calls.record(Self::MAKE_MONEY);
        self.expected_amount
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
