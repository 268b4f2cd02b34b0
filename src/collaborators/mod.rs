//! External collaborators.
//!
//! Defines the `MoneyMaker` and `Logger` capability traits that players
//! and bank accounts delegate to, plus the production implementations.
//! Test substitutes live in [`crate::doubles`].

use tracing::info;

use crate::types::Cash;

/// Produces additional cash on demand.
///
/// A player holds one of these but never owns its lifecycle.
#[cfg_attr(test, mockall::automock)]
pub trait MoneyMaker {
    /// Produce an amount of cash. The caller decides what to do with it.
    fn make_money(&self) -> Cash;
}

/// Accepts log messages on behalf of an account.
#[cfg_attr(test, mockall::automock)]
pub trait Logger {
    /// Write a message. Returns whether the write succeeded.
    fn write(&self, message: &str) -> bool;
}

// ---------------------------------------------------------------------------
// Production implementations
// ---------------------------------------------------------------------------

/// A fixed income paid out on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Salary {
    amount: Cash,
}

impl Salary {
    pub fn new(amount: Cash) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> Cash {
        self.amount
    }
}

impl MoneyMaker for Salary {
    fn make_money(&self) -> Cash {
        self.amount
    }
}

/// Logger that forwards every message to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl Logger for TracingLog {
    fn write(&self, message: &str) -> bool {
        info!(target: "roshambo::ledger", entry = message, "Ledger entry");
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
