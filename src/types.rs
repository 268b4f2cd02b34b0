//! Shared domain types: cash, comparison outcomes, and the error enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cash balances and amounts. Non-negative by convention only.
pub type Cash = i64;

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Result of comparing two gestures, from the left-hand side's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Loses,
    Ties,
    Beats,
    /// No comparison was possible (the other gesture was absent).
    Undefined,
}

impl Outcome {
    /// Sentinel value reported for [`Outcome::Undefined`].
    pub const UNDEFINED_VALUE: i8 = -2;

    /// Signed value: -1, 0, +1, or the -2 sentinel.
    pub fn value(self) -> i8 {
        match self {
            Outcome::Loses => -1,
            Outcome::Ties => 0,
            Outcome::Beats => 1,
            Outcome::Undefined => Self::UNDEFINED_VALUE,
        }
    }

    /// The same result seen from the other side. `Undefined` stays undefined.
    pub fn reversed(self) -> Self {
        match self {
            Outcome::Loses => Outcome::Beats,
            Outcome::Beats => Outcome::Loses,
            other => other,
        }
    }

    pub fn is_decisive(self) -> bool {
        matches!(self, Outcome::Beats | Outcome::Loses)
    }
}

impl From<Outcome> for i32 {
    fn from(outcome: Outcome) -> Self {
        i32::from(outcome.value())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Loses => write!(f, "LOSES"),
            Outcome::Ties => write!(f, "TIES"),
            Outcome::Beats => write!(f, "BEATS"),
            Outcome::Undefined => write!(f, "UNDEFINED"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Fatal conditions raised by players and accounts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Player threw before choosing a gesture")]
    EmptySelection,

    #[error("This gesture is not implemented!!! (got {0:?})")]
    UnknownSelection(String),

    #[error("Deposit amount must be positive (got {0})")]
    InvalidAmount(Cash),

    #[error("Adding {amount} to a balance of {balance} would overflow")]
    BalanceOverflow { balance: Cash, amount: Cash },

    #[error("No money source attached to player")]
    NoMoneySource,

    #[error("Random source returned index {index}, expected one below {len}")]
    RandomIndexOutOfRange { index: usize, len: usize },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
