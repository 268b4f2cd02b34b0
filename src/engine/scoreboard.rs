//! Running tally of played rounds.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::referee::RoundReport;
use crate::types::{Cash, Outcome};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub rounds: u64,
    pub left_wins: u64,
    pub right_wins: u64,
    /// Rounds with no winner.
    pub ties: u64,
    pub cash_moved: Cash,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: &RoundReport) {
        self.rounds += 1;
        match report.outcome {
            Outcome::Beats => self.left_wins += 1,
            Outcome::Loses => self.right_wins += 1,
            Outcome::Ties | Outcome::Undefined => self.ties += 1,
        }
        self.cash_moved += report.stake_paid;
    }

    /// Left wins minus right wins.
    pub fn margin(&self) -> i64 {
        self.left_wins as i64 - self.right_wins as i64
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rounds={} left={} right={} ties={} moved={}",
            self.rounds, self.left_wins, self.right_wins, self.ties, self.cash_moved,
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
