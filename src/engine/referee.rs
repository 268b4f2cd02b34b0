//! Referee: plays one round between two players and settles the stake.
//!
//! Both players throw at random. On a decisive round the loser withdraws
//! the stake and the winner is paid only what actually left the loser's
//! balance, so a short loser pays nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::gesture::Gesture;
use crate::player::Player;
use crate::types::{Cash, GameError, Outcome};

/// Everything that happened in one round, from `left`'s perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    pub left: String,
    pub right: String,
    pub left_gesture: Gesture,
    pub right_gesture: Gesture,
    pub outcome: Outcome,
    /// Cash that actually changed hands.
    pub stake_paid: Cash,
    pub played_at: DateTime<Utc>,
}

impl RoundReport {
    /// Name of the winning player, if any.
    pub fn winner(&self) -> Option<&str> {
        match self.outcome {
            Outcome::Beats => Some(&self.left),
            Outcome::Loses => Some(&self.right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Referee {
    stake: Cash,
}

impl Referee {
    /// A negative stake is treated as no stake.
    pub fn new(stake: Cash) -> Self {
        Self { stake: stake.max(0) }
    }

    pub fn stake(&self) -> Cash {
        self.stake
    }

    /// Play one round. Errors only if a player's random source misbehaves.
    pub fn play_round(&self, left: &mut Player, right: &mut Player) -> Result<RoundReport, GameError> {
        let left_gesture = left.throw_random_gesture()?;
        let right_gesture = right.throw_random_gesture()?;
        let outcome = left_gesture.versus(right_gesture);

        let stake_paid = if outcome.is_decisive() {
            let (loser, winner) = if outcome == Outcome::Beats {
                (&mut *right, &mut *left)
            } else {
                (&mut *left, &mut *right)
            };
            Self::settle(loser, winner, self.stake)
        } else {
            0
        };

        let report = RoundReport {
            left: left.name().to_string(),
            right: right.name().to_string(),
            left_gesture,
            right_gesture,
            outcome,
            stake_paid,
            played_at: Utc::now(),
        };

        info!(
            left = %report.left,
            right = %report.right,
            left_gesture = %left_gesture,
            right_gesture = %right_gesture,
            outcome = %outcome,
            stake_paid,
            "Round played"
        );

        Ok(report)
    }

    /// Move up to `stake` from `loser` to `winner`. Returns what moved.
    fn settle(loser: &mut Player, winner: &mut Player, stake: Cash) -> Cash {
        if stake == 0 {
            return 0;
        }
        // A winner whose balance cannot absorb the stake is paid nothing.
        if winner.cash.checked_add(stake).is_none() {
            return 0;
        }
        let before = loser.cash;
        loser.withdraw(stake);
        let paid = before - loser.cash;
        winner.cash += paid;
        paid
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
