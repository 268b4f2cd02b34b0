//! Gesture outcome resolver.
//!
//! The three gestures form a closed set, so the "who beats whom" relation
//! is a fixed table rather than per-type dispatch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::Outcome::{Beats, Loses, Ties};
use crate::types::{GameError, Outcome};

/// One of the three rock/paper/scissors throws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gesture {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

/// Row = left gesture, column = right gesture, both in `Gesture::ALL` order.
const OUTCOMES: [[Outcome; 3]; 3] = [
    [Ties, Loses, Beats],  // Rock
    [Beats, Ties, Loses],  // Paper
    [Loses, Beats, Ties],  // Scissors
];

impl Gesture {
    /// Every gesture, in the order random throws index into.
    pub const ALL: [Gesture; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

    /// Compare against a gesture that may be absent.
    ///
    /// Returns [`Outcome::Undefined`] when `other` is `None`; that is a
    /// defined non-result, not an error.
    pub fn beats(self, other: impl Into<Option<Gesture>>) -> Outcome {
        match other.into() {
            Some(other) => self.versus(other),
            None => Outcome::Undefined,
        }
    }

    /// Compare against another gesture. Never `Undefined`.
    pub fn versus(self, other: Gesture) -> Outcome {
        OUTCOMES[self as usize][other as usize]
    }

    /// Exact, case-sensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Gesture> {
        match name {
            "Rock" => Some(Gesture::Rock),
            "Paper" => Some(Gesture::Paper),
            "Scissors" => Some(Gesture::Scissors),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Gesture::Rock => "Rock",
            Gesture::Paper => "Paper",
            Gesture::Scissors => "Scissors",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gesture {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(GameError::EmptySelection);
        }
        Gesture::from_name(s).ok_or_else(|| GameError::UnknownSelection(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
