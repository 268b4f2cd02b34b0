//! Player: cash, gesture throwing, and the money-making seam.
//!
//! A player delegates money-making to an injected [`MoneyMaker`] and
//! random throws to an injected [`RandomSource`]; both are swappable so
//! tests can substitute fakes, stubs, or mocks.

pub mod random;

use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::collaborators::MoneyMaker;
use crate::gesture::Gesture;
use crate::types::{Cash, GameError};
use random::{RandomSource, ThreadRandom};

pub struct Player {
    /// Current balance. Only the withdrawal and deposit guards check it.
    pub cash: Cash,
    name: String,
    money_source: Option<Rc<dyn MoneyMaker>>,
    random: Box<dyn RandomSource>,
}

impl Player {
    /// A player with no cash, no money source, and a thread-local RNG.
    pub fn new() -> Self {
        Self {
            cash: 0,
            name: "player".to_string(),
            money_source: None,
            random: Box::new(ThreadRandom),
        }
    }

    /// A player that makes money through `source`.
    pub fn with_money_source(source: Rc<dyn MoneyMaker>) -> Self {
        Self {
            money_source: Some(source),
            ..Self::new()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_cash(mut self, cash: Cash) -> Self {
        self.cash = cash;
        self
    }

    /// Replace the randomness used by [`Player::throw_random_gesture`].
    pub fn with_random_source(mut self, source: impl RandomSource + 'static) -> Self {
        self.random = Box::new(source);
        self
    }

    pub fn set_random_source(&mut self, source: Box<dyn RandomSource>) {
        self.random = source;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_money_source(&self) -> bool {
        self.money_source.is_some()
    }

    // -- Cash ----------------------------------------------------------------

    /// Take `amount` out if the balance covers it; otherwise do nothing.
    ///
    /// A refused withdrawal is silent: no error, no partial withdrawal.
    /// Amounts whose subtraction would overflow are refused the same way.
    pub fn withdraw(&mut self, amount: Cash) {
        match self.cash.checked_sub(amount) {
            Some(remaining) if amount <= self.cash => self.cash = remaining,
            _ => debug!(
                player = %self.name,
                amount,
                cash = self.cash,
                "Withdrawal refused, balance unchanged"
            ),
        }
    }

    /// Add a strictly positive `amount` to the balance.
    pub fn deposit(&mut self, amount: Cash) -> Result<(), GameError> {
        if amount <= 0 {
            return Err(GameError::InvalidAmount(amount));
        }
        self.credit(amount)
    }

    /// Ask the money source for cash and return its answer unchanged.
    pub fn make_money(&self) -> Result<Cash, GameError> {
        let source = self.money_source.as_ref().ok_or(GameError::NoMoneySource)?;
        Ok(source.make_money())
    }

    /// Make money and add it to the balance. Returns the amount made.
    pub fn collect_earnings(&mut self) -> Result<Cash, GameError> {
        let amount = self.make_money()?;
        self.credit(amount)?;
        Ok(amount)
    }

    fn credit(&mut self, amount: Cash) -> Result<(), GameError> {
        self.cash = self.cash.checked_add(amount).ok_or(GameError::BalanceOverflow {
            balance: self.cash,
            amount,
        })?;
        Ok(())
    }

    // -- Gestures ------------------------------------------------------------

    /// Throw the gesture called `name` (exact, case-sensitive).
    pub fn throw_gesture<'a>(&self, name: impl Into<Option<&'a str>>) -> Result<Gesture, GameError> {
        match name.into() {
            None | Some("") => Err(GameError::EmptySelection),
            Some(name) => {
                Gesture::from_name(name).ok_or_else(|| GameError::UnknownSelection(name.to_string()))
            }
        }
    }

    /// Throw whichever gesture the random source picks.
    pub fn throw_random_gesture(&mut self) -> Result<Gesture, GameError> {
        let len = Gesture::ALL.len();
        let index = self.random.next_index(len);
        Gesture::ALL
            .get(index)
            .copied()
            .ok_or(GameError::RandomIndexOutOfRange { index, len })
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("cash", &self.cash)
            .field("has_money_source", &self.has_money_source())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
