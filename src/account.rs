//! Bank account with an injected logging collaborator.
//!
//! Deposits are validated and announced to the [`Logger`]; withdrawals
//! report whether they went through.

use std::rc::Rc;

use tracing::debug;

use crate::collaborators::Logger;
use crate::doubles::NullLog;
use crate::types::{Cash, GameError};

pub struct BankAccount {
    balance: Cash,
    log: Rc<dyn Logger>,
}

impl BankAccount {
    /// An account whose deposits go unlogged.
    pub fn new(starting_balance: Cash) -> Self {
        Self::with_logger(starting_balance, Rc::new(NullLog))
    }

    pub fn with_logger(starting_balance: Cash, log: Rc<dyn Logger>) -> Self {
        Self {
            balance: starting_balance,
            log,
        }
    }

    pub fn balance(&self) -> Cash {
        self.balance
    }

    /// Deposit a strictly positive amount.
    ///
    /// The logger sees exactly one `"Depositing {amount}"` message per
    /// accepted deposit. Its answer never blocks the deposit.
    pub fn deposit(&mut self, amount: Cash) -> Result<(), GameError> {
        if amount <= 0 {
            return Err(GameError::InvalidAmount(amount));
        }
        let balance = self.balance.checked_add(amount).ok_or(GameError::BalanceOverflow {
            balance: self.balance,
            amount,
        })?;

        if !self.log.write(&format!("Depositing {amount}")) {
            debug!(amount, "Logger rejected deposit message");
        }
        self.balance = balance;
        Ok(())
    }

    /// Withdraw if the balance covers `amount`. Returns whether it did.
    pub fn withdraw(&mut self, amount: Cash) -> bool {
        match self.balance.checked_sub(amount) {
            Some(remaining) if self.balance >= amount => {
                self.balance = remaining;
                true
            }
            _ => false,
        }
    }
}

impl std::fmt::Debug for BankAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BankAccount")
            .field("balance", &self.balance)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
