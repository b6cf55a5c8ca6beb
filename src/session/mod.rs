//! The ATM session and its state-dispatched verbs.
//!
//! `AtmSession` owns the accounts, the machine's cash and the current
//! [`SessionState`]. Each public verb matches on the current state and
//! forwards to that state's handler module, passing the session in
//! explicitly:
//!
//! | State         | `authenticate`              | `withdraw`                         |
//! |---------------|-----------------------------|------------------------------------|
//! | Idle          | check credentials           | `NotAuthenticated`                 |
//! | Authenticated | `AlreadyAuthenticated`      | enter Withdrawing, then withdraw   |
//! | Withdrawing   | `TransactionInProgress`     | validate, debit, back to Authenticated |
//!
//! # Example
//!
//! ```rust
//! use cashpoint::core::{Account, Money};
//! use cashpoint::session::{AtmSession, WithdrawError};
//!
//! let mut atm = AtmSession::new(
//!     Money::from_major(50_000),
//!     vec![Account::new("81975433120", "2311", Money::from_major(20_000))],
//! )
//! .unwrap();
//!
//! atm.authenticate("81975433120", "2311").unwrap();
//! assert!(matches!(
//!     atm.withdraw(Money::from_major(60_000)),
//!     Err(WithdrawError::InsufficientAccountBalance { .. })
//! ));
//!
//! atm.withdraw(Money::from_major(15_000)).unwrap();
//! assert_eq!(atm.available_cash(), Money::from_major(35_000));
//! assert_eq!(atm.active_account().unwrap().balance(), Money::from_major(5_000));
//! ```

mod authenticated;
mod error;
mod idle;
mod withdrawing;

pub use error::{AuthError, ExitError, WithdrawError};

use crate::config::{ConfigError, SessionConfig};
use crate::core::{Account, AccountNumber, Money, SessionHistory, SessionState, StateTransition};
use chrono::Utc;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// One ATM session: the machine's cash, the accounts it knows, and the
/// state governing which verbs are legal.
#[derive(Debug)]
pub struct AtmSession {
    id: Uuid,
    accounts: HashMap<AccountNumber, Account>,
    available_cash: Money,
    state: SessionState,
    history: SessionHistory,
}

impl AtmSession {
    /// Create a session in `Idle` with the given cash and accounts.
    ///
    /// Fails if the accounts do not form a valid configuration (for
    /// example, two accounts share a number).
    pub fn new(
        available_cash: Money,
        accounts: impl IntoIterator<Item = Account>,
    ) -> Result<Self, ConfigError> {
        Self::from_config(SessionConfig {
            available_cash,
            accounts: accounts.into_iter().collect(),
        })
    }

    /// Create a session from a validated configuration.
    pub fn from_config(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let accounts = config
            .accounts
            .into_iter()
            .map(|account| (account.account_number().clone(), account))
            .collect();

        let session = Self {
            id: Uuid::new_v4(),
            accounts,
            available_cash: config.available_cash,
            state: SessionState::Idle,
            history: SessionHistory::new(),
        };
        debug!(
            session_id = %session.id,
            accounts = session.accounts.len(),
            available_cash = %session.available_cash,
            "session created"
        );
        Ok(session)
    }

    /// Authenticate a customer by account number and PIN.
    ///
    /// Only legal from `Idle`. On success the session is `Authenticated`
    /// for that account; on failure nothing changes.
    pub fn authenticate(&mut self, account_number: &str, pin: &str) -> Result<(), AuthError> {
        let result = match self.state {
            SessionState::Idle => idle::authenticate(self, account_number, pin),
            SessionState::Authenticated { .. } => {
                authenticated::authenticate(self, account_number, pin)
            }
            SessionState::Withdrawing { .. } => withdrawing::authenticate(self, account_number, pin),
        };

        if let Err(error) = &result {
            debug!(session_id = %self.id, state = self.state.name(), %error, "authentication rejected");
        }
        result
    }

    /// Withdraw `amount` from the active account.
    ///
    /// On success both the machine's cash and the account balance drop by
    /// exactly `amount`. After the attempt, successful or not, the session
    /// rests in `Authenticated` so the customer may try again or exit.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), WithdrawError> {
        let result = match self.state {
            SessionState::Idle => idle::withdraw(self, amount),
            SessionState::Authenticated { ref account } => {
                let account = account.clone();
                authenticated::withdraw(self, account, amount)
            }
            SessionState::Withdrawing { ref account } => {
                let account = account.clone();
                withdrawing::withdraw(self, account, amount)
            }
        };

        if let Err(error) = &result {
            debug!(session_id = %self.id, amount = %amount, %error, "withdrawal rejected");
        }
        result
    }

    /// End the customer's session and return to `Idle`.
    pub fn exit(&mut self) -> Result<(), ExitError> {
        match self.state {
            SessionState::Idle => idle::exit(self),
            SessionState::Authenticated { .. } => authenticated::exit(self),
            SessionState::Withdrawing { .. } => withdrawing::exit(self),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn available_cash(&self) -> Money {
        self.available_cash
    }

    /// The authenticated account, if any.
    pub fn active_account(&self) -> Option<&Account> {
        self.state
            .active_account()
            .and_then(|number| self.accounts.get(number))
    }

    pub fn account(&self, account_number: &str) -> Option<&Account> {
        self.accounts.get(account_number)
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Move to `to` and record the transition.
    fn transition(&mut self, to: SessionState) {
        debug_assert!(
            self.state.can_transition_to(&to),
            "illegal transition {} -> {}",
            self.state.name(),
            to.name()
        );

        let from = std::mem::replace(&mut self.state, to.clone());
        debug!(session_id = %self.id, from = from.name(), to = to.name(), "state transition");
        self.history.record(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
        });
    }
}
