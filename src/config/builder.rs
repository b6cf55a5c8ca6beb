//! Fluent builder for sessions.

use super::error::ConfigError;
use super::SessionConfig;
use crate::core::{Account, Money};
use crate::session::AtmSession;

/// Builder for constructing an [`AtmSession`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use cashpoint::config::SessionBuilder;
/// use cashpoint::core::{Account, Money};
///
/// let atm = SessionBuilder::new()
///     .available_cash(Money::from_major(50_000))
///     .account(Account::new("81975433120", "2311", Money::from_major(20_000)))
///     .build()
///     .unwrap();
///
/// assert_eq!(atm.state().name(), "Idle");
/// ```
#[derive(Debug, Default)]
pub struct SessionBuilder {
    available_cash: Option<Money>,
    accounts: Vec<Account>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the machine's cash on hand (required).
    pub fn available_cash(mut self, amount: Money) -> Self {
        self.available_cash = Some(amount);
        self
    }

    /// Add one account.
    pub fn account(mut self, account: Account) -> Self {
        self.accounts.push(account);
        self
    }

    /// Add multiple accounts at once.
    pub fn accounts(mut self, accounts: impl IntoIterator<Item = Account>) -> Self {
        self.accounts.extend(accounts);
        self
    }

    /// Collect the settings into a configuration without validating it.
    pub fn into_config(self) -> Result<SessionConfig, ConfigError> {
        let available_cash = self
            .available_cash
            .ok_or(ConfigError::MissingAvailableCash)?;

        Ok(SessionConfig {
            available_cash,
            accounts: self.accounts,
        })
    }

    /// Validate and build the session.
    pub fn build(self) -> Result<AtmSession, ConfigError> {
        AtmSession::from_config(self.into_config()?)
    }
}
