//! Construction-time configuration for a session.
//!
//! A session is configured once, with the machine's cash and the fixed list
//! of accounts it serves. The configuration can be written in code through
//! [`SessionBuilder`] or read from JSON:
//!
//! ```json
//! {
//!   "available_cash": 5000000,
//!   "accounts": [
//!     { "account_number": "81975433120", "pin": "2311", "balance": 2000000 }
//!   ]
//! }
//! ```
//!
//! Amounts are integer minor units. Validation collects every problem with
//! the account list before reporting, rather than failing on the first.

mod builder;
mod error;
pub mod rules;

pub use builder::SessionBuilder;
pub use error::{ConfigError, ConfigViolation};

use crate::core::{Account, Money};
use crate::session::AtmSession;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;

/// Initial cash and accounts for one machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub available_cash: Money,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl SessionConfig {
    /// Parse a configuration from JSON. Does not validate.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check the account list, reporting all violations at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match rules::validate_accounts(&self.accounts) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    /// Validate and build a session in `Idle`.
    pub fn into_session(self) -> Result<AtmSession, ConfigError> {
        AtmSession::from_config(self)
    }
}
