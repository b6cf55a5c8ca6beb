//! Configuration errors and violations.

use crate::core::AccountNumber;
use thiserror::Error;

/// A single problem found while validating a session configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("account at position {index} has an empty account number")]
    EmptyAccountNumber { index: usize },

    #[error("account {account_number} has an empty PIN")]
    EmptyPin { account_number: AccountNumber },

    #[error("account number {account_number} appears more than once")]
    DuplicateAccountNumber { account_number: AccountNumber },
}

/// Errors that can occur when building a session from configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Every violation found, not just the first.
    #[error("invalid session configuration ({} violation(s))", .0.len())]
    Invalid(Vec<ConfigViolation>),

    #[error("failed to parse session configuration: {0}")]
    Parse(String),

    #[error("available cash not specified. Call .available_cash(amount) before .build()")]
    MissingAvailableCash,
}

impl ConfigError {
    /// Violations carried by an `Invalid` error; empty otherwise.
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::Invalid(violations) => violations.as_slice(),
            _ => &[],
        }
    }
}
