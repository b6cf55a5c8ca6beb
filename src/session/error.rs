//! Errors returned by the session verbs.
//!
//! Every failure is local and recoverable. A verb that returns an error has
//! not mutated any balance.

use crate::core::Money;
use thiserror::Error;

/// Errors from [`AtmSession::authenticate`](super::AtmSession::authenticate).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("account number does not exist")]
    AccountNotFound,

    #[error("PIN does not match")]
    InvalidPin,

    #[error("already authenticated")]
    AlreadyAuthenticated,

    #[error("cannot authenticate during a transaction")]
    TransactionInProgress,
}

/// Errors from [`AtmSession::withdraw`](super::AtmSession::withdraw).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WithdrawError {
    #[error("please authenticate first")]
    NotAuthenticated,

    #[error("withdrawal amount must be greater than zero")]
    InvalidAmount,

    #[error("machine has insufficient cash: requested {requested}, available {available}")]
    InsufficientMachineCash { requested: Money, available: Money },

    #[error("insufficient account balance: requested {requested}, balance {balance}")]
    InsufficientAccountBalance { requested: Money, balance: Money },
}

/// Errors from [`AtmSession::exit`](super::AtmSession::exit).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExitError {
    #[error("no customer session to end")]
    NotAuthenticated,
}
