//! Behavior of a session whose customer has authenticated.

use super::error::{AuthError, ExitError, WithdrawError};
use super::{withdrawing, AtmSession};
use crate::core::{AccountNumber, Money, SessionState};

pub(super) fn authenticate(
    _session: &mut AtmSession,
    _account_number: &str,
    _pin: &str,
) -> Result<(), AuthError> {
    Err(AuthError::AlreadyAuthenticated)
}

/// Enter `Withdrawing` before any amount is validated, then hand the same
/// call over to that state.
pub(super) fn withdraw(
    session: &mut AtmSession,
    account: AccountNumber,
    amount: Money,
) -> Result<(), WithdrawError> {
    session.transition(SessionState::Withdrawing {
        account: account.clone(),
    });
    withdrawing::withdraw(session, account, amount)
}

pub(super) fn exit(session: &mut AtmSession) -> Result<(), ExitError> {
    session.transition(SessionState::Idle);
    Ok(())
}
