//! Behavior of a session with no authenticated customer.

use super::error::{AuthError, ExitError, WithdrawError};
use super::AtmSession;
use crate::core::{Money, SessionState};
use tracing::info;

/// Look up the account and check the PIN; on success the session becomes
/// `Authenticated` for that account.
pub(super) fn authenticate(
    session: &mut AtmSession,
    account_number: &str,
    pin: &str,
) -> Result<(), AuthError> {
    let account = session
        .accounts
        .get(account_number)
        .ok_or(AuthError::AccountNotFound)?;

    if !account.pin().matches(pin) {
        return Err(AuthError::InvalidPin);
    }

    let account = account.account_number().clone();
    info!(session_id = %session.id, account = %account, "authenticated");
    session.transition(SessionState::Authenticated { account });
    Ok(())
}

pub(super) fn withdraw(_session: &mut AtmSession, _amount: Money) -> Result<(), WithdrawError> {
    Err(WithdrawError::NotAuthenticated)
}

pub(super) fn exit(_session: &mut AtmSession) -> Result<(), ExitError> {
    Err(ExitError::NotAuthenticated)
}
