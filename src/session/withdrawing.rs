//! Behavior of a session while a withdrawal is underway.

use super::error::{AuthError, ExitError, WithdrawError};
use super::AtmSession;
use crate::core::{AccountNumber, Money, SessionState};
use tracing::info;

pub(super) fn authenticate(
    _session: &mut AtmSession,
    _account_number: &str,
    _pin: &str,
) -> Result<(), AuthError> {
    Err(AuthError::TransactionInProgress)
}

/// Validate and apply the withdrawal, then return to `Authenticated`
/// whatever the outcome.
pub(super) fn withdraw(
    session: &mut AtmSession,
    account: AccountNumber,
    amount: Money,
) -> Result<(), WithdrawError> {
    let result = settle(session, &account, amount);
    session.transition(SessionState::Authenticated { account });
    result
}

pub(super) fn exit(session: &mut AtmSession) -> Result<(), ExitError> {
    session.transition(SessionState::Idle);
    Ok(())
}

/// Checks run in order: amount, account balance, machine cash. Both
/// debits land together or not at all.
fn settle(
    session: &mut AtmSession,
    account: &AccountNumber,
    amount: Money,
) -> Result<(), WithdrawError> {
    if amount.is_zero() {
        return Err(WithdrawError::InvalidAmount);
    }

    let available = session.available_cash;
    // The account set never shrinks, so the active key always resolves.
    let holder = session
        .accounts
        .get_mut(account.as_str())
        .ok_or(WithdrawError::NotAuthenticated)?;

    let balance = holder.balance();
    let insufficient_balance = WithdrawError::InsufficientAccountBalance {
        requested: amount,
        balance,
    };
    if balance < amount {
        return Err(insufficient_balance);
    }

    let remaining_cash =
        available
            .checked_sub(amount)
            .ok_or(WithdrawError::InsufficientMachineCash {
                requested: amount,
                available,
            })?;
    let remaining_balance = holder.debit(amount).ok_or(insufficient_balance)?;

    session.available_cash = remaining_cash;

    info!(
        session_id = %session.id,
        account = %account,
        amount = %amount,
        remaining_balance = %remaining_balance,
        available_cash = %remaining_cash,
        "withdrawal complete"
    );
    Ok(())
}
