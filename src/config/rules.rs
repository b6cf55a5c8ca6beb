//! Validation rules for the account list, using Validation to accumulate
//! every violation instead of stopping at the first.

use super::error::ConfigViolation;
use crate::core::Account;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn account_number_present(index: usize, account: &Account) -> Check {
    if account.account_number().as_str().is_empty() {
        Validation::fail(ConfigViolation::EmptyAccountNumber { index })
    } else {
        Validation::success(())
    }
}

fn pin_present(account: &Account) -> Check {
    if account.pin().is_empty() {
        Validation::fail(ConfigViolation::EmptyPin {
            account_number: account.account_number().clone(),
        })
    } else {
        Validation::success(())
    }
}

/// Run every rule over `accounts`.
///
/// Returns `Validation::Success(())` if all pass, or `Validation::Failure`
/// carrying all violations in account order.
pub fn validate_accounts(accounts: &[Account]) -> Check {
    let mut checks: Vec<Check> = Vec::new();
    let mut seen = HashSet::new();

    for (index, account) in accounts.iter().enumerate() {
        checks.push(account_number_present(index, account));
        checks.push(pin_present(account));

        let number = account.account_number();
        if !seen.insert(number) {
            checks.push(Validation::fail(ConfigViolation::DuplicateAccountNumber {
                account_number: number.clone(),
            }));
        }
    }

    if checks.is_empty() {
        return Validation::success(());
    }
    Validation::all_vec(checks).map(|_| ())
}
