//! Bank accounts known to the machine.

use super::money::Money;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque account identifier.
///
/// Compared byte for byte: no trimming, no case folding, no digit
/// normalization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AccountNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shared-secret credential. Never printed in `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pin(String);

impl Pin {
    pub fn new(pin: impl Into<String>) -> Self {
        Self(pin.into())
    }

    /// Exact comparison against a candidate entered at the machine.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(****)")
    }
}

/// One bank account known to the machine.
///
/// The balance is only mutated by a successful withdrawal, which the
/// session performs through [`Account::debit`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    account_number: AccountNumber,
    pin: Pin,
    balance: Money,
}

impl Account {
    pub fn new(account_number: impl Into<String>, pin: impl Into<String>, balance: Money) -> Self {
        Self {
            account_number: AccountNumber::new(account_number),
            pin: Pin::new(pin),
            balance,
        }
    }

    pub fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    pub fn pin(&self) -> &Pin {
        &self.pin
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Remove `amount` from the balance.
    ///
    /// Returns the new balance, or `None` (leaving the account untouched)
    /// if the balance is insufficient.
    pub(crate) fn debit(&mut self, amount: Money) -> Option<Money> {
        let remaining = self.balance.checked_sub(amount)?;
        self.balance = remaining;
        Some(remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_matches_exactly() {
        let pin = Pin::new("2311");

        assert!(pin.matches("2311"));
        assert!(!pin.matches("2311 "));
        assert!(!pin.matches("0000"));
        assert!(!pin.matches(""));
    }

    #[test]
    fn pin_is_redacted_in_debug_output() {
        let account = Account::new("81975433120", "2311", Money::from_major(20_000));
        let debug = format!("{account:?}");

        assert!(debug.contains("81975433120"));
        assert!(!debug.contains("2311"));
    }

    #[test]
    fn account_numbers_are_not_normalized() {
        assert_ne!(AccountNumber::new("0123"), AccountNumber::new("123"));
        assert_ne!(AccountNumber::new("ab12"), AccountNumber::new("AB12"));
    }

    #[test]
    fn debit_reduces_balance() {
        let mut account = Account::new("1", "1", Money::from_major(100));

        assert_eq!(account.debit(Money::from_major(30)), Some(Money::from_major(70)));
        assert_eq!(account.balance(), Money::from_major(70));
    }

    #[test]
    fn debit_beyond_balance_leaves_account_untouched() {
        let mut account = Account::new("1", "1", Money::from_major(100));

        assert_eq!(account.debit(Money::from_major(101)), None);
        assert_eq!(account.balance(), Money::from_major(100));
    }

    #[test]
    fn account_serializes_correctly() {
        let account = Account::new("51253524113", "1234", Money::from_major(50_000));
        let json = serde_json::to_string(&account).unwrap();
        let deserialized: Account = serde_json::from_str(&json).unwrap();

        assert_eq!(account, deserialized);
    }
}
