//! Exact monetary amounts in integer minor units.
//!
//! All balances and cash reserves are unsigned, so no arithmetic in the
//! crate can ever produce a negative amount. Subtraction is checked and
//! returns `None` instead of wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minor units per major unit (paise per rupee, cents per dollar).
pub const MINOR_PER_MAJOR: u64 = 100;

/// Non-negative amount of money, stored as minor units.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::Money;
///
/// let balance = Money::from_major(200);
/// let withdrawal: Money = "150.50".parse().unwrap();
///
/// let remaining = balance.checked_sub(withdrawal).unwrap();
/// assert_eq!(remaining.to_string(), "49.50");
/// assert!(withdrawal.checked_sub(balance).is_none());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// The zero amount.
    pub const ZERO: Money = Money(0);

    /// Build an amount from minor units.
    pub const fn from_minor(minor: u64) -> Self {
        Money(minor)
    }

    /// Build an amount from whole major units.
    ///
    /// Saturates at `u64::MAX` minor units.
    pub const fn from_major(major: u64) -> Self {
        Money(major.saturating_mul(MINOR_PER_MAJOR))
    }

    /// Amount in minor units.
    pub const fn minor(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Subtract, returning `None` if the result would be negative.
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Add, returning `None` on overflow.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / MINOR_PER_MAJOR,
            self.0 % MINOR_PER_MAJOR
        )
    }
}

/// Errors produced when parsing a decimal amount.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseMoneyError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{0}': expected digits with at most two decimals")]
    Invalid(String),

    #[error("amount '{0}' is too large")]
    Overflow(String),
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (major, fraction) = match s.split_once('.') {
            Some((major, fraction)) => (major, fraction),
            None => (s, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if major.is_empty() || !all_digits(major) || fraction.len() > 2 || !all_digits(fraction)
        {
            return Err(ParseMoneyError::Invalid(s.to_string()));
        }

        let overflow = || ParseMoneyError::Overflow(s.to_string());
        let major: u64 = major.parse().map_err(|_| overflow())?;
        let minor = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| overflow())? * 10,
            _ => fraction.parse::<u64>().map_err(|_| overflow())?,
        };

        major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|m| m.checked_add(minor))
            .map(Money)
            .ok_or_else(overflow)
    }
}
