//! Cashpoint: an ATM session as an explicit finite-state machine
//!
//! A session moves through three exclusive states. Each state decides which
//! of the session's verbs are legal:
//!
//! - **Idle**: no customer; only `authenticate` can succeed
//! - **Authenticated**: a customer is logged in and may `withdraw` or `exit`
//! - **Withdrawing**: a withdrawal is being validated and applied
//!
//! States are plain data dispatched with `match`; the session is passed to
//! each state's handler explicitly. Money is held in exact integer minor
//! units, so balances can never go negative and every withdrawal debits the
//! machine and the account by the same amount, or neither.
//!
//! # Modules
//!
//! - [`core`]: money, accounts, states and transition history
//! - [`session`]: the `AtmSession` and its verbs
//! - [`config`]: construction-time configuration and validation
//!
//! # Logging
//!
//! The crate emits `tracing` events (transitions and rejections at `debug`,
//! completed logins and withdrawals at `info`) and never installs a
//! subscriber. PINs are never logged.
//!
//! # Example
//!
//! ```rust
//! use cashpoint::{Account, AtmSession, AuthError, Money};
//!
//! let mut atm = AtmSession::new(
//!     Money::from_major(50_000),
//!     vec![Account::new("81975433120", "2311", Money::from_major(20_000))],
//! )
//! .unwrap();
//!
//! assert_eq!(atm.authenticate("81975433120", "0000"), Err(AuthError::InvalidPin));
//! atm.authenticate("81975433120", "2311").unwrap();
//! atm.withdraw(Money::from_major(15_000)).unwrap();
//! atm.exit().unwrap();
//!
//! assert_eq!(atm.available_cash(), Money::from_major(35_000));
//! assert_eq!(atm.account("81975433120").unwrap().balance(), Money::from_major(5_000));
//! ```

pub mod config;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use config::{ConfigError, SessionBuilder, SessionConfig};
pub use core::{Account, AccountNumber, Money, SessionHistory, SessionState};
pub use session::{AtmSession, AuthError, ExitError, WithdrawError};
