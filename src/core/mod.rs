//! Core data model of an ATM session.
//!
//! This module holds the plain data the state machine operates on:
//! - `Money` amounts in exact minor units
//! - `Account` records and their identifiers
//! - the `SessionState` variants and their legal edges
//! - the `SessionHistory` of transitions taken
//!
//! Nothing here performs a transition on its own; that is the job of
//! [`crate::session`].

mod account;
mod history;
mod money;
mod state;

pub use account::{Account, AccountNumber, Pin};
pub use history::{SessionHistory, StateTransition};
pub use money::{Money, ParseMoneyError, MINOR_PER_MAJOR};
pub use state::SessionState;
