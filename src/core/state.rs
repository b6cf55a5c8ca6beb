//! The three exclusive modes of an ATM session.
//!
//! States are plain data. The session that owns a state is handed to the
//! per-state handlers explicitly, so there is no reference from a state back
//! to its session.

use super::account::AccountNumber;
use serde::{Deserialize, Serialize};

/// Current mode of a session.
///
/// The active account travels in the variant payload, so an account is
/// active if and only if the session is `Authenticated` or `Withdrawing`.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::{AccountNumber, SessionState};
///
/// let idle = SessionState::Idle;
/// let authed = SessionState::Authenticated {
///     account: AccountNumber::new("81975433120"),
/// };
///
/// assert_eq!(idle.name(), "Idle");
/// assert!(idle.active_account().is_none());
/// assert!(idle.can_transition_to(&authed));
/// assert!(!authed.can_transition_to(&authed));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No card in the machine.
    #[default]
    Idle,
    /// A customer has authenticated and may start a withdrawal.
    Authenticated { account: AccountNumber },
    /// A withdrawal is being validated and applied.
    Withdrawing { account: AccountNumber },
}

impl SessionState {
    /// State name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Authenticated { .. } => "Authenticated",
            Self::Withdrawing { .. } => "Withdrawing",
        }
    }

    /// Account the session is operating on, if any.
    pub fn active_account(&self) -> Option<&AccountNumber> {
        match self {
            Self::Idle => None,
            Self::Authenticated { account } | Self::Withdrawing { account } => Some(account),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.active_account().is_some()
    }

    /// Check whether moving to `target` is a legal edge.
    ///
    /// Legal edges:
    /// - Idle -> Authenticated
    /// - Authenticated -> Withdrawing (same account)
    /// - Withdrawing -> Authenticated (same account)
    /// - Authenticated -> Idle
    /// - Withdrawing -> Idle
    pub fn can_transition_to(&self, target: &SessionState) -> bool {
        use SessionState::*;
        match (self, target) {
            (Idle, Authenticated { .. }) => true,
            (Authenticated { account: a }, Withdrawing { account: b })
            | (Withdrawing { account: a }, Authenticated { account: b }) => a == b,
            (Authenticated { .. } | Withdrawing { .. }, Idle) => true,
            _ => false,
        }
    }
}
