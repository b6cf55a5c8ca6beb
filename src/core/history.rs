//! Record of the state transitions a session has taken.

use super::state::SessionState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single move from one state to another.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being left
    pub from: SessionState,
    /// The state being entered
    pub to: SessionState,
    /// When the transition happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of a session's transitions.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::{AccountNumber, SessionHistory, SessionState, StateTransition};
/// use chrono::Utc;
///
/// let account = AccountNumber::new("81975433120");
/// let mut history = SessionHistory::new();
///
/// history.record(StateTransition {
///     from: SessionState::Idle,
///     to: SessionState::Authenticated { account: account.clone() },
///     timestamp: Utc::now(),
/// });
/// history.record(StateTransition {
///     from: SessionState::Authenticated { account: account.clone() },
///     to: SessionState::Idle,
///     timestamp: Utc::now(),
/// });
///
/// let names: Vec<_> = history.path().iter().map(|s| s.name()).collect();
/// assert_eq!(names, ["Idle", "Authenticated", "Idle"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionHistory {
    transitions: Vec<StateTransition>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transition.
    pub fn record(&mut self, transition: StateTransition) {
        self.transitions.push(transition);
    }

    /// States visited in order: the first `from`, then every `to`.
    pub fn path(&self) -> Vec<&SessionState> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// `None` when nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
