//! Worker lifecycle states.

use serde::{Deserialize, Serialize};

/// Lifecycle states of a worker.
///
/// The host runtime drives a worker forward through these states; the worker
/// itself never moves its own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerState {
    /// Registered, setup not yet started
    Parsed,
    /// Install event dispatched, setup in progress
    Installing,
    /// Setup finished successfully, waiting to activate
    Installed,
    /// Activation in progress
    Activating,
    /// Active and eligible to intercept fetches
    Activated,
    /// Discarded; a failed install or a replaced version ends up here
    Redundant,
}

impl WorkerState {
    /// Check if this state allows fetch interception.
    ///
    /// Installation's work is guaranteed to have completed before this
    /// returns true; only an activated worker sees fetch events.
    pub fn can_intercept_fetch(&self) -> bool {
        matches!(self, WorkerState::Activated)
    }

    /// Check if the worker is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkerState::Redundant)
    }
}

impl std::fmt::Display for WorkerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkerState::Parsed => write!(f, "parsed"),
            WorkerState::Installing => write!(f, "installing"),
            WorkerState::Installed => write!(f, "installed"),
            WorkerState::Activating => write!(f, "activating"),
            WorkerState::Activated => write!(f, "activated"),
            WorkerState::Redundant => write!(f, "redundant"),
        }
    }
}
