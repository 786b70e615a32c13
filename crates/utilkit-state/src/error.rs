//! # State Machine Errors
//!
//! State tokens are rendered with their `Debug` form so the error type does
//! not carry the machine's generic parameter.

use thiserror::Error;

/// Errors returned by [`StateMachine`](crate::StateMachine) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateMachineError {
    /// A transition or action referenced a state that was never added.
    #[error("state {state} is not registered")]
    UnregisteredState {
        /// The unknown state.
        state: String,
    },

    /// No edge is registered from the current state to the target.
    #[error("invalid transition: {from} -> {to}")]
    InvalidTransition {
        /// Current state.
        from: String,
        /// Attempted target state.
        to: String,
    },

    /// `update` was called in a state with no registered action.
    #[error("no action registered for state {state}")]
    MissingAction {
        /// Current state.
        state: String,
    },
}
