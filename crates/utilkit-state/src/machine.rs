//! # StateMachine
//!
//! ## Transition Semantics
//!
//! ```text
//! transition_to(target):
//!     edge (current, target) registered?  ── no ──▶ Err(InvalidTransition), nothing changes
//!                  │ yes
//!                  ▼
//!     run edge action (exactly once)
//!                  ▼
//!     current = target, append TransitionRecord
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::StateMachineError;

/// Side effect attached to a transition edge or to a state.
pub type Action = Box<dyn FnMut()>;

/// Record of one successful transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord<S> {
    /// State before the transition.
    pub from: S,
    /// State after the transition.
    pub to: S,
}

/// A finite-state machine over tokens of type `S`.
///
/// States, edges and actions are only ever added, never removed. The
/// current state changes only through a successful
/// [`transition_to`](StateMachine::transition_to).
pub struct StateMachine<S> {
    current: S,
    states: HashSet<S>,
    transitions: HashMap<(S, S), Action>,
    state_actions: HashMap<S, Action>,
    history: Vec<TransitionRecord<S>>,
}

impl<S> StateMachine<S>
where
    S: Eq + Hash + Clone + fmt::Debug,
{
    /// Create a machine whose current state is `initial`.
    ///
    /// `initial` is registered as a state, so edges and actions can be
    /// attached to it straight away.
    pub fn new(initial: S) -> Self {
        let mut states = HashSet::new();
        states.insert(initial.clone());
        Self {
            current: initial,
            states,
            transitions: HashMap::new(),
            state_actions: HashMap::new(),
            history: Vec::new(),
        }
    }

    /// Register `state`. Registering a state twice has no further effect.
    pub fn add_state(&mut self, state: S) -> &mut Self {
        self.states.insert(state);
        self
    }

    /// Register the edge `from -> to` with the action to run on traversal.
    ///
    /// Registering the same edge again replaces its action.
    ///
    /// # Errors
    ///
    /// Returns [`StateMachineError::UnregisteredState`] if either end has not
    /// been added.
    pub fn add_transition<F>(
        &mut self,
        from: S,
        to: S,
        action: F,
    ) -> Result<&mut Self, StateMachineError>
    where
        F: FnMut() + 'static,
    {
        self.require_registered(&from)?;
        self.require_registered(&to)?;
        self.transitions.insert((from, to), Box::new(action));
        Ok(self)
    }

    /// Register the action [`update`](StateMachine::update) runs while the
    /// machine is in `state`. Replaces any previous action for that state.
    ///
    /// # Errors
    ///
    /// Returns [`StateMachineError::UnregisteredState`] if `state` has not
    /// been added.
    pub fn add_action<F>(&mut self, state: S, action: F) -> Result<&mut Self, StateMachineError>
    where
        F: FnMut() + 'static,
    {
        self.require_registered(&state)?;
        self.state_actions.insert(state, Box::new(action));
        Ok(self)
    }

    /// Move to `target` along the edge `(current, target)`.
    ///
    /// Runs the edge action once, then updates the current state and the
    /// transition log. A self-loop needs its own `(s, s)` edge.
    ///
    /// # Errors
    ///
    /// Returns [`StateMachineError::InvalidTransition`] if no such edge is
    /// registered. The current state is left unchanged and no action runs.
    pub fn transition_to(&mut self, target: S) -> Result<(), StateMachineError> {
        let key = (self.current.clone(), target);
        let Some(action) = self.transitions.get_mut(&key) else {
            tracing::debug!(from = ?key.0, to = ?key.1, "transition rejected");
            return Err(StateMachineError::InvalidTransition {
                from: format!("{:?}", key.0),
                to: format!("{:?}", key.1),
            });
        };
        action();

        let (from, to) = key;
        tracing::debug!(from = ?from, to = ?to, "state transition");
        self.current = to.clone();
        self.history.push(TransitionRecord { from, to });
        Ok(())
    }

    /// Run the action registered for the current state.
    ///
    /// # Errors
    ///
    /// Returns [`StateMachineError::MissingAction`] if the current state has
    /// no action.
    pub fn update(&mut self) -> Result<(), StateMachineError> {
        match self.state_actions.get_mut(&self.current) {
            Some(action) => {
                action();
                Ok(())
            }
            None => Err(StateMachineError::MissingAction {
                state: format!("{:?}", self.current),
            }),
        }
    }

    /// The active state.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Whether `state` has been registered.
    pub fn has_state(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Whether the edge `from -> to` has been registered.
    pub fn has_transition(&self, from: &S, to: &S) -> bool {
        self.transitions.contains_key(&(from.clone(), to.clone()))
    }

    /// Whether `state` has an update action.
    pub fn has_action(&self, state: &S) -> bool {
        self.state_actions.contains_key(state)
    }

    /// Number of registered states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Every successful transition, oldest first.
    pub fn history(&self) -> &[TransitionRecord<S>] {
        &self.history
    }

    fn require_registered(&self, state: &S) -> Result<(), StateMachineError> {
        if self.states.contains(state) {
            Ok(())
        } else {
            Err(StateMachineError::UnregisteredState {
                state: format!("{state:?}"),
            })
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for StateMachine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("states", &self.states.len())
            .field("transitions", &self.transitions.len())
            .field("actions", &self.state_actions.len())
            .finish()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
