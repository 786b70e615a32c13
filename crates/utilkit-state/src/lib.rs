//! # utilkit-state: Explicit Finite-State Machine
//!
//! A runtime-checked automaton over caller-defined state tokens. The machine
//! keeps the set of registered states, the allowed transition edges with
//! the side effect attached to each, an optional "while in this state"
//! action per state, and the current state.
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use utilkit_state::StateMachine;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Player {
//!     Idle,
//!     Walking,
//! }
//!
//! let steps = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&steps);
//!
//! let mut fsm = StateMachine::new(Player::Idle);
//! fsm.add_state(Player::Walking);
//! fsm.add_transition(Player::Idle, Player::Walking, || {}).unwrap();
//! fsm.add_action(Player::Walking, move || counter.set(counter.get() + 1)).unwrap();
//!
//! fsm.transition_to(Player::Walking).unwrap();
//! fsm.update().unwrap();
//! assert_eq!(*fsm.current_state(), Player::Walking);
//! assert_eq!(steps.get(), 1);
//! ```
//!
//! ## Design
//!
//! A typestate encoding (one Rust type per state) does not fit here: states
//! are values supplied by the caller at runtime. Invalid
//! transitions are therefore rejected with a structured error instead of a
//! compile error, and a rejected call never changes the machine.
//!
//! The machine is single-owner and `!Sync`; actions run synchronously on the
//! caller's thread.

pub mod error;
pub mod machine;

pub use error::StateMachineError;
pub use machine::{Action, StateMachine, TransitionRecord};
