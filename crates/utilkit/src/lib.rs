//! # utilkit: Generic Application Building Blocks
//!
//! Facade over the utilkit workspace. Each component lives in its own crate
//! and can be depended on directly; this crate re-exports all of them and
//! adds a unified error type.
//!
//! ## Core Components
//!
//! - **Pool** ([`utilkit_pool`]): fixed set of reusable slots handed out as
//!   exclusive, scope-bound [`Lease`]s.
//! - **DataBuffer** ([`utilkit_buffer`]): FIFO byte queue encoding raw
//!   fixed-size values and length-prefixed text by position.
//! - **StateMachine** ([`utilkit_state`]): registered states, action-bearing
//!   transition edges, per-state update actions.
//!
//! ## Collaborators
//!
//! - [`Observer`], [`Memento`]/[`Snapshot`] and [`Singleton`] from
//!   [`utilkit_patterns`].
//!
//! ## Crate Policy
//!
//! - No component depends on another, except the memento snapshot, which is
//!   built on `DataBuffer`.
//! - No internal locking. Every structure has a single owner; callers that
//!   share one across threads provide their own mutual exclusion.
//! - No `unsafe` code.

pub mod error;

pub use error::UtilkitError;

pub use utilkit_buffer::{BufferError, DataBuffer, Pod, Zeroable};
pub use utilkit_patterns::{Memento, Observer, PatternError, Singleton, Snapshot};
pub use utilkit_pool::{Lease, Pool, PoolError, PoolStats};
pub use utilkit_state::{StateMachine, StateMachineError, TransitionRecord};

/// Glob-importable set of the commonly used types.
pub mod prelude {
    pub use crate::{
        DataBuffer, Lease, Memento, Observer, Pool, Singleton, Snapshot, StateMachine,
        UtilkitError,
    };
}
