//! # Error Types: Unified Error
//!
//! Each component crate defines its own `thiserror` enum. `UtilkitError`
//! wraps all of them so application code mixing several components can
//! propagate with a single `?` type.

use thiserror::Error;

use utilkit_buffer::BufferError;
use utilkit_patterns::PatternError;
use utilkit_pool::PoolError;
use utilkit_state::StateMachineError;

/// Top-level error type for utilkit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilkitError {
    /// Object pool failure.
    #[error("pool error: {0}")]
    Pool(#[from] PoolError),

    /// Serialization buffer failure.
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),

    /// State machine failure.
    #[error("state machine error: {0}")]
    StateMachine(#[from] StateMachineError),

    /// Pattern helper failure.
    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),
}
