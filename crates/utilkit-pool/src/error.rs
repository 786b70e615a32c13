//! # Pool Errors

use thiserror::Error;

/// Errors returned by [`Pool`](crate::Pool) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Every slot is currently leased.
    #[error("pool exhausted: all {capacity} slots are leased")]
    Exhausted {
        /// Total number of slots in the pool at the time of the call.
        capacity: usize,
    },
}
