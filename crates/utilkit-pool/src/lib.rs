//! # utilkit-pool: Recyclable Object Pool
//!
//! A fixed set of pre-constructed slots handed out through exclusive,
//! scope-bound leases. Objects that are expensive to set up (connections,
//! large scratch buffers, handles to external resources) are cycled through
//! the same slots instead of being allocated and freed on every use.
//!
//! ## Lifecycle
//!
//! ```text
//! grow(n) ──▶ n default slots ──▶ free queue (FIFO)
//!                                     │
//!                       acquire*()────┘  (slot value rebuilt)
//!                                     │
//!                                     ▼
//!                                  Lease ──drop / release()──▶ back of free queue
//! ```
//!
//! ## Invariants
//!
//! - Every slot index is either in the free queue or owned by exactly one
//!   live [`Lease`], never both.
//! - Capacity only grows. There is no shrink operation.
//! - Acquiring always rebuilds the slot value. State written through a
//!   previous lease never leaks into the next one.
//!
//! ## Concurrency
//!
//! The pool uses single-threaded interior mutability and is `!Sync`. Callers
//! sharing one across threads must wrap it in their own lock.

pub mod error;
pub mod pool;

pub use error::PoolError;
pub use pool::{Lease, Pool, PoolStats};
