//! # utilkit-patterns: Observer, Memento, Singleton
//!
//! Small wrappers that sit next to the core components:
//!
//! - **Observer** (`observer.rs`): per-event lists of callbacks, run in
//!   subscription order on `notify`.
//! - **Memento** (`memento.rs`): save/restore an object's fields through a
//!   [`Snapshot`], which is a [`DataBuffer`](utilkit_buffer::DataBuffer)
//!   under the hood and follows the same write-order/read-order contract.
//! - **Singleton** (`singleton.rs`): a set-once cell usable from a `static`.

pub mod error;
pub mod memento;
pub mod observer;
pub mod singleton;

pub use error::PatternError;
pub use memento::{Memento, Snapshot};
pub use observer::Observer;
pub use singleton::Singleton;
