//! # utilkit-buffer: Positional Binary Serialization
//!
//! `DataBuffer` is an ordered byte queue: writes append at the tail, reads
//! consume from the head. It encodes structured values by position alone,
//! so the writer and the reader must agree on the exact sequence of field
//! types.
//!
//! ## Format
//!
//! - Fixed-size values ([`bytemuck::Pod`]) are stored as their raw in-memory
//!   bytes: host byte order, no tags, no alignment padding between fields.
//! - Text is a `usize` length prefix (same raw encoding) followed by the
//!   UTF-8 bytes.
//!
//! The format is not portable across hosts with a different byte order or
//! `usize` width. It is meant for same-build exchange: in-process snapshots,
//! or processes built from the same source on the same platform.
//!
//! ## Failure Semantics
//!
//! Every read either consumes exactly the bytes of the value it returns or
//! fails without consuming anything.

pub mod buffer;
pub mod error;

pub use buffer::DataBuffer;
pub use error::BufferError;

/// Re-exported so callers can derive `Pod` for their own records.
pub use bytemuck::{Pod, Zeroable};
