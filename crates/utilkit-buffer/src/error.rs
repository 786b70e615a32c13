//! # Buffer Errors

use thiserror::Error;

/// Errors returned when decoding from a [`DataBuffer`](crate::DataBuffer).
///
/// A failed read never consumes bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The read asked for more bytes than remain in the buffer.
    #[error("buffer underflow: requested {requested} bytes, {remaining} remaining")]
    Underflow {
        /// Bytes the read needed.
        requested: usize,
        /// Bytes that were available for it.
        remaining: usize,
    },

    /// A text payload was not valid UTF-8.
    #[error("text payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}
