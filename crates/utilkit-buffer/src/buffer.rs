//! # DataBuffer
//!
//! FIFO byte queue backed by [`BytesMut`]. Reads advance the head in place,
//! so consumed bytes are released without shifting the remainder.

use std::fmt;
use std::mem::size_of;

use bytemuck::Pod;
use bytes::{Buf, BufMut, BytesMut};

use crate::error::BufferError;

/// Size of the length prefix written before every text value.
const TEXT_PREFIX: usize = size_of::<usize>();

/// Ordered byte sequence with append-only writes and consuming reads.
///
/// ```
/// use utilkit_buffer::DataBuffer;
///
/// let mut buf = DataBuffer::new();
/// buf.write(42_i32).write_text("hello").write(3.5_f64);
///
/// assert_eq!(buf.read::<i32>().unwrap(), 42);
/// assert_eq!(buf.read_text().unwrap(), "hello");
/// assert_eq!(buf.read::<f64>().unwrap(), 3.5);
/// assert!(buf.is_empty());
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DataBuffer {
    bytes: BytesMut,
}

impl DataBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: BytesMut::with_capacity(capacity),
        }
    }

    // ── Writes ───────────────────────────────────────────────────────

    /// Append the raw bytes of `value`.
    pub fn write<T: Pod>(&mut self, value: T) -> &mut Self {
        self.bytes.put_slice(bytemuck::bytes_of(&value));
        self
    }

    /// Append a `usize` byte length followed by the UTF-8 bytes of `text`.
    pub fn write_text(&mut self, text: &str) -> &mut Self {
        self.write(text.len());
        self.bytes.put_slice(text.as_bytes());
        self
    }

    /// Append bytes verbatim, without a length prefix.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.bytes.put_slice(bytes);
        self
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Decode the next `T` without consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Underflow`] if fewer than `size_of::<T>()`
    /// bytes remain.
    pub fn peek<T: Pod>(&self) -> Result<T, BufferError> {
        let size = size_of::<T>();
        self.ensure(size)?;
        Ok(bytemuck::pod_read_unaligned(&self.bytes[..size]))
    }

    /// Remove and decode the next `T`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Underflow`] if fewer than `size_of::<T>()`
    /// bytes remain. Nothing is consumed in that case.
    pub fn read<T: Pod>(&mut self) -> Result<T, BufferError> {
        let value = self.peek()?;
        self.bytes.advance(size_of::<T>());
        Ok(value)
    }

    /// Remove and decode the next `T` into `out`, returning `self` so reads
    /// can be chained with `?`.
    ///
    /// # Errors
    ///
    /// Same as [`DataBuffer::read`]. `out` is left untouched on failure.
    pub fn read_into<T: Pod>(&mut self, out: &mut T) -> Result<&mut Self, BufferError> {
        *out = self.read()?;
        Ok(self)
    }

    /// Remove and decode the next length-prefixed text value.
    ///
    /// The length prefix and the payload are consumed together: on any
    /// failure the buffer is left exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`BufferError::Underflow`] if the prefix is incomplete or fewer
    ///   payload bytes remain than the prefix announces.
    /// - [`BufferError::InvalidUtf8`] if the payload is not UTF-8.
    pub fn read_text(&mut self) -> Result<String, BufferError> {
        let len: usize = self.peek()?;
        let remaining = self.bytes.len() - TEXT_PREFIX;
        if remaining < len {
            tracing::debug!(requested = len, remaining, "text payload underflow");
            return Err(BufferError::Underflow {
                requested: len,
                remaining,
            });
        }
        let end = TEXT_PREFIX + len;
        let text = std::str::from_utf8(&self.bytes[TEXT_PREFIX..end])?.to_owned();
        self.bytes.advance(end);
        Ok(text)
    }

    // ── Introspection ────────────────────────────────────────────────

    /// Number of unconsumed bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether every written byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The unconsumed bytes, head first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Copy the unconsumed bytes out as an owned vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Take the unconsumed bytes without copying.
    pub fn into_vec(self) -> Vec<u8> {
        Vec::from(self.bytes)
    }

    /// Discard every unconsumed byte.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    fn ensure(&self, requested: usize) -> Result<(), BufferError> {
        let remaining = self.bytes.len();
        if remaining < requested {
            tracing::debug!(requested, remaining, "buffer underflow");
            return Err(BufferError::Underflow {
                requested,
                remaining,
            });
        }
        Ok(())
    }
}

impl From<&[u8]> for DataBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self {
            bytes: BytesMut::from(bytes),
        }
    }
}

impl From<Vec<u8>> for DataBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from(bytes.as_slice())
    }
}

impl AsRef<[u8]> for DataBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for DataBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataBuffer")
            .field("len", &self.bytes.len())
            .finish()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
