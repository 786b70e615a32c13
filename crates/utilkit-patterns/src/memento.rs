//! # Memento
//!
//! An object implementing [`Memento`] describes how to write its fields into
//! a [`Snapshot`] and how to read them back. Fields must be read in the
//! order and with the types they were written.

use utilkit_buffer::{BufferError, DataBuffer, Pod};

/// Opaque saved state, backed by a [`DataBuffer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    buffer: DataBuffer,
}

impl Snapshot {
    /// Append a fixed-size field.
    pub fn write<T: Pod>(&mut self, value: T) -> &mut Self {
        self.buffer.write(value);
        self
    }

    /// Append a text field.
    pub fn write_text(&mut self, text: &str) -> &mut Self {
        self.buffer.write_text(text);
        self
    }

    /// Consume the next fixed-size field.
    ///
    /// # Errors
    ///
    /// [`BufferError::Underflow`] if the snapshot holds fewer bytes than `T`.
    pub fn read<T: Pod>(&mut self) -> Result<T, BufferError> {
        self.buffer.read()
    }

    /// Consume the next text field.
    ///
    /// # Errors
    ///
    /// See [`DataBuffer::read_text`].
    pub fn read_text(&mut self) -> Result<String, BufferError> {
        self.buffer.read_text()
    }

    /// Size of the saved state in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the snapshot holds no state.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Raw encoded state, for storing or sending the snapshot elsewhere.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }
}

impl From<Vec<u8>> for Snapshot {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            buffer: DataBuffer::from(bytes),
        }
    }
}

/// Save/restore support for an object's state.
///
/// ```
/// use utilkit_buffer::BufferError;
/// use utilkit_patterns::{Memento, Snapshot};
///
/// struct Player {
///     health: i32,
///     name: String,
/// }
///
/// impl Memento for Player {
///     fn save_to_snapshot(&self, snapshot: &mut Snapshot) {
///         snapshot.write(self.health).write_text(&self.name);
///     }
///
///     fn load_from_snapshot(&mut self, snapshot: &mut Snapshot) -> Result<(), BufferError> {
///         let health = snapshot.read()?;
///         let name = snapshot.read_text()?;
///         self.health = health;
///         self.name = name;
///         Ok(())
///     }
/// }
///
/// let mut player = Player { health: 100, name: "ada".into() };
/// let saved = player.save();
/// player.health = 3;
/// player.load(&saved).unwrap();
/// assert_eq!(player.health, 100);
/// ```
pub trait Memento {
    /// Write the fields that make up this object's state.
    fn save_to_snapshot(&self, snapshot: &mut Snapshot);

    /// Read the fields back, in the order `save_to_snapshot` wrote them.
    ///
    /// Decoding every field before assigning any keeps the object unchanged
    /// when the snapshot turns out to be short.
    ///
    /// # Errors
    ///
    /// Propagates any [`BufferError`] from the snapshot.
    fn load_from_snapshot(&mut self, snapshot: &mut Snapshot) -> Result<(), BufferError>;

    /// Capture the current state.
    fn save(&self) -> Snapshot {
        let mut snapshot = Snapshot::default();
        self.save_to_snapshot(&mut snapshot);
        snapshot
    }

    /// Restore a previously captured state.
    ///
    /// Reads from a copy, so the same snapshot can be loaded any number of
    /// times.
    ///
    /// # Errors
    ///
    /// Propagates any [`BufferError`] from `load_from_snapshot`.
    fn load(&mut self, snapshot: &Snapshot) -> Result<(), BufferError> {
        let mut replay = snapshot.clone();
        self.load_from_snapshot(&mut replay)
    }
}
