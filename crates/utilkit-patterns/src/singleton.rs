//! # Singleton
//!
//! A cell that accepts exactly one value for the life of the program. Put it
//! in a `static` to get a global accessor:
//!
//! ```
//! use utilkit_patterns::Singleton;
//!
//! struct Config {
//!     database_url: String,
//! }
//!
//! static CONFIG: Singleton<Config> = Singleton::new();
//!
//! assert!(CONFIG.instance().is_none());
//! CONFIG
//!     .instantiate(Config { database_url: "postgres://localhost".into() })
//!     .unwrap();
//! assert_eq!(CONFIG.instance().unwrap().database_url, "postgres://localhost");
//! assert!(CONFIG.instantiate(Config { database_url: String::new() }).is_err());
//! ```

use std::fmt;
use std::sync::OnceLock;

use crate::error::PatternError;

/// Set-once holder for a single instance of `T`.
pub struct Singleton<T> {
    cell: OnceLock<T>,
}

impl<T> Singleton<T> {
    /// An empty cell.
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// The instance, if one has been created.
    pub fn instance(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Store `value` as the instance.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::AlreadyInstantiated`] if an instance already
    /// exists. The existing instance is kept and `value` is dropped.
    pub fn instantiate(&self, value: T) -> Result<&T, PatternError> {
        self.instantiate_with(|| value)
    }

    /// Build the instance with `init`. `init` only runs if the cell is empty.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::AlreadyInstantiated`] if an instance already
    /// exists.
    pub fn instantiate_with<F>(&self, init: F) -> Result<&T, PatternError>
    where
        F: FnOnce() -> T,
    {
        let mut created = false;
        let instance = self.cell.get_or_init(|| {
            created = true;
            init()
        });
        if created {
            tracing::debug!(type_name = std::any::type_name::<T>(), "singleton instantiated");
            Ok(instance)
        } else {
            Err(PatternError::AlreadyInstantiated {
                type_name: std::any::type_name::<T>(),
            })
        }
    }
}

impl<T> Default for Singleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Singleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Singleton")
            .field("instance", &self.cell.get())
            .finish()
    }
}
