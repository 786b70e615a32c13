use thiserror::Error;

/// Errors raised by the pattern helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// `Singleton::instantiate` was called on a cell that already holds a value.
    #[error("singleton of type {type_name} is already instantiated")]
    AlreadyInstantiated {
        /// Name of the singleton's value type.
        type_name: &'static str,
    },
}
