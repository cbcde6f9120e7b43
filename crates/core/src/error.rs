//! Error types for nyan containers
//!
//! Container operations report expected negative outcomes (duplicate add,
//! absent remove) as booleans. This error type covers the fallible concerns
//! of the surrounding value layer: kind mismatches, limit violations,
//! configuration and serialization.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

use crate::limits::LimitError;
use crate::value::ValueKind;

/// Result type alias for nyan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the nyan value layer
#[derive(Debug, Error)]
pub enum Error {
    /// A value was not of the kind the operation needs
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        /// What the operation expected
        expected: &'static str,
        /// Kind of the value actually supplied
        actual: ValueKind,
    },

    /// A value or container exceeded the configured limits
    #[error(transparent)]
    Limit(#[from] LimitError),

    /// Configuration could not be parsed or is inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::InvalidConfig(e.to_string())
    }
}
