//! Size limits for values and containers
//!
//! Limits are checked when a value is wrapped with [`ValueHolder::checked`]
//! or inserted with [`Container::add_checked`]. Plain `add` never checks them.
//!
//! [`ValueHolder::checked`]: crate::holder::ValueHolder::checked
//! [`Container::add_checked`]: crate::container::Container::add_checked

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::Value;

/// Size limits for values and containers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum text, file and object-name length in bytes (default: 16MB)
    pub max_text_bytes: usize,

    /// Maximum number of entries per container (default: 1M entries)
    pub max_container_entries: usize,

    /// Maximum container nesting depth (default: 128)
    pub max_nesting_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_text_bytes: 16 * 1024 * 1024, // 16MB
            max_container_entries: 1_000_000,
            max_nesting_depth: 128,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_text_bytes: 64,
            max_container_entries: 4,
            max_nesting_depth: 2,
        }
    }

    /// Validate a value against size limits
    ///
    /// Checks text length, container entry counts and nesting depth,
    /// recursively through nested containers.
    pub fn validate_value(&self, value: &Value) -> Result<(), LimitError> {
        self.validate_value_impl(value, 0)
    }

    fn validate_value_impl(&self, value: &Value, depth: usize) -> Result<(), LimitError> {
        match value {
            Value::Bool(_) | Value::Int(_) | Value::Float(_) => Ok(()),
            Value::Text(s) | Value::File(s) | Value::Object(s) => {
                if s.len() > self.max_text_bytes {
                    return Err(LimitError::TextTooLong {
                        actual: s.len(),
                        max: self.max_text_bytes,
                    });
                }
                Ok(())
            }
            Value::Set(_) | Value::OrderedSet(_) => {
                let depth = depth + 1;
                if depth > self.max_nesting_depth {
                    return Err(LimitError::NestingTooDeep {
                        actual: depth,
                        max: self.max_nesting_depth,
                    });
                }
                let Some(container) = value.as_container() else {
                    return Ok(());
                };
                if container.size() > self.max_container_entries {
                    return Err(LimitError::TooManyEntries {
                        max: self.max_container_entries,
                    });
                }
                for member in container.iter() {
                    self.validate_value_impl(member, depth)?;
                }
                Ok(())
            }
        }
    }
}

/// Limit violation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LimitError {
    /// Text exceeds maximum length
    #[error("text too long: {actual} bytes exceeds maximum {max}")]
    TextTooLong {
        /// Actual length
        actual: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Container would hold more entries than allowed
    #[error("too many entries: container limit is {max}")]
    TooManyEntries {
        /// Maximum allowed
        max: usize,
    },

    /// Containers nested too deeply
    #[error("nesting too deep: {actual} levels exceeds maximum {max}")]
    NestingTooDeep {
        /// Actual depth
        actual: usize,
        /// Maximum allowed
        max: usize,
    },
}
