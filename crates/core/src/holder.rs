//! Ownership wrapper for container insertion
//!
//! A [`ValueHolder`] carries one fully-constructed value into
//! [`Container::add`](crate::container::Container::add). It is move-only:
//! it does not implement `Clone`, so a holder is consumed exactly once.

use std::ops::Deref;

use crate::limits::{LimitError, Limits};
use crate::value::Value;

/// Move-only holder that transfers a value into a container
#[derive(Debug)]
pub struct ValueHolder {
    value: Box<Value>,
}

impl ValueHolder {
    /// Wrap a value for insertion
    pub fn new(value: Value) -> Self {
        Self {
            value: Box::new(value),
        }
    }

    /// Wrap a value after validating it against `limits`
    ///
    /// # Errors
    ///
    /// Returns the first [`LimitError`] the value violates.
    pub fn checked(value: Value, limits: &Limits) -> Result<Self, LimitError> {
        limits.validate_value(&value)?;
        Ok(Self::new(value))
    }

    /// Give up the holder and take the value out
    pub fn into_value(self) -> Value {
        *self.value
    }
}

impl Deref for ValueHolder {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.value
    }
}

impl From<Value> for ValueHolder {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
