//! Containers and the iteration protocol
//!
//! Every nyan container implements [`Container`]. Callers work against the
//! trait and never learn which concrete container they hold:
//!
//! - `begin()`/`end()` return [`ContainerIter`] handles
//! - each handle owns one container-specific [`Cursor`]
//! - handles compare equal only when their cursors are of the same
//!   [`CursorKind`] and at the same position in the same container
//!
//! ## Module Structure
//!
//! - `cursor`: the [`Cursor`] trait, kind tags and positions
//! - `iter`: the [`ContainerIter`] handle
//! - `entries`: slot storage shared by the built-in containers
//! - `set`: [`Set`], unordered
//! - `ordered_set`: [`OrderedSet`], insertion-ordered
//!
//! ## Invalidation
//!
//! Handles borrow their container, so the container cannot be mutated while
//! any handle over it is alive.

pub mod cursor;
pub mod iter;
pub mod ordered_set;
pub mod set;

mod entries;

pub use cursor::{Cursor, CursorClone, CursorKind, CursorPosition};
pub use iter::ContainerIter;
pub use ordered_set::OrderedSet;
pub use set::Set;

use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::holder::ValueHolder;
use crate::limits::{LimitError, Limits};
use crate::value::{Value, ValueKind};

/// A value that aggregates other values
///
/// ## Contract
///
/// - `size()` equals the number of positions between `begin()` and `end()`
/// - `add` and `contains` use the same equality ([`Value`]'s `Eq`)
/// - `begin() == end()` iff the container is empty
/// - duplicate `add` and absent `remove` return `false` and change nothing
pub trait Container: fmt::Debug {
    /// Concrete container kind
    fn value_kind(&self) -> ValueKind;

    /// Number of stored values
    fn size(&self) -> usize;

    /// Take ownership of the held value
    ///
    /// Returns `false`, leaving the container unchanged, if an equal value
    /// is already present.
    fn add(&mut self, value: ValueHolder) -> bool;

    /// Whether a value equal to `value` is present
    fn contains(&self, value: &Value) -> bool;

    /// Remove the value equal to `value`, returning whether one was present
    fn remove(&mut self, value: &Value) -> bool;

    /// Handle at the first value
    fn begin(&self) -> ContainerIter<'_>;

    /// Handle at the position one past the last value
    fn end(&self) -> ContainerIter<'_>;

    /// Check if the container holds no values
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Same as [`begin`](Container::begin)
    fn cbegin(&self) -> ContainerIter<'_> {
        self.begin()
    }

    /// Same as [`end`](Container::end)
    fn cend(&self) -> ContainerIter<'_> {
        self.end()
    }

    /// Iterate over all values, for use in `for` loops
    fn iter(&self) -> ContainerIter<'_> {
        self.begin()
    }

    /// Add a value after checking it against `limits`
    ///
    /// The value itself is validated, and a new value is refused once the
    /// container holds `max_container_entries`. A duplicate is still reported
    /// as `Ok(false)` even when the container is full.
    ///
    /// Nesting depth is counted from `value` down. A container does not know
    /// where it sits in a larger structure, so when it is itself nested the
    /// combined depth can exceed `max_nesting_depth`. Validate the outermost
    /// value with [`Limits::validate_value`] to bound the whole tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Limit`](crate::Error::Limit) when a limit is violated.
    fn add_checked(&mut self, value: Value, limits: &Limits) -> Result<bool> {
        let holder = ValueHolder::checked(value, limits).map_err(|e| {
            debug!(container = %self.value_kind(), error = %e, "rejected value");
            e
        })?;
        if self.size() >= limits.max_container_entries && !self.contains(&holder) {
            debug!(
                container = %self.value_kind(),
                max = limits.max_container_entries,
                "container full"
            );
            return Err(LimitError::TooManyEntries {
                max: limits.max_container_entries,
            }
            .into());
        }
        Ok(self.add(holder))
    }

    /// Add every value of `other`, returning how many were new
    fn union_with(&mut self, other: &dyn Container) -> usize {
        let mut added = 0;
        for value in other.iter() {
            if self.add(ValueHolder::new(value.clone())) {
                added += 1;
            }
        }
        added
    }

    /// Remove every value that `other` contains, returning how many went
    fn difference_with(&mut self, other: &dyn Container) -> usize {
        let mut removed = 0;
        for value in other.iter() {
            if self.remove(value) {
                removed += 1;
            }
        }
        removed
    }

    /// Keep only the values `other` also contains, returning how many went
    fn intersect_with(&mut self, other: &dyn Container) -> usize {
        let doomed: Vec<Value> = self
            .iter()
            .filter(|value| !other.contains(value))
            .cloned()
            .collect();
        for value in &doomed {
            self.remove(value);
        }
        doomed.len()
    }
}
