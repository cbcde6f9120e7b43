//! Unordered set
//!
//! Removal swaps the last member into the freed slot, so it is O(1) but
//! reorders members. Iteration order is unspecified, and stable as long as
//! the set is not mutated. Equality and hashing ignore order.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use super::entries::{hash_value, Entries, SlotCursor, SlotOrder};
use super::iter::ContainerIter;
use super::Container;
use crate::holder::ValueHolder;
use crate::value::{Value, ValueKind};

/// Unordered set of values
#[derive(Debug, Clone, Default)]
pub struct Set {
    entries: Entries,
}

impl Set {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with room for `capacity` members
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Entries::with_capacity(capacity),
        }
    }

    /// Remove every member
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Cursor kind marker for [`Set`] handles
#[derive(Debug, Clone, Copy)]
pub(crate) struct Unordered;

impl SlotOrder for Unordered {
    const NAME: &'static str = "set";
}

impl Container for Set {
    fn value_kind(&self) -> ValueKind {
        ValueKind::Set
    }

    fn size(&self) -> usize {
        self.entries.len()
    }

    fn add(&mut self, value: ValueHolder) -> bool {
        let inserted = self.entries.insert(value.into_value());
        if !inserted {
            trace!(container = "set", "duplicate add ignored");
        }
        inserted
    }

    fn contains(&self, value: &Value) -> bool {
        self.entries.contains(value)
    }

    fn remove(&mut self, value: &Value) -> bool {
        let removed = self.entries.swap_remove(value).is_some();
        if !removed {
            trace!(container = "set", value = %value, "remove of absent value");
        }
        removed
    }

    fn begin(&self) -> ContainerIter<'_> {
        ContainerIter::new(SlotCursor::<Unordered>::first(&self.entries))
    }

    fn end(&self) -> ContainerIter<'_> {
        ContainerIter::new(SlotCursor::<Unordered>::past_end(&self.entries))
    }
}

impl PartialEq for Set {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.entries.slots().iter().all(|v| other.contains(v))
    }
}

impl Eq for Set {}

impl Hash for Set {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order-independent: members are combined by wrapping addition
        let combined = self
            .entries
            .slots()
            .iter()
            .map(hash_value)
            .fold(0u64, u64::wrapping_add);
        state.write_usize(self.size());
        state.write_u64(combined);
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("}")
    }
}

impl FromIterator<Value> for Set {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut set = Set::new();
        set.extend(iter);
        set
    }
}

impl Extend<Value> for Set {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.entries.insert(value);
        }
    }
}

impl<'a> IntoIterator for &'a Set {
    type Item = &'a Value;
    type IntoIter = ContainerIter<'a>;

    fn into_iter(self) -> ContainerIter<'a> {
        self.begin()
    }
}

impl Serialize for Set {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.slots())
    }
}

impl<'de> Deserialize<'de> for Set {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Value>::deserialize(deserializer).map(|values| values.into_iter().collect())
    }
}
