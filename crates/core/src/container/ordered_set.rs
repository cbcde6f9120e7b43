//! Insertion-ordered set
//!
//! Members iterate in the order they were first added. Removal shifts the
//! later members down, so the order of the remaining members is preserved.
//! Equality and hashing are order-sensitive.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use super::entries::{Entries, SlotCursor, SlotOrder};
use super::iter::ContainerIter;
use super::Container;
use crate::holder::ValueHolder;
use crate::value::{Value, ValueKind};

/// Set of values that remembers insertion order
#[derive(Debug, Clone, Default)]
pub struct OrderedSet {
    entries: Entries,
}

impl OrderedSet {
    /// Create an empty ordered set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ordered set with room for `capacity` members
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Entries::with_capacity(capacity),
        }
    }

    /// Remove every member
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Member at `index` in insertion order
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.entries.get(index)
    }

    /// Insertion-order index of `value`
    pub fn index_of(&self, value: &Value) -> Option<usize> {
        self.entries.find(value)
    }
}

/// Cursor kind marker for [`OrderedSet`] handles
#[derive(Debug, Clone, Copy)]
pub(crate) struct Ordered;

impl SlotOrder for Ordered {
    const NAME: &'static str = "ordered set";
}

impl Container for OrderedSet {
    fn value_kind(&self) -> ValueKind {
        ValueKind::OrderedSet
    }

    fn size(&self) -> usize {
        self.entries.len()
    }

    fn add(&mut self, value: ValueHolder) -> bool {
        let inserted = self.entries.insert(value.into_value());
        if !inserted {
            trace!(container = "orderedset", "duplicate add ignored");
        }
        inserted
    }

    fn contains(&self, value: &Value) -> bool {
        self.entries.contains(value)
    }

    fn remove(&mut self, value: &Value) -> bool {
        let removed = self.entries.shift_remove(value).is_some();
        if !removed {
            trace!(container = "orderedset", value = %value, "remove of absent value");
        }
        removed
    }

    fn begin(&self) -> ContainerIter<'_> {
        ContainerIter::new(SlotCursor::<Ordered>::first(&self.entries))
    }

    fn end(&self) -> ContainerIter<'_> {
        ContainerIter::new(SlotCursor::<Ordered>::past_end(&self.entries))
    }
}

impl PartialEq for OrderedSet {
    fn eq(&self, other: &Self) -> bool {
        self.entries.slots() == other.entries.slots()
    }
}

impl Eq for OrderedSet {}

impl Hash for OrderedSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.slots().hash(state);
    }
}

impl fmt::Display for OrderedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("o{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("}")
    }
}

impl FromIterator<Value> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Value> for OrderedSet {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.entries.insert(value);
        }
    }
}

impl<'a> IntoIterator for &'a OrderedSet {
    type Item = &'a Value;
    type IntoIter = ContainerIter<'a>;

    fn into_iter(self) -> ContainerIter<'a> {
        self.begin()
    }
}

impl Serialize for OrderedSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.slots())
    }
}

impl<'de> Deserialize<'de> for OrderedSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Value>::deserialize(deserializer).map(|values| values.into_iter().collect())
    }
}
