//! Slot storage shared by the built-in containers
//!
//! Values live in a `Vec` of slots. A side index maps each value's hash to
//! the slots holding values with that hash, so membership tests hash once
//! and compare only the colliding candidates.
//!
//! The two removal strategies are what distinguish the containers:
//! - [`Entries::swap_remove`]: O(1), moves the last slot into the hole
//! - [`Entries::shift_remove`]: O(n), keeps the remaining slots in order

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use rustc_hash::{FxHashMap, FxHasher};
use smallvec::SmallVec;

use super::cursor::{Cursor, CursorKind, CursorPosition};
use crate::value::Value;

/// Slot offsets of all values sharing one hash
type Bucket = SmallVec<[usize; 1]>;

pub(crate) fn hash_value(value: &Value) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Entries {
    slots: Vec<Value>,
    index: FxHashMap<u64, Bucket>,
}

impl Entries {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn slots(&self) -> &[Value] {
        &self.slots
    }

    pub(crate) fn get(&self, offset: usize) -> Option<&Value> {
        self.slots.get(offset)
    }

    /// Slot holding a value equal to `value`
    pub(crate) fn find(&self, value: &Value) -> Option<usize> {
        self.index
            .get(&hash_value(value))?
            .iter()
            .copied()
            .find(|&slot| self.slots[slot] == *value)
    }

    pub(crate) fn contains(&self, value: &Value) -> bool {
        self.find(value).is_some()
    }

    /// Append `value` unless an equal value is already stored
    pub(crate) fn insert(&mut self, value: Value) -> bool {
        let hash = hash_value(&value);
        if let Some(bucket) = self.index.get(&hash) {
            if bucket.iter().any(|&slot| self.slots[slot] == value) {
                return false;
            }
        }
        self.index.entry(hash).or_default().push(self.slots.len());
        self.slots.push(value);
        true
    }

    /// Remove `value`, filling its slot with the last one
    pub(crate) fn swap_remove(&mut self, value: &Value) -> Option<Value> {
        let slot = self.find(value)?;
        self.unlink(hash_value(value), slot);

        let last = self.slots.len() - 1;
        if slot != last {
            let moved_hash = hash_value(&self.slots[last]);
            if let Some(bucket) = self.index.get_mut(&moved_hash) {
                for offset in bucket.iter_mut().filter(|offset| **offset == last) {
                    *offset = slot;
                }
            }
        }
        Some(self.slots.swap_remove(slot))
    }

    /// Remove `value`, shifting every later slot down by one
    pub(crate) fn shift_remove(&mut self, value: &Value) -> Option<Value> {
        let slot = self.find(value)?;
        self.unlink(hash_value(value), slot);

        for bucket in self.index.values_mut() {
            for offset in bucket.iter_mut().filter(|offset| **offset > slot) {
                *offset -= 1;
            }
        }
        Some(self.slots.remove(slot))
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
    }

    fn unlink(&mut self, hash: u64, slot: usize) {
        if let Some(bucket) = self.index.get_mut(&hash) {
            bucket.retain(|offset| *offset != slot);
            if bucket.is_empty() {
                self.index.remove(&hash);
            }
        }
    }
}

/// Marker naming the container a [`SlotCursor`] walks
///
/// Each marker type instantiates a distinct cursor type, and so a distinct
/// [`CursorKind`]: handles over a `Set` never compare equal to handles over
/// an `OrderedSet`, even though both walk `Entries` the same way.
pub(crate) trait SlotOrder: fmt::Debug + Clone + 'static {
    /// Container name used in panic messages
    const NAME: &'static str;
}

/// Cursor over the slots of one `Entries`, in slot order
#[derive(Debug, Clone)]
pub(crate) struct SlotCursor<'a, K> {
    entries: &'a Entries,
    offset: usize,
    order: PhantomData<K>,
}

impl<'a, K: SlotOrder> SlotCursor<'a, K> {
    /// Cursor at the first slot
    pub(crate) fn first(entries: &'a Entries) -> Self {
        Self::at(entries, 0)
    }

    /// Cursor one past the last slot
    pub(crate) fn past_end(entries: &'a Entries) -> Self {
        Self::at(entries, entries.len())
    }

    fn at(entries: &'a Entries, offset: usize) -> Self {
        Self {
            entries,
            offset,
            order: PhantomData,
        }
    }
}

impl<'a, K: SlotOrder> Cursor<'a> for SlotCursor<'a, K> {
    fn kind(&self) -> CursorKind {
        CursorKind::of::<SlotCursor<'static, K>>()
    }

    fn advance(&mut self) {
        assert!(
            self.offset < self.entries.len(),
            "advance past end of {}",
            K::NAME
        );
        self.offset += 1;
    }

    fn get(&self) -> Option<&'a Value> {
        self.entries.get(self.offset)
    }

    fn position(&self) -> CursorPosition {
        CursorPosition::new(self.entries, self.offset)
    }
}
