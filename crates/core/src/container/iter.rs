//! Iterator handles
//!
//! [`ContainerIter`] is what `begin()` and `end()` hand out. It owns exactly
//! one boxed [`Cursor`] and hides its concrete type, while still behaving
//! like a plain value: cloning deep-copies the cursor, and equality first
//! checks that both cursors are of the same kind before comparing positions.
//!
//! ```
//! use nyan_core::{Container, OrderedSet, Value};
//!
//! let set: OrderedSet = [Value::Int(1), Value::Int(2)].into_iter().collect();
//!
//! let mut it = set.begin();
//! let mut seen = Vec::new();
//! while it != set.end() {
//!     seen.push(it.value().clone());
//!     it.advance();
//! }
//! assert_eq!(seen, vec![Value::Int(1), Value::Int(2)]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use super::cursor::{Cursor, CursorKind};
use crate::value::Value;

/// Value-semantic handle around one owned cursor
///
/// A default handle is unbound: it holds no cursor. Unbound handles compare
/// equal only to each other, yield nothing as an [`Iterator`], and panic on
/// [`advance`](Self::advance) and [`value`](Self::value).
#[derive(Default)]
pub struct ContainerIter<'a> {
    cursor: Option<Box<dyn Cursor<'a> + 'a>>,
}

impl<'a> ContainerIter<'a> {
    /// Wrap a freshly created cursor
    pub fn new<C>(cursor: C) -> Self
    where
        C: Cursor<'a> + 'a,
    {
        Self::from_boxed(Box::new(cursor))
    }

    /// Wrap an already boxed cursor
    pub fn from_boxed(cursor: Box<dyn Cursor<'a> + 'a>) -> Self {
        Self {
            cursor: Some(cursor),
        }
    }

    /// Whether this handle owns a cursor
    pub fn is_bound(&self) -> bool {
        self.cursor.is_some()
    }

    /// Kind of the owned cursor, `None` when unbound
    pub fn kind(&self) -> Option<CursorKind> {
        self.cursor.as_ref().map(|c| c.kind())
    }

    /// Whether the handle is unbound or sits at the end position
    pub fn is_end(&self) -> bool {
        self.get().is_none()
    }

    /// Step the cursor to the next position
    ///
    /// # Panics
    ///
    /// Panics when the handle is unbound, or when the cursor panics on
    /// advancing past the end.
    pub fn advance(&mut self) -> &mut Self {
        match self.cursor.as_mut() {
            Some(cursor) => cursor.advance(),
            None => panic!("advance on an unbound container iterator"),
        }
        self
    }

    /// Value at the current position, `None` at the end or when unbound
    pub fn get(&self) -> Option<&'a Value> {
        self.cursor.as_ref().and_then(|c| c.get())
    }

    /// Dereference the handle
    ///
    /// # Panics
    ///
    /// Panics when the handle is unbound or at the end position.
    pub fn value(&self) -> &'a Value {
        match self.cursor.as_ref() {
            Some(cursor) => cursor
                .get()
                .unwrap_or_else(|| panic!("dereference of end-positioned {:?}", cursor.kind())),
            None => panic!("dereference of an unbound container iterator"),
        }
    }
}

impl Clone for ContainerIter<'_> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.as_ref().map(|c| c.clone_box()),
        }
    }
}

impl PartialEq for ContainerIter<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.cursor, &other.cursor) {
            (None, None) => true,
            (Some(a), Some(b)) => a.kind() == b.kind() && a.same_position(&**b),
            _ => false,
        }
    }
}

impl Eq for ContainerIter<'_> {}

impl fmt::Debug for ContainerIter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cursor {
            Some(cursor) => f
                .debug_struct("ContainerIter")
                .field("kind", &cursor.kind())
                .field("position", &cursor.position())
                .finish(),
            None => f.write_str("ContainerIter(unbound)"),
        }
    }
}

impl<'a> Iterator for ContainerIter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<&'a Value> {
        let cursor = self.cursor.as_mut()?;
        let value = cursor.get()?;
        cursor.advance();
        Some(value)
    }
}

impl FusedIterator for ContainerIter<'_> {}
