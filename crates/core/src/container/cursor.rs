//! Iteration cursors
//!
//! A cursor is the container-specific half of iteration: it knows how to
//! step through one concrete container's storage. Callers never hold a
//! cursor directly; [`ContainerIter`](super::ContainerIter) owns one and
//! forwards to it.
//!
//! ## Contract
//!
//! - A cursor is bound to one container instance for its whole lifetime and
//!   borrows it for `'a`, so the container cannot change underneath it.
//! - `advance` moves the position only. Advancing an end-positioned cursor
//!   is a programming error.
//! - `same_position` is only called on two cursors whose [`CursorKind`]s
//!   already matched, so an implementation never has to guard against a
//!   foreign cursor type.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::value::Value;

/// Runtime identity of a concrete cursor type
///
/// Cursors borrow their container, so `Any` is not available to them.
/// Implementations instead report the `TypeId` of their own type
/// instantiated at `'static`:
///
/// ```
/// use nyan_core::container::CursorKind;
///
/// struct MyCursor<'a>(&'a [u8]);
///
/// let kind = CursorKind::of::<MyCursor<'static>>();
/// assert_eq!(kind, CursorKind::of::<MyCursor<'static>>());
/// assert_ne!(kind, CursorKind::of::<u8>());
/// ```
#[derive(Clone, Copy)]
pub struct CursorKind {
    id: TypeId,
    name: &'static str,
}

impl CursorKind {
    /// Kind tag for the cursor type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Type name of the cursor, for diagnostics only
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for CursorKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CursorKind {}

impl Hash for CursorKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for CursorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorKind").field(&self.name).finish()
    }
}

/// Logical position of a cursor: which storage, and where in it
///
/// `storage` is the address of the container storage the cursor walks. It
/// is only compared, never dereferenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorPosition {
    storage: usize,
    offset: usize,
}

impl CursorPosition {
    /// Position `offset` within `storage`
    pub fn new<T: ?Sized>(storage: &T, offset: usize) -> Self {
        Self {
            storage: (storage as *const T).cast::<()>() as usize,
            offset,
        }
    }

    /// Offset within the storage
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether both positions walk the same storage
    pub fn same_storage(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

/// Container-specific iteration state
///
/// One implementation exists per concrete container kind. The cursor must
/// be `Clone` so that [`CursorClone`] is available; handles deep-copy their
/// cursor through it.
pub trait Cursor<'a>: CursorClone<'a> + fmt::Debug {
    /// Runtime identity of the concrete cursor type
    fn kind(&self) -> CursorKind;

    /// Move to the next position
    ///
    /// # Panics
    ///
    /// Implementations may panic when already at the end position.
    fn advance(&mut self);

    /// Value at the current position, `None` at the end position
    fn get(&self) -> Option<&'a Value>;

    /// Current logical position
    fn position(&self) -> CursorPosition;

    /// Whether `other` denotes the same position
    ///
    /// Only called after both cursors reported the same [`CursorKind`].
    fn same_position(&self, other: &dyn Cursor<'a>) -> bool {
        self.position() == other.position()
    }
}

/// Deep copy of a boxed cursor
///
/// Blanket-implemented for every `Clone` cursor.
pub trait CursorClone<'a> {
    /// Clone this cursor into a new, independent box
    fn clone_box(&self) -> Box<dyn Cursor<'a> + 'a>;
}

impl<'a, T> CursorClone<'a> for T
where
    T: Cursor<'a> + Clone + 'a,
{
    fn clone_box(&self) -> Box<dyn Cursor<'a> + 'a> {
        Box::new(self.clone())
    }
}
