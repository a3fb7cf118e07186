//! Fixed-capacity bump allocation.
//!
//! An [`Arena`] hands out sequential slots from a backing store that is sized
//! once and never grows. Entries are never freed one by one; the whole arena
//! is emptied with [`Arena::reset`] and reused for the next evaluation.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Returned when an allocation would push an arena past its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("arena capacity of {capacity} entries exhausted")]
pub struct CapacityError {
    /// The fixed capacity of the arena that rejected the allocation
    pub capacity: usize,
}

/// A typed index into an [`Arena`].
///
/// Ids are only meaningful for the arena that produced them and only until
/// that arena is reset.
pub struct Id<T> {
    index: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Id for position `index`, or `None` past the `u32` index space
    fn new(index: usize) -> Option<Self> {
        let index = u32::try_from(index).ok()?;
        Some(Self {
            index,
            _marker: PhantomData,
        })
    }

    /// Position of the entry inside its arena
    pub fn index(self) -> usize {
        self.index as usize
    }
}

// Manual impls: deriving would demand the same traits from `T`.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// A bump allocator over a fixed-capacity backing store.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    store: Vec<T>,
    capacity: usize,
}

impl<T> Arena<T> {
    /// Create an empty arena that accepts at most `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Store `value` in the next free slot.
    pub fn alloc(&mut self, value: T) -> Result<Id<T>, CapacityError> {
        let exhausted = CapacityError {
            capacity: self.capacity,
        };
        if self.is_full() {
            return Err(exhausted);
        }
        let id = Id::new(self.store.len()).ok_or(exhausted)?;
        self.store.push(value);
        Ok(id)
    }

    pub fn get(&self, id: Id<T>) -> &T {
        &self.store[id.index()]
    }

    pub fn get_mut(&mut self, id: Id<T>) -> &mut T {
        &mut self.store[id.index()]
    }

    /// The most recently allocated entry
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.store.last_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.store
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.store.iter()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.store.len() >= self.capacity
    }

    /// Drop every entry while keeping the backing store for reuse.
    pub fn reset(&mut self) {
        self.store.clear();
    }
}

impl<'a, T> IntoIterator for &'a Arena<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
