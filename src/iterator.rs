//! Iterator: a sequence container paired with a cursor object that exposes
//! sequential traversal without exposing the underlying storage.
//!
//! The cursor speaks two dialects: the classic move_next / current / reset
//! protocol, and `std::iter::Iterator`, so the same position state drives
//! both explicit walks and `for` loops.

use thiserror::Error;

//==============================================================================
// CursorError: dereferencing a cursor that is not on an element
//==============================================================================

/// Reading `current` requires a prior successful `move_next`. A cursor that
/// is still before the start (fresh, reset, or over an empty collection) has
/// no element to return.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    #[error("cursor is not positioned on an element (collection length {len}); call move_next() first")]
    OutOfRange { len: usize },
}

//==============================================================================
// Collection: an append-only sequence that keeps its storage private
//==============================================================================

/// An ordered, append-only sequence. Duplicates are allowed and insertion
/// order is preserved. Traversal goes through cursors, never through the
/// backing storage.
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Collection { items: Vec::new() }
    }

    /// Appends an item at the end. O(1) amortized, never fails.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns a new cursor bound to this collection, positioned before the
    /// first element.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            collection: self,
            position: None,
        }
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Collection {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

//==============================================================================
// Cursor: the classic traversal protocol
//==============================================================================

/// Stateful sequential traversal. A fresh cursor sits before the first
/// element; `move_next` must succeed before `current` has anything to give.
pub trait Cursor {
    type Item;

    /// Advances by one position if a next element exists and says whether an
    /// element is now available. An exhausted cursor keeps returning `false`
    /// without moving.
    fn move_next(&mut self) -> bool;

    /// The element at the cursor's position, or `OutOfRange` when the cursor
    /// has not been positioned yet.
    fn current(&self) -> Result<&Self::Item, CursorError>;

    /// Returns to the before-start state, enabling re-traversal.
    fn reset(&mut self);
}

/// A cursor over one [`Collection`]. It borrows the collection, so the
/// borrow checker guarantees the collection outlives it, and the collection
/// cannot change length while the cursor is alive.
///
/// `position` is `None` before the start (the classic "-1") and `Some(i)`
/// with `i < len` afterwards; `move_next` never stores an index out of
/// range.
pub struct Iter<'a, T> {
    collection: &'a Collection<T>,
    position: Option<usize>,
}

impl<T> Cursor for Iter<'_, T> {
    type Item = T;

    fn move_next(&mut self) -> bool {
        let next = match self.position {
            None => 0,
            Some(index) => index + 1,
        };
        if next < self.collection.len() {
            self.position = Some(next);
            true
        } else {
            // Stay put: on the last element, or before the start of an
            // empty collection.
            false
        }
    }

    fn current(&self) -> Result<&T, CursorError> {
        match self.position {
            Some(index) => Ok(&self.collection.items[index]),
            None => Err(CursorError::OutOfRange {
                len: self.collection.len(),
            }),
        }
    }

    fn reset(&mut self) {
        self.position = None;
    }
}

//==============================================================================
// Standard-library bridges: for loops, collect, extend
//==============================================================================

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.move_next() {
            return None;
        }
        self.position.and_then(|index| self.collection.get(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.position {
            None => self.collection.len(),
            Some(index) => self.collection.len() - index - 1,
        };
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//==============================================================================
// Tests
//==============================================================================
