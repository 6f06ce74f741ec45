//! The ordered container that cursors walk over.

use log::trace;
use serde::{Deserialize, Serialize};

use super::cursor::{Bookmark, Cursor, Position};
use crate::error::{CursorError, CursorResult};

// =============================================================================
// SEQUENCE
// =============================================================================

/// An ordered, insertion-ordered, resizable container of values.
///
/// Every structural mutation (append, insert, remove, clear) bumps an internal
/// version. Cursors borrow the sequence, so it cannot be mutated while one is
/// open; the version is what [`Sequence::resume`] checks a [`Bookmark`] against.
///
/// Serializes as a plain array of its elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence<T> {
    items: Vec<T>,
    #[serde(skip)]
    version: u64,
}

impl<T> Sequence<T> {
    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            version: 0,
        }
    }

    /// Creates an empty sequence with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            version: 0,
        }
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Adds a value to the end. O(1) amortized.
    pub fn append(&mut self, value: T) {
        self.items.push(value);
        self.bump();
    }

    /// Inserts a value at `index`, shifting later elements right.
    pub fn insert(&mut self, index: usize, value: T) -> CursorResult<()> {
        if index > self.items.len() {
            return Err(CursorError::index_out_of_bounds(index, self.items.len()));
        }
        self.items.insert(index, value);
        self.bump();
        Ok(())
    }

    /// Removes and returns the value at `index`.
    pub fn remove(&mut self, index: usize) -> CursorResult<T> {
        if index >= self.items.len() {
            return Err(CursorError::index_out_of_bounds(index, self.items.len()));
        }
        let value = self.items.remove(index);
        self.bump();
        Ok(value)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.items.clear();
        self.bump();
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// Returns the current element count.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Alias for [`Sequence::count`].
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets the element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Borrows the elements as a slice, in order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an ordered snapshot of the elements.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Returns the structural modification counter.
    pub fn version(&self) -> u64 {
        self.version
    }

    // =========================================================================
    // CURSORS
    // =========================================================================

    /// Creates a fresh cursor positioned before the first element.
    ///
    /// Cursors are independent: advancing one never moves another.
    pub fn create_cursor(&self) -> Cursor<'_, T> {
        trace!("creating cursor over {} elements", self.items.len());
        Cursor::new(self)
    }

    /// Reopens a traversal at a position taken with [`Cursor::bookmark`].
    ///
    /// Fails with `ConcurrentModification` if the sequence was structurally
    /// mutated after the bookmark was taken.
    pub fn resume(&self, bookmark: Bookmark) -> CursorResult<Cursor<'_, T>> {
        if bookmark.version != self.version {
            return Err(CursorError::concurrent_modification(
                bookmark.version,
                self.version,
            ));
        }
        // Bookmarks can be deserialized, so the version match alone is not proof.
        if bookmark.index >= self.items.len() {
            return Err(CursorError::index_out_of_bounds(
                bookmark.index,
                self.items.len(),
            ));
        }
        Ok(Cursor::at(self, Position::Positioned(bookmark.index)))
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items, version: 0 }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
