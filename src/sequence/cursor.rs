//! Forward-only external cursor over a [`Sequence`].
//!
//! A cursor is an explicit state object rather than a generator: `advance()`
//! moves the position and reports whether an element is available, and
//! `current()` reads without moving.
//!
//! ```text
//! BeforeStart --advance--> Positioned(0) --advance--> ... Positioned(n-1) --advance--> Exhausted
//!      ^                                                                                   |
//!      +-------------------------------------- reset --------------------------------------+
//! ```
//!
//! `close()` is orthogonal to the position and terminal.

use std::fmt;
use std::iter::FusedIterator;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::model::Sequence;
use crate::error::{CursorError, CursorResult};

// =============================================================================
// POSITION
// =============================================================================

/// Logical position of a cursor within its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    /// No element has been visited yet.
    BeforeStart,
    /// On the element at the given index.
    Positioned(usize),
    /// Past the last element.
    Exhausted,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::BeforeStart => f.write_str("before-start"),
            Position::Positioned(index) => write!(f, "positioned at {}", index),
            Position::Exhausted => f.write_str("exhausted"),
        }
    }
}

// =============================================================================
// BOOKMARK
// =============================================================================

/// A detached cursor position, valid only against an unmodified sequence.
///
/// Taking a bookmark lets the caller close the cursor (releasing its borrow)
/// and pick the traversal back up later with [`Sequence::resume`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub(crate) index: usize,
    pub(crate) version: u64,
}

impl Bookmark {
    /// Index of the bookmarked element.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Sequence version the bookmark was taken at.
    pub fn version(&self) -> u64 {
        self.version
    }
}

// =============================================================================
// CURSOR
// =============================================================================

/// Single-pass, forward-only cursor borrowing a [`Sequence`].
///
/// The borrow is held from [`Sequence::create_cursor`] until [`Cursor::close`]
/// (or drop), so the sequence cannot be mutated underneath an open cursor.
#[derive(Debug)]
pub struct Cursor<'a, T> {
    /// `None` once closed.
    owner: Option<&'a Sequence<T>>,
    position: Position,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(owner: &'a Sequence<T>) -> Self {
        Self::at(owner, Position::BeforeStart)
    }

    pub(crate) fn at(owner: &'a Sequence<T>, position: Position) -> Self {
        Self {
            owner: Some(owner),
            position,
        }
    }

    fn owner(&self) -> CursorResult<&'a Sequence<T>> {
        self.owner.ok_or(CursorError::Closed)
    }

    /// Moves to the next element.
    ///
    /// Returns `Ok(true)` when positioned on an element and `Ok(false)` once
    /// past the end. Further calls after exhaustion keep returning `Ok(false)`.
    pub fn advance(&mut self) -> CursorResult<bool> {
        let owner = self.owner()?;
        let next = match self.position {
            Position::BeforeStart => 0,
            Position::Positioned(index) => index + 1,
            Position::Exhausted => return Ok(false),
        };

        if next < owner.len() {
            self.position = Position::Positioned(next);
            trace!("cursor advanced to {}", next);
            Ok(true)
        } else {
            self.position = Position::Exhausted;
            trace!("cursor exhausted after {} elements", owner.len());
            Ok(false)
        }
    }

    /// Returns the element under the cursor without moving it.
    pub fn current(&self) -> CursorResult<&'a T> {
        let owner = self.owner()?;
        match self.position {
            Position::Positioned(index) => owner
                .get(index)
                .ok_or_else(|| CursorError::invalid_position(self.position)),
            other => Err(CursorError::invalid_position(other)),
        }
    }

    /// Closes the cursor and releases its borrow. Idempotent.
    pub fn close(&mut self) {
        if self.owner.take().is_some() {
            debug!("cursor closed ({})", self.position);
        }
    }

    /// Rewinds to before the first element.
    pub fn reset(&mut self) -> CursorResult<()> {
        self.owner()?;
        self.position = Position::BeforeStart;
        trace!("cursor reset");
        Ok(())
    }

    /// Detaches the current position so the traversal can be resumed later.
    pub fn bookmark(&self) -> CursorResult<Bookmark> {
        let owner = self.owner()?;
        match self.position {
            Position::Positioned(index) => Ok(Bookmark {
                index,
                version: owner.version(),
            }),
            other => Err(CursorError::invalid_position(other)),
        }
    }

    /// Current logical position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Index of the current element, if positioned on one.
    pub fn index(&self) -> Option<usize> {
        match self.position {
            Position::Positioned(index) => Some(index),
            _ => None,
        }
    }

    /// Returns true once `close()` has been called.
    pub fn is_closed(&self) -> bool {
        self.owner.is_none()
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match self.advance() {
            Ok(true) => self.current().ok(),
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match (self.owner, self.position) {
            (Some(owner), Position::BeforeStart) => owner.len(),
            (Some(owner), Position::Positioned(index)) => owner.len().saturating_sub(index + 1),
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl<T> FusedIterator for Cursor<'_, T> {}

// =============================================================================
// TESTS
// =============================================================================
