//! The cursor capability pair.
//!
//! - [`Enumerator`]: something that can be advanced, read and closed.
//! - [`Enumerable`]: something that can hand out fresh enumerators.
//!
//! [`Sequence`] implements both through [`Cursor`]. [`IterCursor`] and
//! [`IterSource`] bring any std iterator under the same contract; they are
//! forward-only and reject `reset()`.

use log::{debug, trace};

use crate::error::{CursorError, CursorResult};
use crate::sequence::{Cursor, Position, Sequence};

// =============================================================================
// TRAITS
// =============================================================================

/// A stateful external iterator.
pub trait Enumerator {
    /// Element type. May be unsized (see [`crate::untyped`]).
    type Item: ?Sized;

    /// Moves to the next element, returning whether one is available.
    fn advance(&mut self) -> CursorResult<bool>;

    /// Reads the element under the cursor without moving it.
    fn current(&self) -> CursorResult<&Self::Item>;

    /// Releases the cursor. Must be idempotent.
    fn close(&mut self);

    /// Returns true once closed.
    fn is_closed(&self) -> bool;

    /// Rewinds to before the first element.
    ///
    /// Forward-only enumerators keep this default.
    fn reset(&mut self) -> CursorResult<()> {
        if self.is_closed() {
            return Err(CursorError::Closed);
        }
        Err(CursorError::unsupported("reset"))
    }
}

/// A container exposing the capability to enumerate its elements.
pub trait Enumerable {
    type Item: ?Sized;

    type Cursor<'a>: Enumerator<Item = Self::Item>
    where
        Self: 'a;

    /// Creates a fresh enumerator positioned before the first element.
    fn create_cursor(&self) -> Self::Cursor<'_>;
}

// =============================================================================
// SEQUENCE IMPLEMENTATIONS
// =============================================================================

impl<'a, T> Enumerator for Cursor<'a, T> {
    type Item = T;

    fn advance(&mut self) -> CursorResult<bool> {
        Cursor::advance(self)
    }

    fn current(&self) -> CursorResult<&T> {
        Cursor::current(self)
    }

    fn close(&mut self) {
        Cursor::close(self)
    }

    fn is_closed(&self) -> bool {
        Cursor::is_closed(self)
    }

    fn reset(&mut self) -> CursorResult<()> {
        Cursor::reset(self)
    }
}

impl<T> Enumerable for Sequence<T> {
    type Item = T;

    type Cursor<'a> = Cursor<'a, T>
    where
        Self: 'a;

    fn create_cursor(&self) -> Cursor<'_, T> {
        Sequence::create_cursor(self)
    }
}

// =============================================================================
// ITERATOR ADAPTER
// =============================================================================

/// Forward-only cursor over any [`Iterator`].
///
/// The iterator is pulled once per `advance()`; the last yielded value is kept
/// so `current()` can hand out a reference to it.
#[derive(Debug)]
pub struct IterCursor<I: Iterator> {
    /// `None` once closed.
    iter: Option<I>,
    current: Option<I::Item>,
    position: Position,
}

impl<I: Iterator> IterCursor<I> {
    /// Wraps an iterable.
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: Some(iter.into_iter()),
            current: None,
            position: Position::BeforeStart,
        }
    }

    /// Current logical position.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl<I: Iterator> Enumerator for IterCursor<I> {
    type Item = I::Item;

    fn advance(&mut self) -> CursorResult<bool> {
        let iter = self.iter.as_mut().ok_or(CursorError::Closed)?;
        let next_index = match self.position {
            Position::BeforeStart => 0,
            Position::Positioned(index) => index + 1,
            Position::Exhausted => return Ok(false),
        };

        // Drop the previous element before pulling the next one.
        self.current = None;
        match iter.next() {
            Some(value) => {
                self.current = Some(value);
                self.position = Position::Positioned(next_index);
                trace!("iterator cursor advanced to {}", next_index);
                Ok(true)
            }
            None => {
                self.position = Position::Exhausted;
                trace!("iterator cursor exhausted after {} elements", next_index);
                Ok(false)
            }
        }
    }

    fn current(&self) -> CursorResult<&I::Item> {
        if self.iter.is_none() {
            return Err(CursorError::Closed);
        }
        match self.position {
            Position::Positioned(_) => self
                .current
                .as_ref()
                .ok_or_else(|| CursorError::invalid_position(self.position)),
            other => Err(CursorError::invalid_position(other)),
        }
    }

    fn close(&mut self) {
        if self.iter.take().is_some() {
            self.current = None;
            debug!("iterator cursor closed ({})", self.position);
        }
    }

    fn is_closed(&self) -> bool {
        self.iter.is_none()
    }
}

/// An [`Enumerable`] backed by a factory that produces fresh iterators.
///
/// ```rust
/// use seqcursor::{Enumerable, Enumerator, IterSource};
///
/// let evens = IterSource::new(|| (0..10).filter(|n| n % 2 == 0));
/// let mut cursor = evens.create_cursor();
/// assert!(cursor.advance().unwrap());
/// assert_eq!(*cursor.current().unwrap(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct IterSource<F> {
    factory: F,
}

impl<F> IterSource<F> {
    /// Creates a source from an iterator factory.
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F, I> Enumerable for IterSource<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;

    type Cursor<'a> = IterCursor<I::IntoIter>
    where
        Self: 'a;

    fn create_cursor(&self) -> IterCursor<I::IntoIter> {
        IterCursor::new((self.factory)())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Drives any enumerator to the end through the trait only.
    fn drain<E>(cursor: &mut E) -> Vec<E::Item>
    where
        E: Enumerator,
        E::Item: Clone + Sized,
    {
        let mut out = Vec::new();
        while cursor.advance().unwrap() {
            out.push(cursor.current().unwrap().clone());
        }
        out
    }

    #[test]
    fn test_sequence_through_trait() {
        let seq: Sequence<i32> = vec![10, 20, 30].into();
        let mut cursor = Enumerable::create_cursor(&seq);
        assert_eq!(drain(&mut cursor), vec![10, 20, 30]);
        assert!(!Enumerator::advance(&mut cursor).unwrap());

        // Sequence cursors support rewinding
        Enumerator::reset(&mut cursor).unwrap();
        assert_eq!(drain(&mut cursor), vec![10, 20, 30]);
    }

    #[test]
    fn test_iter_cursor_walks_iterator() {
        let mut cursor = IterCursor::new(vec!["Dune", "1984", "Holes"]);
        assert_eq!(
            cursor.current(),
            Err(CursorError::invalid_position(Position::BeforeStart))
        );
        assert_eq!(drain(&mut cursor), vec!["Dune", "1984", "Holes"]);
        assert!(!cursor.advance().unwrap());
        assert_eq!(
            cursor.current(),
            Err(CursorError::invalid_position(Position::Exhausted))
        );
    }

    #[test]
    fn test_iter_cursor_does_not_pull_past_end() {
        let mut pulls = 0;
        let counted = std::iter::from_fn(|| {
            pulls += 1;
            None::<i32>
        });
        let mut cursor = IterCursor::new(counted);
        assert!(!cursor.advance().unwrap());
        assert!(!cursor.advance().unwrap());
        assert!(!cursor.advance().unwrap());
        drop(cursor);
        assert_eq!(pulls, 1);
    }

    #[test]
    fn test_iter_cursor_reset_unsupported() {
        let mut cursor = IterCursor::new(1..=3);
        cursor.advance().unwrap();
        assert_eq!(cursor.reset(), Err(CursorError::unsupported("reset")));
        // The failed reset leaves the position alone
        assert_eq!(cursor.position(), Position::Positioned(0));

        cursor.close();
        assert_eq!(cursor.reset(), Err(CursorError::Closed));
    }

    #[test]
    fn test_iter_cursor_close() {
        let mut cursor = IterCursor::new(1..=3);
        cursor.advance().unwrap();
        cursor.close();
        cursor.close();
        assert!(cursor.is_closed());
        assert_eq!(cursor.advance(), Err(CursorError::Closed));
        assert_eq!(cursor.current(), Err(CursorError::Closed));
    }

    #[test]
    fn test_iter_source_creates_independent_cursors() {
        let source = IterSource::new(|| vec![10, 20, 30]);
        let mut a = source.create_cursor();
        let mut b = source.create_cursor();

        a.advance().unwrap();
        a.advance().unwrap();
        b.advance().unwrap();

        assert_eq!(a.current(), Ok(&20));
        assert_eq!(b.current(), Ok(&10));
    }
}
