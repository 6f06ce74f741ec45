//! For-each traversal with scoped release.
//!
//! [`for_each`] is built only from `create_cursor`, `advance`, `current` and
//! `close`. The cursor lives inside a guard whose `Drop` closes it, so it is
//! closed exactly once whether the loop completes, the callback breaks early,
//! the callback fails, or the callback panics.

use std::ops::{Deref, DerefMut};

use log::debug;

use crate::enumerate::{Enumerable, Enumerator};
use crate::error::{CursorError, CursorResult};

/// What the for-each callback wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Break,
}

/// Summary of a finished traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traversal {
    /// Number of elements handed to the callback.
    pub visited: usize,
    /// False when the callback stopped the traversal early.
    pub completed: bool,
}

/// Owns an enumerator and closes it on drop.
struct Scoped<C: Enumerator> {
    cursor: C,
}

impl<C: Enumerator> Scoped<C> {
    fn new(cursor: C) -> Self {
        Self { cursor }
    }
}

impl<C: Enumerator> Deref for Scoped<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.cursor
    }
}

impl<C: Enumerator> DerefMut for Scoped<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.cursor
    }
}

impl<C: Enumerator> Drop for Scoped<C> {
    fn drop(&mut self) {
        self.cursor.close();
    }
}

/// Visits every element of `source` in order, passing `(position, item)`.
///
/// The callback returns [`Flow::Break`] to stop early. A callback error is
/// returned unchanged, after the cursor has been closed. Cursor errors are
/// converted into the callback's error type.
///
/// ```rust
/// use seqcursor::{for_each, CursorError, Flow, Sequence};
///
/// let books: Sequence<&str> = vec!["Dune", "1984", "Holes"].into();
/// let mut seen = Vec::new();
/// let summary = for_each(&books, |position, title| {
///     seen.push((position, *title));
///     Ok::<_, CursorError>(Flow::Continue)
/// })
/// .unwrap();
///
/// assert_eq!(seen, vec![(0, "Dune"), (1, "1984"), (2, "Holes")]);
/// assert!(summary.completed);
/// ```
pub fn for_each<S, F, E>(source: &S, mut callback: F) -> Result<Traversal, E>
where
    S: Enumerable + ?Sized,
    F: FnMut(usize, &S::Item) -> Result<Flow, E>,
    E: From<CursorError>,
{
    let mut cursor = Scoped::new(source.create_cursor());
    let mut visited = 0;

    while cursor.advance()? {
        let item = cursor.current()?;
        let position = visited;
        visited += 1;

        if callback(position, item)? == Flow::Break {
            debug!("traversal stopped by callback after {} elements", visited);
            return Ok(Traversal {
                visited,
                completed: false,
            });
        }
    }

    debug!("traversal completed after {} elements", visited);
    Ok(Traversal {
        visited,
        completed: true,
    })
}

/// Materializes every element of `source` into an ordered `Vec`.
pub fn collect_values<S>(source: &S) -> CursorResult<Vec<S::Item>>
where
    S: Enumerable + ?Sized,
    S::Item: Clone + Sized,
{
    let mut values = Vec::new();
    for_each(source, |_, item: &S::Item| {
        values.push(item.clone());
        Ok::<_, CursorError>(Flow::Continue)
    })?;
    Ok(values)
}

// =============================================================================
// TESTS
// =============================================================================
