//! Untyped view over typed cursors.
//!
//! For callers that only deal in `dyn Any` (plugin hosts, heterogeneous
//! registries). Elements stay typed inside; they are erased to `&dyn Any` at
//! the `current()` boundary and nowhere else.

use std::any::Any;

use crate::enumerate::{Enumerable, Enumerator};
use crate::error::CursorResult;

/// Enumerator adapter that yields `&dyn Any`.
#[derive(Debug)]
pub struct UntypedCursor<C> {
    inner: C,
}

impl<C> UntypedCursor<C> {
    /// Wraps a typed enumerator.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Unwraps the typed enumerator.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C> Enumerator for UntypedCursor<C>
where
    C: Enumerator,
    C::Item: Any + Sized,
{
    type Item = dyn Any;

    fn advance(&mut self) -> CursorResult<bool> {
        self.inner.advance()
    }

    fn current(&self) -> CursorResult<&dyn Any> {
        self.inner.current().map(|item| item as &dyn Any)
    }

    fn close(&mut self) {
        self.inner.close()
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    fn reset(&mut self) -> CursorResult<()> {
        self.inner.reset()
    }
}

/// Enumerable adapter whose cursors yield `&dyn Any`.
#[derive(Debug, Clone)]
pub struct UntypedSource<S> {
    inner: S,
}

impl<S> UntypedSource<S> {
    /// Wraps a typed source.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Borrows the typed source.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Unwraps the typed source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S> Enumerable for UntypedSource<S>
where
    S: Enumerable,
    S::Item: Any + Sized,
{
    type Item = dyn Any;

    type Cursor<'a> = UntypedCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn create_cursor(&self) -> Self::Cursor<'_> {
        UntypedCursor::new(self.inner.create_cursor())
    }
}
