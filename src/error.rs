//! Error types for cursors and sequences.

use thiserror::Error;

use crate::sequence::Position;

/// Result type alias for cursor operations.
pub type CursorResult<T> = Result<T, CursorError>;

/// Errors that can occur while creating, moving or reading a cursor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// `current()` was called while not positioned on an element.
    #[error("Invalid cursor position: {position}")]
    InvalidPosition { position: Position },

    /// An operation was attempted after `close()`.
    #[error("Cursor is closed")]
    Closed,

    /// The cursor does not support the requested operation.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// The underlying sequence changed structurally since the cursor position was taken.
    #[error("Concurrent modification: sequence version {found}, expected {expected}")]
    ConcurrentModification { expected: u64, found: u64 },

    /// Index out of bounds for sequence operations.
    #[error("Index {index} out of bounds for sequence of length {length}")]
    IndexOutOfBounds { index: usize, length: usize },
}

impl CursorError {
    /// Creates an InvalidPosition error.
    pub fn invalid_position(position: Position) -> Self {
        Self::InvalidPosition { position }
    }

    /// Creates an UnsupportedOperation error.
    pub fn unsupported(operation: &'static str) -> Self {
        Self::UnsupportedOperation(operation)
    }

    /// Creates a ConcurrentModification error.
    pub fn concurrent_modification(expected: u64, found: u64) -> Self {
        Self::ConcurrentModification { expected, found }
    }

    /// Creates an IndexOutOfBounds error.
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CursorError::invalid_position(Position::BeforeStart).to_string(),
            "Invalid cursor position: before-start"
        );
        assert_eq!(
            CursorError::invalid_position(Position::Exhausted).to_string(),
            "Invalid cursor position: exhausted"
        );
        assert_eq!(CursorError::Closed.to_string(), "Cursor is closed");
        assert_eq!(
            CursorError::unsupported("reset").to_string(),
            "Unsupported operation: reset"
        );
        assert_eq!(
            CursorError::concurrent_modification(3, 4).to_string(),
            "Concurrent modification: sequence version 4, expected 3"
        );
        assert_eq!(
            CursorError::index_out_of_bounds(5, 2).to_string(),
            "Index 5 out of bounds for sequence of length 2"
        );
    }
}
