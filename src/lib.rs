//! seqcursor - Explicit cursors over ordered in-memory sequences.
//!
//! This crate provides a small, strongly-typed traversal toolkit:
//!
//! - **Explicit state**: `advance()` moves, `current()` reads, `close()` releases
//! - **Borrow-checked**: a sequence cannot be mutated under an open cursor
//! - **Scoped release**: `for_each` closes its cursor exactly once on every exit path
//!
//! # Example
//!
//! ```rust
//! use seqcursor::{CursorError, Position, Sequence};
//!
//! let mut books = Sequence::new();
//! books.append("Dune");
//! books.append("1984");
//!
//! let mut cursor = books.create_cursor();
//! assert_eq!(
//!     cursor.current(),
//!     Err(CursorError::invalid_position(Position::BeforeStart))
//! );
//!
//! while cursor.advance().unwrap() {
//!     println!("{}", cursor.current().unwrap());
//! }
//!
//! // Exhaustion is sticky, close is idempotent
//! assert!(!cursor.advance().unwrap());
//! cursor.close();
//! cursor.close();
//! assert_eq!(cursor.advance(), Err(CursorError::Closed));
//! ```

pub mod error;

// Cursor capability traits
pub mod enumerate;

// Sequence module
pub mod sequence;

pub mod traverse;
pub mod untyped;

// Re-exports for convenience
pub use enumerate::{Enumerable, Enumerator, IterCursor, IterSource};
pub use error::{CursorError, CursorResult};
pub use sequence::{Bookmark, Cursor, Position, Sequence};
pub use traverse::{collect_values, for_each, Flow, Traversal};
pub use untyped::{UntypedCursor, UntypedSource};
