//! Sequence module.
//!
//! Provides the ordered container and the cursor that walks it.

pub mod cursor;
pub mod model;

// Re-exports for convenience
pub use cursor::{Bookmark, Cursor, Position};
pub use model::Sequence;
