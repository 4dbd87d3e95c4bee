//! Convenience wrapper to import all of bookshelf's core.
//!
//! ```rust
//! use bookshelf::prelude::*;
//! let library = Library::from(vec![Book::new("Duna")]);
//! assert_eq!(library.iter().count(), 1);
//! ```
pub use crate::{Book, BookIterator, BookshelfError, Cursor, Library, LibraryBuilder, Traversable};
