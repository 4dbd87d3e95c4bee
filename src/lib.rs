//! ## Introduction
//!
//! A library of books that hands out cursors. Each cursor borrows the
//! library's books, keeps its own position, and reports when it has run out
//! of books. Any number of cursors can walk the same library at once.
//!
//! ## Example
//! ```rust
//! use bookshelf::prelude::*;
//!
//! let library = Library::builder()
//!     .book("O Senhor dos Anéis")
//!     .book("Duna")
//!     .book("Fundação")
//!     .build();
//!
//! for book in &library {
//!     println!("{}", book);
//! }
//!
//! let mut cursor = library.iter();
//! while cursor.has_next() {
//!     let book = cursor.try_next()?;
//!     println!("{}", book.title());
//! }
//! assert!(cursor.try_next().is_err());
//! # Ok::<(), BookshelfError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod prelude;

mod book;
mod builder;
mod cursor;
mod error;
mod library;
mod traversable;

pub use crate::book::Book;
pub use crate::builder::LibraryBuilder;
pub use crate::cursor::{BookIterator, Cursor};
pub use crate::error::BookshelfError;
pub use crate::library::Library;
pub use crate::traversable::Traversable;
