use std::iter::FromIterator;

use crate::{Book, BookIterator, LibraryBuilder};

/// An ordered, immutable collection of books.
///
/// The library owns its books. Walking them goes through a [`BookIterator`],
/// and every call to [`Library::iter`] returns a new one starting at the
/// first book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    /// Create a new instance, keeping the books in the given order.
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Create a builder to add books one by one.
    pub fn builder() -> LibraryBuilder {
        LibraryBuilder::new()
    }

    /// Return an iterator over all books.
    pub fn iter(&self) -> BookIterator<'_> {
        BookIterator::new(&self.books)
    }

    /// Get the amount of books in the library.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check whether the library holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Get a read-only view of the books.
    pub fn books(&self) -> &[Book] {
        &self.books
    }
}

impl From<Vec<Book>> for Library {
    fn from(books: Vec<Book>) -> Self {
        Self::new(books)
    }
}

impl FromIterator<Book> for Library {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a Book;
    type IntoIter = BookIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
