use tracing::instrument;

use crate::{Book, Library};

/// Build a Library instance one book at a time.
#[derive(Debug, Default)]
pub struct LibraryBuilder {
    books: Vec<Book>,
}

impl LibraryBuilder {
    /// Create a library builder with no books.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book.
    pub fn book(mut self, book: impl Into<Book>) -> Self {
        self.books.push(book.into());
        self
    }

    /// Append several books, keeping their order.
    pub fn books<I>(mut self, books: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Book>,
    {
        self.books.extend(books.into_iter().map(Into::into));
        self
    }

    /// Build a new Library.
    #[instrument(skip_all, fields(books = self.books.len()))]
    pub fn build(self) -> Library {
        Library::new(self.books)
    }
}
