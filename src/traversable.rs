use crate::{Book, Cursor, Library};

/// Anything that can hand out a [`Cursor`].
///
/// A cursor is traversable itself, so code that takes `impl Traversable`
/// accepts a library, a plain slice, or a cursor that is already part way
/// through its sequence.
pub trait Traversable<'a, T> {
    /// Get a cursor over the underlying sequence.
    fn cursor(self) -> Cursor<'a, T>;
}

impl<'a, T> Traversable<'a, T> for Cursor<'a, T> {
    #[inline]
    fn cursor(self) -> Cursor<'a, T> {
        self
    }
}

impl<'a> Traversable<'a, Book> for &'a Library {
    #[inline]
    fn cursor(self) -> Cursor<'a, Book> {
        self.iter()
    }
}

impl<'a, T> Traversable<'a, T> for &'a [T] {
    #[inline]
    fn cursor(self) -> Cursor<'a, T> {
        Cursor::new(self)
    }
}

impl<'a, T> Traversable<'a, T> for &'a Vec<T> {
    #[inline]
    fn cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.as_slice())
    }
}
