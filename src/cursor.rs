//! Walk a borrowed sequence one element at a time.

use std::iter::FusedIterator;
use tracing::{debug, trace};

use crate::{Book, BookshelfError};

/// Cursor over the books of a [`Library`](crate::Library).
pub type BookIterator<'a> = Cursor<'a, Book>;

/// Stateful traversal over a borrowed sequence.
///
/// A cursor never copies the sequence it walks, it only keeps a shared borrow
/// of it together with its own position. Any number of cursors can walk the
/// same sequence at the same time without affecting each other.
///
/// Once every element has been handed out the cursor stays exhausted, there
/// is no way to rewind it. Ask the owner of the sequence for a new cursor
/// instead.
#[derive(Debug)]
pub struct Cursor<'a, T> {
    /// Borrow of the sequence we're going to iterate over.
    items: &'a [T],
    /// Keeps track which index we're currently at.
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// Create a new instance positioned at the first element.
    pub fn new(items: &'a [T]) -> Self {
        trace!(length = items.len(), "new cursor");
        Self { items, position: 0 }
    }

    /// Check whether another element is available. Does not advance.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.position < self.items.len()
    }

    /// Check whether every element has been handed out.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        !self.has_next()
    }

    /// Index of the element the next call to `try_next` returns.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Amount of elements left.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.items.len() - self.position
    }

    /// Return the current element and advance.
    ///
    /// ## Errors
    /// Returns [`BookshelfError::ExhaustedIteration`] when the cursor has
    /// already reached the end of its sequence. The position is left
    /// untouched, so every further call fails the same way.
    pub fn try_next(&mut self) -> Result<&'a T, BookshelfError> {
        match self.advance() {
            Some(item) => Ok(item),
            None => {
                debug!(
                    position = self.position,
                    length = self.items.len(),
                    "cursor exhausted"
                );
                Err(BookshelfError::ExhaustedIteration {
                    position: self.position,
                    length: self.items.len(),
                })
            }
        }
    }

    fn advance(&mut self) -> Option<&'a T> {
        let item = self.items.get(self.position)?;
        self.position += 1;
        Some(item)
    }
}

// No `T: Clone` bound, only the borrow is copied.
impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            position: self.position,
        }
    }
}

impl<'a, T> From<&'a [T]> for Cursor<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for Cursor<'a, T> {}

impl<'a, T> FusedIterator for Cursor<'a, T> {}
