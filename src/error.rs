use thiserror::Error;

/// Common error type for the bookshelf interface
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookshelfError {
    /// The cursor has already handed out every element of its sequence.
    #[error("Exhausted iteration. Cursor is at position {position} of {length}.")]
    ExhaustedIteration {
        /// Position of the cursor when `try_next` was called
        position: usize,
        /// Length of the sequence the cursor walks
        length: usize,
    },
}
