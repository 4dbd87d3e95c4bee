use std::fmt::{self, Display};

/// A book, identified by nothing but its title.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    title: String,
}

impl Book {
    /// Create a new instance.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book(title='{}')", self.title)
    }
}

impl From<&str> for Book {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

impl From<String> for Book {
    fn from(title: String) -> Self {
        Self::new(title)
    }
}
