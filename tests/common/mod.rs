#![allow(dead_code)]

use bookshelf::{Book, Library};

pub const TITLES: [&str; 3] = ["O Senhor dos Anéis", "Duna", "Fundação"];

pub fn create_library() -> Library {
    Library::builder().books(TITLES.iter().copied()).build()
}

pub fn create_books(titles: &[String]) -> Vec<Book> {
    titles.iter().cloned().map(Book::from).collect()
}
