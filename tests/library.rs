pub mod common;

use anyhow::Result;
use bookshelf::{Book, BookIterator, BookshelfError, Library, Traversable};
use common::{create_library, TITLES};
use test_log::test;

#[test]
fn library_yields_books_in_order() -> Result<()> {
    let library = create_library();
    let mut cursor = library.iter();

    assert_eq!(cursor.try_next()?, &Book::new("O Senhor dos Anéis"));
    assert_eq!(cursor.try_next()?, &Book::new("Duna"));
    assert_eq!(cursor.try_next()?, &Book::new("Fundação"));
    assert_eq!(
        cursor.try_next(),
        Err(BookshelfError::ExhaustedIteration {
            position: 3,
            length: 3
        })
    );
    Ok(())
}

#[test]
fn empty_library_is_exhausted() {
    let library = Library::new(vec![]);
    let mut cursor = library.iter();

    assert!(!cursor.has_next());
    assert!(matches!(
        cursor.try_next(),
        Err(BookshelfError::ExhaustedIteration {
            position: 0,
            length: 0
        })
    ));
}

#[test]
fn has_next_guards_manual_traversal() -> Result<()> {
    let library = create_library();
    let mut cursor = library.iter();
    let mut titles = vec![];

    while cursor.has_next() {
        titles.push(cursor.try_next()?.title());
    }

    assert_eq!(titles, TITLES);
    Ok(())
}

#[test]
fn exhaustion_is_permanent() {
    let library = create_library();
    let mut cursor = library.iter();
    for _ in 0..TITLES.len() {
        assert!(cursor.next().is_some());
    }

    for _ in 0..5 {
        assert!(!cursor.has_next());
        assert!(cursor.next().is_none());
        assert!(cursor.try_next().is_err());
    }
    assert_eq!(cursor.position(), TITLES.len());
}

#[test]
fn cursors_are_independent() -> Result<()> {
    let library = create_library();
    let mut first = library.iter();
    let mut second = library.iter();

    assert_eq!(first.try_next()?.title(), "O Senhor dos Anéis");
    assert_eq!(first.try_next()?.title(), "Duna");
    assert_eq!(second.position(), 0);

    assert_eq!(second.try_next()?.title(), "O Senhor dos Anéis");
    assert_eq!(first.position(), 2);
    assert_eq!(first.try_next()?.title(), "Fundação");
    assert!(first.is_exhausted());
    assert_eq!(second.remaining(), 2);
    Ok(())
}

#[test]
fn for_loop_and_manual_traversal_agree() {
    let library = create_library();
    let looped: Vec<&Book> = (&library).into_iter().collect();
    let manual: Vec<&Book> = library.iter().collect();
    assert_eq!(looped, manual);
    assert_eq!(looped.len(), library.len());
}

#[test]
fn plain_list_is_traversable() {
    let fruits = vec!["Maçã", "Banana", "Cereja"];
    let mut cursor = fruits.as_slice().cursor();
    assert_eq!(cursor.next(), Some(&"Maçã"));

    // A cursor handed back as a traversable resumes where it stopped.
    let rest: Vec<_> = cursor.cursor().copied().collect();
    assert_eq!(rest, vec!["Banana", "Cereja"]);
}

#[test]
fn display_shows_title() {
    let library = create_library();
    let shown: Vec<String> = library.iter().map(ToString::to_string).collect();
    assert_eq!(
        shown,
        vec![
            "Book(title='O Senhor dos Anéis')",
            "Book(title='Duna')",
            "Book(title='Fundação')",
        ]
    );
}

#[test]
fn error_message_names_position() {
    let err = BookshelfError::ExhaustedIteration {
        position: 3,
        length: 3,
    };
    assert_eq!(
        err.to_string(),
        "Exhausted iteration. Cursor is at position 3 of 3."
    );
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn types_are_send_and_sync() {
    assert_send_sync::<Book>();
    assert_send_sync::<Library>();
    assert_send_sync::<BookIterator<'static>>();
}
