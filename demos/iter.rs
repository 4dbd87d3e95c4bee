use bookshelf::{Book, BookshelfError, Library, Traversable};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), BookshelfError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let library = Library::new(vec![
        Book::new("O Senhor dos Anéis"),
        Book::new("Duna"),
        Book::new("Fundação"),
    ]);

    println!("Iterating with a for loop:");
    for book in &library {
        println!("{}", book);
    }

    println!("\nIterating manually:");
    let mut cursor = library.iter();
    println!("{}", cursor.try_next()?);
    println!("{}", cursor.try_next()?);
    println!("{}", cursor.try_next()?);

    // A fourth call has nothing left to return.
    match cursor.try_next() {
        Ok(book) => println!("unexpected {}", book),
        Err(err) => println!("{}", err),
    }

    println!("\nIterating a plain list:");
    let fruits = ["Maçã", "Banana", "Cereja"];
    for fruit in fruits[..].cursor() {
        println!("{}", fruit);
    }

    Ok(())
}
