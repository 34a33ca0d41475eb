//! The book entity and the fixed in-memory shelf.

/// A single catalog entry.
///
/// Internal model with English field names. The Spanish external schema
/// lives in [`wire`](crate::wire) and is mapped explicitly.
///
/// `id` is unique across the collection and never reused; nothing creates,
/// updates, or deletes a book at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub year: i32,
    pub author: String,
}

impl Book {
    pub fn new(id: u32, title: impl Into<String>, year: i32, author: impl Into<String>) -> Self {
        Self { id, title: title.into(), year, author: author.into() }
    }
}

/// Read-only source of books.
///
/// The catalog only ever asks for everything; filtering happens above this
/// seam, so swapping the storage choice never touches the query contract.
/// Implementations must return the same order on every call.
pub trait BookRepository: Send + Sync {
    fn find_all(&self) -> &[Book];
}

/// The in-memory shelf: built once at startup, immutable for the process
/// lifetime. No locking exists anywhere in the request path because
/// nothing is ever mutated after construction.
#[derive(Debug)]
pub struct Shelf {
    books: Vec<Book>,
}

impl Shelf {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// The hardcoded catalog the server ships with.
    pub fn seed() -> Self {
        Self::new(vec![
            Book::new(1, "El problema final", 2023, "Arturo Perez-Reverte"),
            Book::new(2, "Los genios", 2023, "Jaime Bayly"),
            Book::new(3, "Ceniza en la boca", 2022, "Arturo Perez-Reverte"),
        ])
    }
}

impl BookRepository for Shelf {
    fn find_all(&self) -> &[Book] {
        &self.books
    }
}
