//! Domain model: the book entity and the read-only repository seam.

mod book;

pub use book::{Book, BookRepository, Shelf};
