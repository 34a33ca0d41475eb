//! The external JSON schema.
//!
//! Field names here are the wire contract the original frontend depends on:
//! Spanish keys, byte-for-byte (`nombre` = title, `anho` = year, `autor` =
//! author). Internal code uses [`Book`]; conversion is explicit in both
//! directions so renaming one side can never leak into the other.

use serde::{Deserialize, Serialize};

use crate::domain::Book;

/// One book as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: u32,
    pub nombre: String,
    pub anho: i32,
    pub autor: String,
}

impl From<&Book> for BookRecord {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            nombre: book.title.clone(),
            anho: book.year,
            autor: book.author.clone(),
        }
    }
}

impl From<BookRecord> for Book {
    fn from(record: BookRecord) -> Self {
        Self {
            id: record.id,
            title: record.nombre,
            year: record.anho,
            author: record.autor,
        }
    }
}

/// Maps a query result into the array shape both endpoints return.
pub fn to_records(books: &[Book]) -> Vec<BookRecord> {
    books.iter().map(BookRecord::from).collect()
}

/// Maps a decoded response body back into the internal model.
pub fn to_books(records: Vec<BookRecord>) -> Vec<Book> {
    records.into_iter().map(Book::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_keys_are_the_spanish_contract() {
        let book = Book::new(1, "El problema final", 2023, "Arturo Perez-Reverte");
        let json = serde_json::to_string(&BookRecord::from(&book)).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"nombre":"El problema final","anho":2023,"autor":"Arturo Perez-Reverte"}"#
        );
    }

    #[test]
    fn mapping_round_trips_through_the_wire_type() {
        let book = Book::new(2, "Los genios", 2023, "Jaime Bayly");
        let back = Book::from(BookRecord::from(&book));
        assert_eq!(back, book);
    }

    #[test]
    fn decoding_accepts_the_exact_wire_shape() {
        let body = r#"[{"id":2,"nombre":"Los genios","anho":2023,"autor":"Jaime Bayly"}]"#;
        let records: Vec<BookRecord> = serde_json::from_str(body).unwrap();
        let books = to_books(records);
        assert_eq!(books, vec![Book::new(2, "Los genios", 2023, "Jaime Bayly")]);
    }
}
