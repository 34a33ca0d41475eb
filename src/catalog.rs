//! The query service: every read the API can answer.

use crate::domain::{Book, BookRepository};

/// Answers "all books" and "books by author" against a repository.
///
/// Stateless beyond the repository handle. Every method is a pure function
/// of the store contents and its arguments: no side effects, no mutation,
/// identical results for identical inputs.
pub struct Catalog<R> {
    repo: R,
}

impl<R: BookRepository> Catalog<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Every book, in storage order.
    pub fn list_all(&self) -> Vec<Book> {
        self.repo.find_all().to_vec()
    }

    /// Books whose author equals `query` after case folding.
    ///
    /// An absent or empty query behaves exactly like
    /// [`list_all`](Self::list_all). The comparison is exact match after
    /// `to_lowercase`, never substring. Zero matches is an empty vec, not
    /// an error.
    pub fn list_by_author(&self, query: Option<&str>) -> Vec<Book> {
        let Some(query) = query.filter(|q| !q.is_empty()) else {
            return self.list_all();
        };
        let wanted = query.to_lowercase();
        self.repo
            .find_all()
            .iter()
            .filter(|book| book.author.to_lowercase() == wanted)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Shelf;

    fn catalog() -> Catalog<Shelf> {
        Catalog::new(Shelf::seed())
    }

    #[test]
    fn list_all_returns_everything_in_seed_order() {
        let books = catalog().list_all();
        let ids: Vec<u32> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn absent_and_empty_queries_degrade_to_list_all() {
        let catalog = catalog();
        assert_eq!(catalog.list_by_author(None), catalog.list_all());
        assert_eq!(catalog.list_by_author(Some("")), catalog.list_all());
    }

    #[test]
    fn filter_is_exact_match_after_case_folding() {
        let catalog = catalog();
        let books = catalog.list_by_author(Some("jaime bayly"));
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 2);
        assert_eq!(books, catalog.list_by_author(Some("Jaime Bayly")));
        // Substrings do not match.
        assert!(catalog.list_by_author(Some("Jaime")).is_empty());
    }

    #[test]
    fn filter_returns_exactly_the_matching_subset() {
        let catalog = catalog();
        let matched = catalog.list_by_author(Some("ARTURO PEREZ-REVERTE"));
        let expected: Vec<_> = catalog
            .list_all()
            .into_iter()
            .filter(|b| b.author.eq_ignore_ascii_case("Arturo Perez-Reverte"))
            .collect();
        assert_eq!(matched, expected);
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn no_match_is_an_empty_vec_not_an_error() {
        assert!(catalog().list_by_author(Some("Unknown Author")).is_empty());
    }

    #[test]
    fn queries_are_idempotent() {
        let catalog = catalog();
        let first = catalog.list_by_author(Some("Jaime Bayly"));
        let second = catalog.list_by_author(Some("Jaime Bayly"));
        assert_eq!(first, second);
    }
}
