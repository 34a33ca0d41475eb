//! The two read-only endpoints.
//!
//! | Route | Answer |
//! |---|---|
//! | `GET /api/books` | the whole catalog |
//! | `GET /api/books/filter?autor=…` | books by one author; absent param means all |
//!
//! Both always answer `200` with a JSON array in the wire schema. An
//! unmatched filter is an empty array, not an error.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::domain::{BookRepository, Shelf};
use crate::http::{Json, Request, Router};
use crate::wire;

/// Builds the application router over `catalog`.
///
/// The catalog is shared by the two handlers through an `Arc`; it is
/// read-only, so no further synchronisation exists.
pub fn app<R: BookRepository + 'static>(catalog: Catalog<R>) -> Router {
    let catalog = Arc::new(catalog);

    let all = {
        let catalog = Arc::clone(&catalog);
        move |_req: Request| {
            let catalog = Arc::clone(&catalog);
            async move { Json(wire::to_records(&catalog.list_all())) }
        }
    };

    let by_author = {
        let catalog = Arc::clone(&catalog);
        move |req: Request| {
            let catalog = Arc::clone(&catalog);
            async move {
                let books = catalog.list_by_author(req.query("autor"));
                Json(wire::to_records(&books))
            }
        }
    };

    Router::new()
        .get("/api/books", all)
        .get("/api/books/filter", by_author)
}

/// The production router: the fixed seed shelf behind the two routes.
pub fn seed_app() -> Router {
    app(Catalog::new(Shelf::seed()))
}
