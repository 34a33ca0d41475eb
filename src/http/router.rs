//! Radix-tree request router.
//!
//! One tree per HTTP method, O(path-length) lookup via [`matchit`]. You
//! register a path, you get a handler. That is all.

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use matchit::Router as MatchitRouter;

use crate::http::handler::{BoxedHandler, Handler};

/// The application router.
///
/// Build it once at startup and hand it to
/// [`Server::serve`](crate::http::Server::serve). Each registration returns
/// `self` so routes chain naturally:
///
/// ```rust,no_run
/// # use libreria::http::{Request, Response, Router};
/// # async fn list_books(_: Request) -> Response { Response::text("") }
/// # async fn filter_books(_: Request) -> Response { Response::text("") }
/// let app = Router::new()
///     .get("/api/books", list_books)
///     .get("/api/books/filter", filter_books);
/// ```
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Registers a `GET` handler.
    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::GET, path, handler)
    }

    /// Registers a handler for an arbitrary method + path pair.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves
    /// them.
    ///
    /// # Panics
    ///
    /// Panics on a malformed or conflicting route pattern. Routes are
    /// registered once at startup, so this fails fast rather than at
    /// request time.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{Request, Response};

    async fn ok(_req: Request) -> Response {
        Response::text("ok")
    }

    #[test]
    fn lookup_matches_registered_method_and_path() {
        let router = Router::new().get("/api/books", ok);
        assert!(router.lookup(&Method::GET, "/api/books").is_some());
        assert!(router.lookup(&Method::GET, "/api/none").is_none());
        assert!(router.lookup(&Method::POST, "/api/books").is_none());
    }

    #[test]
    fn lookup_extracts_path_params() {
        let router = Router::new().get("/books/{id}", ok);
        let (_, params) = router.lookup(&Method::GET, "/books/2").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("2"));
    }
}
