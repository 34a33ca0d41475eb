//! HTTP fetch layer.
//!
//! A thin wrapper over the hyper legacy client pool. Every failure mode
//! (unreachable server, non-2xx status, undecodable body) reduces to
//! [`Error`], which the view renders as a single banner message. No retry
//! is attempted; the user triggers the next fetch.

use bytes::Bytes;
use http::Uri;
use http_body_util::{BodyExt, Empty};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use tracing::debug;

use crate::domain::Book;
use crate::error::Error;
use crate::wire::{self, BookRecord};

/// Client for the two catalog endpoints.
pub struct CatalogClient {
    base: String,
    http: Client<HttpConnector, Empty<Bytes>>,
}

impl CatalogClient {
    /// `base` is the server origin, e.g. `http://localhost:8080`.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_owned(),
            http: Client::builder(TokioExecutor::new()).build_http(),
        }
    }

    /// `GET /api/books`: the whole catalog.
    pub async fn list_all(&self) -> Result<Vec<Book>, Error> {
        self.fetch(format!("{}/api/books", self.base)).await
    }

    /// `GET /api/books/filter?autor=…`: books by one author.
    ///
    /// An empty author falls back to the unfiltered endpoint, mirroring
    /// the server's own degradation for an absent parameter.
    pub async fn list_by_author(&self, author: &str) -> Result<Vec<Book>, Error> {
        if author.is_empty() {
            return self.list_all().await;
        }
        let url = format!(
            "{}/api/books/filter?autor={}",
            self.base,
            encode_component(author)
        );
        self.fetch(url).await
    }

    async fn fetch(&self, url: String) -> Result<Vec<Book>, Error> {
        debug!(url = %url, "fetch");
        let uri: Uri = url.parse()?;
        let resp = self.http.get(uri).await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }
        let body = resp.into_body().collect().await?.to_bytes();
        let records: Vec<BookRecord> = serde_json::from_slice(&body)?;
        Ok(wire::to_books(records))
    }
}

// ── Percent-encoding ─────────────────────────────────────────────────────────

/// Encodes a query-string component. Unreserved characters pass through;
/// every other byte becomes `%XX`. Spaces encode as `%20`, not `+`, so the
/// value survives servers that do not treat `+` specially.
pub(crate) fn encode_component(raw: &str) -> String {
    use std::fmt::Write as _;

    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_encode_as_percent_20() {
        assert_eq!(encode_component("Jaime Bayly"), "Jaime%20Bayly");
    }

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(encode_component("Perez-Reverte_99.x~"), "Perez-Reverte_99.x~");
    }

    #[test]
    fn non_ascii_encodes_per_utf8_byte() {
        assert_eq!(encode_component("año"), "a%C3%B1o");
    }
}
