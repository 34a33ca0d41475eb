//! Unified error type.

use thiserror::Error;

/// The error type returned by libreria's fallible operations.
///
/// Query outcomes are never errors: an empty match is an empty array, an
/// absent filter is "all books". This type surfaces infrastructure
/// failures only: binding a port, a dead connection, a fetch that came
/// back non-2xx or with a body that does not parse.
#[derive(Debug, Error)]
pub enum Error {
    /// Binding or accepting on the listen socket failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// The server was unreachable or the connection died mid-request.
    #[error("fetch: {0}")]
    Fetch(#[from] hyper_util::client::legacy::Error),

    /// The transport failed while streaming the response body.
    #[error("transport: {0}")]
    Transport(#[from] hyper::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The response body was not the expected JSON array of books.
    #[error("malformed response body: {0}")]
    Body(#[from] serde_json::Error),

    /// A request URI could not be built from the configured base URL.
    #[error("invalid url: {0}")]
    Url(#[from] http::uri::InvalidUri),
}
