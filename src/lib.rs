//! # libreria
//!
//! A minimal book catalog. One fixed shelf of books lives in memory for the
//! whole process; two read-only JSON endpoints expose it; a terminal client
//! fetches and renders it with an author filter re-issued as a server
//! request.
//!
//! ## The contract
//!
//! The wire schema keeps the Spanish field names the original frontend
//! depends on (`nombre` = title, `anho` = year, `autor` = author). That
//! schema is a separate serde type in [`wire`]; internal code speaks
//! [`domain::Book`] and the two are connected by explicit mapping, so
//! neither side can silently rename the other.
//!
//! Filtering is exact match on the author field after case folding. An
//! absent or empty filter degrades to "all books"; a filter matching
//! nothing yields an empty array with status 200. Those are the only query
//! semantics the system has.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use libreria::api;
//! use libreria::http::Server;
//!
//! #[tokio::main]
//! async fn main() {
//!     Server::bind("0.0.0.0:8080")
//!         .serve(api::seed_app())
//!         .await
//!         .expect("server error");
//! }
//! ```
//!
//! The client side lives in [`client`]: a pure fetch state machine
//! ([`client::Session`]), the HTTP fetch layer ([`client::CatalogClient`]),
//! and side-effect-free terminal rendering ([`client::view`]).

pub mod api;
pub mod catalog;
pub mod client;
pub mod domain;
pub mod error;
pub mod http;
pub mod wire;

pub use error::Error;
