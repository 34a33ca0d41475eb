//! The HTTP layer: routing, request/response types, the serve loop.
//!
//! Framework-style plumbing kept deliberately small: a radix-tree router
//! ([`matchit`]), a type-erased async handler trait, and a hyper accept
//! loop with graceful shutdown. Cross-origin policy is applied here, below
//! the router, so every response (including 404s and preflights) carries
//! it. The endpoint handlers themselves live in [`crate::api`].

mod cors;
mod handler;
mod request;
mod response;
mod router;
mod server;

pub use handler::Handler;
pub use request::Request;
pub use response::{IntoResponse, Json, Response};
pub use router::Router;
pub use server::Server;
