//! The client side: fetch state machine, HTTP fetch layer, and rendering.
//!
//! Split the way the view logic wants to be tested:
//!
//! - [`state`] owns the three-state machine (loading, failed, ready) as
//!   pure transitions over a [`Session`]; no I/O anywhere.
//! - [`fetch`] issues the actual HTTP requests and reduces every failure
//!   to [`Error`](crate::Error).
//! - [`view`] turns a session into a printable screen, side-effect free.
//!
//! The interactive loop in the `libreria-client` binary is the only place
//! the three meet.

pub mod fetch;
pub mod state;
pub mod view;

pub use fetch::CatalogClient;
pub use state::{Event, FetchKind, Session, ViewState};
