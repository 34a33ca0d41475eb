//! Catalog server entry point.
//!
//! Configuration is the env var `PORT` (default 8080). Run with:
//!   RUST_LOG=info PORT=8080 cargo run --bin libreria-server

use libreria::api;
use libreria::http::Server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_owned());

    Server::bind(&format!("0.0.0.0:{port}"))
        .serve(api::seed_app())
        .await
        .expect("server error");
}
