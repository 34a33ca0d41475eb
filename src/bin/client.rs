//! Interactive terminal client.
//!
//! Fetches the catalog once at startup to populate the author menu, then
//! loops: render, read a menu selection from stdin, re-fetch with the
//! chosen filter. The server origin comes from the env var `LIBRERIA_URL`
//! (default `http://localhost:8080`).

use libreria::client::{CatalogClient, Event, FetchKind, Session, view};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let base =
        std::env::var("LIBRERIA_URL").unwrap_or_else(|_| "http://localhost:8080".to_owned());
    let client = CatalogClient::new(base);
    let mut session = Session::new();

    // Mount: one unfiltered fetch establishes the author menu. The full
    // dataset is never refreshed from a filtered response afterwards.
    let seq = session.begin();
    print!("{}", view::render(&session));
    let event = match client.list_all().await {
        Ok(books) => Event::Succeeded { seq, kind: FetchKind::Initial, books },
        Err(e) => Event::Failed { seq, message: format!("Error al cargar los libros: {e}") },
    };
    session.apply(event);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", view::render(&session));
        println!("\nNúmero de autor (0 = todos, q = salir):");

        let Ok(Some(line)) = lines.next_line().await else {
            break;
        };
        let choice = line.trim();
        if choice.eq_ignore_ascii_case("q") {
            break;
        }

        let authors: Vec<String> =
            session.authors().iter().map(|a| (*a).to_owned()).collect();
        let filter = match choice.parse::<usize>() {
            Ok(0) => None,
            Ok(n) if n <= authors.len() => Some(authors[n - 1].clone()),
            _ => {
                println!("Selección inválida.");
                continue;
            }
        };

        let seq = session.begin();
        let result = match &filter {
            Some(author) => client.list_by_author(author).await,
            None => client.list_all().await,
        };
        let event = match result {
            Ok(books) => Event::Succeeded { seq, kind: FetchKind::Filter, books },
            Err(e) => Event::Failed { seq, message: format!("Error al filtrar los libros: {e}") },
        };
        session.apply(event);
    }
}
