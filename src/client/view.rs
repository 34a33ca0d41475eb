//! Terminal rendering of a session.
//!
//! Pure string construction. The interactive loop in the client binary
//! decides when to print, which keeps every state displayable in a unit
//! test without a terminal.

use crate::client::state::{Session, ViewState};

/// Renders the whole screen for the current state.
///
/// The three states are mutually exclusive: a loading line, an error
/// banner, or the author menu plus the book cards. An empty displayed
/// subset renders the empty-state line instead of cards.
pub fn render(session: &Session) -> String {
    match session.state() {
        ViewState::Loading => "Cargando...\n".to_owned(),
        ViewState::Failed(message) => format!("[error] {message}\n"),
        ViewState::Ready { full: _, shown } => {
            let mut out = String::new();
            out.push_str("Catálogo de Libros\n");
            out.push_str("==================\n\n");
            out.push_str("Filtrar por autor:\n");
            out.push_str("  0) Todos los autores\n");
            for (i, author) in session.authors().iter().enumerate() {
                out.push_str(&format!("  {}) {author}\n", i + 1));
            }
            out.push('\n');
            if shown.is_empty() {
                out.push_str("No se encontraron libros para este autor.\n");
            } else {
                for book in shown {
                    out.push_str(&format!("{}\n", book.title));
                    out.push_str(&format!("  Autor: {}\n", book.author));
                    out.push_str(&format!("  Año: {}\n", book.year));
                }
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::state::{Event, FetchKind};
    use crate::domain::{BookRepository, Shelf};

    fn ready_session() -> Session {
        let mut session = Session::new();
        let seq = session.begin();
        session.apply(Event::Succeeded {
            seq,
            kind: FetchKind::Initial,
            books: Shelf::seed().find_all().to_vec(),
        });
        session
    }

    #[test]
    fn loading_renders_only_the_spinner_line() {
        assert_eq!(render(&Session::new()), "Cargando...\n");
    }

    #[test]
    fn failure_renders_only_the_banner() {
        let mut session = Session::new();
        let seq = session.begin();
        session.apply(Event::Failed { seq, message: "Error al cargar los libros".into() });
        assert_eq!(render(&session), "[error] Error al cargar los libros\n");
    }

    #[test]
    fn ready_renders_menu_and_cards() {
        let screen = render(&ready_session());
        assert!(screen.contains("0) Todos los autores"));
        assert!(screen.contains("1) Arturo Perez-Reverte"));
        assert!(screen.contains("2) Jaime Bayly"));
        assert!(screen.contains("Los genios"));
        assert!(screen.contains("Año: 2023"));
    }

    #[test]
    fn empty_subset_renders_the_empty_state_line() {
        let mut session = ready_session();
        let seq = session.begin();
        session.apply(Event::Succeeded { seq, kind: FetchKind::Filter, books: vec![] });
        let screen = render(&session);
        assert!(screen.contains("No se encontraron libros para este autor."));
        assert!(!screen.contains("Los genios"));
        // The menu still derives from the full dataset.
        assert!(screen.contains("2) Jaime Bayly"));
    }
}
