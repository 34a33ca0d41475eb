//! The fetch state machine.
//!
//! The view is always in exactly one of three states and every transition
//! is a pure function of the session and an event. Responses carry the
//! sequence number of the fetch that produced them; an outcome older than
//! the newest one already applied is discarded, so a slow initial load can
//! never clobber the fast filter that superseded it.

use crate::domain::Book;

/// What a fetch was for.
///
/// Only the initial load may establish the full dataset the author menu is
/// derived from; a filter fetch (including one that clears the filter back
/// to "all") only ever replaces the displayed subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Initial,
    Filter,
}

/// The three mutually exclusive things the view can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// A fetch is in flight. Replaces the listing entirely.
    Loading,
    /// The last applied fetch failed. A fresh failure clears prior data
    /// from display; only the banner remains.
    Failed(String),
    /// Data on screen.
    Ready {
        /// Full dataset, for the author menu. Never derived from a
        /// filtered response.
        full: Vec<Book>,
        /// The subset currently displayed.
        shown: Vec<Book>,
    },
}

/// Outcome of a fetch, tagged with the sequence number
/// [`Session::begin`] handed out when it started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Succeeded { seq: u64, kind: FetchKind, books: Vec<Book> },
    Failed { seq: u64, message: String },
}

impl Event {
    fn seq(&self) -> u64 {
        match self {
            Self::Succeeded { seq, .. } | Self::Failed { seq, .. } => *seq,
        }
    }
}

/// Owns the view state plus what must survive transitions: the full
/// dataset and the fetch sequence counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    state: ViewState,
    full: Option<Vec<Book>>,
    next_seq: u64,
    applied_seq: u64,
}

impl Session {
    /// A fresh session: loading, nothing fetched yet.
    pub fn new() -> Self {
        Self { state: ViewState::Loading, full: None, next_seq: 0, applied_seq: 0 }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Distinct authors of the full dataset, in order of first appearance.
    /// Empty until an initial fetch has succeeded.
    pub fn authors(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for book in self.full.iter().flatten() {
            if !seen.contains(&book.author.as_str()) {
                seen.push(&book.author);
            }
        }
        seen
    }

    /// Marks the start of a fetch: enters `Loading` and returns the
    /// sequence number to tag the eventual [`Event`] with.
    pub fn begin(&mut self) -> u64 {
        self.next_seq += 1;
        self.state = ViewState::Loading;
        self.next_seq
    }

    /// Applies a fetch outcome.
    ///
    /// Stale events, with a sequence at or below the newest already
    /// applied, leave the session untouched. That is the whole fix for the
    /// out-of-order race: the last fetch *started* wins, not the last
    /// response to arrive.
    pub fn apply(&mut self, event: Event) {
        if event.seq() <= self.applied_seq {
            return;
        }
        self.applied_seq = event.seq();

        match event {
            Event::Succeeded { kind, books, .. } => {
                if kind == FetchKind::Initial {
                    self.full = Some(books.clone());
                }
                self.state = ViewState::Ready {
                    full: self.full.clone().unwrap_or_default(),
                    shown: books,
                };
            }
            Event::Failed { message, .. } => {
                self.state = ViewState::Failed(message);
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookRepository, Shelf};

    fn seed() -> Vec<Book> {
        Shelf::seed().find_all().to_vec()
    }

    #[test]
    fn starts_loading_with_no_authors() {
        let session = Session::new();
        assert_eq!(*session.state(), ViewState::Loading);
        assert!(session.authors().is_empty());
    }

    #[test]
    fn initial_success_establishes_full_and_shown() {
        let mut session = Session::new();
        let seq = session.begin();
        session.apply(Event::Succeeded { seq, kind: FetchKind::Initial, books: seed() });
        assert_eq!(
            *session.state(),
            ViewState::Ready { full: seed(), shown: seed() }
        );
        assert_eq!(session.authors(), vec!["Arturo Perez-Reverte", "Jaime Bayly"]);
    }

    #[test]
    fn filter_success_keeps_the_full_dataset() {
        let mut session = Session::new();
        let seq = session.begin();
        session.apply(Event::Succeeded { seq, kind: FetchKind::Initial, books: seed() });

        let only_bayly = vec![seed()[1].clone()];
        let seq = session.begin();
        assert_eq!(*session.state(), ViewState::Loading);
        session.apply(Event::Succeeded { seq, kind: FetchKind::Filter, books: only_bayly.clone() });

        assert_eq!(
            *session.state(),
            ViewState::Ready { full: seed(), shown: only_bayly }
        );
        // The menu still lists both authors.
        assert_eq!(session.authors().len(), 2);
    }

    #[test]
    fn failure_clears_prior_data_from_display() {
        let mut session = Session::new();
        let seq = session.begin();
        session.apply(Event::Succeeded { seq, kind: FetchKind::Initial, books: seed() });

        let seq = session.begin();
        session.apply(Event::Failed { seq, message: "Error al filtrar los libros".into() });
        assert_eq!(
            *session.state(),
            ViewState::Failed("Error al filtrar los libros".into())
        );
        // The full dataset survives in the session for the next retry.
        assert_eq!(session.authors().len(), 2);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut session = Session::new();
        let slow = session.begin();
        let fast = session.begin();

        let only_bayly = vec![seed()[1].clone()];
        session.apply(Event::Succeeded { seq: fast, kind: FetchKind::Filter, books: only_bayly.clone() });
        let after_fast = session.clone();

        // The superseded fetch resolves late; nothing changes.
        session.apply(Event::Succeeded { seq: slow, kind: FetchKind::Initial, books: seed() });
        assert_eq!(session, after_fast);

        // A stale failure is ignored the same way.
        session.apply(Event::Failed { seq: slow, message: "late".into() });
        assert_eq!(session, after_fast);
    }

    #[test]
    fn empty_filter_result_is_ready_not_failed() {
        let mut session = Session::new();
        let seq = session.begin();
        session.apply(Event::Succeeded { seq, kind: FetchKind::Initial, books: seed() });
        let seq = session.begin();
        session.apply(Event::Succeeded { seq, kind: FetchKind::Filter, books: vec![] });
        assert_eq!(
            *session.state(),
            ViewState::Ready { full: seed(), shown: vec![] }
        );
    }
}
