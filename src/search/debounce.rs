use crate::error::SearchError;
use crate::models::item::Item;
use gloo_timers::callback::Timeout;
use leptos::logging::{error, log};

/// Holds at most one pending callback. Scheduling a new one drops the
/// previous `Timeout`, which cancels it.
pub struct Debouncer {
    delay_ms: u32,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn schedule<F>(&mut self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.pending = Some(Timeout::new(self.delay_ms, callback));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Dropdown contents after a response has been accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct SettledSearch {
    pub results: Vec<Item>,
    pub show_dropdown: bool,
}

/// Tags outgoing searches so that only the newest response is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }

    /// Invalidates every ticket issued so far, e.g. when the results are
    /// cleared without a request.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    /// Decides what a response for `ticket` does to the dropdown. `None`
    /// means a newer request or a clear overtook it and it must be dropped.
    /// A failed request empties the results.
    pub fn settle(&self, ticket: u64, response: Result<Vec<Item>, SearchError>) -> Option<SettledSearch> {
        if !self.is_current(ticket) {
            log!("[SEARCH] Discarding stale response #{}", ticket);
            return None;
        }
        let results = response.unwrap_or_else(|err| {
            error!("[SEARCH] Erro na requisição da API: {}", err);
            Vec::new()
        });
        Some(SettledSearch {
            show_dropdown: !results.is_empty(),
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::{ItemDetails, ItemKind};

    #[test]
    fn only_latest_ticket_is_current() {
        let mut sequencer = RequestSequencer::default();
        let first = sequencer.issue();
        let second = sequencer.issue();
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn invalidate_retires_outstanding_ticket() {
        let mut sequencer = RequestSequencer::default();
        let ticket = sequencer.issue();
        sequencer.invalidate();
        assert!(!sequencer.is_current(ticket));
    }

    fn book(id: &str) -> Item {
        Item {
            id: id.to_string(),
            title: format!("Livro {}", id),
            img: String::new(),
            kind: ItemKind::Book,
            details: ItemDetails::default(),
            similar_items: Vec::new(),
            popular: false,
        }
    }

    #[test]
    fn current_response_fills_dropdown() {
        let mut sequencer = RequestSequencer::default();
        let ticket = sequencer.issue();
        let settled = sequencer.settle(ticket, Ok(vec![book("gb-1"), book("gb-2")])).unwrap();
        assert_eq!(settled.results.len(), 2);
        assert!(settled.show_dropdown);
    }

    #[test]
    fn empty_response_hides_dropdown() {
        let mut sequencer = RequestSequencer::default();
        let ticket = sequencer.issue();
        assert_eq!(
            sequencer.settle(ticket, Ok(Vec::new())),
            Some(SettledSearch {
                results: Vec::new(),
                show_dropdown: false
            })
        );
    }

    #[test]
    fn failed_request_clears_results() {
        let mut sequencer = RequestSequencer::default();
        let ticket = sequencer.issue();
        let settled = sequencer
            .settle(ticket, Err(SearchError::Transport("offline".into())))
            .unwrap();
        assert!(settled.results.is_empty());
        assert!(!settled.show_dropdown);
    }

    #[test]
    fn slow_response_of_older_request_is_dropped() {
        let mut sequencer = RequestSequencer::default();
        let first = sequencer.issue();
        let second = sequencer.issue();
        // The second request answers first, then the first one arrives late.
        assert!(sequencer.settle(second, Ok(vec![book("gb-2")])).is_some());
        assert_eq!(sequencer.settle(first, Ok(vec![book("gb-1")])), None);
    }

    #[test]
    fn response_after_clear_is_dropped() {
        let mut sequencer = RequestSequencer::default();
        let ticket = sequencer.issue();
        sequencer.invalidate();
        assert_eq!(sequencer.settle(ticket, Ok(vec![book("gb-1")])), None);
        assert_eq!(
            sequencer.settle(ticket, Err(SearchError::Transport("offline".into()))),
            None
        );
    }
}
