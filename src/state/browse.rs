//! Browse state: the selected card, its similar cards and the active filter.

use crate::catalog::{Card, CardFilter};
use crate::completion::Selection;

/// What the main window currently lists.
#[derive(Debug, Default)]
pub struct BrowseState {
    selection: Option<Selection>,
    results: Vec<Card>,
    filter: CardFilter,
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts over for a newly activated card; filters go back to "All".
    pub fn select(&mut self, selection: Selection, results: Vec<Card>) {
        self.selection = Some(selection);
        self.results = results;
        self.filter = CardFilter::default();
    }

    /// Replaces the results after a dropdown change.
    pub fn apply_filter(&mut self, filter: CardFilter, results: Vec<Card>) {
        self.filter = filter;
        self.results = results;
    }

    pub fn clear_results(&mut self) {
        self.results.clear();
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn result(&self, index: usize) -> Option<&Card> {
        self.results.get(index)
    }

    pub fn filter(&self) -> &CardFilter {
        &self.filter
    }
}
