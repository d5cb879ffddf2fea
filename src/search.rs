// SPDX-License-Identifier: MPL-2.0
//! Quick search over the public site's page index.
//!
//! Queries shorter than [`MIN_QUERY_LEN`] clear the result list; longer
//! queries are debounced for [`DEBOUNCE`] before the (simulated) lookup
//! runs. The corpus is the fixed page list in [`crate::data::site_pages`].

use crate::data::{self, PageEntry};
use std::time::{Duration, Instant};

/// Minimum query length before a search runs (the original required > 2).
pub const MIN_QUERY_LEN: usize = 3;

/// Delay between the last keystroke and the search running.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Filters the page corpus by a case-insensitive title substring match.
#[must_use]
pub fn site_results(query: &str) -> Vec<PageEntry> {
    let query = query.to_lowercase();
    data::site_pages()
        .into_iter()
        .filter(|page| page.title.to_lowercase().contains(&query))
        .collect()
}

/// Debounced quick-search input state.
///
/// `input` tracks the text field; a pending query is armed on each edit and
/// resolved by the periodic tick once the debounce window has passed.
#[derive(Debug, Default)]
pub struct QuickSearch {
    input: String,
    pending_since: Option<Instant>,
    results: Option<Vec<PageEntry>>,
}

impl QuickSearch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an edit to the search field.
    ///
    /// Short queries clear results immediately; longer ones (re)arm the
    /// debounce timer.
    pub fn input_changed(&mut self, value: String, now: Instant) {
        self.input = value;
        if self.input.trim().len() < MIN_QUERY_LEN {
            self.pending_since = None;
            self.results = None;
        } else {
            self.pending_since = Some(now);
        }
    }

    /// Resolves the pending query if the debounce window has elapsed.
    ///
    /// Returns `true` when a search ran on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending_since {
            Some(armed) if now.duration_since(armed) >= DEBOUNCE => {
                self.results = Some(site_results(self.input.trim()));
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a query is armed and waiting for its debounce window.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Current text-field contents.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Resolved results, if a search has run. `None` means no dropdown;
    /// `Some(empty)` renders "No results found".
    #[must_use]
    pub fn results(&self) -> Option<&[PageEntry]> {
        self.results.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_results_filter_by_title_substring() {
        let results = site_results("art");
        // "Street Art Workshop" and "Featured Artists" both contain "art".
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn site_results_are_case_insensitive() {
        assert_eq!(site_results("FESTIVAL").len(), 1);
        assert_eq!(site_results("festival").len(), 1);
    }

    #[test]
    fn unmatched_query_returns_empty() {
        assert!(site_results("zzzz").is_empty());
    }

    #[test]
    fn short_query_clears_results() {
        let now = Instant::now();
        let mut search = QuickSearch::new();

        search.input_changed("art".to_string(), now);
        assert!(search.tick(now + DEBOUNCE));
        assert!(search.results().is_some());

        search.input_changed("ar".to_string(), now + DEBOUNCE * 2);
        assert!(search.results().is_none());
        assert!(!search.is_pending());
    }

    #[test]
    fn query_does_not_run_before_debounce() {
        let now = Instant::now();
        let mut search = QuickSearch::new();

        search.input_changed("sched".to_string(), now);
        assert!(!search.tick(now + DEBOUNCE / 2));
        assert!(search.results().is_none());
        assert!(search.is_pending());
    }

    #[test]
    fn each_edit_rearms_the_debounce() {
        let now = Instant::now();
        let mut search = QuickSearch::new();

        search.input_changed("sch".to_string(), now);
        // A later edit resets the window; the original deadline passes with
        // no search.
        search.input_changed("sche".to_string(), now + Duration::from_millis(200));
        assert!(!search.tick(now + DEBOUNCE));
        assert!(search.tick(now + Duration::from_millis(200) + DEBOUNCE));
        assert_eq!(search.results().map(<[_]>::len), Some(1));
    }

    #[test]
    fn empty_result_set_is_distinct_from_no_search() {
        let now = Instant::now();
        let mut search = QuickSearch::new();

        search.input_changed("xyzzy".to_string(), now);
        assert!(search.tick(now + DEBOUNCE));
        assert_eq!(search.results().map(<[_]>::len), Some(0));

        // Emptying the field hides the dropdown again.
        search.input_changed(String::new(), now + DEBOUNCE);
        assert!(search.results().is_none());
    }
}
