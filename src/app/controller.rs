//! Query controller
//!
//! Turns user actions into the rows that should be on screen. An `Err` is an
//! alert for the user; the state is left untouched and nothing is re-rendered.

use crate::app::state::{AppState, SortMode};
use crate::data::CoinSnapshot;
use thiserror::Error;

/// User-facing refusals. The `Display` text is what the alert shows.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    #[error("Please write something to search.")]
    EmptyQuery,

    #[error("Already sorted by {0}.")]
    AlreadySorted(SortMode),
}

#[derive(Debug, Default)]
pub struct QueryController {
    state: AppState,
}

impl QueryController {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    pub fn sort_mode(&self) -> SortMode {
        self.state.sort_mode
    }

    pub fn snapshots(&self) -> &[CoinSnapshot] {
        &self.state.snapshots
    }

    /// Installs a freshly fetched sequence and returns it for display
    pub fn load(&mut self, snapshots: Vec<CoinSnapshot>) -> Vec<CoinSnapshot> {
        self.state.replace(snapshots);
        self.state.snapshots.clone()
    }

    /// Filters the canonical sequence, never the displayed view.
    pub fn search(&mut self, query: &str) -> Result<Vec<CoinSnapshot>, QueryError> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Err(QueryError::EmptyQuery);
        }

        let filtered = self
            .state
            .snapshots
            .iter()
            .filter(|coin| coin.matches(&query))
            .cloned()
            .collect();

        self.state.sort_mode = SortMode::None;
        Ok(filtered)
    }

    /// Called on every edit of the search input. Only an input that trims to
    /// empty resets the view; anything else is ignored.
    pub fn clear_input(&mut self, value: &str) -> Option<Vec<CoinSnapshot>> {
        if !value.trim().is_empty() {
            return None;
        }

        self.state.sort_mode = SortMode::None;
        Some(self.state.snapshots.clone())
    }

    pub fn sort_by_market_cap(&mut self) -> Result<Vec<CoinSnapshot>, QueryError> {
        self.sort_by(SortMode::MarketCap, |coin| coin.market_cap)
    }

    pub fn sort_by_percent_change(&mut self) -> Result<Vec<CoinSnapshot>, QueryError> {
        self.sort_by(SortMode::PercentChange, |coin| coin.price_change_percentage_24h)
    }

    fn sort_by(
        &mut self,
        mode: SortMode,
        key: impl Fn(&CoinSnapshot) -> f64,
    ) -> Result<Vec<CoinSnapshot>, QueryError> {
        if self.state.sort_mode == mode {
            return Err(QueryError::AlreadySorted(mode));
        }

        // sort_by is stable; ties keep API order
        let mut sorted = self.state.snapshots.clone();
        sorted.sort_by(|a, b| key(b).total_cmp(&key(a)));

        self.state.sort_mode = mode;
        Ok(sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::snapshot;

    fn names(rows: &[CoinSnapshot]) -> Vec<&str> {
        rows.iter().map(|c| c.name.as_str()).collect()
    }

    fn loaded(snapshots: Vec<CoinSnapshot>) -> QueryController {
        let mut controller = QueryController::new();
        controller.load(snapshots);
        controller
    }

    fn bitcoin_and_ether() -> QueryController {
        loaded(vec![
            snapshot("Bitcoin", "btc", 500.0, -2.0),
            snapshot("Ether", "eth", 300.0, 4.0),
        ])
    }

    #[test]
    fn load_returns_api_order_and_resets_sort() {
        let mut controller = bitcoin_and_ether();
        controller.sort_by_percent_change().unwrap();

        let rows = controller.load(vec![
            snapshot("Solana", "sol", 10.0, 0.0),
            snapshot("Bitcoin", "btc", 500.0, 0.0),
        ]);

        assert_eq!(names(&rows), ["Solana", "Bitcoin"]);
        assert_eq!(controller.sort_mode(), SortMode::None);
    }

    #[test]
    fn sort_by_market_cap_then_again_is_refused() {
        let mut controller = bitcoin_and_ether();

        let rows = controller.sort_by_market_cap().unwrap();
        assert_eq!(names(&rows), ["Bitcoin", "Ether"]);
        assert_eq!(controller.sort_mode(), SortMode::MarketCap);

        let err = controller.sort_by_market_cap().unwrap_err();
        assert_eq!(err, QueryError::AlreadySorted(SortMode::MarketCap));
        assert_eq!(err.to_string(), "Already sorted by Market Cap.");
        assert_eq!(controller.sort_mode(), SortMode::MarketCap);
    }

    #[test]
    fn sort_by_percent_change_is_descending_and_refused_twice() {
        let mut controller = bitcoin_and_ether();

        let rows = controller.sort_by_percent_change().unwrap();
        assert_eq!(names(&rows), ["Ether", "Bitcoin"]);

        let err = controller.sort_by_percent_change().unwrap_err();
        assert_eq!(err.to_string(), "Already sorted by % Change.");
    }

    #[test]
    fn sorting_never_reorders_canonical_sequence() {
        let mut controller = bitcoin_and_ether();
        controller.sort_by_percent_change().unwrap();

        assert_eq!(names(controller.snapshots()), ["Bitcoin", "Ether"]);
    }

    #[test]
    fn switching_between_sorts_is_allowed() {
        let mut controller = bitcoin_and_ether();
        assert!(controller.sort_by_market_cap().is_ok());
        assert!(controller.sort_by_percent_change().is_ok());
        assert!(controller.sort_by_market_cap().is_ok());
    }

    #[test]
    fn sort_of_already_descending_sequence_keeps_order() {
        let mut controller = loaded(vec![
            snapshot("A", "a", 30.0, 0.0),
            snapshot("B", "b", 20.0, 0.0),
            snapshot("C", "c", 10.0, 0.0),
        ]);

        let rows = controller.sort_by_market_cap().unwrap();
        assert_eq!(names(&rows), ["A", "B", "C"]);
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let mut controller = loaded(vec![
            snapshot("First", "f", 10.0, 1.0),
            snapshot("Big", "b", 99.0, 1.0),
            snapshot("Second", "s", 10.0, 1.0),
        ]);

        let rows = controller.sort_by_market_cap().unwrap();
        assert_eq!(names(&rows), ["Big", "First", "Second"]);
    }

    #[test]
    fn nan_sorts_without_panicking() {
        let mut snapshots: Vec<_> = (0..40)
            .map(|i| {
                let change = if i % 3 == 0 { f64::NAN } else { i as f64 };
                snapshot(&format!("Coin{i}"), "c", 1.0, change)
            })
            .collect();
        snapshots.push(snapshot("Top", "t", 1.0, 100.0));
        let mut controller = loaded(snapshots);

        let rows = controller.sort_by_percent_change().unwrap();

        assert_eq!(rows.len(), 41);
        let finite: Vec<f64> = rows
            .iter()
            .map(|c| c.price_change_percentage_24h)
            .filter(|c| !c.is_nan())
            .collect();
        assert_eq!(finite[0], 100.0);
        assert!(finite.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn search_matches_symbol_substring() {
        let mut controller = bitcoin_and_ether();

        let rows = controller.search("bt").unwrap();
        assert_eq!(names(&rows), ["Bitcoin"]);
    }

    #[test]
    fn search_trims_and_ignores_case() {
        let mut controller = bitcoin_and_ether();

        let rows = controller.search("  ETHER ").unwrap();
        assert_eq!(names(&rows), ["Ether"]);
    }

    #[test]
    fn search_without_match_yields_no_rows() {
        let mut controller = bitcoin_and_ether();
        assert!(controller.search("doge").unwrap().is_empty());
    }

    #[test]
    fn whitespace_query_is_refused_without_state_change() {
        let mut controller = bitcoin_and_ether();
        controller.sort_by_market_cap().unwrap();

        let err = controller.search("   ").unwrap_err();

        assert_eq!(err, QueryError::EmptyQuery);
        assert_eq!(err.to_string(), "Please write something to search.");
        assert_eq!(controller.sort_mode(), SortMode::MarketCap);
    }

    #[test]
    fn search_resets_sort_so_the_same_sort_is_allowed_again() {
        let mut controller = bitcoin_and_ether();
        controller.sort_by_market_cap().unwrap();

        controller.search("e").unwrap();
        assert_eq!(controller.sort_mode(), SortMode::None);
        assert!(controller.sort_by_market_cap().is_ok());
    }

    #[test]
    fn search_after_sort_filters_unsorted_data() {
        let mut controller = bitcoin_and_ether();
        controller.sort_by_percent_change().unwrap();

        let rows = controller.search("t").unwrap();
        assert_eq!(names(&rows), ["Bitcoin", "Ether"]);
    }

    #[test]
    fn clearing_input_restores_full_unsorted_list() {
        let mut controller = bitcoin_and_ether();
        controller.sort_by_percent_change().unwrap();
        controller.search("bt").unwrap();

        let rows = controller.clear_input("").unwrap();

        assert_eq!(names(&rows), ["Bitcoin", "Ether"]);
        assert_eq!(controller.sort_mode(), SortMode::None);
    }

    #[test]
    fn clear_input_ignores_non_empty_values() {
        let mut controller = bitcoin_and_ether();
        controller.sort_by_market_cap().unwrap();

        assert!(controller.clear_input("bt").is_none());
        assert_eq!(controller.sort_mode(), SortMode::MarketCap);
        assert!(controller.clear_input("  ").is_some());
    }
}
