//! Application state
//!
//! The canonical snapshot sequence plus the sort marker. Sorted and filtered
//! views are always derived copies; `snapshots` keeps API order.

use crate::data::CoinSnapshot;
use std::fmt;

/// Which sort, if any, produced the rows on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    None,
    MarketCap,
    PercentChange,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::None => write!(f, "API order"),
            SortMode::MarketCap => write!(f, "Market Cap"),
            SortMode::PercentChange => write!(f, "% Change"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub snapshots: Vec<CoinSnapshot>,
    pub sort_mode: SortMode,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the canonical sequence wholesale and drops any sort marker
    pub fn replace(&mut self, snapshots: Vec<CoinSnapshot>) {
        self.snapshots = snapshots;
        self.sort_mode = SortMode::None;
    }
}
