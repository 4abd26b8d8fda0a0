use crate::config::ICON_GLYPH;
use crate::data::CoinSnapshot;
use crate::ui::format::{format_percent, format_usd};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeTint {
    Positive,
    Negative,
}

impl ChangeTint {
    /// Zero counts as positive.
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            ChangeTint::Positive
        } else {
            ChangeTint::Negative
        }
    }
}

/// Position of the 24h change cell in `CoinRow::cells`.
pub const CHANGE_COLUMN: usize = 4;

/// Display-ready cells for one coin.
#[derive(Clone, Debug, PartialEq)]
pub struct CoinRow {
    pub id: String,
    pub image: String,
    pub icon: String,
    pub name: String,
    pub symbol: String,
    pub price: String,
    pub change: String,
    pub tint: ChangeTint,
    pub volume: String,
    pub market_cap: String,
}

impl CoinRow {
    pub fn new(coin: &CoinSnapshot) -> Self {
        Self {
            id: coin.id.clone(),
            image: coin.image.clone(),
            icon: ICON_GLYPH.to_string(),
            name: coin.name.clone(),
            symbol: coin.symbol.to_uppercase(),
            price: format_usd(coin.current_price),
            change: format_percent(coin.price_change_percentage_24h),
            tint: ChangeTint::of(coin.price_change_percentage_24h),
            volume: format_usd(coin.total_volume),
            market_cap: format_usd(coin.market_cap),
        }
    }

    pub fn cells(&self) -> [&str; 7] {
        [
            &self.icon,
            &self.name,
            &self.symbol,
            &self.price,
            &self.change,
            &self.volume,
            &self.market_cap,
        ]
    }
}

/// The rows currently on screen. Knows nothing about sorting or searching;
/// it shows exactly what it was last given.
#[derive(Debug, Default)]
pub struct CoinTable {
    rows: Vec<CoinRow>,
}

impl CoinTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, coins: &[CoinSnapshot]) {
        self.rows.clear();
        self.rows.extend(coins.iter().map(CoinRow::new));
    }

    pub fn rows(&self) -> &[CoinRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
