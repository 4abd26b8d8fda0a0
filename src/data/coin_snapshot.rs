use serde::{Deserialize, Deserializer};

/// One row of `/coins/markets`, as returned by the API.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CoinSnapshot {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub image: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub current_price: f64,
    #[serde(deserialize_with = "null_as_zero")]
    pub price_change_percentage_24h: f64,
    #[serde(deserialize_with = "null_as_zero")]
    pub total_volume: f64,
    #[serde(deserialize_with = "null_as_zero")]
    pub market_cap: f64,
}

impl CoinSnapshot {
    /// Case-insensitive substring match on name or symbol.
    /// `query` is expected to be lower-cased already.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query) || self.symbol.to_lowercase().contains(query)
    }
}

// Thinly traded coins come back with `null` numerics.
fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

#[cfg(test)]
pub(crate) fn snapshot(name: &str, symbol: &str, market_cap: f64, change: f64) -> CoinSnapshot {
    CoinSnapshot {
        id: name.to_lowercase(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        image: format!("https://assets.example/{}.png", name.to_lowercase()),
        current_price: 1.0,
        price_change_percentage_24h: change,
        total_volume: 0.0,
        market_cap,
    }
}
