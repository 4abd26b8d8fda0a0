use crate::data::CoinSnapshot;
use crate::third_party::coingecko::api_path::COINGECKO_MARKETS_API;
use anyhow::Context;

use reqwest::get;

pub async fn fetch_snapshots() -> anyhow::Result<Vec<CoinSnapshot>> {
    fetch_snapshots_from(COINGECKO_MARKETS_API).await
}

pub async fn fetch_snapshots_from(url: &str) -> anyhow::Result<Vec<CoinSnapshot>> {
    let response = get(url)
        .await
        .with_context(|| format!("request to {url} failed"))?
        .error_for_status()?
        .text()
        .await?;
    let snapshots: Vec<CoinSnapshot> =
        serde_json::from_str(&response).context("failed to parse market snapshots")?;
    Ok(snapshots)
}
