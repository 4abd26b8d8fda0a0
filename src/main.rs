//! Crypto market board
//!
//! Table of the top coins by market cap | price | 24h change | volume.
//! One fetch at startup, then local search and sort.

pub mod app;
pub mod config;
pub mod data;
pub mod logging;
pub mod request;
pub mod third_party;
pub mod ui;

use crate::app::App;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init()?;

    let app = App::new();
    app.run().await
}
