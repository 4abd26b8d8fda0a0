pub mod controller;
pub mod state;

use crate::data::CoinSnapshot;
use crate::request::fetch_snapshots;
use crate::ui::TuiApp;
use color_eyre::Result;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Default)]
pub struct App;

impl App {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self) -> Result<()> {
        let (tx, rx) = mpsc::unbounded_channel::<anyhow::Result<Vec<CoinSnapshot>>>();

        // Single fetch at startup; the UI shows an empty table until it lands
        let fetch_task = tokio::spawn(async move {
            log::info!("Fetching market snapshots");
            let fetched = fetch_snapshots().await;
            if tx.send(fetched).is_err() {
                log::debug!("UI closed before market snapshots arrived");
            }
        });

        let ui_task = tokio::task::spawn_blocking(move || {
            let terminal = ratatui::init();
            let app_result = TuiApp::new().run(terminal, rx);
            ratatui::restore();
            app_result
        });

        let ui_result = ui_task.await;

        fetch_task.abort();

        ui_result?
    }
}
