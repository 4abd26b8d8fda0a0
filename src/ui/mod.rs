mod app;
mod colors;
mod format;
mod table;

pub use app::TuiApp;
pub use colors::TableColors;
pub use table::{CHANGE_COLUMN, ChangeTint, CoinRow, CoinTable};
