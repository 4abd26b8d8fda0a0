use ratatui::style::{Color, palette::tailwind};

pub const PALETTES: [tailwind::Palette; 4] = [
    tailwind::BLUE,
    tailwind::EMERALD,
    tailwind::INDIGO,
    tailwind::RED,
];

pub const INFO_TEXT: [&str; 2] = [
    "(q) quit | (↑/↓) move row | (/) search | (Enter) run search",
    "(m) sort by market cap | (c) sort by % change | (Shift + →/←) cycle color",
];

pub const HEADER: [&str; 7] = [
    "Icon",
    "Name",
    "Symbol",
    "Price",
    "24h %",
    "Volume",
    "Market Cap",
];

pub const ICON_GLYPH: &str = "●";

pub const ITEM_HEIGHT: usize = 1;
pub const POLL_DURATION_MS: u64 = 50;
pub const ALERT_DURATION_MS: u64 = 1500;

pub const POSITIVE_CHANGE_COLOR: Color = Color::Rgb(0x31, 0xd2, 0x81);
pub const NEGATIVE_CHANGE_COLOR: Color = Color::Rgb(0xe0, 0x3a, 0x3a);

pub const LOG_FILE_PATH: &str = "/tmp/coinboard.log";
pub const DEFAULT_LOG_FILTER: &str = "info";
