use ratatui::style::{Color, palette::tailwind};

use crate::config::{NEGATIVE_CHANGE_COLOR, POSITIVE_CHANGE_COLOR};
use crate::ui::ChangeTint;

pub struct TableColors {
    pub buffer_bg: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub row_fg: Color,
    pub selected_row_style_fg: Color,
    pub normal_row_color: Color,
    pub alt_row_color: Color,
    pub footer_border_color: Color,
    pub input_border_color: Color,
}

impl TableColors {
    pub const fn new(color: &tailwind::Palette) -> Self {
        Self {
            buffer_bg: tailwind::SLATE.c950,
            header_bg: color.c900,
            header_fg: tailwind::SLATE.c200,
            row_fg: tailwind::SLATE.c200,
            selected_row_style_fg: color.c400,
            normal_row_color: tailwind::SLATE.c950,
            alt_row_color: tailwind::SLATE.c900,
            footer_border_color: color.c400,
            input_border_color: color.c600,
        }
    }

    pub fn change_color(&self, tint: ChangeTint) -> Color {
        match tint {
            ChangeTint::Positive => POSITIVE_CHANGE_COLOR,
            ChangeTint::Negative => NEGATIVE_CHANGE_COLOR,
        }
    }
}
