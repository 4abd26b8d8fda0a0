//! Number rendering for table cells.
//!
//! Amounts follow the en-US default locale rendering: `,` thousands
//! separators, at most three fraction digits, no trailing fractional zeros.

use itertools::Itertools;

pub fn format_usd(value: f64) -> String {
    format!("${}", format_locale(value))
}

pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}%");
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{:.2}%", round_half_away(value.abs(), 2))
}

pub fn format_locale(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.3}", round_half_away(value.abs(), 3));
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let digits: Vec<char> = int_part.chars().collect();
    let grouped = digits
        .rchunks(3)
        .rev()
        .map(|chunk| chunk.iter().collect::<String>())
        .join(",");

    // Negatives keep their sign even when they round to zero
    let sign = if value.is_sign_negative() { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// `{:.N}` rounds exact ties to even; cells round them away from zero.
fn round_half_away(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
