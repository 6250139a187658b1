mod dashboard;
mod layout;
mod login;
mod modals;
mod planner_tab;
mod status_bar;
mod tabs;
mod workouts_tab;

// Re-export the main render function
pub use layout::render_ui;

use ratatui::style::Color;

/// Best-effort "#rrggbb" parsing for the workout accent colors carried by
/// the schedule data. Anything unparseable falls back to the caller's theme.
pub(crate) fn hex_color(hex: &str) -> Option<Color> {
    let raw = hex.strip_prefix('#')?;
    if raw.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(raw.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(raw.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(raw.get(4..6)?, 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
