//! Theme tokens for the slider and the demo chrome.
//!
//! Dark-terminal palette: two muted segment tones, the classic red knob,
//! and a cyan accent for focus/status.

use propslider_core::Rgb;
use ratatui::style::{Color, Modifier, Style};

/// Default left-segment background (dark olive).
pub const LEFT_SEGMENT: Color = Color::Rgb(0x31, 0x33, 0x2E);
/// Default right-segment background (lighter olive).
pub const RIGHT_SEGMENT: Color = Color::Rgb(0x5F, 0x62, 0x5C);
/// Default knob color (red, the classic affordance).
pub const KNOB: Color = Color::Rgb(0xEC, 0x13, 0x08);
/// Knob when the slider is disabled.
pub const KNOB_DISABLED: Color = Color::Rgb(100, 100, 100);
/// Label text on segments.
pub const TEXT: Color = Color::White;

/// Convert an engine color into a ratatui color.
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Segment label style over the given background.
pub fn label(bg: Color) -> Style {
    Style::default().fg(TEXT).bg(bg)
}

/// Label style for gutter rows (no segment background behind them).
pub fn gutter_label() -> Style {
    Style::default().fg(TEXT)
}

pub fn accent() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Color::Rgb(100, 149, 237))
}

pub fn warning() -> Style {
    Style::default().fg(Color::Rgb(255, 140, 0))
}

pub fn status_bar() -> Style {
    Style::default().fg(Color::Gray).bg(Color::Rgb(18, 18, 20))
}
