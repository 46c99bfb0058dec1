//! Semantic style builders for the selection modal.

use ratatui::style::{Modifier, Style};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn key_hint() -> Style {
    Style::default().fg(palette::KEY_HINT)
}

// --- Selection styles ---
pub fn checkbox(checked: bool) -> Style {
    if checked {
        Style::default()
            .fg(palette::CHECKED)
            .add_modifier(Modifier::BOLD)
    } else {
        text_muted()
    }
}

pub fn cursor_row() -> Style {
    Style::default()
        .bg(palette::CURSOR_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn popup_body() -> Style {
    Style::default().bg(palette::POPUP_BG)
}
