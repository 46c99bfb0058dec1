//! Color palette for the selection modal.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background behind the modal
pub const POPUP_BG: Color = Color::Reset; // Modal body

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const KEY_HINT: Color = Color::Yellow;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Selection ---
pub const CHECKED: Color = Color::Green;
pub const CURSOR_BG: Color = Color::DarkGray;

// --- Effects ---
pub const SHADOW: Color = Color::Black;
