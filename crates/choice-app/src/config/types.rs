//! Configuration types

use serde::{Deserialize, Serialize};

/// What to do when a prior response names an option the question no longer has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleOptionPolicy {
    /// Drop the option silently
    Ignore,
    /// Drop the option and log a warning
    #[default]
    Warn,
    /// Refuse to open the dialog
    Reject,
}

/// Application settings (.choice-dialog/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub dialog: DialogSettings,
}

/// Dialog appearance and behavior
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DialogSettings {
    #[serde(default = "default_checked_symbol")]
    pub checked_symbol: String,

    #[serde(default = "default_unchecked_symbol")]
    pub unchecked_symbol: String,

    /// Marker drawn in front of the row under the cursor
    #[serde(default = "default_highlight_symbol")]
    pub highlight_symbol: String,

    /// Moving past the last row jumps to the first, and vice versa
    #[serde(default)]
    pub wrap_navigation: bool,

    /// Rows moved by PageUp/PageDown
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default)]
    pub stale_options: StaleOptionPolicy,
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            checked_symbol: default_checked_symbol(),
            unchecked_symbol: default_unchecked_symbol(),
            highlight_symbol: default_highlight_symbol(),
            wrap_navigation: false,
            page_size: default_page_size(),
            stale_options: StaleOptionPolicy::default(),
        }
    }
}

fn default_checked_symbol() -> String {
    "[x]".to_string()
}

fn default_unchecked_symbol() -> String {
    "[ ]".to_string()
}

fn default_highlight_symbol() -> String {
    "> ".to_string()
}

fn default_page_size() -> usize {
    5
}
