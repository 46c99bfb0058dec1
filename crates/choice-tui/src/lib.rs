//! choice-tui - Terminal UI for choice-dialog
//!
//! Draws the checklist modal with ratatui, reads keys through crossterm (or a
//! scripted [`KeyScript`]), and exposes the [`show_select_dialog`] entry point.

pub mod dialog;
pub mod event;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use dialog::{run_dialog, show_select_dialog, DialogHost};
pub use event::{key_event_to_input, CrosstermEvents, EventSource, KeyScript};
pub use widgets::SelectionDialog;
