//! Widget components for the selection modal

pub mod modal_overlay;
mod selection_dialog;

pub use selection_dialog::{truncate_to_width, SelectionDialog};
