//! choice-app - Selection logic for choice-dialog
//!
//! Terminal-independent state behind the checklist modal: the positional
//! [`SelectionState`], the multi/single [`SelectionStrategy`] variants, the
//! [`SelectionAdapter`] that maps between options, flags and responses, and
//! the [`SelectionDialogState`] key-driven state machine.

pub mod adapter;
pub mod config;
pub mod dialog;
pub mod input_key;
pub mod selection_state;
pub mod strategy;

pub use adapter::SelectionAdapter;
pub use config::{DialogSettings, Settings, StaleOptionPolicy};
pub use dialog::{
    is_cancel_key, DialogAction, DialogResult, SelectDialogConfig, SelectionDialogState,
};
pub use input_key::InputKey;
pub use selection_state::SelectionState;
pub use strategy::{strategy_for, MultiSelect, SelectionStrategy, SingleSelect};
