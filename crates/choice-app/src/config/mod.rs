//! Configuration file parsing for choice-dialog
//!
//! Supports `.choice-dialog/config.toml` in a base directory.

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings};
pub use types::*;
