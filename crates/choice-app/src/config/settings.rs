//! Settings parser for .choice-dialog/config.toml

use super::types::Settings;
use choice_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = ".choice-dialog";

/// Path of the config file inside `base_dir`
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `<base_dir>/.choice-dialog/config.toml`.
///
/// Falls back to defaults when the file is missing, unreadable or invalid.
pub fn load_settings(base_dir: &Path) -> Settings {
    let config_path = config_path(base_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default config in `<base_dir>/.choice-dialog/`.
///
/// An existing config file is left untouched.
pub fn init_config_dir(base_dir: &Path) -> Result<()> {
    let dir = base_dir.join(CONFIG_DIR);

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", CONFIG_DIR, e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# choice-dialog configuration

[dialog]
# Glyphs drawn in front of each option
checked_symbol = "[x]"
unchecked_symbol = "[ ]"
highlight_symbol = "> "

# Jump from the last option to the first (and back) when navigating
wrap_navigation = false

# Rows moved by PageUp/PageDown
page_size = 5

# Prior answers naming options the question no longer has:
# "ignore", "warn" or "reject"
stale_options = "warn"
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}
