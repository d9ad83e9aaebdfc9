//! JSON configuration for a combobox.
//!
//! ```json
//! {
//!   "placeholder": "Select framework...",
//!   "search_placeholder": "Search framework...",
//!   "empty_message": "No framework found.",
//!   "value": "axum",
//!   "options": [
//!     { "value": "axum", "label": "Axum" },
//!     { "value": "rocket", "label": "Rocket", "disabled": true, "icon": "🚀" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::option::ComboOption;
use crate::widget::{Combobox, DEFAULT_MAX_VISIBLE_ROWS, DEFAULT_RESET_DELAY};

fn default_placeholder() -> String {
    "Select option...".into()
}

fn default_search_placeholder() -> String {
    "Search...".into()
}

fn default_empty_message() -> String {
    "No results found.".into()
}

fn default_reset_delay_ms() -> u64 {
    DEFAULT_RESET_DELAY.as_millis() as u64
}

fn default_max_visible_rows() -> u16 {
    DEFAULT_MAX_VISIBLE_ROWS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboboxConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,
    #[serde(default = "default_max_visible_rows")]
    pub max_visible_rows: u16,
    pub options: Vec<ComboOption>,
}

impl ComboboxConfig {
    /// Parse a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.options.is_empty() {
            return Err(ConfigError::NoOptions);
        }
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded combobox config from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Build a widget from this config. The callback is wired by the caller.
    pub fn into_combobox(self) -> Combobox {
        let mut combobox = Combobox::new(self.options)
            .placeholder(self.placeholder)
            .search_placeholder(self.search_placeholder)
            .empty_message(self.empty_message)
            .disabled(self.disabled)
            .reset_delay(Duration::from_millis(self.reset_delay_ms))
            .max_visible_rows(self.max_visible_rows);
        if let Some(value) = self.value {
            combobox = combobox.value(value);
        }
        if let Some(class_name) = self.class_name {
            combobox = combobox.class_name(class_name);
        }
        combobox
    }
}
