//! App Configuration
//!
//! Texts and log level, optionally overridden by a JSON blob embedded in the
//! host page:
//!
//! ```html
//! <script id="todo-config" type="application/json">
//!   { "title": "Groceries", "log_level": "debug" }
//! </script>
//! ```

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Id of the `<script>` element holding the JSON config
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

pub const DEFAULT_TITLE: &str = "Todo List";
pub const DEFAULT_INPUT_PLACEHOLDER: &str = "Add a new todo...";
pub const DEFAULT_INPUT_LABEL: &str = "New todo";
pub const DEFAULT_ADD_LABEL: &str = "Add Todo";
pub const DEFAULT_DELETE_LABEL: &str = "Delete";
pub const DEFAULT_EMPTY_MESSAGE: &str = "No todos yet. Add one above!";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// User-facing texts and logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub input_placeholder: String,
    pub input_label: String,
    pub add_label: String,
    pub delete_label: String,
    pub empty_message: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            input_placeholder: DEFAULT_INPUT_PLACEHOLDER.to_string(),
            input_label: DEFAULT_INPUT_LABEL.to_string(),
            add_label: DEFAULT_ADD_LABEL.to_string(),
            delete_label: DEFAULT_DELETE_LABEL.to_string(),
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a config blob. Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Log level filter; unknown names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.trim().parse().unwrap_or(LevelFilter::Info)
    }
}

/// Read the config from the current document.
///
/// A missing config element is not an error.
pub fn load() -> Result<AppConfig, AppError> {
    let window = web_sys::window().ok_or(AppError::NoWindow)?;
    let document = window.document().ok_or(AppError::NoDocument)?;

    match document.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(element) => AppConfig::from_json(&element.text_content().unwrap_or_default()),
        None => Ok(AppConfig::default()),
    }
}
