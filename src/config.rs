//! UI Configuration
//!
//! Labels and log level, optionally overridden by a JSON block in the page.

use leptos::prelude::document;
use serde::Deserialize;

/// Id of the `<script type="application/json">` element read at startup
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

/// User-facing labels and logging settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    /// Placeholder guidance text of the input field
    pub placeholder: String,
    /// Accessible label of the input field
    pub input_label: String,
    /// Submit button text
    pub add_label: String,
    /// Per-item delete button text
    pub delete_label: String,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            placeholder: "Add a new task here...".to_string(),
            input_label: "Todo input field".to_string(),
            add_label: "Add".to_string(),
            delete_label: "Delete".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }

    /// Read the config block from the hosting page.
    ///
    /// A missing or empty block yields the defaults.
    pub fn from_page() -> Result<Self, String> {
        let Some(element) = document().get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Ok(Self::default());
        };
        let raw = element.text_content().unwrap_or_default();
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_json(&raw)
    }

    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
