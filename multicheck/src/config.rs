//! Widget configuration.

use serde::Deserialize;

use crate::entry::Entry;
use crate::error::Error;

pub const DEFAULT_LIST_TITLE: &str = "Available options";
pub const DEFAULT_SELECTED_TITLE: &str = "Selected options";

/// Construction options. Every field falls back to its default when absent,
/// including when parsed from JSON (`listTitle`, `selectedList`,
/// `selectedTitle`, `entries`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Title row of the checkbox panel.
    pub list_title: String,
    /// Whether to render the "selected items" panel.
    pub selected_list: bool,
    /// Title row of the selected panel.
    pub selected_title: String,
    /// Entries rendered ahead of the host element's own options.
    pub entries: Vec<Entry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_title: DEFAULT_LIST_TITLE.to_string(),
            selected_list: false,
            selected_title: DEFAULT_SELECTED_TITLE.to_string(),
            entries: Vec::new(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON options object.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn list_title(mut self, title: impl Into<String>) -> Self {
        self.list_title = title.into();
        self
    }

    pub fn selected_list(mut self, enabled: bool) -> Self {
        self.selected_list = enabled;
        self
    }

    pub fn selected_title(mut self, title: impl Into<String>) -> Self {
        self.selected_title = title.into();
        self
    }

    pub fn entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = Entry>) -> Self {
        self.entries.extend(entries);
        self
    }
}
