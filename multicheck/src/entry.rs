use serde::Deserialize;

/// One selectable item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    /// Unique identifier, reported by `get_selected`.
    pub value: String,
    /// Display label.
    pub name: String,
    #[serde(default)]
    pub selected: bool,
}

impl Entry {
    /// Create an unselected entry.
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// Payload passed to select/deselect listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryChange {
    pub value: String,
    pub name: String,
}

impl EntryChange {
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
        }
    }
}
