//! Class names applied to the rendered tree.

pub const CONTAINER: &str = "multi-checkbox-list-container";

/// One side-by-side panel (available entries or selected entries).
pub const LIST: &str = "multi-checkbox-list-list";

pub const ENTRY_LIST_TITLE: &str = "multi-checkbox-list-title";
pub const ENTRY: &str = "multi-checkbox-list-entry";
pub const ENTRY_LIST: &str = "multi-checkbox-list-entry-list";

pub const SELECTED_TITLE: &str = "multi-checkbox-list-selected-title";
pub const SELECTED_ENTRY: &str = "multi-checkbox-list-selected-entry";
pub const SELECTED_LIST: &str = "multi-checkbox-list-selected-entry-list";
