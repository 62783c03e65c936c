//! The multi-checkbox list widget.
//!
//! Selection state is held three times over: the checked state of each
//! checkbox, the `selected` flag of each [`Entry`], and the rows of the
//! optional selected panel. Toggle handling keeps all three in step;
//! [`MultiCheckboxList::get_selected`] always reads the checkboxes.

use hostdom::{Tag, View};
use log::{debug, warn};

use crate::classes;
use crate::config::Config;
use crate::entry::{Entry, EntryChange};
use crate::error::Error;
use crate::listener::{Dispatch, ListenerKind, ListenerRegistry, Outcome};

/// Handles of the selected panel.
#[derive(Debug)]
struct SelectedPanel<N> {
    title: N,
    rows: N,
}

/// A multi-select control rendered as checkboxes next to a hidden host
/// element.
///
/// The host environment delivers toggles through
/// [`handle_change`](Self::handle_change) after it has flipped a
/// checkbox's checked state.
pub struct MultiCheckboxList<V: View> {
    view: V,
    host: V::Node,
    container: V::Node,
    title: V::Node,
    entry_list: V::Node,
    selected_panel: Option<SelectedPanel<V::Node>>,
    entries: Vec<Entry>,
    checkboxes: Vec<V::Node>,
    listeners: ListenerRegistry,
}

impl<V: View> MultiCheckboxList<V> {
    /// Render the widget in front of `host`, which is hidden.
    ///
    /// Configured entries come first (keeping their `selected` flag),
    /// followed by one unselected entry per option found under `host`.
    /// No listener fires during construction.
    pub fn new(mut view: V, host: V::Node, config: Config) -> Self {
        let Config {
            list_title,
            selected_list,
            selected_title,
            entries: configured,
        } = config;

        view.hide(&host);

        let container = div(&mut view, classes::CONTAINER);
        view.insert_before(&container, &host);

        let list = div(&mut view, classes::LIST);
        view.append_child(&container, &list);

        let title = div(&mut view, classes::ENTRY_LIST_TITLE);
        view.set_text(&title, &list_title);
        view.append_child(&list, &title);

        let entry_list = div(&mut view, classes::ENTRY_LIST);
        view.append_child(&list, &entry_list);

        let selected_panel = selected_list.then(|| {
            let panel = div(&mut view, classes::LIST);
            view.append_child(&container, &panel);

            let title = div(&mut view, classes::SELECTED_TITLE);
            view.set_text(&title, &selected_title);
            view.append_child(&panel, &title);

            let rows = div(&mut view, classes::SELECTED_LIST);
            view.append_child(&panel, &rows);

            SelectedPanel { title, rows }
        });

        let discovered = view
            .host_options(&host)
            .into_iter()
            .map(|option| Entry::new(option.value, option.text));

        let mut widget = Self {
            view,
            host,
            container,
            title,
            entry_list,
            selected_panel,
            entries: Vec::new(),
            checkboxes: Vec::new(),
            listeners: ListenerRegistry::new(),
        };

        for entry in configured.into_iter().chain(discovered) {
            widget.add_entry(entry);
        }

        debug!(
            "MultiCheckboxList built: {} entries, {} preselected, selected panel: {}",
            widget.entries.len(),
            widget.entries.iter().filter(|e| e.selected).count(),
            widget.selected_panel.is_some(),
        );

        widget
    }

    fn add_entry(&mut self, entry: Entry) {
        let row = div(&mut self.view, classes::ENTRY);

        let checkbox = self.view.create_element(Tag::Checkbox);
        self.view.set_value(&checkbox, &entry.value);
        self.view.set_checked(&checkbox, entry.selected);
        self.view.append_child(&row, &checkbox);

        let label = self.view.create_element(Tag::Div);
        self.view.set_text(&label, &entry.name);
        self.view.append_child(&row, &label);

        self.view.append_child(&self.entry_list, &row);

        if entry.selected {
            self.push_selected_row(&entry.name);
        }

        self.checkboxes.push(checkbox);
        self.entries.push(entry);
    }

    /// Values of the checked checkboxes, in display order.
    ///
    /// Read from the view, not from the entry bookkeeping.
    pub fn get_selected(&self) -> Vec<String> {
        let mut selected = Vec::new();
        for row in self.view.children(&self.entry_list) {
            for node in self.view.children(&row) {
                if self.view.tag(&node) == Tag::Checkbox && self.view.is_checked(&node) {
                    selected.push(self.view.value(&node));
                }
            }
        }
        selected
    }

    /// React to a checkbox whose checked state the host just changed.
    ///
    /// A newly checked box fires `select`, an unchecked one fires
    /// `deselect`. Nodes that aren't this widget's checkboxes are ignored,
    /// as are reports that repeat the entry's current state.
    pub fn handle_change(&mut self, checkbox: &V::Node) -> Dispatch {
        let Some(index) = self.checkboxes.iter().position(|c| c == checkbox) else {
            warn!("Ignoring change from unknown node {checkbox:?}");
            return Dispatch::default();
        };

        let checked = self.view.is_checked(checkbox);
        if self.entries[index].selected == checked {
            debug!("Checkbox {index} already checked={checked}, nothing to do");
            return Dispatch::default();
        }

        let value = self.view.value(checkbox);
        let name = self.label_of(checkbox);
        debug!("Checkbox {value:?} ({name:?}) -> checked={checked}");

        if checked {
            self.push_selected_row(&name);
        } else {
            self.remove_selected_row(&name);
        }
        self.entries[index].selected = checked;

        let kind = if checked {
            ListenerKind::Select
        } else {
            ListenerKind::Deselect
        };
        self.listeners.call(kind, &EntryChange { value, name })
    }

    /// Display name of the row holding `checkbox`: its last label node.
    fn label_of(&self, checkbox: &V::Node) -> String {
        let Some(row) = self.view.parent(checkbox) else {
            return String::new();
        };
        self.view
            .children(&row)
            .iter()
            .rev()
            .find(|node| self.view.tag(node) == Tag::Div)
            .map(|label| self.view.text(label))
            .unwrap_or_default()
    }

    fn push_selected_row(&mut self, name: &str) {
        let Some(panel) = &self.selected_panel else {
            return;
        };
        let row = div(&mut self.view, classes::SELECTED_ENTRY);
        self.view.set_text(&row, name);
        self.view.append_child(&panel.rows, &row);
    }

    // Matches by label, scanning from the end, and removes a single row.
    // Two entries sharing a label are indistinguishable here.
    fn remove_selected_row(&mut self, name: &str) {
        let Some(panel) = &self.selected_panel else {
            return;
        };
        let rows = self.view.children(&panel.rows);
        if let Some(row) = rows.iter().rev().find(|row| self.view.text(row) == name) {
            self.view.remove_child(&panel.rows, row);
        }
    }

    /// Register a listener by kind name (`"select"` or `"deselect"`).
    pub fn add_listener<F, R>(&mut self, kind: &str, listener: F) -> Result<(), Error>
    where
        F: FnMut(&EntryChange) -> R + 'static,
        R: Into<Outcome>,
    {
        let kind: ListenerKind = kind.parse()?;
        self.listeners.add(kind, listener);
        Ok(())
    }

    /// Register a `select` listener.
    pub fn on_select<F, R>(&mut self, listener: F)
    where
        F: FnMut(&EntryChange) -> R + 'static,
        R: Into<Outcome>,
    {
        self.listeners.add(ListenerKind::Select, listener);
    }

    /// Register a `deselect` listener.
    pub fn on_deselect<F, R>(&mut self, listener: F)
    where
        F: FnMut(&EntryChange) -> R + 'static,
        R: Into<Outcome>,
    {
        self.listeners.add(ListenerKind::Deselect, listener);
    }

    /// Invoke every listener of `kind` with `change`.
    ///
    /// Only notifies listeners; the view and entries are left untouched.
    pub fn call_listeners(&mut self, kind: &str, change: &EntryChange) -> Result<Dispatch, Error> {
        let kind: ListenerKind = kind.parse()?;
        Ok(self.listeners.call(kind, change))
    }

    /// Registered listeners.
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Checkbox handles in display order.
    pub fn checkboxes(&self) -> &[V::Node] {
        &self.checkboxes
    }

    /// Rows currently shown in the selected panel. Empty when the panel is
    /// disabled.
    pub fn selected_rows(&self) -> Vec<V::Node> {
        self.selected_panel
            .as_ref()
            .map(|panel| self.view.children(&panel.rows))
            .unwrap_or_default()
    }

    pub fn has_selected_panel(&self) -> bool {
        self.selected_panel.is_some()
    }

    pub fn selected_title(&self) -> Option<&V::Node> {
        self.selected_panel.as_ref().map(|panel| &panel.title)
    }

    /// The hidden host element.
    pub fn host(&self) -> &V::Node {
        &self.host
    }

    pub fn container(&self) -> &V::Node {
        &self.container
    }

    pub fn title(&self) -> &V::Node {
        &self.title
    }

    /// The view backing the widget.
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Give the view back, dropping the widget.
    pub fn into_view(self) -> V {
        self.view
    }
}

impl<V: View> std::fmt::Debug for MultiCheckboxList<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiCheckboxList")
            .field("entries", &self.entries)
            .field("selected_panel", &self.selected_panel.is_some())
            .field("listeners", &self.listeners)
            .finish()
    }
}

fn div<V: View>(view: &mut V, class: &str) -> V::Node {
    let node = view.create_element(Tag::Div);
    view.add_class(&node, class);
    node
}
