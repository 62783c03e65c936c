//! Multi-select control rendered as a list of checkboxes, optionally mirrored
//! by a "selected items" panel, with select/deselect listeners.

pub mod classes;
pub mod config;
pub mod entry;
pub mod error;
pub mod listener;
pub mod widget;

pub use config::Config;
pub use entry::{Entry, EntryChange};
pub use error::{Error, ListenerError};
pub use listener::{Dispatch, Listener, ListenerFuture, ListenerKind, ListenerRegistry, Outcome};
pub use widget::MultiCheckboxList;
