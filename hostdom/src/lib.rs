pub mod document;
pub mod markup;
pub mod node;
pub mod view;

pub use document::Document;
pub use markup::{inner_html, outer_html};
pub use node::{Content, Node, NodeId, Tag};
pub use view::{HostOption, View};
