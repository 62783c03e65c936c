//! View factory abstraction.
//!
//! Widgets build and mutate their visual tree exclusively through [`View`],
//! so the same widget logic can drive the in-memory [`Document`] or any other
//! toolkit binding that provides these primitives.

use std::fmt::Debug;

use crate::document::Document;
use crate::node::{Node, NodeId, Tag};

/// An `<option>`-like child discovered under a host element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOption {
    pub value: String,
    pub text: String,
}

pub trait View {
    /// Handle to a node owned by the view.
    type Node: Clone + PartialEq + Debug;

    fn create_element(&mut self, tag: Tag) -> Self::Node;
    fn tag(&self, node: &Self::Node) -> Tag;

    fn add_class(&mut self, node: &Self::Node, class: &str);
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Replace the node's content with text.
    fn set_text(&mut self, node: &Self::Node, text: &str);
    /// Text content of the node and its descendants.
    fn text(&self, node: &Self::Node) -> String;

    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);
    /// Insert `node` into `reference`'s parent right before `reference`.
    fn insert_before(&mut self, node: &Self::Node, reference: &Self::Node);
    fn remove_child(&mut self, parent: &Self::Node, child: &Self::Node);
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Keep the node in the tree but take it out of view.
    fn hide(&mut self, node: &Self::Node);

    fn set_value(&mut self, node: &Self::Node, value: &str);
    fn value(&self, node: &Self::Node) -> String;

    fn set_checked(&mut self, node: &Self::Node, checked: bool);
    fn is_checked(&self, node: &Self::Node) -> bool;

    /// Every `Option` descendant of `host`, in document order.
    fn host_options(&self, host: &Self::Node) -> Vec<HostOption> {
        let mut out = Vec::new();
        collect_options(self, host, &mut out);
        out
    }
}

fn collect_options<V: View + ?Sized>(view: &V, node: &V::Node, out: &mut Vec<HostOption>) {
    for child in view.children(node) {
        if view.tag(&child) == Tag::Option {
            out.push(HostOption {
                value: view.value(&child),
                text: view.text(&child),
            });
        }
        collect_options(view, &child, out);
    }
}

impl View for Document {
    type Node = NodeId;

    fn create_element(&mut self, tag: Tag) -> NodeId {
        self.insert(Node::new(tag))
    }

    fn tag(&self, node: &NodeId) -> Tag {
        self[*node].tag
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        let node = &mut self[*node];
        if !node.has_class(class) {
            node.classes.push(class.to_string());
        }
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self[*node].has_class(class)
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        Document::set_text(self, *node, text);
    }

    fn text(&self, node: &NodeId) -> String {
        self.text_content(*node)
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        Document::append_child(self, *parent, *child);
    }

    fn insert_before(&mut self, node: &NodeId, reference: &NodeId) {
        Document::insert_before(self, *node, *reference);
    }

    fn remove_child(&mut self, parent: &NodeId, child: &NodeId) {
        Document::remove_child(self, *parent, *child);
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        Document::children(self, *node).to_vec()
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        Document::parent(self, *node)
    }

    fn hide(&mut self, node: &NodeId) {
        self[*node].hidden = true;
    }

    fn set_value(&mut self, node: &NodeId, value: &str) {
        self[*node].value = value.to_string();
    }

    fn value(&self, node: &NodeId) -> String {
        self[*node].value.clone()
    }

    fn set_checked(&mut self, node: &NodeId, checked: bool) {
        self[*node].checked = checked;
    }

    fn is_checked(&self, node: &NodeId) -> bool {
        self[*node].checked
    }
}
