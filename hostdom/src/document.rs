//! In-memory element tree.
//!
//! Nodes live in an arena owned by the [`Document`] and are addressed by
//! [`NodeId`]. Removing a node from its parent only detaches it; the arena
//! keeps every node for the lifetime of the document.

use std::ops::{Index, IndexMut};

use log::{trace, warn};

use crate::node::{Content, Node, NodeId, Tag};

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document holding only a `<body>`.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(Tag::Body).id("body")],
            body: NodeId(0),
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Move a detached node into the arena.
    pub fn insert(&mut self, mut node: Node) -> NodeId {
        node.parent = None;
        if let Content::Children(children) = &node.content {
            if !children.is_empty() {
                warn!("Dropping {} child handles from inserted node {}", children.len(), node.id);
            }
            node.content = Content::None;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Find a node by its string ID.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.id == id).map(NodeId)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or(&[])
    }

    /// Append `child` as the last child of `parent`, detaching it from its
    /// current parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        let node = &mut self[parent];
        match &mut node.content {
            Content::Children(children) => children.push(child),
            _ => node.content = Content::Children(vec![child]),
        }
        self[child].parent = Some(parent);
    }

    /// Insert `node` into `reference`'s parent, immediately before it.
    ///
    /// Returns false (and leaves `node` where it was) when `reference` is
    /// detached.
    pub fn insert_before(&mut self, node: NodeId, reference: NodeId) -> bool {
        let Some(parent) = self.parent(reference) else {
            warn!("insert_before: reference {} has no parent", self[reference].id);
            return false;
        };
        self.detach(node);
        if let Content::Children(children) = &mut self[parent].content {
            let at = children
                .iter()
                .position(|c| *c == reference)
                .unwrap_or(children.len());
            children.insert(at, node);
        }
        self[node].parent = Some(parent);
        true
    }

    /// Detach `child` from `parent`. Returns false if it wasn't a child.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.parent(child) != Some(parent) {
            return false;
        }
        self.detach(child);
        true
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self[id].parent.take() else {
            return;
        };
        if let Content::Children(children) = &mut self[parent].content {
            children.retain(|c| *c != id);
        }
    }

    /// Replace a node's content with text, detaching any children.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        let previous = std::mem::replace(&mut self[id].content, Content::Text(text.into()));
        if let Content::Children(children) = previous {
            for child in children {
                self[child].parent = None;
            }
        }
    }

    /// Concatenated text of the node and all its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self[id].content {
            Content::None => {}
            Content::Text(text) => out.push_str(text),
            Content::Children(children) => {
                for child in children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    /// All descendants of `root` in document (pre-order) order, excluding
    /// `root` itself.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(root, &mut out);
        out
    }

    fn collect_descendants(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for child in self.children(id) {
            out.push(*child);
            self.collect_descendants(*child, out);
        }
    }

    pub fn elements_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|id| self[*id].has_class(class))
            .collect()
    }

    pub fn elements_by_tag(&self, root: NodeId, tag: Tag) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|id| self[*id].tag == tag)
            .collect()
    }

    /// Flip a checkbox the way a user click would. Returns the new checked
    /// state; non-checkbox nodes are left untouched.
    pub fn click(&mut self, id: NodeId) -> bool {
        let node = &mut self[id];
        if node.tag == Tag::Checkbox {
            node.checked = !node.checked;
            trace!("click {} -> checked={}", node.id, node.checked);
        }
        node.checked
    }

    /// Build a `<select>` with the given `(value, text)` options and attach
    /// it to the body.
    pub fn select_with_options<'a>(
        &mut self,
        options: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> NodeId {
        let select = self.insert(Node::select());
        for (value, text) in options {
            let option = self.insert(Node::option(value, text));
            self.append_child(select, option);
        }
        let body = self.body;
        self.append_child(body, select);
        select
    }
}

impl Index<NodeId> for Document {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for Document {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}
