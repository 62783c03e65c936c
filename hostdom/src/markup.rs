//! Markup serialization of document subtrees.

use crate::document::Document;
use crate::node::{Content, NodeId, Tag};

/// Serialize a node and its subtree.
pub fn outer_html(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, id, &mut out);
    out
}

/// Serialize only the node's content.
pub fn inner_html(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    write_content(doc, id, &mut out);
    out
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    let node = &doc[id];
    let tag = node.tag.as_str();

    out.push('<');
    out.push_str(tag);
    if node.tag == Tag::Checkbox {
        out.push_str(" type=\"checkbox\"");
    }
    if !node.classes.is_empty() {
        push_attr(out, "class", &node.classes.join(" "));
    }
    if matches!(node.tag, Tag::Checkbox | Tag::Option) {
        push_attr(out, "value", &node.value);
    }
    if node.hidden {
        push_attr(out, "style", "display: none");
    }
    if node.tag == Tag::Checkbox {
        if node.checked {
            out.push_str(" checked");
        }
        // Void element
        out.push('>');
        return;
    }
    out.push('>');

    write_content(doc, id, out);

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_content(doc: &Document, id: NodeId, out: &mut String) {
    match &doc[id].content {
        Content::None => {}
        Content::Text(text) => escape_into(text, out),
        Content::Children(children) => {
            for child in children {
                write_node(doc, *child, out);
            }
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(value, out);
    out.push('"');
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
