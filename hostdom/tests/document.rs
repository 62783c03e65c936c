use hostdom::{inner_html, outer_html, Document, HostOption, Node, Tag, View};

// ============================================================================
// Tree Mutation
// ============================================================================

#[test]
fn test_append_child_sets_parent() {
    let mut doc = Document::new();
    let body = doc.body();
    let div = doc.insert(Node::div().id("panel"));

    doc.append_child(body, div);

    assert_eq!(doc.children(body), &[div]);
    assert_eq!(doc.parent(div), Some(body));
    assert_eq!(doc.find_by_id("panel"), Some(div));
}

#[test]
fn test_append_child_moves_between_parents() {
    let mut doc = Document::new();
    let a = doc.insert(Node::div());
    let b = doc.insert(Node::div());
    let child = doc.insert(Node::div());

    doc.append_child(a, child);
    doc.append_child(b, child);

    assert!(doc.children(a).is_empty());
    assert_eq!(doc.children(b), &[child]);
    assert_eq!(doc.parent(child), Some(b));
}

#[test]
fn test_insert_before_places_node_ahead_of_reference() {
    let mut doc = Document::new();
    let select = doc.select_with_options([]);
    let container = doc.insert(Node::div());

    assert!(doc.insert_before(container, select));

    assert_eq!(doc.children(doc.body()), &[container, select]);
}

#[test]
fn test_insert_before_detached_reference_is_noop() {
    let mut doc = Document::new();
    let reference = doc.insert(Node::div());
    let node = doc.insert(Node::div());

    assert!(!doc.insert_before(node, reference));
    assert_eq!(doc.parent(node), None);
}

#[test]
fn test_remove_child_detaches() {
    let mut doc = Document::new();
    let parent = doc.insert(Node::div());
    let first = doc.insert(Node::div().text("one"));
    let second = doc.insert(Node::div().text("two"));
    doc.append_child(parent, first);
    doc.append_child(parent, second);

    assert!(doc.remove_child(parent, first));
    assert!(!doc.remove_child(parent, first));

    assert_eq!(doc.children(parent), &[second]);
    assert_eq!(doc.parent(first), None);
    // Detached nodes stay in the arena
    assert_eq!(doc.text_content(first), "one");
}

#[test]
fn test_set_text_detaches_children() {
    let mut doc = Document::new();
    let parent = doc.insert(Node::div());
    let child = doc.insert(Node::div());
    doc.append_child(parent, child);

    doc.set_text(parent, "replaced");

    assert!(doc.children(parent).is_empty());
    assert_eq!(doc.parent(child), None);
    assert_eq!(doc.text_content(parent), "replaced");
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_text_content_concatenates_descendants() {
    let mut doc = Document::new();
    let row = doc.insert(Node::div());
    let a = doc.insert(Node::div().text("Option "));
    let b = doc.insert(Node::div().text("1"));
    doc.append_child(row, a);
    doc.append_child(row, b);

    assert_eq!(doc.text_content(row), "Option 1");
}

#[test]
fn test_elements_by_class_in_document_order() {
    let mut doc = Document::new();
    let body = doc.body();
    let outer = doc.insert(Node::div().class("item"));
    let inner = doc.insert(Node::div().class("item"));
    let other = doc.insert(Node::div().class("other"));
    let last = doc.insert(Node::div().class("item"));
    doc.append_child(body, outer);
    doc.append_child(outer, inner);
    doc.append_child(outer, other);
    doc.append_child(body, last);

    assert_eq!(doc.elements_by_class(body, "item"), vec![outer, inner, last]);
    assert_eq!(doc.elements_by_tag(body, Tag::Div).len(), 4);
}

#[test]
fn test_class_is_not_duplicated() {
    let node = Node::div().class("a").class("a").class("b");
    assert_eq!(node.classes, vec!["a".to_string(), "b".to_string()]);
}

// ============================================================================
// Interaction
// ============================================================================

#[test]
fn test_click_toggles_checkbox() {
    let mut doc = Document::new();
    let checkbox = doc.insert(Node::checkbox().value("v"));

    assert!(doc.click(checkbox));
    assert!(doc[checkbox].checked);
    assert!(!doc.click(checkbox));
    assert!(!doc[checkbox].checked);
}

#[test]
fn test_click_ignores_non_checkbox() {
    let mut doc = Document::new();
    let div = doc.insert(Node::div());

    assert!(!doc.click(div));
    assert!(!doc[div].checked);
}

// ============================================================================
// View
// ============================================================================

#[test]
fn test_host_options_in_document_order() {
    let mut doc = Document::new();
    let select = doc.select_with_options([("option1", "Option 1"), ("option2", "Option 2")]);

    assert_eq!(
        doc.host_options(&select),
        vec![
            HostOption {
                value: "option1".into(),
                text: "Option 1".into(),
            },
            HostOption {
                value: "option2".into(),
                text: "Option 2".into(),
            },
        ]
    );
}

#[test]
fn test_view_builds_tree() {
    let mut doc = Document::new();
    let body = doc.body();

    let row = doc.create_element(Tag::Div);
    View::add_class(&mut doc, &row, "row");
    let checkbox = doc.create_element(Tag::Checkbox);
    doc.set_value(&checkbox, "v");
    View::append_child(&mut doc, &row, &checkbox);
    View::append_child(&mut doc, &body, &row);

    assert!(View::has_class(&doc, &row, "row"));
    assert_eq!(View::children(&doc, &row), vec![checkbox]);
    assert_eq!(View::parent(&doc, &row), Some(body));
    assert_eq!(doc.value(&checkbox), "v");

    doc.set_checked(&checkbox, true);
    assert!(doc.is_checked(&checkbox));

    View::remove_child(&mut doc, &body, &row);
    assert!(doc.children(body).is_empty());
}

// ============================================================================
// Markup
// ============================================================================

#[test]
fn test_outer_html() {
    let mut doc = Document::new();
    let row = doc.insert(Node::div().class("entry").class("wide"));
    let checkbox = doc.insert(Node::checkbox().value("a&b").checked(true));
    let label = doc.insert(Node::div().text("<A>"));
    doc.append_child(row, checkbox);
    doc.append_child(row, label);

    assert_eq!(
        outer_html(&doc, row),
        "<div class=\"entry wide\"><input type=\"checkbox\" value=\"a&amp;b\" checked><div>&lt;A&gt;</div></div>"
    );
}

#[test]
fn test_hidden_select_markup() {
    let mut doc = Document::new();
    let select = doc.select_with_options([("x", "X")]);
    doc.hide(&select);

    assert_eq!(
        inner_html(&doc, doc.body()),
        "<select style=\"display: none\"><option value=\"x\">X</option></select>"
    );
}
