use hostdom::{inner_html, outer_html, Document, Node, NodeId};
use multicheck::{classes, Config, Entry, MultiCheckboxList};

fn empty_select(doc: &mut Document) -> NodeId {
    let select = doc.insert(Node::select().id("testSelect"));
    let body = doc.body();
    doc.append_child(body, select);
    select
}

fn two_options(doc: &mut Document) -> NodeId {
    doc.select_with_options([("option1", "Option 1"), ("option2", "Option 2")])
}

fn body_html(list: &MultiCheckboxList<Document>) -> String {
    let doc = list.view();
    inner_html(doc, doc.body())
}

// ============================================================================
// Titles and Container
// ============================================================================

#[test]
fn test_default_header() {
    let mut doc = Document::new();
    let host = empty_select(&mut doc);
    let list = MultiCheckboxList::new(doc, host, Config::default());

    assert_eq!(list.view().text_content(*list.title()), "Available options");
    assert!(body_html(&list).contains("Available"));
}

#[test]
fn test_custom_header() {
    let mut doc = Document::new();
    let host = empty_select(&mut doc);
    let list = MultiCheckboxList::new(doc, host, Config::new().list_title("TEST title"));

    assert!(body_html(&list).contains("TEST title"));
    assert!(!body_html(&list).contains("Available options"));
}

#[test]
fn test_single_container() {
    let mut doc = Document::new();
    let host = empty_select(&mut doc);
    let list = MultiCheckboxList::new(doc, host, Config::default());

    let doc = list.view();
    assert_eq!(doc.elements_by_class(doc.body(), classes::CONTAINER), vec![*list.container()]);
}

#[test]
fn test_container_inserted_before_hidden_host() {
    let mut doc = Document::new();
    let host = two_options(&mut doc);
    let list = MultiCheckboxList::new(doc, host, Config::default());

    let doc = list.view();
    assert_eq!(doc.children(doc.body()), &[*list.container(), host]);
    assert!(doc[host].hidden);
    assert!(outer_html(doc, host).starts_with("<select style=\"display: none\">"));
}

// ============================================================================
// Entries
// ============================================================================

#[test]
fn test_rows_from_host_options() {
    let mut doc = Document::new();
    let host = two_options(&mut doc);
    let list = MultiCheckboxList::new(doc, host, Config::default());

    let doc = list.view();
    assert_eq!(list.checkboxes().len(), 2);
    assert_eq!(doc.elements_by_class(*list.container(), classes::ENTRY).len(), 2);
    assert!(inner_html(doc, *list.container()).contains("Option 1"));
    assert!(list.get_selected().is_empty());
    assert_eq!(
        list.entries(),
        &[Entry::new("option1", "Option 1"), Entry::new("option2", "Option 2")]
    );
}

#[test]
fn test_row_structure() {
    let mut doc = Document::new();
    let host = doc.select_with_options([("option1", "Option 1")]);
    let list = MultiCheckboxList::new(doc, host, Config::default());

    let doc = list.view();
    let row = doc.elements_by_class(*list.container(), classes::ENTRY)[0];
    assert_eq!(
        outer_html(doc, row),
        "<div class=\"multi-checkbox-list-entry\">\
         <input type=\"checkbox\" value=\"option1\"><div>Option 1</div></div>"
    );
}

#[test]
fn test_predefined_entries() {
    let mut doc = Document::new();
    let host = empty_select(&mut doc);
    let config = Config::new()
        .entry(Entry::new("option_desc", "Option desc").selected(true))
        .entry(Entry::new("option_desc2", "Option desc 2"));
    let list = MultiCheckboxList::new(doc, host, config);

    assert!(inner_html(list.view(), *list.container()).contains("Option desc 2"));
    assert_eq!(list.get_selected(), vec!["option_desc"]);
}

#[test]
fn test_predefined_entries_precede_host_options() {
    let mut doc = Document::new();
    let host = two_options(&mut doc);
    let config = Config::new().entry(Entry::new("first", "First").selected(true));
    let list = MultiCheckboxList::new(doc, host, config);

    let values: Vec<_> = list.entries().iter().map(|e| e.value.as_str()).collect();
    assert_eq!(values, vec!["first", "option1", "option2"]);
    assert_eq!(list.get_selected(), vec!["first"]);
}

// ============================================================================
// Selected Panel
// ============================================================================

#[test]
fn test_selected_panel_default_title() {
    let mut doc = Document::new();
    let host = doc.select_with_options([("option1", "Option 1")]);
    let list = MultiCheckboxList::new(doc, host, Config::new().selected_list(true));

    assert!(list.has_selected_panel());
    assert!(inner_html(list.view(), *list.container()).contains("Selected options"));
    let doc = list.view();
    assert_eq!(doc.elements_by_class(*list.container(), classes::LIST).len(), 2);
}

#[test]
fn test_selected_panel_custom_title() {
    let mut doc = Document::new();
    let host = doc.select_with_options([("option1", "Option 1")]);
    let config = Config::new().selected_list(true).selected_title("TEST title");
    let list = MultiCheckboxList::new(doc, host, config);

    let title = *list.selected_title().unwrap();
    assert_eq!(list.view().text_content(title), "TEST title");
}

#[test]
fn test_no_selected_panel() {
    let mut doc = Document::new();
    let host = doc.select_with_options([("option1", "Option 1")]);
    let list = MultiCheckboxList::new(doc, host, Config::new().selected_list(false));

    assert!(!list.has_selected_panel());
    assert!(list.selected_title().is_none());
    assert!(!inner_html(list.view(), *list.container()).contains("Selected options"));
}

#[test]
fn test_preselected_entries_in_panel() {
    let mut doc = Document::new();
    let host = two_options(&mut doc);
    let config = Config::new()
        .selected_list(true)
        .entry(Entry::new("a", "Alpha").selected(true))
        .entry(Entry::new("b", "Beta"))
        .entry(Entry::new("c", "Gamma").selected(true));
    let list = MultiCheckboxList::new(doc, host, config);

    let names: Vec<_> = list
        .selected_rows()
        .into_iter()
        .map(|row| list.view().text_content(row))
        .collect();
    assert_eq!(names, vec!["Alpha", "Gamma"]);
    assert_eq!(list.get_selected(), vec!["a", "c"]);
}
