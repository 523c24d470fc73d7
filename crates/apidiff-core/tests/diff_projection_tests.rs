//! Projection, lookup and report-ordering tests.

use std::collections::HashSet;

use apidiff_core::{compare, Delta, DiffNode, DiffRecord, Element, ElementType};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn method(name: &str) -> Element {
    Element::leaf(ElementType::Method, name)
}

fn method_with(name: &str, add: Delta, remove: Delta) -> Element {
    Element::new(ElementType::Method, name, Vec::new(), add, remove)
}

fn class(name: &str, children: Vec<Element>) -> Element {
    Element::structured(ElementType::Class, name, children)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// S1: The record mirrors the tree - type, delta, name, children in order
#[test]
fn test_record_mirrors_tree() {
    let newer = class("Widget", vec![method("init"), method("run")]);
    let older = class("Widget", vec![method("init")]);

    let diff = compare(&newer, &older).unwrap();
    let record = diff.to_record();

    assert_eq!(record.element_type, ElementType::Class);
    assert_eq!(record.delta, Delta::Minor);
    assert_eq!(record.name, "Widget");
    assert_eq!(record.children.len(), 2);
    assert_eq!(record.children[0].name, "init");
    assert_eq!(record.children[0].delta, Delta::Unchanged);
    assert_eq!(record.children[1].name, "run");
    assert_eq!(record.children[1].delta, Delta::Added);
    assert!(record.children[1].children.is_empty());
}

// S2: The serialized form uses the wire names and is deterministic
#[test]
fn test_record_serialization_is_deterministic() {
    let newer = class("Widget", vec![method("run")]);
    let older = class("Widget", vec![]);

    let record = compare(&newer, &older).unwrap().to_record();
    let json1 = serde_json::to_string(&record).unwrap();
    let json2 = serde_json::to_string(&record).unwrap();
    assert_eq!(json1, json2);

    assert!(json1.contains("\"type\":\"CLASS\""));
    assert!(json1.contains("\"delta\":\"MINOR\""));

    let reparsed: DiffRecord = serde_json::from_str(&json1).unwrap();
    assert_eq!(reparsed, record);
}

// S3: find scans direct children only and returns the first match
#[test]
fn test_find_direct_children() {
    let newer = class("Widget", vec![method("init"), method("run")]);
    let older = class("Widget", vec![method("init")]);

    let diff = compare(&newer, &older).unwrap();
    assert_eq!(diff.find("run").unwrap().delta(), Delta::Added);
    assert!(diff.find("missing").is_none());
    // The node itself is not among its own children
    assert!(diff.find("Widget").is_none());
}

// S4: Diff nodes sort by delta, then type, then name
#[test]
fn test_report_ordering() {
    let unchanged_newer = method("same");
    let unchanged_older = method("same");
    let added = method("extra");
    let field = Element::leaf(ElementType::Field, "extra");

    let mut nodes = vec![
        DiffNode::new(Some(&added), None).unwrap(),
        DiffNode::new(Some(&unchanged_newer), Some(&unchanged_older)).unwrap(),
        DiffNode::new(Some(&field), None).unwrap(),
    ];
    nodes.sort();

    let keys: Vec<(Delta, ElementType)> = nodes
        .iter()
        .map(|n| (n.delta(), n.element_type()))
        .collect();
    assert_eq!(
        keys,
        vec![
            (Delta::Unchanged, ElementType::Method),
            (Delta::Added, ElementType::Field),
            (Delta::Added, ElementType::Method),
        ]
    );
}

// S5: Equality is the (delta, type, name) triple, not tree structure
#[test]
fn test_equality_supports_dedup() {
    // Different hook configurations, same identity triple once compared
    let newer_a = method_with("foo", Delta::Minor, Delta::Major);
    let older_a = method_with("foo", Delta::Minor, Delta::Major);
    let newer_b = method_with("foo", Delta::Changed, Delta::Changed);
    let older_b = method_with("foo", Delta::Micro, Delta::Micro);

    let diff_a = DiffNode::new(Some(&newer_a), Some(&older_a)).unwrap();
    let diff_b = DiffNode::new(Some(&newer_b), Some(&older_b)).unwrap();
    assert_eq!(diff_a, diff_b);

    let mut set = HashSet::new();
    set.insert(&diff_a);
    set.insert(&diff_b);
    assert_eq!(set.len(), 1);
}

// S6: The display line is fixed-width delta, type, name
#[test]
fn test_display_line_format() {
    let newer = method("run");
    let older = method("run");
    let diff = DiffNode::new(Some(&newer), Some(&older)).unwrap();
    assert_eq!(format!("{}", diff), "UNCHANGED  METHOD     run");
}

// S7: Projection of a one-sided subtree keeps its whole shape
#[test]
fn test_one_sided_subtree_projection() {
    let newer = Element::structured(
        ElementType::Package,
        "com.example",
        vec![class("Widget", vec![method("init")])],
    );
    let older = Element::structured(ElementType::Package, "com.example", vec![]);

    let record = compare(&newer, &older).unwrap().to_record();
    assert_eq!(record.children.len(), 1);
    let widget = &record.children[0];
    assert_eq!(widget.delta, Delta::Added);
    assert_eq!(widget.children.len(), 1);
    assert_eq!(widget.children[0].name, "init");
    assert_eq!(widget.children[0].delta, Delta::Added);
}
