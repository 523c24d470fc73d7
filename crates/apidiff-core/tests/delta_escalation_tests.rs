//! Delta escalation tests - bottom-up severity folding through the
//! transition lattice, including the one-sided default-severity hooks.

use apidiff_core::{compare, Delta, Element, ElementType, NothingIgnored};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn method(name: &str) -> Element {
    Element::leaf(ElementType::Method, name)
}

/// A childless method with explicit one-sided default severities.
fn method_with(name: &str, add: Delta, remove: Delta) -> Element {
    Element::new(ElementType::Method, name, Vec::new(), add, remove)
}

fn class(name: &str, children: Vec<Element>) -> Element {
    Element::structured(ElementType::Class, name, children)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// S1: Two single-node trees with the same identity compare as unchanged -
// there are no children to escalate
#[test]
fn test_leaf_pair_is_unchanged() {
    let v2 = method("foo");
    let v1 = method("foo");

    let diff = compare(&v2, &v1).unwrap();
    assert_eq!(diff.delta(), Delta::Unchanged);
}

// S2: An added child contributes its if_added default, not ADDED
#[test]
fn test_added_child_contributes_if_added() {
    let newer = class("Widget", vec![method_with("bar", Delta::Minor, Delta::Major)]);
    let older = class("Widget", vec![]);

    let diff = compare(&newer, &older).unwrap();
    assert_eq!(diff.find("bar").unwrap().delta(), Delta::Added);
    assert_eq!(diff.delta(), Delta::Minor);
}

// S3: A removed child's if_removed default outranks lower severities
#[test]
fn test_removed_child_outranks_lower_children() {
    let newer = class(
        "Widget",
        vec![
            method("unchanged1"),
            method_with("added", Delta::Minor, Delta::Major),
        ],
    );
    let older = class(
        "Widget",
        vec![
            method("unchanged1"),
            method_with("baz", Delta::Minor, Delta::Major),
        ],
    );

    let diff = compare(&newer, &older).unwrap();
    assert_eq!(diff.find("baz").unwrap().delta(), Delta::Removed);
    assert_eq!(diff.delta(), Delta::Major);
}

// S4: CHANGED escalates an UNCHANGED accumulator but loses to MINOR
#[test]
fn test_changed_escalates_until_outranked() {
    let changed_only = class(
        "Widget",
        vec![method_with("note", Delta::Changed, Delta::Changed)],
    );
    let empty = class("Widget", vec![]);
    let diff = compare(&changed_only, &empty).unwrap();
    assert_eq!(diff.delta(), Delta::Changed);

    let changed_and_minor = class(
        "Widget",
        vec![
            method_with("note", Delta::Changed, Delta::Changed),
            method_with("run", Delta::Minor, Delta::Major),
        ],
    );
    let diff = compare(&changed_and_minor, &empty).unwrap();
    assert_eq!(diff.delta(), Delta::Minor);
}

// S5: MICRO sits between CHANGED and MINOR
#[test]
fn test_micro_escalation() {
    let empty = class("Widget", vec![]);
    let newer = class(
        "Widget",
        vec![
            method_with("note", Delta::Changed, Delta::Changed),
            method_with("tweak", Delta::Micro, Delta::Micro),
        ],
    );

    let diff = compare(&newer, &empty).unwrap();
    assert_eq!(diff.delta(), Delta::Micro);
}

// S6: All children unchanged leaves the parent unchanged
#[test]
fn test_all_unchanged_children_yield_unchanged() {
    let newer = class("Widget", vec![method("a"), method("b"), method("c")]);
    let older = newer.clone();

    let diff = compare(&newer, &older).unwrap();
    assert_eq!(diff.delta(), Delta::Unchanged);
}

// S7: A hook returning IGNORED contributes nothing at all
#[test]
fn test_ignored_hook_contributes_nothing() {
    let newer = class(
        "Widget",
        vec![method_with("shadow", Delta::Ignored, Delta::Ignored)],
    );
    let older = class("Widget", vec![]);

    let diff = compare(&newer, &older).unwrap();
    assert_eq!(diff.find("shadow").unwrap().delta(), Delta::Added);
    assert_eq!(diff.delta(), Delta::Unchanged);
}

// S8: Escalation propagates through intermediate levels
#[test]
fn test_deep_removal_escalates_to_root() {
    let newer = Element::structured(
        ElementType::Package,
        "com.example",
        vec![class("Widget", vec![method("init")])],
    );
    let older = Element::structured(
        ElementType::Package,
        "com.example",
        vec![class(
            "Widget",
            vec![method("init"), method_with("stop", Delta::Minor, Delta::Major)],
        )],
    );

    let diff = compare(&newer, &older).unwrap();
    assert_eq!(diff.find("Widget").unwrap().delta(), Delta::Major);
    assert_eq!(diff.delta(), Delta::Major);
}

// S9: A hook echoing REMOVED back is unusual; the lattice pins it to MAJOR
#[test]
fn test_hook_returning_removed_forces_major() {
    let newer = class("Widget", vec![]);
    let older = class(
        "Widget",
        vec![method_with("odd", Delta::Removed, Delta::Removed)],
    );

    let diff = compare(&newer, &older).unwrap();
    assert_eq!(diff.delta(), Delta::Major);
}

// S10: Same for a hook echoing ADDED - even though the accumulator is low
#[test]
fn test_hook_returning_added_forces_major() {
    let newer = class(
        "Widget",
        vec![method_with("odd", Delta::Added, Delta::Added)],
    );
    let older = class("Widget", vec![]);

    let diff = compare(&newer, &older).unwrap();
    assert_eq!(diff.delta(), Delta::Major);
}

// S11: The cached default equals an explicit no-ignore recomputation
#[test]
fn test_cached_delta_equals_recomputation() {
    let newer = Element::structured(
        ElementType::Package,
        "com.example",
        vec![
            class("Widget", vec![method("init"), method("run")]),
            class("Gadget", vec![method("poke")]),
        ],
    );
    let older = Element::structured(
        ElementType::Package,
        "com.example",
        vec![class("Widget", vec![method("init")])],
    );

    let diff = compare(&newer, &older).unwrap();
    assert_eq!(diff.delta(), diff.compute_delta(&NothingIgnored));
    for child in diff.children() {
        assert_eq!(child.delta(), child.compute_delta(&NothingIgnored));
    }
}

// S12: The parent is never below any child's post-substitution severity
// on the CHANGED..MAJOR chain
#[test]
fn test_escalation_monotonicity() {
    let newer = class(
        "Widget",
        vec![
            method("same"),
            method_with("a", Delta::Changed, Delta::Changed),
            method_with("b", Delta::Micro, Delta::Micro),
        ],
    );
    let older = class(
        "Widget",
        vec![method("same"), method_with("gone", Delta::Minor, Delta::Minor)],
    );

    let diff = compare(&newer, &older).unwrap();
    // contributions: a -> Changed, b -> Micro, gone -> Minor, same -> Unchanged
    assert_eq!(diff.delta(), Delta::Minor);
}
