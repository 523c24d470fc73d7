//! Tree-node contract and the generic in-memory element.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::delta::Delta;

/// Category tag carried by every tree node.
///
/// The engine treats the tag as opaque: beyond ordering and equality it
/// assigns no meaning to `Package`, `Class` or `Manifest`. The declaration
/// order is the comparison order and takes precedence over the name when
/// sorting siblings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementType {
    Access,
    Bundle,
    Api,
    Manifest,
    Package,
    Class,
    Interface,
    Annotation,
    Enum,
    Extends,
    Implements,
    Field,
    Method,
    Annotated,
    Property,
    Resource,
    Custom,
    Clause,
    Header,
    Parameter,
    ClassVersion,
    Resources,
    Constant,
    Return,
    Version,
    Deprecated,
    Repo,
    Program,
    Revision,
}

impl ElementType {
    /// Stable screaming-snake name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Access => "ACCESS",
            ElementType::Bundle => "BUNDLE",
            ElementType::Api => "API",
            ElementType::Manifest => "MANIFEST",
            ElementType::Package => "PACKAGE",
            ElementType::Class => "CLASS",
            ElementType::Interface => "INTERFACE",
            ElementType::Annotation => "ANNOTATION",
            ElementType::Enum => "ENUM",
            ElementType::Extends => "EXTENDS",
            ElementType::Implements => "IMPLEMENTS",
            ElementType::Field => "FIELD",
            ElementType::Method => "METHOD",
            ElementType::Annotated => "ANNOTATED",
            ElementType::Property => "PROPERTY",
            ElementType::Resource => "RESOURCE",
            ElementType::Custom => "CUSTOM",
            ElementType::Clause => "CLAUSE",
            ElementType::Header => "HEADER",
            ElementType::Parameter => "PARAMETER",
            ElementType::ClassVersion => "CLASS_VERSION",
            ElementType::Resources => "RESOURCES",
            ElementType::Constant => "CONSTANT",
            ElementType::Return => "RETURN",
            ElementType::Version => "VERSION",
            ElementType::Deprecated => "DEPRECATED",
            ElementType::Repo => "REPO",
            ElementType::Program => "PROGRAM",
            ElementType::Revision => "REVISION",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Contract required of the hierarchical API description being compared.
///
/// Implementations must keep [`children`](TreeNode::children) sorted by the
/// same total order [`compare`](TreeNode::compare) exposes; the merge relies
/// on this and does not validate it at runtime. `Ordering::Equal` means
/// "same identity" and causes two nodes to be paired for recursive
/// comparison. Uniqueness of sibling names is the implementor's concern.
pub trait TreeNode {
    /// Category tag, opaque to the engine beyond ordering and equality.
    fn element_type(&self) -> ElementType;

    /// Name identifying this node among its siblings.
    fn name(&self) -> &str;

    /// Ordered, pre-sorted children; empty for leaves.
    fn children(&self) -> &[Self]
    where
        Self: Sized;

    /// Default severity when this node exists only on the newer side.
    fn if_added(&self) -> Delta;

    /// Default severity when this node exists only on the older side.
    fn if_removed(&self) -> Delta;

    /// Total order among siblings, consistent with the child sort order.
    fn compare(&self, other: &Self) -> Ordering;
}

/// Generic in-memory tree node.
///
/// An `Element` is either structured (has children) or a leaf. It carries
/// the two default severities reported when the whole element appears on
/// one side only; the conventional semantic-versioning stance is
/// `Minor` for an addition and `Major` for a removal, which is what
/// [`Element::structured`] and [`Element::leaf`] use.
///
/// Children are sorted at construction by (type, name); ordering and
/// equality of elements themselves use the same (type, name) key and
/// deliberately ignore children.
#[derive(Debug, Clone)]
pub struct Element {
    element_type: ElementType,
    name: String,
    children: Vec<Element>,
    add: Delta,
    remove: Delta,
}

impl Element {
    /// Create an element with explicit one-sided default severities.
    pub fn new(
        element_type: ElementType,
        name: impl Into<String>,
        children: Vec<Element>,
        add: Delta,
        remove: Delta,
    ) -> Self {
        let mut children = children;
        children.sort();
        Self {
            element_type,
            name: name.into(),
            children,
            add,
            remove,
        }
    }

    /// Create a structured element with the conventional semver defaults.
    pub fn structured(
        element_type: ElementType,
        name: impl Into<String>,
        children: Vec<Element>,
    ) -> Self {
        Self::new(element_type, name, children, Delta::Minor, Delta::Major)
    }

    /// Create a childless element with the conventional semver defaults.
    pub fn leaf(element_type: ElementType, name: impl Into<String>) -> Self {
        Self::new(element_type, name, Vec::new(), Delta::Minor, Delta::Major)
    }
}

impl TreeNode for Element {
    fn element_type(&self) -> ElementType {
        self.element_type
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn if_added(&self) -> Delta {
        self.add
    }

    fn if_removed(&self) -> Delta {
        self.remove
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.element_type == other.element_type && self.name == other.name
    }
}

impl Eq for Element {}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element {
    // Type before name: the sort key the merge pairs siblings by.
    fn cmp(&self, other: &Self) -> Ordering {
        self.element_type
            .cmp(&other.element_type)
            .then_with(|| self.name.cmp(&other.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_sorted_at_construction() {
        let e = Element::structured(
            ElementType::Class,
            "Widget",
            vec![
                Element::leaf(ElementType::Method, "zoom"),
                Element::leaf(ElementType::Field, "size"),
                Element::leaf(ElementType::Method, "init"),
            ],
        );
        let names: Vec<&str> = e.children().iter().map(|c| c.name()).collect();
        // Field orders before Method, then by name within a type
        assert_eq!(names, vec!["size", "init", "zoom"]);
    }

    #[test]
    fn test_ordering_ignores_children() {
        let a = Element::structured(
            ElementType::Class,
            "Widget",
            vec![Element::leaf(ElementType::Method, "init")],
        );
        let b = Element::leaf(ElementType::Class, "Widget");
        assert_eq!(a, b);
        assert_eq!(a.compare(&b), Ordering::Equal);
    }

    #[test]
    fn test_type_precedes_name() {
        let pkg = Element::leaf(ElementType::Package, "zzz");
        let class = Element::leaf(ElementType::Class, "aaa");
        assert!(pkg < class);
    }

    #[test]
    fn test_semver_defaults() {
        let e = Element::leaf(ElementType::Method, "run");
        assert_eq!(e.if_added(), Delta::Minor);
        assert_eq!(e.if_removed(), Delta::Major);
    }

    #[test]
    fn test_explicit_defaults() {
        let e = Element::new(
            ElementType::Header,
            "Export-Package",
            Vec::new(),
            Delta::Changed,
            Delta::Changed,
        );
        assert_eq!(e.if_added(), Delta::Changed);
        assert_eq!(e.if_removed(), Delta::Changed);
    }
}
