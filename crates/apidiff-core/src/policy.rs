//! Ignore policy trait and implementations
//!
//! This module defines the `IgnorePolicy` trait, which determines whether a
//! diff node's contribution to severity escalation is suppressed.

use std::collections::HashSet;

use crate::diff::DiffNode;
use crate::model::TreeNode;

/// Policy trait for suppressing diff nodes during escalation
///
/// A flagged node reports `Delta::Ignored` and contributes nothing to its
/// ancestors' severity; it still appears in the diff tree and its record
/// projection. This is how known, accepted changes (e.g. deprecated-but-
/// stable differences) are kept out of the version-bump decision without
/// disappearing from the report.
///
/// Policies are evaluated per node during [`DiffNode::compute_delta`],
/// repeatedly and potentially concurrently, with no ordering between calls;
/// implementations should be stateless or externally synchronized.
pub trait IgnorePolicy<T: TreeNode> {
    /// Check whether this diff node is suppressed
    ///
    /// # Returns
    /// * `true` - the node reports `Ignored` and escalates nothing
    /// * `false` - the node participates in escalation normally
    fn is_ignored(&self, node: &DiffNode<'_, T>) -> bool;
}

/// Policy that suppresses nothing
///
/// This is the policy behind the cached default severity; supplying it to
/// [`DiffNode::compute_delta`] reproduces [`DiffNode::delta`] exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct NothingIgnored;

impl<T: TreeNode> IgnorePolicy<T> for NothingIgnored {
    fn is_ignored(&self, _node: &DiffNode<'_, T>) -> bool {
        false
    }
}

/// Policy that suppresses nodes whose name is in an explicit set
///
/// # Example
/// ```
/// use apidiff_core::{Element, ElementType, IgnorePolicy, IgnoredNames};
///
/// let policy = IgnoredNames::from_names(["getLegacyHandle"]);
/// let newer = Element::leaf(ElementType::Class, "Widget");
/// let older = Element::leaf(ElementType::Class, "Widget");
/// let diff = apidiff_core::compare(&newer, &older).unwrap();
/// assert!(!policy.is_ignored(&diff));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IgnoredNames {
    names: HashSet<String>,
}

impl IgnoredNames {
    /// Create a policy from an explicit name set
    pub fn new(names: HashSet<String>) -> Self {
        Self { names }
    }

    /// Create a policy from anything yielding names
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: TreeNode> IgnorePolicy<T> for IgnoredNames {
    fn is_ignored(&self, node: &DiffNode<'_, T>) -> bool {
        self.names.contains(node.name())
    }
}

/// Adapter turning a closure into a policy
///
/// Matching by path, type tag or any other shape a caller needs is a
/// one-liner: `IgnoreFn(|node| node.name().starts_with("internal."))`.
#[derive(Debug, Clone, Copy)]
pub struct IgnoreFn<F>(pub F);

impl<T, F> IgnorePolicy<T> for IgnoreFn<F>
where
    T: TreeNode,
    F: Fn(&DiffNode<'_, T>) -> bool,
{
    fn is_ignored(&self, node: &DiffNode<'_, T>) -> bool {
        (self.0)(node)
    }
}
