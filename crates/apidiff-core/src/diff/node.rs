//! Diff node construction and delta escalation.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::Instant;

use crate::diff::lattice::escalate;
use crate::diff::model::DiffRecord;
use crate::errors::{ApiDiffError, Result};
use crate::model::{Delta, ElementType, TreeNode};
use crate::policy::IgnorePolicy;
use crate::{log_op_end, log_op_error, log_op_start};

/// The sides of a comparison. "Both absent" is rejected at construction, so
/// exactly one variant applies to every node.
#[derive(Debug)]
enum Sides<'a, T> {
    Both { newer: &'a T, older: &'a T },
    Added { newer: &'a T },
    Removed { older: &'a T },
}

impl<T> Clone for Sides<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Sides<'_, T> {}

/// A comparison result pairing a newer and an older tree node, or carrying
/// one side only (a pure addition or removal).
///
/// Construction recursively pairs the two sides' pre-sorted children with a
/// single-pass ordered merge and caches the default severity. The node is
/// immutable afterwards and exclusively owns its children; it borrows the
/// two input trees, which must not be mutated while the diff is alive.
///
/// Equality, ordering and hashing use the (delta, type, name) triple. Two
/// nodes with the same triple are equal even when their underlying trees
/// differ; this supports sorting and de-duplicating change reports, not
/// structural tree equivalence.
#[derive(Debug)]
pub struct DiffNode<'a, T: TreeNode> {
    sides: Sides<'a, T>,
    children: Vec<DiffNode<'a, T>>,
    delta: Delta,
}

impl<'a, T: TreeNode> DiffNode<'a, T> {
    /// Compare `newer` against `older`, traversing the children.
    ///
    /// Either side may be absent, indicating a pure addition or removal.
    ///
    /// # Errors
    ///
    /// - [`ApiDiffError::EmptyComparison`] if both sides are absent
    /// - [`ApiDiffError::TypeMismatch`] if both sides are present but carry
    ///   different type tags (the merge never produces such a pairing; this
    ///   surfaces direct caller misuse)
    pub fn new(newer: Option<&'a T>, older: Option<&'a T>) -> Result<Self> {
        let sides = match (newer, older) {
            (Some(nw), Some(ol)) => {
                if nw.element_type() != ol.element_type() {
                    return Err(ApiDiffError::TypeMismatch {
                        name: nw.name().to_string(),
                        newer: nw.element_type(),
                        older: ol.element_type(),
                    });
                }
                Sides::Both {
                    newer: nw,
                    older: ol,
                }
            }
            (Some(nw), None) => Sides::Added { newer: nw },
            (None, Some(ol)) => Sides::Removed { older: ol },
            (None, None) => return Err(ApiDiffError::EmptyComparison),
        };

        let newer_children = newer.map(|t| t.children()).unwrap_or(&[]);
        let older_children = older.map(|t| t.children()).unwrap_or(&[]);
        let children = merge_children(newer_children, older_children)?;
        let delta = default_delta(&sides, &children);

        Ok(Self {
            sides,
            children,
            delta,
        })
    }

    /// The default severity: no suppression, computed once at construction.
    pub fn delta(&self) -> Delta {
        self.delta
    }

    /// Severity of this node under the supplied ignore policy.
    ///
    /// Unlike [`delta`](DiffNode::delta), this re-walks the subtree so the
    /// policy can suppress arbitrary descendants; a flagged node reports
    /// [`Delta::Ignored`] immediately and contributes nothing upward.
    pub fn compute_delta<P>(&self, ignore: &P) -> Delta
    where
        P: IgnorePolicy<T> + ?Sized,
    {
        if ignore.is_ignored(self) {
            return Delta::Ignored;
        }
        match &self.sides {
            Sides::Removed { .. } => Delta::Removed,
            Sides::Added { .. } => Delta::Added,
            Sides::Both { .. } => {
                let mut local = Delta::Unchanged;
                for child in &self.children {
                    let sub = child.substituted(child.compute_delta(ignore));
                    local = escalate(local, sub);
                }
                local
            }
        }
    }

    /// Category tag of whichever side is present.
    pub fn element_type(&self) -> ElementType {
        self.primary().element_type()
    }

    /// Name of whichever side is present.
    pub fn name(&self) -> &str {
        self.primary().name()
    }

    /// Ordered, read-only view of the child diff nodes.
    pub fn children(&self) -> &[DiffNode<'a, T>] {
        &self.children
    }

    /// The newer side; absent for a pure removal.
    pub fn newer(&self) -> Option<&'a T> {
        match self.sides {
            Sides::Both { newer, .. } | Sides::Added { newer } => Some(newer),
            Sides::Removed { .. } => None,
        }
    }

    /// The older side; absent for a pure addition.
    pub fn older(&self) -> Option<&'a T> {
        match self.sides {
            Sides::Both { older, .. } => Some(older),
            Sides::Removed { older } => Some(older),
            Sides::Added { .. } => None,
        }
    }

    /// First direct child named `name`, if any. Names are expected to be
    /// unique among siblings but the engine does not enforce it.
    pub fn find(&self, name: &str) -> Option<&DiffNode<'a, T>> {
        self.children.iter().find(|child| child.name() == name)
    }

    /// Total number of diff nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DiffNode::node_count)
            .sum::<usize>()
    }

    /// Project into a plain owned record tree for serialization.
    pub fn to_record(&self) -> DiffRecord {
        DiffRecord {
            element_type: self.element_type(),
            delta: self.delta,
            name: self.name().to_string(),
            children: self.children.iter().map(DiffNode::to_record).collect(),
        }
    }

    /// Replace a terminal one-sided severity with the default the element
    /// on the present side declares for it. Plain severities pass through.
    fn substituted(&self, sub: Delta) -> Delta {
        match (sub, &self.sides) {
            (Delta::Removed, Sides::Removed { older }) => older.if_removed(),
            (Delta::Added, Sides::Added { newer }) => newer.if_added(),
            _ => sub,
        }
    }

    fn primary(&self) -> &'a T {
        match self.sides {
            Sides::Both { newer, .. } | Sides::Added { newer } => newer,
            Sides::Removed { older } => older,
        }
    }
}

/// Ordered merge-join over two pre-sorted child slices.
///
/// Every child from both sides is covered exactly once, in merged order;
/// the relative order of each input is preserved. Pairing relies on the
/// inputs being sorted by the comparator the nodes expose - unsorted
/// children can miss matches.
fn merge_children<'a, T: TreeNode>(
    newer: &'a [T],
    older: &'a [T],
) -> Result<Vec<DiffNode<'a, T>>> {
    let mut children = Vec::with_capacity(newer.len().max(older.len()));
    let mut n = 0;
    let mut o = 0;
    loop {
        let diff = match (newer.get(n), older.get(o)) {
            (None, None) => break,
            (Some(nw), Some(ol)) => match nw.compare(ol) {
                Ordering::Equal => {
                    n += 1;
                    o += 1;
                    DiffNode::new(Some(nw), Some(ol))?
                }
                // newer is ahead: the older element has no counterpart
                Ordering::Greater => {
                    o += 1;
                    DiffNode::new(None, Some(ol))?
                }
                // older is ahead: the newer element has no counterpart
                Ordering::Less => {
                    n += 1;
                    DiffNode::new(Some(nw), None)?
                }
            },
            (Some(nw), None) => {
                n += 1;
                DiffNode::new(Some(nw), None)?
            }
            (None, Some(ol)) => {
                o += 1;
                DiffNode::new(None, Some(ol))?
            }
        };
        children.push(diff);
    }
    Ok(children)
}

/// Construction-time default severity, folded from the children's cached
/// defaults. Equal to `compute_delta(&NothingIgnored)` without re-walking
/// the subtree.
fn default_delta<T: TreeNode>(sides: &Sides<'_, T>, children: &[DiffNode<'_, T>]) -> Delta {
    match sides {
        Sides::Removed { .. } => Delta::Removed,
        Sides::Added { .. } => Delta::Added,
        Sides::Both { .. } => {
            let mut local = Delta::Unchanged;
            for child in children {
                let sub = child.substituted(child.delta);
                local = escalate(local, sub);
            }
            local
        }
    }
}

/// Compare two versions of an API description tree.
///
/// Convenience entry point for the two-sided case; emits structured
/// op-start/op-end log events around [`DiffNode::new`]. The recursive
/// internals stay silent.
///
/// # Errors
///
/// Propagates construction errors from [`DiffNode::new`].
pub fn compare<'a, T: TreeNode>(newer: &'a T, older: &'a T) -> Result<DiffNode<'a, T>> {
    let started = Instant::now();
    log_op_start!("compare", element = newer.name());
    match DiffNode::new(Some(newer), Some(older)) {
        Ok(diff) => {
            log_op_end!(
                "compare",
                duration_ms = started.elapsed().as_millis() as u64,
                delta = %diff.delta(),
                node_count = diff.node_count() as u64
            );
            Ok(diff)
        }
        Err(err) => {
            log_op_error!(
                "compare",
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

impl<T: TreeNode> PartialEq for DiffNode<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.delta == other.delta
            && self.element_type() == other.element_type()
            && self.name() == other.name()
    }
}

impl<T: TreeNode> Eq for DiffNode<'_, T> {}

impl<T: TreeNode> Hash for DiffNode<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.delta.hash(state);
        self.element_type().hash(state);
        self.name().hash(state);
    }
}

impl<T: TreeNode> PartialOrd for DiffNode<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: TreeNode> Ord for DiffNode<'_, T> {
    // Delta first, then type, then name: the report sort key.
    fn cmp(&self, other: &Self) -> Ordering {
        self.delta
            .cmp(&other.delta)
            .then_with(|| self.element_type().cmp(&other.element_type()))
            .then_with(|| self.name().cmp(other.name()))
    }
}

impl<T: TreeNode> fmt::Display for DiffNode<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} {:<10} {}",
            self.delta,
            self.element_type(),
            self.name()
        )
    }
}
