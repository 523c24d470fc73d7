//! Severity classification of structural changes.

use serde::{Deserialize, Serialize};

/// Severity of a structural change.
///
/// The declaration order is load-bearing: it defines the comparison order
/// used when sorting change reports and the row/column index into the
/// escalation lattice. `Removed` and `Added` are terminal one-sided states;
/// a parent substitutes them through the absent side's
/// [`TreeNode::if_removed`]/[`TreeNode::if_added`] hooks before escalation,
/// so they never appear as an escalated parent severity.
///
/// [`TreeNode::if_removed`]: crate::model::TreeNode::if_removed
/// [`TreeNode::if_added`]: crate::model::TreeNode::if_added
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Delta {
    /// Suppressed by an ignore policy; contributes nothing to escalation
    Ignored,
    /// No observable difference
    Unchanged,
    /// A difference with no versioning consequence of its own
    Changed,
    /// Build-level change (patch segment)
    Micro,
    /// Backward-compatible change (minor segment)
    Minor,
    /// Breaking change (major segment)
    Major,
    /// Present on the older side only
    Removed,
    /// Present on the newer side only
    Added,
}

impl Delta {
    /// Stable uppercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Delta::Ignored => "IGNORED",
            Delta::Unchanged => "UNCHANGED",
            Delta::Changed => "CHANGED",
            Delta::Micro => "MICRO",
            Delta::Minor => "MINOR",
            Delta::Major => "MAJOR",
            Delta::Removed => "REMOVED",
            Delta::Added => "ADDED",
        }
    }
}

impl std::fmt::Display for Delta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order_is_comparison_order() {
        assert!(Delta::Ignored < Delta::Unchanged);
        assert!(Delta::Unchanged < Delta::Changed);
        assert!(Delta::Changed < Delta::Micro);
        assert!(Delta::Micro < Delta::Minor);
        assert!(Delta::Minor < Delta::Major);
        assert!(Delta::Major < Delta::Removed);
        assert!(Delta::Removed < Delta::Added);
    }

    #[test]
    fn test_serialized_names_are_uppercase() {
        let json = serde_json::to_string(&Delta::Micro).unwrap();
        assert_eq!(json, "\"MICRO\"");
        let back: Delta = serde_json::from_str("\"MAJOR\"").unwrap();
        assert_eq!(back, Delta::Major);
    }

    #[test]
    fn test_display_honors_padding() {
        assert_eq!(format!("{:<10}|", Delta::Minor), "MINOR     |");
    }
}
