//! Diff output projection types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Children are ordered `Vec`s, so serialization is deterministic.

use serde::{Deserialize, Serialize};

use crate::model::{Delta, ElementType};

/// Plain, fully-owned, acyclic record mirroring a diff node tree.
///
/// This is the transport shape handed to serializers and report generators
/// outside the core. The recorded `delta` is the default (no-suppression)
/// severity; children appear in merged order, recursively projected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiffRecord {
    /// Category tag of whichever side was present
    #[serde(rename = "type")]
    pub element_type: ElementType,
    /// Default severity, no ignore policy applied
    pub delta: Delta,
    /// Name of whichever side was present
    pub name: String,
    /// Child records in merged order
    pub children: Vec<DiffRecord>,
}
