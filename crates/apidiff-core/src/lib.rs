//! apidiff core - structural diff engine for hierarchical API descriptions
//!
//! This crate compares two versions ("newer" and "older") of a hierarchical
//! API description - packages, types, members, annotations, manifest clauses -
//! and classifies every change by severity, escalated bottom-up through a
//! fixed transition lattice. The result drives semantic-version bump
//! decisions and change reports. It provides:
//!
//! - The [`Delta`] severity model and the escalation lattice
//! - The [`TreeNode`] collaborator contract and a generic [`Element`] node
//! - [`DiffNode`] construction via an ordered merge over sorted children
//! - Ignore policies for suppressing accepted changes from escalation
//! - A plain [`DiffRecord`] projection for serialization
//! - Structured error and logging facilities
//!
//! The engine is purely functional: construction and escalation are pure
//! recursive computations over immutable inputs, with no I/O and no shared
//! mutable state.

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod policy;

// Re-export commonly used types
pub use diff::{compare, DiffNode, DiffRecord};
pub use errors::{ApiDiffError, DiffError, DiffErrorKind, Result};
pub use model::{Delta, Element, ElementType, TreeNode};
pub use policy::{IgnoreFn, IgnorePolicy, IgnoredNames, NothingIgnored};
