//! Structural diff engine.
//!
//! Compares a newer against an older API description tree and produces a
//! [`DiffNode`] tree in which every node carries a severity classification,
//! escalated bottom-up through the transition lattice.
//!
//! ## Entry point
//!
//! ```ignore
//! use apidiff_core::compare;
//!
//! let diff = compare(&newer, &older)?;
//! let severity = diff.delta();
//! let record = diff.to_record();
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce an identical diff tree and
//!   identical serialized projections.
//! - **Order preservation**: children appear in the merged order of the two
//!   input child sequences and are never reordered afterward.
//! - **Immutability**: a constructed diff tree never changes; suppression
//!   queries via [`DiffNode::compute_delta`] recompute without mutating.
//! - **Domain agnosticism**: the engine knows nothing about packages,
//!   classes or manifests beyond the opaque type tag and the ordering the
//!   tree nodes expose.

mod lattice;
pub mod model;
mod node;

pub use model::DiffRecord;
pub use node::{compare, DiffNode};
