//! Escalation transition lattice.

use crate::model::Delta::{
    self, Changed, Ignored, Major, Micro, Minor, Unchanged,
};

/// Accumulator columns: the plain severities `Ignored..=Major`. The
/// accumulator never leaves this range; terminal severities are substituted
/// through the one-sided hooks before lookup.
const PLAIN_COLUMNS: usize = 6;

/// Escalation table. The row is the incoming child severity (after terminal
/// substitution), the column is the current accumulator, the cell is the new
/// accumulator.
///
/// `Ignored` and `Unchanged` rows are identity rows: they return the
/// accumulator exactly as-is rather than applying a max, so an ignored child
/// cannot push the accumulator anywhere. The `Changed..=Major` rows are
/// plain max on the declaration order. The terminal `Removed`/`Added` rows
/// force `Major` regardless of column; they are reachable only when a
/// one-sided hook echoes the terminal state back.
const TRANSITIONS: [[Delta; PLAIN_COLUMNS]; 8] = [
    [Ignored, Unchanged, Changed, Micro, Minor, Major], // Ignored
    [Ignored, Unchanged, Changed, Micro, Minor, Major], // Unchanged
    [Changed, Changed, Changed, Micro, Minor, Major],   // Changed
    [Micro, Micro, Micro, Micro, Minor, Major],         // Micro
    [Minor, Minor, Minor, Minor, Minor, Major],         // Minor
    [Major, Major, Major, Major, Major, Major],         // Major
    [Major, Major, Major, Major, Major, Major],         // Removed
    [Major, Major, Major, Major, Major, Major],         // Added
];

/// Fold one child severity into the accumulator.
pub(crate) fn escalate(current: Delta, incoming: Delta) -> Delta {
    debug_assert!((current as usize) < PLAIN_COLUMNS);
    TRANSITIONS[incoming as usize][current as usize]
}
