//! Greedy shelf stacking.
//!
//! Units are laid left-to-right along the container length in rows, rows are
//! laid front-to-back across the width to form a layer, and layers stack
//! bottom-to-top. The whole run is a single pass in input order with no
//! backtracking.
//!
//! # Algorithm
//!
//! For each unit `(l, w, h)` against envelope `(L, W, H)`:
//! 1. Row wrap: if `x + l > L`, set `x = 0` and `y += w`
//! 2. Layer wrap: if `y + w > W`, set `y = 0`, `z += layer_height`, `layer_height = 0`
//! 3. Height check: if `z + h > H`, drop the unit and abandon the rest of its
//!    definition's quantity run
//! 4. Commit at `(x, y, z)`, then `x += l` and `layer_height = max(layer_height, h)`
//!
//! The row wrap advances `y` by the incoming unit's own width rather than the
//! depth of the row just closed. Rows of mixed widths can therefore overlap
//! across the y axis.
//!
//! Units with a zero, negative or NaN dimension, and units longer or wider
//! than the envelope, are rejected before any of the above. The cursor is
//! left untouched and the rest of that definition's run is skipped with them,
//! since every unit of a run shares the same extent.

use nalgebra::Vector3;
use stowage_core::{
    Cursor, Envelope, ItemDefinition, PlacementRecord, PlacementUnit, SkipReason, UnitOutcome,
};

/// Result of offering one unit to the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advance {
    /// The unit fits; it goes at `anchor` and the cursor moves on.
    Placed {
        anchor: Vector3<f64>,
        cursor: Cursor,
    },
    /// The unit does not fit. `cursor` keeps any row or layer wrap that
    /// happened before the rejection.
    Rejected { reason: SkipReason, cursor: Cursor },
}

/// Computes the cursor transition for a unit of the given extent.
///
/// This is a pure function of its inputs.
pub fn advance(cursor: Cursor, extent: &Vector3<f64>, envelope: &Envelope) -> Advance {
    let (l, w, h) = (extent.x, extent.y, extent.z);

    // Written as a negation so NaN is caught too.
    if !(l > 0.0 && w > 0.0 && h > 0.0) {
        return Advance::Rejected {
            reason: SkipReason::Degenerate,
            cursor,
        };
    }

    if l > envelope.length() || w > envelope.width() {
        return Advance::Rejected {
            reason: SkipReason::Oversize,
            cursor,
        };
    }

    let mut next = cursor;

    if next.x + l > envelope.length() {
        next.x = 0.0;
        next.y += w;
    }

    if next.y + w > envelope.width() {
        next.y = 0.0;
        next.z += next.layer_height;
        next.layer_height = 0.0;
    }

    if next.z + h > envelope.height() {
        return Advance::Rejected {
            reason: SkipReason::HeightExceeded,
            cursor: next,
        };
    }

    let anchor = Vector3::new(next.x, next.y, next.z);
    next.x += l;
    next.layer_height = next.layer_height.max(h);

    Advance::Placed {
        anchor,
        cursor: next,
    }
}

/// Accumulator threaded through a shelf-stacking run.
#[derive(Debug, Clone, Default)]
pub struct ShelfState {
    /// Current cursor.
    pub cursor: Cursor,
    /// Outcomes so far, in unit order.
    pub outcomes: Vec<UnitOutcome>,
}

impl ShelfState {
    /// A fresh state at the container origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the quantity run of one definition and returns the updated state.
    ///
    /// Units are generated lazily. The first rejection ends the run: the
    /// units after it are recorded as a single skipped outcome and never
    /// generated.
    pub fn run(
        mut self,
        source_index: usize,
        item: &ItemDefinition,
        envelope: &Envelope,
    ) -> Self {
        let quantity = item.quantity();

        for unit in item.units(source_index) {
            match advance(self.cursor, &unit.dimensions, envelope) {
                Advance::Placed { anchor, cursor } => {
                    if anchor.x == 0.0 && self.cursor.x > 0.0 {
                        log::trace!(
                            "'{}' #{} wrapped to row y={} z={}",
                            unit.item_id,
                            unit.instance,
                            anchor.y,
                            anchor.z
                        );
                    }
                    self.cursor = cursor;
                    self.outcomes
                        .push(UnitOutcome::Placed(PlacementRecord::new(&unit, anchor)));
                }
                Advance::Rejected { reason, cursor } => {
                    let remaining = quantity - unit.instance;
                    log::debug!(
                        "Dropped '{}' #{} (row {}): {:?} at z={}, {} unit(s) left in run",
                        unit.item_id,
                        unit.instance,
                        unit.source_index,
                        reason,
                        cursor.z,
                        remaining - 1
                    );
                    self.cursor = cursor;
                    self.reject(unit, reason, remaining);
                    break;
                }
            }
        }

        self
    }

    /// Records a rejection covering `remaining` units, starting at `unit`.
    fn reject(&mut self, unit: PlacementUnit, reason: SkipReason, remaining: usize) {
        if reason != SkipReason::HeightExceeded {
            // The rest of the run has the same extent and fails the same way.
            self.outcomes.push(UnitOutcome::Skipped {
                unit,
                reason,
                count: remaining,
            });
            return;
        }

        let rest = (remaining > 1).then(|| PlacementUnit {
            instance: unit.instance + 1,
            ..unit.clone()
        });
        self.outcomes.push(UnitOutcome::Skipped {
            unit,
            reason,
            count: 1,
        });
        if let Some(next) = rest {
            self.outcomes.push(UnitOutcome::Skipped {
                unit: next,
                reason: SkipReason::RunAbandoned,
                count: remaining - 1,
            });
        }
    }
}

/// Runs the shelf fold over every definition, in input order, and returns
/// the final state.
pub fn stack_items(items: &[ItemDefinition], envelope: &Envelope) -> ShelfState {
    items
        .iter()
        .enumerate()
        .fold(ShelfState::new(), |state, (idx, item)| {
            state.run(idx, item, envelope)
        })
}
