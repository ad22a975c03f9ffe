//! Packer trait.

use crate::envelope::Envelope;
use crate::item::ItemDefinition;
use crate::placement::PlacementRecord;
use crate::result::PackResult;

/// Trait for container packing strategies.
///
/// Packing is infallible: units that cannot be placed show up as skipped
/// outcomes in the [`PackResult`]. Implementations hold no per-run state, so a
/// single packer may serve concurrent calls.
pub trait Packer: Send + Sync {
    /// Short strategy name recorded in results.
    fn name(&self) -> &'static str;

    /// Packs `items` into `envelope`, reporting an outcome for every unit.
    fn pack(&self, items: &[ItemDefinition], envelope: &Envelope) -> PackResult;

    /// Packs `items` into `envelope`, returning only the placed records.
    fn placements(&self, items: &[ItemDefinition], envelope: &Envelope) -> Vec<PlacementRecord> {
        self.pack(items, envelope).into_placements()
    }
}
