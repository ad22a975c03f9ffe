//! Shelf-stacking container packer.

use crate::shelf::stack_items;
use rayon::prelude::*;
use std::time::Instant;
use stowage_core::{ContainerKind, Envelope, ItemDefinition, PackResult, Packer, PlacementRecord};

/// Greedy single-pass shelf packer.
///
/// Items are processed strictly in input order; stackable and fragile flags
/// are carried through but do not influence placement.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShelfPacker;

impl ShelfPacker {
    /// Strategy name recorded in results.
    pub const NAME: &'static str = "Shelf";

    /// Creates a new packer.
    pub fn new() -> Self {
        Self
    }

    /// Packs the same items into each envelope, one independent run per
    /// envelope, in parallel. Results are returned in envelope order.
    pub fn pack_each(&self, items: &[ItemDefinition], envelopes: &[Envelope]) -> Vec<PackResult> {
        envelopes
            .par_iter()
            .map(|envelope| self.pack(items, envelope))
            .collect()
    }

    /// Packs the items into every registered standard container.
    pub fn pack_registry(&self, items: &[ItemDefinition]) -> Vec<(ContainerKind, PackResult)> {
        let envelopes: Vec<Envelope> = ContainerKind::ALL
            .iter()
            .map(|kind| kind.envelope())
            .collect();

        ContainerKind::ALL
            .into_iter()
            .zip(self.pack_each(items, &envelopes))
            .collect()
    }
}

impl Packer for ShelfPacker {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn pack(&self, items: &[ItemDefinition], envelope: &Envelope) -> PackResult {
        let start = Instant::now();

        let state = stack_items(items, envelope);

        let mut result = PackResult::new(*envelope).with_strategy(Self::NAME);
        result.outcomes = state.outcomes;
        result.final_cursor = state.cursor;
        result.computation_time_ms = start.elapsed().as_millis() as u64;

        log::info!(
            "Packed {} of {} unit(s) into {:.0}x{:.0}x{:.0} ({} utilization)",
            result.placed_count(),
            result.requested_count(),
            envelope.length(),
            envelope.width(),
            envelope.height(),
            result.utilization_percent()
        );

        result
    }
}

/// Packs `items` into `envelope` and returns the placed records in order.
///
/// Units that do not fit are omitted; use [`ShelfPacker`] through the
/// [`Packer`] trait to see why.
pub fn pack(items: &[ItemDefinition], envelope: &Envelope) -> Vec<PlacementRecord> {
    ShelfPacker::new().placements(items, envelope)
}
