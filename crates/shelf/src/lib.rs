//! # Stowage Shelf
//!
//! Greedy shelf-stacking placement engine for the Stowage container load
//! planner.
//!
//! The engine expands each item definition into its units and places them in
//! a single pass, row by row and layer by layer, without reordering or
//! rotation. It never fails: units that do not fit are reported as skipped.

pub mod packer;
pub mod shelf;

// Re-exports
pub use packer::{pack, ShelfPacker};
pub use shelf::{advance, stack_items, Advance, ShelfState};
pub use stowage_core::{
    ContainerKind, Cursor, Envelope, Error, ItemDefinition, PackResult, PackSummary, Packer,
    PlacementRecord, Result, SkipReason, UnitOutcome,
};
