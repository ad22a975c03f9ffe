//! # Stowage
//!
//! Shipping-container load planning.
//!
//! This crate provides:
//! - **Item catalog**: schema-checked loading of tabular item lists
//! - **Container registry**: interior envelopes of standard 20ft, 40ft and 40ft HC containers
//! - **Shelf packing**: greedy row/layer placement of item units into a container
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stowage::{catalog, ContainerKind, Packer, ShelfPacker};
//!
//! let items = catalog::load_csv_path("items.csv")?;
//! let envelope = ContainerKind::Standard20.envelope();
//!
//! let result = ShelfPacker::new().pack(&items, &envelope);
//! println!("Packed {} of {} units", result.placed_count(), result.requested_count());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support and JSON load requests

/// Data model, catalog and container registry.
pub use stowage_core as core;

/// Shelf-stacking placement engine.
pub use stowage_shelf as shelf;

pub use stowage_core::catalog;

// Re-export commonly used types at root level
pub use stowage_core::{
    ContainerKind, Envelope, Error, ItemDefinition, PackResult, PackSummary, Packer,
    PlacementRecord, Result, SkipReason, Table, UnitOutcome,
};
pub use stowage_shelf::{pack, ShelfPacker};
