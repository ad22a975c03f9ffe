//! # Stowage Core
//!
//! Data model and input handling for the Stowage container load planner.
//!
//! This crate provides the types shared between the placement engine and its
//! front ends: item definitions, container envelopes, placement records and
//! results, plus the item catalog that turns tabular input into items.
//!
//! ## Core Components
//!
//! - **Catalog**: `Table`, `load` — schema gate for tabular item input
//! - **Items**: `ItemDefinition`, `PlacementUnit`
//! - **Containers**: `Envelope`, `ContainerKind`, the standard size registry
//! - **Results**: `PlacementRecord`, `UnitOutcome`, `PackResult`, `PackSummary`
//! - **Packer trait**: Common interface for packing strategies
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support and JSON load requests

pub mod aabb;
pub mod catalog;
pub mod cursor;
pub mod envelope;
pub mod error;
pub mod item;
pub mod placement;
#[cfg(feature = "serde")]
pub mod request;
pub mod result;
pub mod solver;

// Re-exports
pub use aabb::Aabb3;
pub use catalog::{load, load_csv_path, Table, REQUIRED_COLUMNS};
pub use cursor::Cursor;
pub use envelope::{lookup, registry, ContainerKind, ContainerSpec, Envelope};
pub use error::{Error, Result};
pub use item::{ItemDefinition, PlacementUnit};
pub use placement::{PlacementRecord, SkipReason, UnitOutcome};
#[cfg(feature = "serde")]
pub use request::{ItemRecord, LoadRequest};
pub use result::{PackResult, PackSummary};
pub use solver::Packer;
