//! Cargo item types.

use crate::{Error, Result};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One input row describing a type of cargo item and how many units of it exist.
///
/// Dimensions are stored as `(length, width, height)` and map onto the
/// container's x, y and z axes respectively. Items are never rotated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemDefinition {
    /// Identifier; not required to be unique.
    id: String,

    /// Dimensions (length, width, height).
    dimensions: Vector3<f64>,

    /// Weight of one unit.
    weight: f64,

    /// Number of physical units this row represents.
    quantity: usize,

    /// Whether other items may be stacked on top. Carried, not enforced.
    stackable: bool,

    /// Whether the item is fragile. Carried, not enforced.
    fragile: bool,
}

impl ItemDefinition {
    /// Creates a new item definition with quantity 1, zero weight,
    /// stackable and not fragile.
    pub fn new(id: impl Into<String>, length: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            dimensions: Vector3::new(length, width, height),
            weight: 0.0,
            quantity: 1,
            stackable: true,
            fragile: false,
        }
    }

    /// Sets the number of units.
    pub fn with_quantity(mut self, n: usize) -> Self {
        self.quantity = n;
        self
    }

    /// Sets the per-unit weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the stackable flag.
    pub fn with_stackable(mut self, stackable: bool) -> Self {
        self.stackable = stackable;
        self
    }

    /// Sets the fragile flag.
    pub fn with_fragile(mut self, fragile: bool) -> Self {
        self.fragile = fragile;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the dimensions (length, width, height).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    pub fn length(&self) -> f64 {
        self.dimensions.x
    }

    pub fn width(&self) -> f64 {
        self.dimensions.y
    }

    pub fn height(&self) -> f64 {
        self.dimensions.z
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn quantity(&self) -> usize {
        self.quantity
    }

    pub fn is_stackable(&self) -> bool {
        self.stackable
    }

    pub fn is_fragile(&self) -> bool {
        self.fragile
    }

    /// Volume of a single unit.
    pub fn unit_volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Total weight of all units in this row.
    pub fn total_weight(&self) -> f64 {
        self.weight * self.quantity as f64
    }

    /// Expands this definition into `quantity` placement units.
    ///
    /// `source_index` is the position of this definition in its input list.
    pub fn units(&self, source_index: usize) -> impl Iterator<Item = PlacementUnit> + '_ {
        (0..self.quantity).map(move |instance| PlacementUnit {
            item_id: self.id.clone(),
            dimensions: self.dimensions,
            source_index,
            instance,
        })
    }

    /// Checks the data-model invariants: positive dimensions and weight,
    /// and a quantity of at least one.
    ///
    /// The catalog does not call this; it is available for callers that want
    /// to reject degenerate rows before packing.
    pub fn validate(&self) -> Result<()> {
        let d = &self.dimensions;
        // Written as negations so NaN fails too.
        if !(d.x > 0.0 && d.y > 0.0 && d.z > 0.0) {
            return Err(Error::InvalidItem(format!(
                "All dimensions for '{}' must be positive",
                self.id
            )));
        }

        if !(self.weight > 0.0) {
            return Err(Error::InvalidItem(format!(
                "Weight for '{}' must be positive",
                self.id
            )));
        }

        if self.quantity == 0 {
            return Err(Error::InvalidItem(format!(
                "Quantity for '{}' must be at least 1",
                self.id
            )));
        }

        Ok(())
    }
}

/// One physical instance of an [`ItemDefinition`].
///
/// Units have no identity of their own beyond the row they came from and
/// their position within that row's quantity run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementUnit {
    /// Identifier copied from the source definition.
    pub item_id: String,
    /// Dimensions (length, width, height) copied from the source definition.
    pub dimensions: Vector3<f64>,
    /// Index of the source definition in the input list.
    pub source_index: usize,
    /// Instance number (0-based) within the source definition's quantity.
    pub instance: usize,
}

impl PlacementUnit {
    pub fn length(&self) -> f64 {
        self.dimensions.x
    }

    pub fn width(&self) -> f64 {
        self.dimensions.y
    }

    pub fn height(&self) -> f64 {
        self.dimensions.z
    }

    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }
}
