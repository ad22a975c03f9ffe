//! Placement records and per-unit outcomes.

use crate::aabb::Aabb3;
use crate::item::PlacementUnit;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The position of one packed unit inside a container.
///
/// A record is an axis-aligned box anchored at its minimum corner `position`
/// with size `extent` (length, width, height).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementRecord {
    /// Identifier of the source item definition.
    pub item_id: String,

    /// Index of the source definition in the input list.
    pub source_index: usize,

    /// Instance index (0-based) within the source definition's quantity.
    pub instance: usize,

    /// Anchor (minimum corner) coordinates.
    pub position: Vector3<f64>,

    /// Size along each axis (length, width, height).
    pub extent: Vector3<f64>,
}

impl PlacementRecord {
    /// Creates a record placing `unit` with its minimum corner at `position`.
    pub fn new(unit: &PlacementUnit, position: Vector3<f64>) -> Self {
        Self {
            item_id: unit.item_id.clone(),
            source_index: unit.source_index,
            instance: unit.instance,
            position,
            extent: unit.dimensions,
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    pub fn length(&self) -> f64 {
        self.extent.x
    }

    pub fn width(&self) -> f64 {
        self.extent.y
    }

    pub fn height(&self) -> f64 {
        self.extent.z
    }

    /// The corner opposite the anchor.
    pub fn max_corner(&self) -> Point3<f64> {
        Point3::from(self.position + self.extent)
    }

    pub fn volume(&self) -> f64 {
        self.extent.x * self.extent.y * self.extent.z
    }

    pub fn aabb(&self) -> Aabb3 {
        Aabb3::from_origin_extent(&self.position, &self.extent)
    }

    /// The eight box vertices, bottom face first.
    pub fn vertices(&self) -> [Point3<f64>; 8] {
        self.aabb().vertices()
    }
}

/// Why a unit was left out of the packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SkipReason {
    /// A dimension is zero, negative or not a number.
    Degenerate,
    /// The unit is longer or wider than the container itself, so no row or
    /// layer could ever hold it.
    Oversize,
    /// The unit would have extended above the container ceiling.
    HeightExceeded,
    /// An earlier unit of the same definition exceeded the height, so the rest
    /// of that definition's quantity was not attempted.
    RunAbandoned,
}

/// The result of attempting one placement unit, or a run of skipped units.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitOutcome {
    /// The unit was placed.
    Placed(PlacementRecord),
    /// One or more consecutive units of the same definition were dropped.
    Skipped {
        /// The first unit that was not placed.
        unit: PlacementUnit,
        /// Why it was not placed.
        reason: SkipReason,
        /// Number of units covered, starting at `unit.instance`.
        count: usize,
    },
}

impl UnitOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, UnitOutcome::Placed(_))
    }

    /// Number of units this outcome stands for.
    pub fn unit_count(&self) -> usize {
        match self {
            UnitOutcome::Placed(_) => 1,
            UnitOutcome::Skipped { count, .. } => *count,
        }
    }

    pub fn placement(&self) -> Option<&PlacementRecord> {
        match self {
            UnitOutcome::Placed(record) => Some(record),
            UnitOutcome::Skipped { .. } => None,
        }
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            UnitOutcome::Placed(_) => None,
            UnitOutcome::Skipped { reason, .. } => Some(*reason),
        }
    }

    /// Identifier of the source definition.
    pub fn item_id(&self) -> &str {
        match self {
            UnitOutcome::Placed(record) => &record.item_id,
            UnitOutcome::Skipped { unit, .. } => &unit.item_id,
        }
    }

    /// Index of the source definition in the input list.
    pub fn source_index(&self) -> usize {
        match self {
            UnitOutcome::Placed(record) => record.source_index,
            UnitOutcome::Skipped { unit, .. } => unit.source_index,
        }
    }
}
