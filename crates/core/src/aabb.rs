//! Axis-aligned bounding boxes for placed units.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Point3<f64>,
    /// Maximum corner.
    pub max: Point3<f64>,
}

impl Aabb3 {
    /// Creates a new AABB from min/max corners.
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB anchored at `origin` with the given extent.
    pub fn from_origin_extent(origin: &Vector3<f64>, extent: &Vector3<f64>) -> Self {
        Self {
            min: Point3::from(*origin),
            max: Point3::from(origin + extent),
        }
    }

    /// Returns the size along each axis.
    pub fn extent(&self) -> Vector3<f64> {
        self.max - self.min
    }

    pub fn volume(&self) -> f64 {
        let e = self.extent();
        e.x * e.y * e.z
    }

    /// Checks if `other` lies entirely inside this box (boundaries inclusive).
    pub fn contains(&self, other: &Self) -> bool {
        (0..3).all(|axis| other.min[axis] >= self.min[axis] && other.max[axis] <= self.max[axis])
    }

    /// Checks if the two boxes share interior volume.
    ///
    /// Boxes that only touch along a face, edge or corner do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        (0..3).all(|axis| self.min[axis] < other.max[axis] && self.max[axis] > other.min[axis])
    }

    /// Returns the eight corner vertices.
    ///
    /// The first four are the bottom face and the last four the top face, each
    /// wound counter-clockwise when viewed from above. This is the vertex order
    /// box meshes are usually built from.
    pub fn vertices(&self) -> [Point3<f64>; 8] {
        let (lo, hi) = (&self.min, &self.max);
        [
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(hi.x, hi.y, hi.z),
            Point3::new(lo.x, hi.y, hi.z),
        ]
    }
}
