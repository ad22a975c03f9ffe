//! Container envelopes and the standard container registry.

use crate::aabb::Aabb3;
use crate::{Error, Result};
use nalgebra::Vector3;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The interior usable box of a container.
///
/// The envelope is anchored at the origin; x runs along the length,
/// y along the width and z along the height.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Envelope {
    /// Dimensions (length, width, height).
    dimensions: Vector3<f64>,
}

impl Envelope {
    /// Creates a new envelope with the given interior dimensions.
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            dimensions: Vector3::new(length, width, height),
        }
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

    /// Interior volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Checks if a box anchored at `origin` with the given extent lies
    /// entirely inside the envelope.
    pub fn contains_box(&self, origin: &Vector3<f64>, extent: &Vector3<f64>) -> bool {
        let interior = Aabb3::from_origin_extent(&Vector3::zeros(), &self.dimensions);
        interior.contains(&Aabb3::from_origin_extent(origin, extent))
    }
}

/// The standard container sizes known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContainerKind {
    /// 20-foot standard dry container.
    Standard20,
    /// 40-foot standard dry container.
    Standard40,
    /// 40-foot high-cube container.
    HighCube40,
}

impl ContainerKind {
    /// All registered kinds, in registry order.
    pub const ALL: [ContainerKind; 3] = [
        ContainerKind::Standard20,
        ContainerKind::Standard40,
        ContainerKind::HighCube40,
    ];

    /// The human-readable registry name.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// The interior envelope for this kind.
    pub fn envelope(self) -> Envelope {
        self.spec().envelope
    }

    /// The registry entry for this kind.
    pub fn spec(self) -> &'static ContainerSpec {
        // The registry holds exactly one entry per kind.
        &registry()[self as usize]
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContainerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        lookup(s)
            .map(|spec| spec.kind)
            .ok_or_else(|| Error::UnknownContainer(s.to_string()))
    }
}

/// A registry entry: a named standard container and its interior envelope.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ContainerSpec {
    /// Which standard size this is.
    pub kind: ContainerKind,
    /// Display name, e.g. `"40ft HC"`.
    pub name: &'static str,
    /// Alternative spellings accepted by [`lookup`].
    pub aliases: &'static [&'static str],
    /// Published interior dimensions in millimetres.
    pub envelope: Envelope,
}

impl ContainerSpec {
    fn matches(&self, name: &str) -> bool {
        let name = name.trim();
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

static REGISTRY: LazyLock<Vec<ContainerSpec>> = LazyLock::new(|| {
    vec![
        ContainerSpec {
            kind: ContainerKind::Standard20,
            name: "20ft",
            aliases: &["20", "20ft-std"],
            envelope: Envelope::new(5898.0, 2352.0, 2393.0),
        },
        ContainerSpec {
            kind: ContainerKind::Standard40,
            name: "40ft",
            aliases: &["40", "40ft-std"],
            envelope: Envelope::new(12032.0, 2352.0, 2393.0),
        },
        ContainerSpec {
            kind: ContainerKind::HighCube40,
            name: "40ft HC",
            aliases: &["40ft-hc", "40hc", "hc"],
            envelope: Envelope::new(12032.0, 2352.0, 2700.0),
        },
    ]
});

/// Returns the read-only table of standard containers.
pub fn registry() -> &'static [ContainerSpec] {
    &REGISTRY
}

/// Finds a registered container by name or alias (case-insensitive).
pub fn lookup(name: &str) -> Option<&'static ContainerSpec> {
    registry().iter().find(|spec| spec.matches(name))
}
