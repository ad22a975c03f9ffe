//! Shelf cursor state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The next free anchor position of a shelf-stacking run, plus the height of
/// the tallest unit committed to the current layer.
///
/// A fresh cursor starts at the container origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub layer_height: f64,
}

impl Cursor {
    /// A cursor at the origin with an empty layer.
    pub fn origin() -> Self {
        Self::default()
    }
}
