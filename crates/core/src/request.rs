//! JSON load requests.
//!
//! A load request bundles an item list with an optional container name, for
//! callers that produce structured input rather than a spreadsheet export.

use crate::envelope::{ContainerKind, Envelope};
use crate::item::ItemDefinition;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Request format version written by this crate.
pub const REQUEST_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A packing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadRequest {
    /// Request format version.
    #[serde(default)]
    pub version: Option<String>,

    /// Registered container name (e.g. `"40ft HC"`).
    #[serde(default)]
    pub container: Option<String>,

    /// Items to pack, in loading order.
    pub items: Vec<ItemRecord>,
}

/// One item row of a load request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Identifier.
    pub id: String,

    /// Dimensions [length, width, height].
    pub dimensions: [f64; 3],

    /// Weight of one unit.
    #[serde(default)]
    pub weight: f64,

    /// Number of units.
    #[serde(default = "default_quantity")]
    pub quantity: usize,

    #[serde(default = "default_stackable")]
    pub stackable: bool,

    #[serde(default)]
    pub fragile: bool,
}

fn default_quantity() -> usize {
    1
}

fn default_stackable() -> bool {
    true
}

impl From<&ItemRecord> for ItemDefinition {
    fn from(record: &ItemRecord) -> Self {
        let [l, w, h] = record.dimensions;
        ItemDefinition::new(record.id.clone(), l, w, h)
            .with_weight(record.weight)
            .with_quantity(record.quantity)
            .with_stackable(record.stackable)
            .with_fragile(record.fragile)
    }
}

impl From<&ItemDefinition> for ItemRecord {
    fn from(item: &ItemDefinition) -> Self {
        Self {
            id: item.id().to_string(),
            dimensions: [item.length(), item.width(), item.height()],
            weight: item.weight(),
            quantity: item.quantity(),
            stackable: item.is_stackable(),
            fragile: item.is_fragile(),
        }
    }
}

impl LoadRequest {
    /// Builds a request for the given items.
    pub fn new(items: &[ItemDefinition]) -> Self {
        Self {
            version: Some(REQUEST_VERSION.to_string()),
            container: None,
            items: items.iter().map(ItemRecord::from).collect(),
        }
    }

    /// Sets the container name.
    pub fn with_container(mut self, kind: ContainerKind) -> Self {
        self.container = Some(kind.name().to_string());
        self
    }

    /// Parses a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a request from a JSON file.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serializes the request as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Converts the item rows into item definitions, in order.
    pub fn item_definitions(&self) -> Vec<ItemDefinition> {
        self.items.iter().map(ItemDefinition::from).collect()
    }

    /// Resolves the named container, if the request names one.
    pub fn container_kind(&self) -> Result<Option<ContainerKind>> {
        self.container
            .as_deref()
            .map(str::parse::<ContainerKind>)
            .transpose()
    }

    /// Resolves the container envelope, if the request names one.
    pub fn envelope(&self) -> Result<Option<Envelope>> {
        Ok(self.container_kind()?.map(ContainerKind::envelope))
    }
}
