//! Error types for Stowage.

use thiserror::Error;

/// Result type alias for Stowage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading items or resolving containers.
///
/// The placement engine itself never fails: units that do not fit are
/// reported as skipped outcomes, not as errors.
#[derive(Debug, Error)]
pub enum Error {
    /// One or more required columns are absent from the item table.
    #[error("Item table is missing required column(s): {}", missing.join(", "))]
    Schema {
        /// Missing column names, in schema order.
        missing: Vec<String>,
    },

    /// No registered container matches the given name.
    #[error("Unknown container type: {0}")]
    UnknownContainer(String),

    /// An item definition violates its invariants (strict validation only).
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Reading the input source failed.
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV input is malformed.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The JSON input is malformed.
    #[cfg(feature = "serde")]
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if this error came from the catalog schema gate.
    pub fn is_schema(&self) -> bool {
        matches!(self, Error::Schema { .. })
    }
}
