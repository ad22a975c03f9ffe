//! Pack result representation.

use crate::cursor::Cursor;
use crate::envelope::Envelope;
use crate::placement::{PlacementRecord, SkipReason, UnitOutcome};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of packing one item list into one container envelope.
///
/// Outcomes are in unit expansion order: every requested unit is covered by
/// exactly one outcome, either a placement or a skipped run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackResult {
    /// Outcomes in input order.
    pub outcomes: Vec<UnitOutcome>,

    /// The envelope that was packed.
    pub envelope: Envelope,

    /// Cursor state after the last unit.
    pub final_cursor: Cursor,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,

    /// Packing strategy used.
    pub strategy: Option<String>,
}

impl PackResult {
    /// Creates a new empty result for the given envelope.
    pub fn new(envelope: Envelope) -> Self {
        Self {
            outcomes: Vec::new(),
            envelope,
            final_cursor: Cursor::origin(),
            computation_time_ms: 0,
            strategy: None,
        }
    }

    /// Sets the strategy name.
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    /// Iterates over placed records in placement order.
    pub fn placements(&self) -> impl Iterator<Item = &PlacementRecord> + '_ {
        self.outcomes.iter().filter_map(UnitOutcome::placement)
    }

    /// Consumes the result, keeping only the placement records.
    pub fn into_placements(self) -> Vec<PlacementRecord> {
        self.outcomes
            .into_iter()
            .filter_map(|outcome| match outcome {
                UnitOutcome::Placed(record) => Some(record),
                UnitOutcome::Skipped { .. } => None,
            })
            .collect()
    }

    /// Number of units attempted (the sum of all quantities).
    pub fn requested_count(&self) -> usize {
        self.outcomes
            .iter()
            .fold(0, |acc, o| acc.saturating_add(o.unit_count()))
    }

    /// Number of units placed.
    pub fn placed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_placed()).count()
    }

    /// Number of units dropped, for any reason.
    pub fn dropped_count(&self) -> usize {
        self.requested_count().saturating_sub(self.placed_count())
    }

    /// Number of units dropped for the given reason.
    pub fn skipped_count(&self, reason: SkipReason) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.skip_reason() == Some(reason))
            .fold(0, |acc, o| acc.saturating_add(o.unit_count()))
    }

    /// Returns true if every requested unit was placed.
    pub fn all_placed(&self) -> bool {
        self.outcomes.iter().all(UnitOutcome::is_placed)
    }

    /// Total volume of the placed units.
    pub fn placed_volume(&self) -> f64 {
        self.placements().map(PlacementRecord::volume).sum()
    }

    /// Placed volume over envelope volume (0.0 - 1.0 for sane input).
    pub fn utilization(&self) -> f64 {
        let capacity = self.envelope.volume();
        if capacity > 0.0 {
            self.placed_volume() / capacity
        } else {
            0.0
        }
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization() * 100.0)
    }

    /// Identifiers of definitions with at least one dropped unit, deduplicated,
    /// in first-drop order.
    pub fn unplaced_ids(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.outcomes
            .iter()
            .filter(|o| !o.is_placed())
            .map(|o| o.item_id().to_string())
            .filter(|id| seen.insert(id.clone()))
            .collect()
    }
}

/// Summary statistics for a pack result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackSummary {
    /// Total units requested.
    pub total_requested: usize,
    /// Total units placed.
    pub total_placed: usize,
    /// Units dropped (requested minus placed).
    pub total_dropped: usize,
    /// Units dropped because a dimension is zero, negative or not a number.
    pub degenerate: usize,
    /// Units dropped because they are longer or wider than the container.
    pub oversize: usize,
    /// Units dropped because they exceeded the container height.
    pub height_exceeded: usize,
    /// Units not attempted after an earlier unit of their row was dropped.
    pub run_abandoned: usize,
    /// Utilization percentage.
    pub utilization_percent: f64,
    /// Computation time in milliseconds.
    pub time_ms: u64,
    /// Strategy used.
    pub strategy: String,
}

impl From<&PackResult> for PackSummary {
    fn from(result: &PackResult) -> Self {
        Self {
            total_requested: result.requested_count(),
            total_placed: result.placed_count(),
            total_dropped: result.dropped_count(),
            degenerate: result.skipped_count(SkipReason::Degenerate),
            oversize: result.skipped_count(SkipReason::Oversize),
            height_exceeded: result.skipped_count(SkipReason::HeightExceeded),
            run_abandoned: result.skipped_count(SkipReason::RunAbandoned),
            utilization_percent: result.utilization() * 100.0,
            time_ms: result.computation_time_ms,
            strategy: result
                .strategy
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}
