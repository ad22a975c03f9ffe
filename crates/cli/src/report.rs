//! JSON pack reports for viewers and downstream tooling.

use serde::Serialize;
use stowage::{ContainerKind, Envelope, PackResult, PackSummary, SkipReason, UnitOutcome};

/// Report format version.
pub const REPORT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything a renderer needs to draw one packed container.
#[derive(Debug, Serialize)]
pub struct PackReport {
    pub version: String,
    /// Registered container name, if the envelope came from the registry.
    pub container: Option<String>,
    /// Interior dimensions [length, width, height].
    pub envelope: [f64; 3],
    pub summary: PackSummary,
    pub placements: Vec<ReportBox>,
    pub skipped: Vec<ReportSkip>,
}

/// One placed unit as an axis-aligned box.
#[derive(Debug, Serialize)]
pub struct ReportBox {
    pub item_id: String,
    pub source_index: usize,
    pub instance: usize,
    /// Anchor (minimum corner).
    pub position: [f64; 3],
    /// Size [length, width, height].
    pub extent: [f64; 3],
    /// Corner vertices, bottom face first.
    pub vertices: [[f64; 3]; 8],
}

/// A run of dropped units, starting at `instance`.
#[derive(Debug, Serialize)]
pub struct ReportSkip {
    pub item_id: String,
    pub source_index: usize,
    pub instance: usize,
    pub count: usize,
    pub reason: SkipReason,
}

impl PackReport {
    pub fn new(kind: Option<ContainerKind>, result: &PackResult) -> Self {
        let mut placements = Vec::new();
        let mut skipped = Vec::new();

        for outcome in &result.outcomes {
            match outcome {
                UnitOutcome::Placed(record) => placements.push(ReportBox {
                    item_id: record.item_id.clone(),
                    source_index: record.source_index,
                    instance: record.instance,
                    position: record.position.into(),
                    extent: record.extent.into(),
                    vertices: record.vertices().map(|p| p.coords.into()),
                }),
                UnitOutcome::Skipped {
                    unit,
                    reason,
                    count,
                } => skipped.push(ReportSkip {
                    item_id: unit.item_id.clone(),
                    source_index: unit.source_index,
                    instance: unit.instance,
                    count: *count,
                    reason: *reason,
                }),
            }
        }

        Self {
            version: REPORT_VERSION.to_string(),
            container: kind.map(|k| k.name().to_string()),
            envelope: envelope_array(&result.envelope),
            summary: PackSummary::from(result),
            placements,
            skipped,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn envelope_array(envelope: &Envelope) -> [f64; 3] {
    [envelope.length(), envelope.width(), envelope.height()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage::{ItemDefinition, Packer, ShelfPacker};

    #[test]
    fn test_report_splits_outcomes() {
        let items = vec![
            ItemDefinition::new("A", 1000.0, 1000.0, 1000.0).with_quantity(2),
            ItemDefinition::new("T", 1000.0, 1000.0, 3000.0).with_quantity(4),
        ];
        let kind = ContainerKind::Standard20;
        let result = ShelfPacker::new().pack(&items, &kind.envelope());
        let report = PackReport::new(Some(kind), &result);

        assert_eq!(report.container.as_deref(), Some("20ft"));
        assert_eq!(report.envelope, [5898.0, 2352.0, 2393.0]);
        assert_eq!(report.placements.len(), 2);
        assert_eq!(report.placements[1].position, [1000.0, 0.0, 0.0]);
        assert_eq!(report.placements[1].vertices[6], [2000.0, 1000.0, 1000.0]);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].reason, SkipReason::HeightExceeded);
        assert_eq!(report.skipped[1].reason, SkipReason::RunAbandoned);
        assert_eq!((report.skipped[1].instance, report.skipped[1].count), (1, 3));
        assert_eq!(report.summary.total_dropped, 4);
    }

    #[test]
    fn test_report_json_shape() {
        let items = vec![ItemDefinition::new("A", 1.0, 2.0, 3.0)];
        let result = ShelfPacker::new().pack(&items, &Envelope::new(10.0, 10.0, 10.0));
        let json = PackReport::new(None, &result).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["container"].is_null());
        assert_eq!(value["placements"][0]["extent"], serde_json::json!([1.0, 2.0, 3.0]));
        assert_eq!(value["summary"]["total_placed"], 1);
    }
}
