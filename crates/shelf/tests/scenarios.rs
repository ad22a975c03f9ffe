//! End-to-end packing scenarios and cursor properties.

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stowage_core::catalog::{self, Table, REQUIRED_COLUMNS};
use stowage_shelf::{
    pack, ContainerKind, Envelope, Error, ItemDefinition, PackResult, Packer, ShelfPacker,
    SkipReason, UnitOutcome,
};

fn twenty_foot() -> Envelope {
    ContainerKind::Standard20.envelope()
}

fn catalog_row(id: &str, l: f64, w: f64, h: f64, qty: usize) -> Vec<String> {
    vec![
        id.to_string(),
        l.to_string(),
        w.to_string(),
        h.to_string(),
        "10".to_string(),
        qty.to_string(),
        "yes".to_string(),
        "no".to_string(),
    ]
}

fn random_items(rng: &mut StdRng, count: usize) -> Vec<ItemDefinition> {
    (0..count)
        .map(|i| {
            ItemDefinition::new(
                format!("I{}", i),
                rng.gen_range(200.0..2500.0),
                rng.gen_range(200.0..1200.0),
                rng.gen_range(200.0..1500.0),
            )
            .with_weight(rng.gen_range(1.0..500.0))
            .with_quantity(rng.gen_range(1..8))
            .with_stackable(rng.gen_bool(0.5))
            .with_fragile(rng.gen_bool(0.2))
        })
        .collect()
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_scenario_a_single_row() {
        let table = Table::new(
            REQUIRED_COLUMNS,
            vec![catalog_row("X", 1000.0, 1000.0, 1000.0, 3)],
        );
        let items = catalog::load(&table).unwrap();
        let placements = pack(&items, &twenty_foot());

        let anchors: Vec<_> = placements.iter().map(|p| p.position).collect();
        assert_eq!(
            anchors,
            vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1000.0, 0.0, 0.0),
                Vector3::new(2000.0, 0.0, 0.0),
            ]
        );
        assert!(placements.iter().all(|p| p.item_id == "X"));
    }

    #[test]
    fn test_scenario_b_row_wrap() {
        let items = vec![ItemDefinition::new("L", 3000.0, 1000.0, 1000.0).with_quantity(3)];
        let placements = pack(&items, &twenty_foot());

        let anchors: Vec<_> = placements.iter().map(|p| p.position).collect();
        assert_eq!(
            anchors,
            vec![
                Vector3::new(0.0, 0.0, 0.0),
                // 3000 + 3000 > 5898: wraps, y advances by the unit's width.
                Vector3::new(0.0, 1000.0, 0.0),
                // Row wrap to y = 2000, then 2000 + 1000 > 2352: next layer.
                Vector3::new(0.0, 0.0, 1000.0),
            ]
        );
    }

    #[test]
    fn test_scenario_c_too_tall_is_dropped() {
        let items = vec![ItemDefinition::new("T", 1000.0, 1000.0, 3000.0)];
        let result = ShelfPacker::new().pack(&items, &twenty_foot());

        assert_eq!(result.placed_count(), 0);
        assert_eq!(result.requested_count(), 1);
        assert_eq!(result.skipped_count(SkipReason::HeightExceeded), 1);
        assert!(pack(&items, &twenty_foot()).is_empty());
    }

    #[test]
    fn test_scenario_d_missing_weight_column() {
        let headers: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|c| *c != "Weight")
            .collect();
        let table = Table::new(headers, vec![vec!["X", "1", "1", "1", "1", "yes", "no"]]);

        match catalog::load(&table) {
            Err(Error::Schema { missing }) => assert_eq!(missing, vec!["Weight"]),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_drop_does_not_stop_later_rows() {
        let items = vec![
            ItemDefinition::new("A", 1000.0, 1000.0, 1000.0),
            ItemDefinition::new("T", 1000.0, 1000.0, 3000.0).with_quantity(2),
            ItemDefinition::new("B", 1000.0, 1000.0, 1000.0),
        ];
        let result = ShelfPacker::new().pack(&items, &twenty_foot());

        let placed: Vec<_> = result.placements().map(|p| p.item_id.as_str()).collect();
        assert_eq!(placed, vec!["A", "B"]);
        assert_eq!(result.dropped_count(), 2);
        assert_eq!(result.unplaced_ids(), vec!["T".to_string()]);
    }

    #[test]
    fn test_flags_do_not_affect_placement() {
        let plain = vec![ItemDefinition::new("X", 800.0, 600.0, 400.0).with_quantity(12)];
        let flagged = vec![ItemDefinition::new("X", 800.0, 600.0, 400.0)
            .with_quantity(12)
            .with_stackable(false)
            .with_fragile(true)];

        assert_eq!(pack(&plain, &twenty_foot()), pack(&flagged, &twenty_foot()));
    }

    #[test]
    fn test_uniform_units_do_not_overlap() {
        let items = vec![ItemDefinition::new("U", 1200.0, 800.0, 1000.0).with_quantity(30)];
        let placements = pack(&items, &twenty_foot());

        for (i, a) in placements.iter().enumerate() {
            for b in &placements[i + 1..] {
                assert!(!a.aabb().overlaps(&b.aabb()), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_mixed_width_rows_can_overlap() {
        // The row wrap advances y by the incoming unit's width, not the
        // depth of the row it closes.
        let items = vec![
            ItemDefinition::new("wide", 3000.0, 2000.0, 500.0),
            ItemDefinition::new("narrow", 3000.0, 300.0, 500.0),
        ];
        let placements = pack(&items, &twenty_foot());

        assert_eq!(placements[1].position, Vector3::new(0.0, 300.0, 0.0));
        assert!(placements[0].aabb().overlaps(&placements[1].aabb()));
    }

    #[test]
    fn test_empty_input() {
        let result = ShelfPacker::new().pack(&[], &twenty_foot());
        assert!(result.outcomes.is_empty());
        assert_eq!(result.utilization(), 0.0);
    }

    #[test]
    fn test_degenerate_dimensions_do_not_panic() {
        let items = vec![
            ItemDefinition::new("zero", 0.0, 0.0, 0.0).with_quantity(3),
            ItemDefinition::new("neg", -100.0, 50.0, 50.0),
            ItemDefinition::new("nan", f64::NAN, 100.0, 100.0),
        ];
        let result = ShelfPacker::new().pack(&items, &twenty_foot());
        assert_eq!(result.requested_count(), 5);
        assert_eq!(result.skipped_count(SkipReason::Degenerate), 5);
        assert_eq!(result.final_cursor, stowage_shelf::Cursor::origin());
    }

    #[test]
    fn test_huge_quantity_too_tall_row_returns() {
        let mut row = catalog_row("T", 1000.0, 1000.0, 3000.0, 0);
        row[5] = "1e12".to_string();
        let items = catalog::load(&Table::new(REQUIRED_COLUMNS, vec![row])).unwrap();
        assert_eq!(items[0].quantity(), 1_000_000_000_000);

        let result = ShelfPacker::new().pack(&items, &twenty_foot());

        assert_eq!(result.placed_count(), 0);
        assert_eq!(result.outcomes.len(), 2);
        assert_eq!(result.requested_count(), 1_000_000_000_000);
        assert_eq!(result.skipped_count(SkipReason::HeightExceeded), 1);
        assert_eq!(result.skipped_count(SkipReason::RunAbandoned), 999_999_999_999);
    }

    #[test]
    fn test_huge_quantity_after_full_container_returns() {
        let items = vec![
            ItemDefinition::new("fill", 5898.0, 2352.0, 2393.0),
            // Wraps straight onto a second layer that has no headroom.
            ItemDefinition::new("bulk", 1000.0, 2000.0, 1000.0).with_quantity(usize::MAX),
            ItemDefinition::new("long", 9000.0, 1000.0, 1000.0).with_quantity(usize::MAX),
            ItemDefinition::new("flat", 0.0, 1000.0, 1000.0).with_quantity(usize::MAX),
        ];
        let result = ShelfPacker::new().pack(&items, &twenty_foot());

        assert_eq!(result.placed_count(), 1);
        assert_eq!(result.outcomes.len(), 5);
        assert_eq!(result.skipped_count(SkipReason::RunAbandoned), usize::MAX - 1);
        assert_eq!(result.skipped_count(SkipReason::Oversize), usize::MAX);
        assert_eq!(result.skipped_count(SkipReason::Degenerate), usize::MAX);
        assert_eq!(result.requested_count(), usize::MAX);
        assert_eq!(result.unplaced_ids(), vec!["bulk", "long", "flat"]);
    }
}

mod property_tests {
    use super::*;

    fn runs() -> Vec<(Vec<ItemDefinition>, PackResult)> {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let packer = ShelfPacker::new();
        (0..50)
            .map(|_| {
                let count = rng.gen_range(1..15);
                let items = random_items(&mut rng, count);
                let envelope = ContainerKind::ALL[rng.gen_range(0..3)].envelope();
                let result = packer.pack(&items, &envelope);
                (items, result)
            })
            .collect()
    }

    #[test]
    fn test_quantity_expansion() {
        for (items, result) in runs() {
            for (idx, item) in items.iter().enumerate() {
                let outcomes: Vec<&UnitOutcome> = result
                    .outcomes
                    .iter()
                    .filter(|o| o.source_index() == idx)
                    .collect();
                let covered: usize = outcomes.iter().map(|o| o.unit_count()).sum();
                assert_eq!(covered, item.quantity());
                for outcome in outcomes {
                    assert_eq!(outcome.item_id(), item.id());
                    if let Some(p) = outcome.placement() {
                        assert_eq!(p.extent, *item.dimensions());
                    }
                }
            }
        }
    }

    #[test]
    fn test_placements_stay_inside_envelope() {
        for (_, result) in runs() {
            let env = &result.envelope;
            for p in result.placements() {
                assert!(p.x() >= 0.0 && p.y() >= 0.0 && p.z() >= 0.0);
                assert!(p.x() + p.length() <= env.length(), "{:?}", p);
                assert!(p.y() + p.width() <= env.width(), "{:?}", p);
                assert!(p.z() + p.height() <= env.height(), "{:?}", p);
                assert!(env.contains_box(&p.position, &p.extent));
            }
        }
    }

    #[test]
    fn test_cursor_is_monotonic_between_wraps() {
        for (_, result) in runs() {
            let placements: Vec<_> = result.placements().collect();
            for pair in placements.windows(2) {
                let (prev, next) = (pair[0], pair[1]);
                assert!(next.z() >= prev.z(), "z decreased: {:?} -> {:?}", prev, next);

                let same_layer = next.z() == prev.z();
                let same_row = same_layer && next.y() == prev.y();
                if same_row {
                    assert!(next.x() >= prev.x());
                } else if same_layer {
                    // Row wrap.
                    assert_eq!(next.x(), 0.0);
                    assert!(next.y() > prev.y());
                }
                // A layer wrap resets y but leaves x alone unless the row
                // wrapped too, so nothing more holds across layers.
            }
        }
    }

    #[test]
    fn test_placed_ids_preserve_input_order() {
        for (items, result) in runs() {
            let expansion: Vec<(usize, usize)> = items
                .iter()
                .enumerate()
                .flat_map(|(idx, item)| (0..item.quantity()).map(move |n| (idx, n)))
                .collect();

            let placed: Vec<(usize, usize)> = result
                .placements()
                .map(|p| (p.source_index, p.instance))
                .collect();

            let mut remaining = expansion.iter();
            for key in &placed {
                assert!(
                    remaining.any(|e| e == key),
                    "{:?} is out of expansion order",
                    key
                );
            }
        }
    }

    #[test]
    fn test_dropped_count_matches_reasons() {
        for (_, result) in runs() {
            let by_reason = result.skipped_count(SkipReason::Degenerate)
                + result.skipped_count(SkipReason::Oversize)
                + result.skipped_count(SkipReason::HeightExceeded)
                + result.skipped_count(SkipReason::RunAbandoned);
            assert_eq!(result.dropped_count(), by_reason);
            assert_eq!(
                result.requested_count(),
                result.placed_count() + result.dropped_count()
            );
        }
    }
}
