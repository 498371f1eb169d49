//! Property tests for the placement routine.
//!
//! Arbitrary tables are applied to a fresh in-memory scene and every node is
//! checked against the record that targets it.

use glam::{Mat3, Vec3};
use grove_placement::{apply_placements, PlacementOutcome, PlacementRecord, PlacementTable};
use grove_testkit::{indexed_scene, MemoryScene};
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = PlacementRecord> {
    (
        -500.0f32..500.0,
        -500.0f32..500.0,
        -500.0f32..500.0,
        -360.0f32..360.0,
        -360.0f32..360.0,
        0.01f32..10.0,
    )
        .prop_map(|(x, y, z, pitch, roll, scale)| {
            PlacementRecord::new(x, y, z, pitch, roll, scale)
        })
}

proptest! {
    /// Property: every node ends up at its record's position, scale and orientation
    #[test]
    fn nodes_match_their_records(
        records in prop::collection::vec(record_strategy(), 1..24),
    ) {
        let table = PlacementTable::new(records);
        let mut scene = indexed_scene("tree", table.len());

        let outcome = apply_placements(Some(&mut scene), &table).unwrap();
        prop_assert_eq!(outcome, PlacementOutcome::Applied { nodes: table.len() });

        for (name, record) in table.named_records() {
            let t = scene.transform_of(&name).unwrap();
            prop_assert_eq!(t.position, record.position());
            prop_assert_eq!(t.scale, Vec3::splat(record.scale));
            let expected = Mat3::from_rotation_x(record.pitch.to_radians())
                * Mat3::from_rotation_z(record.roll.to_radians());
            prop_assert!(t.rotation.abs_diff_eq(expected, 1e-4));
        }
    }

    /// Property: a second run leaves every transform bit-identical
    #[test]
    fn reapplying_is_idempotent(
        records in prop::collection::vec(record_strategy(), 1..24),
    ) {
        let table = PlacementTable::new(records);
        let mut scene = indexed_scene("tree", table.len());

        apply_placements(Some(&mut scene), &table).unwrap();
        let first = scene.snapshot();
        apply_placements(Some(&mut scene), &table).unwrap();
        prop_assert_eq!(first, scene.snapshot());
    }

    /// Property: without a scene the run is skipped, whatever the table
    #[test]
    fn absent_scene_is_skipped(
        records in prop::collection::vec(record_strategy(), 1..24),
    ) {
        let table = PlacementTable::new(records);
        let outcome = apply_placements::<MemoryScene>(None, &table).unwrap();
        prop_assert_eq!(outcome, PlacementOutcome::Skipped);
    }
}
