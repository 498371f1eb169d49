use std::path::PathBuf;

use glam::{Mat3, Vec3};
use grove_core::{SceneGraph, SceneNode};
use grove_placement::{execute_file, PlacementOutcome, PlacementTable, ScriptRun};
use grove_testkit::indexed_scene;

fn shipped(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join(name)
}

#[test]
fn shipped_placements_match_builtin_grove() {
    let table = PlacementTable::from_path(&shipped("placements.toml")).expect("shipped table");
    assert_eq!(table, PlacementTable::grove());
}

#[test]
fn shipped_placements_position_every_tree() {
    let mut scene = indexed_scene("tree", 10);
    let run = execute_file(&shipped("placements.toml"), Some(&mut scene), &mut std::io::sink());
    assert_eq!(run, ScriptRun::Applied(PlacementOutcome::Applied { nodes: 10 }));

    let tree0 = scene.scene_node("tree0").unwrap().local_transform();
    assert_eq!(tree0.position, Vec3::new(-65.37, -3.0, -40.38));
    assert_eq!(tree0.scale, Vec3::ONE);
    let expected = Mat3::from_rotation_x((-90.0f32).to_radians())
        * Mat3::from_rotation_z((-45.0f32).to_radians());
    assert!(tree0.rotation.abs_diff_eq(expected, 1e-5));

    let tree8 = scene.scene_node("tree8").unwrap().local_transform();
    assert_eq!(tree8.position, Vec3::new(10.37, -6.0, -67.38));
    assert_eq!(tree8.scale, Vec3::new(2.0, 2.0, 2.0));
}

#[test]
fn pitched_and_rolled_trees_lie_on_their_side() {
    // Pitching -90 degrees tips the local up axis out of the vertical.
    let mut scene = indexed_scene("tree", 10);
    execute_file(&shipped("placements.toml"), Some(&mut scene), &mut std::io::sink());
    let rotation = scene.transform_of("tree0").unwrap().rotation;
    let up = rotation * Vec3::Y;
    assert!(up.z.abs() > 0.5, "unexpected up axis {up}");
    assert!(up.y.abs() < 1e-5, "unexpected up axis {up}");
}
