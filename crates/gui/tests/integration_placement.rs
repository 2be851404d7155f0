//! Integration tests for the surface placement flow, driven headlessly
//! through the test harness: pointer move → tick → click.

use glam::Vec3;

use placer_gui_lib::fixtures::*;
use placer_gui_lib::harness::TestHarness;
use placer_gui_lib::placement::{MARKER_ID, STAMP_COLOR};

/// Harness aimed straight at a wall 5 units away, front face at z = 0.05
fn wall_harness() -> TestHarness {
    let mut h = TestHarness::head_on(5.0);
    h.load_scene(wall_scene());
    h
}

#[test]
fn test_center_pointer_hits_wall_head_on() {
    let mut h = wall_harness();
    h.pointer_center();
    h.tick();

    let marker = h.marker();
    assert!(marker.shown);
    assert!((marker.position - Vec3::new(0.0, 0.0, 0.05)).length() < 1e-3);

    // Head-on hit: +Z maps onto +Z, i.e. identity rotation
    let mapped = marker.orientation * Vec3::Z;
    assert!((mapped - Vec3::Z).length() < 1e-4);
}

#[test]
fn test_orientation_maps_reference_axis_onto_normal() {
    // Default camera looks down at the demo cube from (2.5, 2.5, 5);
    // the center ray lands on the top face, normal +Y.
    let mut h = TestHarness::new();
    h.load_scene(single_cube_scene());
    h.pointer_center();
    h.tick();

    let marker = h.marker();
    assert!(marker.shown);
    let mapped = marker.orientation * Vec3::Z;
    assert!((mapped - Vec3::Y).length() < 1e-3);
    assert!((marker.position.y - 0.5).abs() < 1e-3);
}

#[test]
fn test_pointer_off_surface_hides_marker() {
    let mut h = wall_harness();
    // Top-left corner: the ray passes well outside the 4x4 wall
    h.pointer_move(1.0, 1.0);
    h.tick();
    assert!(!h.marker().shown);

    // And a subsequent click is a no-op
    assert!(h.click().is_none());
    assert_eq!(h.stamp_count(), 0);
}

#[test]
fn test_miss_removes_marker_idempotently() {
    let mut h = wall_harness();
    h.pointer_center();
    h.tick();
    assert!(h.draw_set().contains_key(MARKER_ID));

    h.pointer_move(1.0, 1.0);
    for _ in 0..3 {
        h.tick();
        assert!(!h.draw_set().contains_key(MARKER_ID));
    }
}

#[test]
fn test_persistent_hit_keeps_single_marker_entry() {
    let mut h = wall_harness();
    h.pointer_center();

    h.tick();
    let first = h.draw_set();
    h.tick();
    let second = h.draw_set();

    assert_eq!(
        first.keys().filter(|k| *k == MARKER_ID).count(),
        1
    );
    assert_eq!(first.len(), second.len());
}

#[test]
fn test_click_stamps_marker_pose() {
    let mut h = wall_harness();
    h.pointer_center();
    h.tick();

    let marker_pos = h.marker().position;
    let id = h.click().expect("marker shown, click must stamp");
    assert_eq!(h.stamp_count(), 1);

    let stamp = h.scene.get(&id).unwrap().clone();
    assert_eq!(stamp.color, STAMP_COLOR);
    assert!(!stamp.pickable);
    let dp = Vec3::new(
        stamp.transform.position[0] as f32,
        stamp.transform.position[1] as f32,
        stamp.transform.position[2] as f32,
    ) - marker_pos;
    assert!(dp.length() < 1e-4);
}

#[test]
fn test_each_click_adds_exactly_one_stamp() {
    let mut h = wall_harness();
    h.pointer_center();
    h.tick();

    for expected in 1..=3 {
        h.click();
        assert_eq!(h.stamp_count(), expected);
    }
}

#[test]
fn test_stamps_render_and_survive_marker_hiding() {
    let mut h = wall_harness();
    h.pointer_center();
    h.tick();
    let id = h.click().unwrap();

    // Move the pointer off the wall: the marker goes away, the stamp stays
    h.pointer_move(1.0, 1.0);
    h.tick();
    let set = h.draw_set();
    assert!(!set.contains_key(MARKER_ID));
    assert!(set.contains_key(&id));
}

#[test]
fn test_stamps_survive_scene_round_trip() {
    let mut h = wall_harness();
    h.pointer_center();
    h.tick();
    h.click();
    h.click();

    let json = h.export_scene_json();
    let mut h2 = TestHarness::head_on(5.0);
    h2.load_scene_json(&json).unwrap();
    assert_eq!(h2.stamp_count(), 2);
}

#[test]
fn test_stamps_are_not_placement_targets() {
    let mut h = wall_harness();
    h.pointer_center();
    h.tick();
    h.click();

    // The stamp sits right on the wall in front of the camera; if it were
    // pickable the next hit would land on it, slightly closer than before.
    let before = h.marker().position;
    h.tick();
    let after = h.marker().position;
    assert!((before - after).length() < 1e-5);
}

#[test]
fn test_nearest_target_wins() {
    // Two walls along the view axis; the closer one must receive the marker
    let mut scene = wall_scene();
    let mut near = wall("near-wall", 4.0, 4.0);
    near.transform = shared::Transform::at(0.0, 0.0, 2.0);
    scene.objects.push(near);

    let mut h = TestHarness::head_on(5.0);
    h.load_scene(scene);
    h.pointer_center();
    h.tick();

    assert!(h.marker().shown);
    assert!((h.marker().position.z - 2.05).abs() < 1e-3);
}
