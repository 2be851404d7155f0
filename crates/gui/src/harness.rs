//! Headless test harness: drives the placement controller against a scene
//! and camera without a renderer or GL context.

use std::collections::HashMap;

use shared::{ObjectId, SceneDescription};

use crate::build::MeshCache;
use crate::placement::{PlacementController, PlacementMarker, MARKER_ID};
use crate::state::scene::SceneState;
use crate::viewport::camera::ArcBallCamera;
use crate::viewport::mesh::MeshData;

/// Default viewport size used for pointer normalization in tests
pub const VIEWPORT: [f32; 2] = [800.0, 600.0];

/// Headless harness — scene, camera, controller and mesh cache
pub struct TestHarness {
    pub scene: SceneState,
    pub camera: ArcBallCamera,
    pub controller: PlacementController,
    cache: MeshCache,
    viewport: [f32; 2],
}

impl TestHarness {
    /// Empty scene, default camera
    pub fn new() -> Self {
        Self {
            scene: SceneState::default(),
            camera: ArcBallCamera::new(),
            controller: PlacementController::new(),
            cache: MeshCache::new(),
            viewport: VIEWPORT,
        }
    }

    /// Harness with a camera looking straight down -Z from `distance` away
    pub fn head_on(distance: f32) -> Self {
        Self {
            camera: ArcBallCamera::head_on(distance),
            ..Self::new()
        }
    }

    pub fn aspect(&self) -> f32 {
        self.viewport[0] / self.viewport[1]
    }

    /// Load a scene (replaces current)
    pub fn load_scene(&mut self, scene: SceneDescription) {
        self.scene.set_scene(scene);
    }

    /// Load a scene from a JSON string
    pub fn load_scene_json(&mut self, json: &str) -> Result<(), String> {
        let scene: SceneDescription =
            serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;
        self.load_scene(scene);
        Ok(())
    }

    /// Export the current scene as JSON
    pub fn export_scene_json(&self) -> String {
        serde_json::to_string_pretty(&self.scene.scene).unwrap_or_default()
    }

    // ── Input ─────────────────────────────────────────────────

    /// Pointer move in device pixels within the harness viewport
    pub fn pointer_move(&mut self, px: f32, py: f32) {
        self.controller
            .on_pointer_move(px, py, self.viewport[0], self.viewport[1]);
    }

    /// Pointer at the viewport center
    pub fn pointer_center(&mut self) {
        self.pointer_move(self.viewport[0] * 0.5, self.viewport[1] * 0.5);
    }

    /// Run one frame: rebuild meshes if needed, then advance the controller
    pub fn tick(&mut self) {
        self.rebuild_if_needed();
        self.controller.tick(
            &self.camera,
            self.aspect(),
            self.cache.target_meshes(),
            self.cache.target_aabbs(),
        );
    }

    /// Click: stamps a copy if the marker is shown
    pub fn click(&mut self) -> Option<ObjectId> {
        self.controller.on_click(&mut self.scene)
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn marker(&self) -> &PlacementMarker {
        &self.controller.marker
    }

    /// The renderable set for this frame: scene meshes plus the marker entry
    /// while it is shown. Assembly is idempotent by construction — the marker
    /// occupies a single reserved id.
    pub fn draw_set(&mut self) -> HashMap<String, MeshData> {
        self.rebuild_if_needed();
        let mut set = self.cache.meshes_clone();
        if let Some(marker) = self.controller.marker_mesh() {
            set.insert(MARKER_ID.to_string(), marker);
        }
        set
    }

    pub fn object_count(&self) -> usize {
        self.scene.scene.objects.len()
    }

    pub fn stamp_count(&self) -> usize {
        self.scene.stamp_count()
    }

    pub fn build_errors(&mut self) -> HashMap<String, String> {
        self.rebuild_if_needed();
        self.cache.errors().clone()
    }

    fn rebuild_if_needed(&mut self) {
        let version = self.scene.version();
        if !self.cache.is_valid(version) {
            self.cache.rebuild(&self.scene.scene, version);
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;

    #[test]
    fn test_new_harness_empty() {
        let mut h = TestHarness::new();
        assert_eq!(h.object_count(), 0);
        assert!(h.draw_set().is_empty());
    }

    #[test]
    fn test_load_export_json() {
        let mut h = TestHarness::new();
        h.load_scene(single_cube_scene());
        let json = h.export_scene_json();

        let mut h2 = TestHarness::new();
        h2.load_scene_json(&json).unwrap();
        assert_eq!(h2.object_count(), 1);
    }

    #[test]
    fn test_tick_rebuilds_meshes() {
        let mut h = TestHarness::head_on(5.0);
        h.load_scene(wall_scene());
        h.pointer_center();
        h.tick();
        assert!(h.marker().shown);
    }
}
