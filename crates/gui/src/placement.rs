//! Surface placement: a pointer-driven marker that snaps onto the surface
//! under the cursor and stamps permanent copies on click.
//!
//! The controller is deliberately free of renderer types: it consumes the
//! camera, the current target meshes, and the scene state, and can therefore
//! be driven headlessly (see `harness`).

use std::collections::HashMap;

use glam::{Mat4, Quat, Vec2, Vec3};

use shared::ObjectId;

use crate::state::scene::SceneState;
use crate::viewport::camera::ArcBallCamera;
use crate::viewport::mesh::{self, MeshData};
use crate::viewport::picking::{pick_surface, Aabb};

/// Reserved id of the live preview marker in the renderable set
pub const MARKER_ID: &str = "placement-marker";

/// Local shape of the marker (and of every stamp): a flat green cube
pub const MARKER_SIZE: [f32; 3] = [0.5, 0.3, 0.1];
pub const MARKER_COLOR: [f32; 3] = [0.0, 0.85, 0.1];
pub const STAMP_COLOR: [f32; 3] = [0.33, 0.33, 0.33];

/// The marker's local axis that gets aligned onto the hit surface normal
const REFERENCE_AXIS: Vec3 = Vec3::Z;

/// Live preview object: fixed local shape, mutable world pose
#[derive(Clone, Debug)]
pub struct PlacementMarker {
    pub position: Vec3,
    pub orientation: Quat,
    /// Derived each tick: true iff the last frame had a surface hit
    pub shown: bool,
}

impl Default for PlacementMarker {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            shown: false,
        }
    }
}

/// Pointer state plus the preview marker, advanced once per rendered frame
pub struct PlacementController {
    /// Normalized pointer coordinates in [-1, 1]², y up
    pointer: Vec2,
    pub marker: PlacementMarker,
}

impl PlacementController {
    pub fn new() -> Self {
        Self {
            pointer: Vec2::ZERO,
            marker: PlacementMarker::default(),
        }
    }

    /// Record the pointer position in device pixels relative to the viewport.
    /// Only updates stored state; intersection queries are deferred to `tick`
    /// so high-frequency move events stay cheap.
    pub fn on_pointer_move(&mut self, px: f32, py: f32, viewport_w: f32, viewport_h: f32) {
        if viewport_w <= 0.0 || viewport_h <= 0.0 {
            return;
        }
        self.pointer = Vec2::new(
            (px / viewport_w) * 2.0 - 1.0,
            -(py / viewport_h) * 2.0 + 1.0,
        );
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Advance one frame: cast a ray from the camera through the stored
    /// pointer, intersect it with the target meshes, and move or hide the
    /// marker. A miss is a valid outcome, not an error.
    pub fn tick(
        &mut self,
        camera: &ArcBallCamera,
        aspect: f32,
        targets: &HashMap<String, MeshData>,
        aabbs: &HashMap<String, Aabb>,
    ) {
        let ray = camera.pointer_ray(self.pointer, aspect);

        match pick_surface(&ray, targets, aabbs) {
            Some(hit) => {
                let normal = hit.normal.normalize_or_zero();
                if normal == Vec3::ZERO || !normal.is_finite() {
                    // Degenerate normal from the provider: keep the marker
                    // hidden rather than propagate an undefined orientation.
                    tracing::warn!("hit on {} with degenerate normal, ignoring", hit.object_id);
                    self.marker.shown = false;
                    return;
                }
                self.marker.position = hit.point;
                // Shortest-arc rotation of the reference axis onto the normal.
                // For an exactly opposed normal this yields a half-turn about
                // an arbitrary perpendicular axis.
                self.marker.orientation = Quat::from_rotation_arc(REFERENCE_AXIS, normal);
                self.marker.shown = true;
            }
            None => {
                self.marker.shown = false;
            }
        }
    }

    /// Stamp a permanent copy of the marker into the scene. No-op while the
    /// marker is hidden; every qualifying click adds exactly one copy.
    pub fn on_click(&mut self, scene: &mut SceneState) -> Option<ObjectId> {
        if !self.marker.shown {
            return None;
        }
        let id = scene.add_stamp(self.marker.position, self.marker.orientation);
        tracing::info!("stamped {} at {:?}", id, self.marker.position);
        Some(id)
    }

    /// World-space mesh of the marker for rendering, or None while hidden
    pub fn marker_mesh(&self) -> Option<MeshData> {
        if !self.marker.shown {
            return None;
        }
        let local = mesh::cube(MARKER_SIZE[0], MARKER_SIZE[1], MARKER_SIZE[2], MARKER_COLOR);
        let model = Mat4::from_rotation_translation(self.marker.orientation, self.marker.position);
        Some(local.transformed(&model))
    }
}

impl Default for PlacementController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_normalization_center() {
        let mut c = PlacementController::new();
        c.on_pointer_move(400.0, 300.0, 800.0, 600.0);
        assert!(c.pointer().length() < 1e-6);
    }

    #[test]
    fn test_pointer_normalization_corners() {
        let mut c = PlacementController::new();
        c.on_pointer_move(0.0, 0.0, 800.0, 600.0);
        assert!((c.pointer() - Vec2::new(-1.0, 1.0)).length() < 1e-6);
        c.on_pointer_move(800.0, 600.0, 800.0, 600.0);
        assert!((c.pointer() - Vec2::new(1.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_pointer_in_bounds_for_viewport_coords() {
        let mut c = PlacementController::new();
        for (px, py) in [(0.0, 0.0), (123.0, 456.0), (800.0, 600.0)] {
            c.on_pointer_move(px, py, 800.0, 600.0);
            let p = c.pointer();
            assert!((-1.0..=1.0).contains(&p.x));
            assert!((-1.0..=1.0).contains(&p.y));
        }
    }

    #[test]
    fn test_zero_viewport_ignored() {
        let mut c = PlacementController::new();
        c.on_pointer_move(100.0, 100.0, 0.0, 0.0);
        assert!(c.pointer().length() < 1e-6);
    }

    #[test]
    fn test_marker_starts_hidden() {
        let c = PlacementController::new();
        assert!(!c.marker.shown);
        assert!(c.marker_mesh().is_none());
    }

    #[test]
    fn test_click_noop_while_hidden() {
        let mut c = PlacementController::new();
        let mut scene = SceneState::default();
        assert!(c.on_click(&mut scene).is_none());
        assert_eq!(scene.stamp_count(), 0);
    }

    #[test]
    fn test_anti_parallel_normal_policy() {
        // Normal exactly opposed to the reference axis: the shortest-arc
        // rotation must still map the reference axis onto the normal.
        let q = Quat::from_rotation_arc(REFERENCE_AXIS, Vec3::NEG_Z);
        let mapped = q * REFERENCE_AXIS;
        assert!((mapped - Vec3::NEG_Z).length() < 1e-5);
    }
}
