//! Scene state: the current scene description plus a version counter that
//! drives mesh cache invalidation, and the stamp bookkeeping.

use glam::{EulerRot, Quat, Vec3};
use shared::{ObjectId, Primitive, SceneDescription, SceneObject, Shape, Transform};

use crate::placement::{MARKER_SIZE, STAMP_COLOR};

/// Id prefix of stamped marker copies
pub const STAMP_PREFIX: &str = "stamp-";

#[derive(Default)]
pub struct SceneState {
    pub scene: SceneDescription,
    /// Monotonically increasing version counter for cache invalidation
    version: u64,
}

impl SceneState {
    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replace the whole scene
    pub fn set_scene(&mut self, scene: SceneDescription) {
        self.scene = scene;
        self.version += 1;
    }

    /// Remove everything
    pub fn clear(&mut self) {
        self.scene = SceneDescription::default();
        self.version += 1;
    }

    pub fn get(&self, id: &str) -> Option<&SceneObject> {
        self.scene.get(id)
    }

    pub fn add_object(&mut self, object: SceneObject) -> ObjectId {
        let id = object.id.clone();
        self.scene.objects.push(object);
        self.version += 1;
        id
    }

    pub fn remove_object(&mut self, id: &str) {
        self.scene.objects.retain(|o| o.id != id);
        self.version += 1;
    }

    pub fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(object) = self.scene.objects.iter_mut().find(|o| o.id == id) {
            object.visible = visible;
            self.version += 1;
        }
    }

    /// Append a permanent stamp: the marker's shape at the given pose, with
    /// the stamp color, never itself a placement target.
    pub fn add_stamp(&mut self, position: Vec3, orientation: Quat) -> ObjectId {
        let (rx, ry, rz) = orientation.to_euler(EulerRot::XYZ);
        let id = format!("{STAMP_PREFIX}{}", uuid::Uuid::new_v4());

        self.scene.objects.push(SceneObject {
            id: id.clone(),
            name: "Stamp".to_string(),
            shape: Shape::Primitive {
                primitive: Primitive::Cube {
                    width: MARKER_SIZE[0] as f64,
                    height: MARKER_SIZE[1] as f64,
                    depth: MARKER_SIZE[2] as f64,
                },
            },
            transform: Transform {
                position: [position.x as f64, position.y as f64, position.z as f64],
                rotation: [rx as f64, ry as f64, rz as f64],
                scale: [1.0, 1.0, 1.0],
            },
            color: STAMP_COLOR,
            visible: true,
            pickable: false,
        });
        self.version += 1;
        id
    }

    pub fn stamp_count(&self) -> usize {
        self.scene
            .objects
            .iter()
            .filter(|o| o.id.starts_with(STAMP_PREFIX))
            .count()
    }

    pub fn clear_stamps(&mut self) {
        let before = self.scene.objects.len();
        self.scene.objects.retain(|o| !o.id.starts_with(STAMP_PREFIX));
        if self.scene.objects.len() != before {
            self.version += 1;
        }
    }

    // ── Persistence ───────────────────────────────────────────

    fn autosave_path() -> Option<std::path::PathBuf> {
        directories::ProjectDirs::from("com", "placer", "placer")
            .map(|dirs| dirs.data_local_dir().join("autosave.json"))
    }

    /// Save the current scene to the autosave location
    pub fn autosave(&self) {
        let Some(path) = Self::autosave_path() else {
            return;
        };
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        match serde_json::to_string_pretty(&self.scene) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    tracing::warn!("autosave failed: {e}");
                }
            }
            Err(e) => tracing::warn!("autosave serialization failed: {e}"),
        }
    }

    /// Load the autosaved scene, if any
    pub fn load_autosave() -> Option<SceneDescription> {
        let path = Self::autosave_path()?;
        let json = std::fs::read_to_string(path).ok()?;
        serde_json::from_str(&json).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_bumps_on_mutation() {
        let mut state = SceneState::default();
        let v0 = state.version();
        state.add_stamp(Vec3::ZERO, Quat::IDENTITY);
        assert!(state.version() > v0);
    }

    #[test]
    fn test_stamp_fields() {
        let mut state = SceneState::default();
        let id = state.add_stamp(Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY);

        let stamp = state.get(&id).unwrap();
        assert_eq!(stamp.color, STAMP_COLOR);
        assert!(!stamp.pickable);
        assert_eq!(stamp.transform.position, [1.0, 2.0, 3.0]);
        assert_eq!(state.stamp_count(), 1);
    }

    #[test]
    fn test_stamp_pose_round_trip() {
        let mut state = SceneState::default();
        let q = Quat::from_rotation_arc(Vec3::Z, Vec3::new(0.0, 1.0, 1.0).normalize());
        let id = state.add_stamp(Vec3::ZERO, q);

        let stamp = state.get(&id).unwrap();
        let rebuilt = Quat::from_euler(
            EulerRot::XYZ,
            stamp.transform.rotation[0] as f32,
            stamp.transform.rotation[1] as f32,
            stamp.transform.rotation[2] as f32,
        );
        // The rebuilt rotation must map +Z onto the same direction
        assert!((q * Vec3::Z - rebuilt * Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn test_clear_stamps_keeps_other_objects() {
        let mut state = SceneState::default();
        state.set_scene(crate::fixtures::single_cube_scene());
        state.add_stamp(Vec3::ZERO, Quat::IDENTITY);
        state.add_stamp(Vec3::ONE, Quat::IDENTITY);
        assert_eq!(state.stamp_count(), 2);

        state.clear_stamps();
        assert_eq!(state.stamp_count(), 0);
        assert_eq!(state.scene.objects.len(), 1);
    }
}
