//! Mesh cache, rebuilt when the scene version changes

use std::collections::HashMap;

use shared::SceneDescription;

use super::build_scene_meshes;
use crate::viewport::mesh::MeshData;
use crate::viewport::picking::Aabb;

/// Cached world-space meshes plus AABBs and the pickable subset used as
/// placement targets.
pub struct MeshCache {
    meshes: HashMap<String, MeshData>,
    aabbs: HashMap<String, Aabb>,
    target_meshes: HashMap<String, MeshData>,
    target_aabbs: HashMap<String, Aabb>,
    errors: HashMap<String, String>,
    version: u64,
    rebuild_count: u64,
}

impl MeshCache {
    pub fn new() -> Self {
        Self {
            meshes: HashMap::new(),
            aabbs: HashMap::new(),
            target_meshes: HashMap::new(),
            target_aabbs: HashMap::new(),
            errors: HashMap::new(),
            version: u64::MAX, // force first rebuild
            rebuild_count: 0,
        }
    }

    /// Check if the cache is still valid for this scene version
    pub fn is_valid(&self, scene_version: u64) -> bool {
        self.version == scene_version
    }

    /// Rebuild cached meshes from the scene
    pub fn rebuild(&mut self, scene: &SceneDescription, version: u64) {
        let (meshes, errors) = build_scene_meshes(scene);

        self.aabbs = meshes
            .iter()
            .map(|(id, mesh)| (id.clone(), Aabb::from_mesh(mesh)))
            .collect();

        self.target_meshes = meshes
            .iter()
            .filter(|(id, _)| scene.get(id).is_some_and(|o| o.pickable))
            .map(|(id, mesh)| (id.clone(), mesh.clone()))
            .collect();
        self.target_aabbs = self
            .target_meshes
            .keys()
            .map(|id| (id.clone(), self.aabbs[id]))
            .collect();

        self.meshes = meshes;
        self.errors = errors;
        self.version = version;
        self.rebuild_count += 1;
    }

    /// Clone the cached mesh map (for passing into a paint callback)
    pub fn meshes_clone(&self) -> HashMap<String, MeshData> {
        self.meshes.clone()
    }

    pub fn meshes(&self) -> &HashMap<String, MeshData> {
        &self.meshes
    }

    pub fn aabbs(&self) -> &HashMap<String, Aabb> {
        &self.aabbs
    }

    /// Pickable subset probed by the placement ray
    pub fn target_meshes(&self) -> &HashMap<String, MeshData> {
        &self.target_meshes
    }

    pub fn target_aabbs(&self) -> &HashMap<String, Aabb> {
        &self.target_aabbs
    }

    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// Rebuild counter, used as a GPU sync version
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }
}

impl Default for MeshCache {
    fn default() -> Self {
        Self::new()
    }
}
