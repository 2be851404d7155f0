//! Mesh validation utilities.
//!
//! `MeshValidator` checks mesh data integrity: correct stride, in-range
//! indices, normalized normals, AABB dimensions.

use crate::viewport::mesh::{MeshData, VERTEX_STRIDE};
use crate::viewport::picking::Aabb;

/// Validator for `MeshData` integrity checks.
pub struct MeshValidator<'a> {
    mesh: &'a MeshData,
}

impl<'a> MeshValidator<'a> {
    pub fn new(mesh: &'a MeshData) -> Self {
        Self { mesh }
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.indices.len() / 3
    }

    /// Check that the vertex buffer length is a multiple of the stride.
    pub fn is_stride_valid(&self) -> bool {
        self.mesh.vertices.len() % VERTEX_STRIDE == 0
    }

    /// Check that the index buffer length is a multiple of 3.
    pub fn is_index_stride_valid(&self) -> bool {
        self.mesh.indices.len() % 3 == 0
    }

    /// Check that all indices are within the valid vertex range.
    pub fn are_indices_in_range(&self) -> bool {
        let max_idx = self.vertex_count() as u32;
        self.mesh.indices.iter().all(|&i| i < max_idx)
    }

    /// Check that all vertex normals have unit length (within epsilon).
    pub fn are_normals_normalized(&self, epsilon: f32) -> bool {
        (0..self.vertex_count()).all(|i| (self.mesh.normal(i).length() - 1.0).abs() <= epsilon)
    }

    /// Compute the axis-aligned bounding box of the mesh.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_mesh(self.mesh)
    }

    /// Dimensions (width, height, depth) of the bounding box.
    pub fn dimensions(&self) -> [f32; 3] {
        let aabb = self.aabb();
        [
            aabb.max.x - aabb.min.x,
            aabb.max.y - aabb.min.y,
            aabb.max.z - aabb.min.z,
        ]
    }

    /// Run all structural checks, returning a list of failure messages.
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if !self.is_stride_valid() {
            errors.push("vertex buffer length is not a multiple of the stride".to_string());
        }
        if !self.is_index_stride_valid() {
            errors.push("index buffer length is not a multiple of 3".to_string());
        }
        if !self.are_indices_in_range() {
            errors.push("index out of vertex range".to_string());
        }
        if !self.are_normals_normalized(1e-3) {
            errors.push("non-normalized vertex normal".to_string());
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::mesh;

    #[test]
    fn test_cube_is_valid() {
        let m = mesh::cube(1.0, 2.0, 3.0, [1.0, 1.0, 1.0]);
        let v = MeshValidator::new(&m);
        assert!(v.validate_all().is_empty());
        assert_eq!(v.dimensions(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_detects_out_of_range_index() {
        let mut m = mesh::cube(1.0, 1.0, 1.0, [1.0, 1.0, 1.0]);
        m.indices[0] = 9999;
        let v = MeshValidator::new(&m);
        assert!(!v.are_indices_in_range());
        assert!(!v.validate_all().is_empty());
    }
}
