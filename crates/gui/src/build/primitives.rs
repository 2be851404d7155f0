//! Primitive meshes and transform baking

use glam::{EulerRot, Mat4, Quat, Vec3};
use shared::{Primitive, Transform};

use crate::viewport::mesh::{self, MeshData};

/// Tessellation detail for spheres
pub const SPHERE_RINGS: u32 = 20;
pub const SPHERE_SECTORS: u32 = 20;

/// Generate the local-space mesh of a primitive
pub fn primitive_mesh(primitive: &Primitive, color: [f32; 3]) -> MeshData {
    match primitive {
        Primitive::Cube {
            width,
            height,
            depth,
        } => mesh::cube(*width as f32, *height as f32, *depth as f32, color),
        Primitive::Sphere { radius } => {
            mesh::sphere(*radius as f32, SPHERE_RINGS, SPHERE_SECTORS, color)
        }
        Primitive::Plane { width, depth } => mesh::plane(*width as f32, *depth as f32, color),
    }
}

/// Model matrix for a `Transform` (scale, then XYZ Euler rotation, then
/// translation)
pub fn transform_matrix(t: &Transform) -> Mat4 {
    let rotation = Quat::from_euler(
        EulerRot::XYZ,
        t.rotation[0] as f32,
        t.rotation[1] as f32,
        t.rotation[2] as f32,
    );
    Mat4::from_scale_rotation_translation(
        Vec3::new(t.scale[0] as f32, t.scale[1] as f32, t.scale[2] as f32),
        rotation,
        Vec3::new(
            t.position[0] as f32,
            t.position[1] as f32,
            t.position[2] as f32,
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_transform() {
        let m = transform_matrix(&Transform::new());
        assert!((m * glam::Vec4::new(1.0, 2.0, 3.0, 1.0))
            .truncate()
            .abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), 1e-6));
    }

    #[test]
    fn test_rotation_round_trip() {
        // Euler produced from a quaternion must rebuild the same rotation
        let q = Quat::from_rotation_arc(Vec3::Z, Vec3::new(1.0, 1.0, 0.2).normalize());
        let (rx, ry, rz) = q.to_euler(EulerRot::XYZ);
        let rebuilt = Quat::from_euler(EulerRot::XYZ, rx, ry, rz);
        let v = Vec3::new(0.3, -0.7, 0.9);
        assert!((q * v - rebuilt * v).length() < 1e-4);
    }

    #[test]
    fn test_primitive_meshes_nonempty() {
        let color = [1.0, 1.0, 1.0];
        for p in [
            Primitive::Cube {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
            Primitive::Sphere { radius: 1.2 },
            Primitive::Plane {
                width: 10.0,
                depth: 10.0,
            },
        ] {
            let m = primitive_mesh(&p, color);
            assert!(m.vertex_count() > 0);
            assert!(!m.indices.is_empty());
        }
    }
}
