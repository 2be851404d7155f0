//! CSG subtraction via the `vcad` kernel. The boolean itself is entirely the
//! kernel's; this module only converts operands in and meshes out.

use shared::{Primitive, SceneObject, Shape, Transform};
use vcad::{centered_cube, Part};

use crate::viewport::mesh::MeshData;

const DEFAULT_SEGMENTS: u32 = 32;

/// Subtract `right` from `left`, both taken at their own world transforms,
/// and extract a flat-shaded mesh in the given color.
pub fn difference_mesh(
    left: &SceneObject,
    right: &SceneObject,
    color: [f32; 3],
) -> Result<MeshData, String> {
    let left_part = object_part(left)?;
    let right_part = object_part(right)?;

    let result = left_part.difference(&right_part);

    extract_mesh_data(&result, color)
        .ok_or_else(|| format!("subtraction of '{}' from '{}' produced an empty mesh", right.id, left.id))
}

fn object_part(object: &SceneObject) -> Result<Part, String> {
    let Shape::Primitive { primitive } = &object.shape else {
        return Err(format!("'{}' is not a primitive CSG operand", object.id));
    };
    let part = primitive_part(&object.id, primitive)?;
    Ok(apply_transform(part, &object.transform))
}

fn primitive_part(id: &str, primitive: &Primitive) -> Result<Part, String> {
    match primitive {
        Primitive::Cube {
            width,
            height,
            depth,
        } => Ok(centered_cube(id, *width, *height, *depth)),
        Primitive::Sphere { radius } => Ok(Part::sphere(id, *radius, DEFAULT_SEGMENTS)),
        Primitive::Plane { .. } => Err("plane cannot be a CSG operand".to_string()),
    }
}

fn apply_transform(part: Part, transform: &Transform) -> Part {
    let [tx, ty, tz] = transform.position;
    let [sx, sy, sz] = transform.scale;

    let mut p = part;
    if sx != 1.0 || sy != 1.0 || sz != 1.0 {
        p = p.scale(sx, sy, sz);
    }
    if tx != 0.0 || ty != 0.0 || tz != 0.0 {
        p = p.translate(tx, ty, tz);
    }
    p
}

/// Extract flat-shaded mesh data from a vcad Part
fn extract_mesh_data(part: &Part, color: [f32; 3]) -> Option<MeshData> {
    let mesh = part.to_mesh();
    let positions = mesh.vertices();
    let indices = mesh.indices();

    if positions.is_empty() || indices.is_empty() {
        return None;
    }

    let tri_count = indices.len() / 3;
    let mut vertices = Vec::with_capacity(tri_count * 3 * 9);
    let mut new_indices = Vec::with_capacity(tri_count * 3);

    for tri in 0..tri_count {
        let i0 = indices[tri * 3] as usize;
        let i1 = indices[tri * 3 + 1] as usize;
        let i2 = indices[tri * 3 + 2] as usize;

        let p0 = glam::Vec3::new(
            positions[i0 * 3],
            positions[i0 * 3 + 1],
            positions[i0 * 3 + 2],
        );
        let p1 = glam::Vec3::new(
            positions[i1 * 3],
            positions[i1 * 3 + 1],
            positions[i1 * 3 + 2],
        );
        let p2 = glam::Vec3::new(
            positions[i2 * 3],
            positions[i2 * 3 + 1],
            positions[i2 * 3 + 2],
        );

        let edge1 = p1 - p0;
        let edge2 = p2 - p0;
        let normal = edge1.cross(edge2).normalize_or_zero();

        let base = (tri * 3) as u32;
        for p in [p0, p1, p2] {
            vertices.extend_from_slice(&[
                p.x, p.y, p.z, normal.x, normal.y, normal.z, color[0], color[1], color[2],
            ]);
        }
        new_indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    Some(MeshData {
        vertices,
        indices: new_indices,
    })
}
