use glam::{Mat3, Mat4, Vec3};

/// Floats per mesh vertex: position(3) + normal(3) + color(3)
pub const VERTEX_STRIDE: usize = 9;

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b]
#[derive(Clone)]
pub struct MeshData {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / VERTEX_STRIDE
    }

    pub fn position(&self, index: usize) -> Vec3 {
        let base = index * VERTEX_STRIDE;
        Vec3::new(
            self.vertices[base],
            self.vertices[base + 1],
            self.vertices[base + 2],
        )
    }

    pub fn normal(&self, index: usize) -> Vec3 {
        let base = index * VERTEX_STRIDE;
        Vec3::new(
            self.vertices[base + 3],
            self.vertices[base + 4],
            self.vertices[base + 5],
        )
    }

    /// Bake a model matrix into the mesh: positions transformed as points,
    /// normals by the inverse-transpose rotation, re-normalized.
    pub fn transformed(&self, model: &Mat4) -> MeshData {
        let normal_mat = Mat3::from_mat4(*model).inverse().transpose();

        let mut vertices = Vec::with_capacity(self.vertices.len());
        for i in 0..self.vertex_count() {
            let base = i * VERTEX_STRIDE;
            let p = model.transform_point3(self.position(i));
            let n = (normal_mat * self.normal(i)).normalize_or_zero();
            vertices.extend_from_slice(&[p.x, p.y, p.z, n.x, n.y, n.z]);
            vertices.extend_from_slice(&self.vertices[base + 6..base + 9]);
        }

        MeshData {
            vertices,
            indices: self.indices.clone(),
        }
    }
}

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a]
pub struct LineMeshData {
    pub vertices: Vec<f32>,
}

// ── Primitive generation ─────────────────────────────────────

pub fn cube(w: f32, h: f32, d: f32, color: [f32; 3]) -> MeshData {
    let hw = w * 0.5;
    let hh = h * 0.5;
    let hd = d * 0.5;

    let faces: [([Vec3; 4], Vec3); 6] = [
        // Front (+Z)
        ([Vec3::new(-hw, -hh, hd), Vec3::new(hw, -hh, hd), Vec3::new(hw, hh, hd), Vec3::new(-hw, hh, hd)], Vec3::Z),
        // Back (-Z)
        ([Vec3::new(hw, -hh, -hd), Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, hh, -hd), Vec3::new(hw, hh, -hd)], Vec3::NEG_Z),
        // Right (+X)
        ([Vec3::new(hw, -hh, hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, hh, -hd), Vec3::new(hw, hh, hd)], Vec3::X),
        // Left (-X)
        ([Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, -hh, hd), Vec3::new(-hw, hh, hd), Vec3::new(-hw, hh, -hd)], Vec3::NEG_X),
        // Top (+Y)
        ([Vec3::new(-hw, hh, hd), Vec3::new(hw, hh, hd), Vec3::new(hw, hh, -hd), Vec3::new(-hw, hh, -hd)], Vec3::Y),
        // Bottom (-Y)
        ([Vec3::new(-hw, -hh, -hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, -hh, hd), Vec3::new(-hw, -hh, hd)], Vec3::NEG_Y),
    ];

    let mut vertices = Vec::with_capacity(24 * VERTEX_STRIDE);
    let mut indices = Vec::with_capacity(36);

    for (quad, normal) in &faces {
        let base = (vertices.len() / VERTEX_STRIDE) as u32;
        for v in quad {
            push_vert(&mut vertices, *v, *normal, color);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

pub fn sphere(radius: f32, rings: u32, sectors: u32, color: [f32; 3]) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for r in 0..=rings {
        let phi = std::f32::consts::PI * r as f32 / rings as f32;
        let sp = phi.sin();
        let cp = phi.cos();

        for s in 0..=sectors {
            let theta = std::f32::consts::TAU * s as f32 / sectors as f32;
            let n = Vec3::new(sp * theta.cos(), cp, sp * theta.sin());
            push_vert(&mut vertices, n * radius, n, color);
        }
    }

    for r in 0..rings {
        for s in 0..sectors {
            let i0 = r * (sectors + 1) + s;
            let i1 = i0 + 1;
            let i2 = i0 + sectors + 1;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }

    MeshData { vertices, indices }
}

/// Horizontal quad facing +Y. The triangle test is two-sided, so a single
/// face is enough for picking from either side.
pub fn plane(w: f32, d: f32, color: [f32; 3]) -> MeshData {
    let hw = w * 0.5;
    let hd = d * 0.5;

    let corners = [
        Vec3::new(-hw, 0.0, hd),
        Vec3::new(hw, 0.0, hd),
        Vec3::new(hw, 0.0, -hd),
        Vec3::new(-hw, 0.0, -hd),
    ];

    let mut vertices = Vec::with_capacity(4 * VERTEX_STRIDE);
    for c in &corners {
        push_vert(&mut vertices, *c, Vec3::Y, color);
    }

    MeshData {
        vertices,
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

// ── Skybox ───────────────────────────────────────────────────

const SKY_ZENITH: [f32; 3] = [0.32, 0.51, 0.78];
const SKY_HORIZON: [f32; 3] = [0.74, 0.82, 0.90];
const SKY_GROUND: [f32; 3] = [0.36, 0.33, 0.30];

/// Inward-facing cube with vertically graded colors, rendered unlit.
/// Winding is reversed relative to `cube` so the inside faces the camera.
pub fn skybox(size: f32) -> MeshData {
    let h = size * 0.5;

    // Per face: four corners, inward normal
    let faces: [([Vec3; 4], Vec3); 6] = [
        ([Vec3::new(-h, -h, h), Vec3::new(h, -h, h), Vec3::new(h, h, h), Vec3::new(-h, h, h)], Vec3::NEG_Z),
        ([Vec3::new(h, -h, -h), Vec3::new(-h, -h, -h), Vec3::new(-h, h, -h), Vec3::new(h, h, -h)], Vec3::Z),
        ([Vec3::new(h, -h, h), Vec3::new(h, -h, -h), Vec3::new(h, h, -h), Vec3::new(h, h, h)], Vec3::NEG_X),
        ([Vec3::new(-h, -h, -h), Vec3::new(-h, -h, h), Vec3::new(-h, h, h), Vec3::new(-h, h, -h)], Vec3::X),
        ([Vec3::new(-h, h, h), Vec3::new(h, h, h), Vec3::new(h, h, -h), Vec3::new(-h, h, -h)], Vec3::NEG_Y),
        ([Vec3::new(-h, -h, -h), Vec3::new(h, -h, -h), Vec3::new(h, -h, h), Vec3::new(-h, -h, h)], Vec3::Y),
    ];

    let mut vertices = Vec::with_capacity(24 * VERTEX_STRIDE);
    let mut indices = Vec::with_capacity(36);

    for (quad, normal) in &faces {
        let base = (vertices.len() / VERTEX_STRIDE) as u32;
        for v in quad {
            push_vert(&mut vertices, *v, *normal, sky_color(v.y, h));
        }
        // Reversed winding: visible from inside the box
        indices.extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
    }

    MeshData { vertices, indices }
}

fn sky_color(y: f32, half: f32) -> [f32; 3] {
    if y < 0.0 {
        return SKY_GROUND;
    }
    let t = (y / half).clamp(0.0, 1.0);
    [
        SKY_HORIZON[0] + (SKY_ZENITH[0] - SKY_HORIZON[0]) * t,
        SKY_HORIZON[1] + (SKY_ZENITH[1] - SKY_HORIZON[1]) * t,
        SKY_HORIZON[2] + (SKY_ZENITH[2] - SKY_HORIZON[2]) * t,
    ]
}

// ── Grid and axes ────────────────────────────────────────────

pub fn grid(range: i32, cell_size: f32, opacity: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let grid_color = [0.25_f32, 0.25, 0.25, opacity];
    let origin_color_x = [0.5_f32, 0.2, 0.2, opacity * 0.7];
    let origin_color_z = [0.2_f32, 0.2, 0.5, opacity * 0.7];

    let extent = range as f32 * cell_size;

    for i in -range..=range {
        let f = i as f32 * cell_size;

        let color = if i == 0 { origin_color_z } else { grid_color };
        // Line along Z
        push_line_vert(&mut vertices, f, 0.0, -extent, color);
        push_line_vert(&mut vertices, f, 0.0, extent, color);

        let color = if i == 0 { origin_color_x } else { grid_color };
        // Line along X
        push_line_vert(&mut vertices, -extent, 0.0, f, color);
        push_line_vert(&mut vertices, extent, 0.0, f, color);
    }

    LineMeshData { vertices }
}

pub fn axes(length: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let r = [0.9_f32, 0.2, 0.2, 1.0];
    let g = [0.2_f32, 0.8, 0.2, 1.0];
    let b = [0.2_f32, 0.3, 0.9, 1.0];

    // X axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, r);
    push_line_vert(&mut vertices, length, 0.0, 0.0, r);
    // Y axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, g);
    push_line_vert(&mut vertices, 0.0, length, 0.0, g);
    // Z axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, b);
    push_line_vert(&mut vertices, 0.0, 0.0, length, b);

    LineMeshData { vertices }
}

// ── Helpers ──────────────────────────────────────────────────

fn push_vert(v: &mut Vec<f32>, p: Vec3, n: Vec3, c: [f32; 3]) {
    v.extend_from_slice(&[p.x, p.y, p.z, n.x, n.y, n.z, c[0], c[1], c[2]]);
}

fn push_line_vert(v: &mut Vec<f32>, px: f32, py: f32, pz: f32, c: [f32; 4]) {
    v.extend_from_slice(&[px, py, pz, c[0], c[1], c[2], c[3]]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_counts() {
        let m = cube(1.0, 1.0, 1.0, [1.0, 0.0, 0.0]);
        assert_eq!(m.vertex_count(), 24);
        assert_eq!(m.indices.len(), 36);
    }

    #[test]
    fn test_plane_faces_up() {
        let m = plane(10.0, 10.0, [1.0, 1.0, 1.0]);
        for i in 0..m.vertex_count() {
            assert!((m.normal(i) - Vec3::Y).length() < 1e-6);
        }
    }

    #[test]
    fn test_transformed_translates_positions_only() {
        let m = cube(1.0, 1.0, 1.0, [1.0, 1.0, 1.0]);
        let t = m.transformed(&Mat4::from_translation(Vec3::new(3.0, 0.0, 0.0)));
        assert!((t.position(0).x - (m.position(0).x + 3.0)).abs() < 1e-5);
        assert!((t.normal(0) - m.normal(0)).length() < 1e-5);
    }

    #[test]
    fn test_transformed_rotates_normals() {
        let m = cube(1.0, 1.0, 1.0, [1.0, 1.0, 1.0]);
        let rot = Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let t = m.transformed(&rot);
        // Front face (+Z) rotates onto +X
        assert!((t.normal(0) - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_skybox_normals_point_inward() {
        let m = skybox(100.0);
        for i in 0..m.vertex_count() {
            let p = m.position(i);
            // Inward normal opposes the vertex direction from center
            assert!(m.normal(i).dot(p) < 0.0);
        }
    }

    #[test]
    fn test_sphere_counts() {
        let m = sphere(1.0, 8, 12, [1.0, 1.0, 1.0]);
        assert_eq!(m.vertex_count(), 9 * 13);
        assert_eq!(m.indices.len() as u32, 8 * 12 * 6);
    }
}
