use std::collections::HashMap;

use glam::Vec3;

use super::mesh::MeshData;

/// A ray in world space
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Point at parameter `t` along the ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Compute AABB from interleaved mesh vertices
    pub fn from_mesh(data: &MeshData) -> Self {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);

        for i in 0..data.vertex_count() {
            let p = data.position(i);
            min = min.min(p);
            max = max.max(p);
        }

        Self { min, max }
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Ray-AABB intersection using the slab method.
/// Returns the distance along the ray to the nearest hit, or None.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let inv_dir = Vec3::new(
        1.0 / ray.direction.x,
        1.0 / ray.direction.y,
        1.0 / ray.direction.z,
    );

    let t1 = (aabb.min.x - ray.origin.x) * inv_dir.x;
    let t2 = (aabb.max.x - ray.origin.x) * inv_dir.x;
    let t3 = (aabb.min.y - ray.origin.y) * inv_dir.y;
    let t4 = (aabb.max.y - ray.origin.y) * inv_dir.y;
    let t5 = (aabb.min.z - ray.origin.z) * inv_dir.z;
    let t6 = (aabb.max.z - ray.origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Möller-Trumbore ray-triangle intersection algorithm.
/// Returns the distance along the ray if hit, or None if no intersection.
pub fn ray_triangle_intersect(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-7;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to triangle
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);

    // Outside triangle (u)
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);

    // Outside triangle (v)
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);

    // Intersection is behind ray origin
    if t > EPSILON {
        Some(t)
    } else {
        None
    }
}

/// Nearest intersection of a ray with a target surface: the world-space hit
/// point, the surface normal at the hit, and the distance along the ray.
#[derive(Clone, Debug)]
pub struct SurfaceHit {
    /// Id of the mesh that was hit
    pub object_id: String,
    pub point: Vec3,
    pub normal: Vec3,
    pub distance: f32,
}

/// Find the nearest triangle in a single mesh intersected by the ray.
/// Returns distance and the stored normal of the hit triangle.
pub fn pick_triangle(ray: &Ray, mesh: &MeshData) -> Option<(f32, Vec3)> {
    let tri_count = mesh.indices.len() / 3;
    let mut best: Option<(f32, Vec3)> = None;

    for tri_idx in 0..tri_count {
        let i0 = mesh.indices[tri_idx * 3] as usize;
        let i1 = mesh.indices[tri_idx * 3 + 1] as usize;
        let i2 = mesh.indices[tri_idx * 3 + 2] as usize;

        let v0 = mesh.position(i0);
        let v1 = mesh.position(i1);
        let v2 = mesh.position(i2);

        if let Some(dist) = ray_triangle_intersect(ray, v0, v1, v2) {
            if best.is_none_or(|(d, _)| dist < d) {
                best = Some((dist, mesh.normal(i0)));
            }
        }
    }

    best
}

/// Query the nearest hit of a ray against a collection of candidate meshes.
/// AABBs are used as a cheap reject before the per-triangle test; among all
/// candidates the hit with the smallest positive distance wins.
pub fn pick_surface(
    ray: &Ray,
    meshes: &HashMap<String, MeshData>,
    aabbs: &HashMap<String, Aabb>,
) -> Option<SurfaceHit> {
    let mut best: Option<SurfaceHit> = None;

    for (id, mesh) in meshes {
        if let Some(aabb) = aabbs.get(id) {
            if ray_aabb(ray, aabb).is_none() {
                continue;
            }
        }

        if let Some((dist, normal)) = pick_triangle(ray, mesh) {
            if best.as_ref().is_none_or(|b| dist < b.distance) {
                best = Some(SurfaceHit {
                    object_id: id.clone(),
                    point: ray.at(dist),
                    normal,
                    distance: dist,
                });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::mesh;

    fn z_ray() -> Ray {
        Ray {
            origin: Vec3::new(0.0, 0.0, 5.0),
            direction: Vec3::NEG_Z,
        }
    }

    #[test]
    fn test_ray_aabb_hit_and_miss() {
        let aabb = Aabb {
            min: Vec3::splat(-1.0),
            max: Vec3::splat(1.0),
        };
        let hit = ray_aabb(&z_ray(), &aabb).unwrap();
        assert!((hit - 4.0).abs() < 1e-5);

        let miss = Ray {
            origin: Vec3::new(5.0, 0.0, 5.0),
            direction: Vec3::NEG_Z,
        };
        assert!(ray_aabb(&miss, &aabb).is_none());
    }

    #[test]
    fn test_ray_behind_origin_rejected() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, -5.0),
            direction: Vec3::NEG_Z,
        };
        let v0 = Vec3::new(-1.0, -1.0, 0.0);
        let v1 = Vec3::new(1.0, -1.0, 0.0);
        let v2 = Vec3::new(0.0, 1.0, 0.0);
        assert!(ray_triangle_intersect(&ray, v0, v1, v2).is_none());
    }

    #[test]
    fn test_pick_triangle_front_face() {
        let cube = mesh::cube(2.0, 2.0, 2.0, [1.0, 1.0, 1.0]);
        let (dist, normal) = pick_triangle(&z_ray(), &cube).unwrap();
        assert!((dist - 4.0).abs() < 1e-4);
        assert!((normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_pick_surface_nearest_wins() {
        let near = mesh::cube(1.0, 1.0, 1.0, [1.0, 1.0, 1.0])
            .transformed(&glam::Mat4::from_translation(Vec3::new(0.0, 0.0, 2.0)));
        let far = mesh::cube(1.0, 1.0, 1.0, [1.0, 1.0, 1.0]);

        let mut meshes = HashMap::new();
        meshes.insert("near".to_string(), near);
        meshes.insert("far".to_string(), far);
        let aabbs: HashMap<String, Aabb> = meshes
            .iter()
            .map(|(id, m)| (id.clone(), Aabb::from_mesh(m)))
            .collect();

        let hit = pick_surface(&z_ray(), &meshes, &aabbs).unwrap();
        assert_eq!(hit.object_id, "near");
        assert!((hit.point.z - 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_pick_surface_miss() {
        let mut meshes = HashMap::new();
        meshes.insert(
            "cube".to_string(),
            mesh::cube(1.0, 1.0, 1.0, [1.0, 1.0, 1.0]),
        );
        let aabbs: HashMap<String, Aabb> = meshes
            .iter()
            .map(|(id, m)| (id.clone(), Aabb::from_mesh(m)))
            .collect();

        let ray = Ray {
            origin: Vec3::new(10.0, 0.0, 5.0),
            direction: Vec3::NEG_Z,
        };
        assert!(pick_surface(&ray, &meshes, &aabbs).is_none());
    }
}
