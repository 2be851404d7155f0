//! Factory functions for demo and test scenes.

use shared::{Primitive, SceneDescription, SceneObject, Shape, Transform};

/// Id of the grey target cube in the demo scene
pub const TARGET_CUBE_ID: &str = "target-cube";

pub const TARGET_COLOR: [f32; 3] = [0.8, 0.8, 0.8];
const CSG_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

// ── Object factories ────────────────────────────────────────────

/// Grey cube that the placement ray probes, 2 x 1 x 3 at the origin
pub fn target_cube(id: &str) -> SceneObject {
    SceneObject {
        id: id.to_string(),
        name: "Cube".to_string(),
        shape: Shape::Primitive {
            primitive: Primitive::Cube {
                width: 2.0,
                height: 1.0,
                depth: 3.0,
            },
        },
        transform: Transform::new(),
        color: TARGET_COLOR,
        visible: true,
        pickable: true,
    }
}

/// Pickable wall: a thin cube whose front face lies at z = depth / 2,
/// facing +Z. Used by head-on placement tests.
pub fn wall(id: &str, width: f64, height: f64) -> SceneObject {
    SceneObject {
        id: id.to_string(),
        name: "Wall".to_string(),
        shape: Shape::Primitive {
            primitive: Primitive::Cube {
                width,
                height,
                depth: 0.1,
            },
        },
        transform: Transform::new(),
        color: TARGET_COLOR,
        visible: true,
        pickable: true,
    }
}

/// Large ground plane (hidden by default, as in the original demo)
pub fn ground_plane(id: &str) -> SceneObject {
    SceneObject {
        id: id.to_string(),
        name: "Ground".to_string(),
        shape: Shape::Primitive {
            primitive: Primitive::Plane {
                width: 10000.0,
                depth: 10000.0,
            },
        },
        transform: Transform::at(0.0, -0.5, 0.0),
        color: [1.0, 1.0, 1.0],
        visible: false,
        pickable: false,
    }
}

/// The CSG demo trio: a box and a sphere at (3, 0, 3), and their
/// subtraction displayed at (-3, 0, 3).
pub fn csg_demo_objects() -> Vec<SceneObject> {
    let cube = SceneObject {
        id: "csg-box".to_string(),
        name: "CSG Box".to_string(),
        shape: Shape::Primitive {
            primitive: Primitive::Cube {
                width: 2.0,
                height: 2.0,
                depth: 2.0,
            },
        },
        transform: Transform::at(3.0, 0.0, 3.0),
        color: CSG_COLOR,
        visible: true,
        pickable: false,
    };
    let sphere = SceneObject {
        id: "csg-ball".to_string(),
        name: "CSG Sphere".to_string(),
        shape: Shape::Primitive {
            primitive: Primitive::Sphere { radius: 1.2 },
        },
        transform: Transform::at(3.0, 0.0, 3.0),
        color: CSG_COLOR,
        visible: true,
        pickable: false,
    };
    // Operands sit at (3, 0, 3); the offset moves the result to (-3, 0, 3)
    let result = SceneObject {
        id: "csg-result".to_string(),
        name: "Box minus Sphere".to_string(),
        shape: Shape::Difference {
            left: "csg-box".to_string(),
            right: "csg-ball".to_string(),
        },
        transform: Transform::at(-6.0, 0.0, 0.0),
        color: CSG_COLOR,
        visible: true,
        pickable: false,
    };
    vec![cube, sphere, result]
}

// ── Scene factories ─────────────────────────────────────────────

pub fn empty_scene() -> SceneDescription {
    SceneDescription::default()
}

/// A single pickable cube with id "cube"
pub fn single_cube_scene() -> SceneDescription {
    SceneDescription {
        version: 1,
        objects: vec![target_cube("cube")],
    }
}

/// A pickable wall facing the head-on test camera
pub fn wall_scene() -> SceneDescription {
    SceneDescription {
        version: 1,
        objects: vec![wall("wall", 4.0, 4.0)],
    }
}

/// The startup scene: target cube plus the CSG demo
pub fn demo_scene() -> SceneDescription {
    let mut objects = vec![target_cube(TARGET_CUBE_ID)];
    objects.extend(csg_demo_objects());
    objects.push(ground_plane("ground"));
    SceneDescription {
        version: 1,
        objects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene_has_single_target() {
        let scene = demo_scene();
        let targets: Vec<_> = scene.objects.iter().filter(|o| o.pickable).collect();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].id, TARGET_CUBE_ID);
    }

    #[test]
    fn test_csg_operands_resolve() {
        let scene = demo_scene();
        let Shape::Difference { left, right } = &scene.get("csg-result").unwrap().shape else {
            panic!("expected difference shape");
        };
        assert!(scene.get(left).is_some());
        assert!(scene.get(right).is_some());
    }

    #[test]
    fn test_ground_plane_hidden() {
        let scene = demo_scene();
        assert!(!scene.get("ground").unwrap().visible);
    }
}
