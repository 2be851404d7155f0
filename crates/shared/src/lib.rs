use serde::{Deserialize, Serialize};

/// Unique identifier of a scene object
pub type ObjectId = String;

/// Solid primitive shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Cube {
        width: f64,
        height: f64,
        depth: f64,
    },
    Sphere {
        radius: f64,
    },
    /// Thin horizontal slab, used as a ground surface
    Plane {
        width: f64,
        depth: f64,
    },
}

/// Shape of a scene object: either a primitive, or a CSG subtraction of two
/// other objects referenced by id. The subtraction is computed in world space
/// from the operands' own transforms; the owning object's transform is then
/// applied on top of the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Primitive {
        primitive: Primitive,
    },
    Difference {
        left: ObjectId,
        right: ObjectId,
    },
}

/// Object transform. Rotation is XYZ Euler angles in radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: [f64; 3],
    pub rotation: [f64; 3],
    pub scale: [f64; 3],
}

impl Transform {
    pub fn new() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        }
    }

    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: [x, y, z],
            ..Self::new()
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

fn default_true() -> bool {
    true
}

fn default_version() -> u32 {
    1
}

/// A renderable object in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,
    /// Display name (status bar, logs)
    pub name: String,
    pub shape: Shape,
    pub transform: Transform,
    /// Flat RGB color in [0, 1]
    pub color: [f32; 3],
    /// Hidden objects are skipped by the mesh build
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Placement targets: only pickable objects are probed by the hover ray
    #[serde(default)]
    pub pickable: bool,
}

/// A scene is a flat list of objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SceneDescription {
    #[serde(default = "default_version")]
    pub version: u32,
    pub objects: Vec<SceneObject>,
}

impl SceneDescription {
    pub fn get(&self, id: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube_object(id: &str) -> SceneObject {
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
            color: [0.8, 0.8, 0.8],
            visible: true,
            pickable: true,
        }
    }

    #[test]
    fn test_scene_json_round_trip() {
        let scene = SceneDescription {
            version: 1,
            objects: vec![cube_object("c1")],
        };
        let json = serde_json::to_string_pretty(&scene).unwrap();
        let parsed: SceneDescription = serde_json::from_str(&json).unwrap();
        assert_eq!(scene, parsed);
    }

    #[test]
    fn test_visible_defaults_to_true() {
        let json = r#"{
            "id": "s1",
            "name": "Sphere",
            "shape": { "type": "primitive", "primitive": { "type": "sphere", "radius": 1.0 } },
            "transform": { "position": [0,0,0], "rotation": [0,0,0], "scale": [1,1,1] },
            "color": [1.0, 1.0, 1.0]
        }"#;
        let obj: SceneObject = serde_json::from_str(json).unwrap();
        assert!(obj.visible);
        assert!(!obj.pickable);
    }

    #[test]
    fn test_difference_shape_serialization() {
        let shape = Shape::Difference {
            left: "box".to_string(),
            right: "ball".to_string(),
        };
        let json = serde_json::to_string(&shape).unwrap();
        assert!(json.contains("difference"));
        let parsed: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(shape, parsed);
    }

    #[test]
    fn test_get_by_id() {
        let scene = SceneDescription {
            version: 1,
            objects: vec![cube_object("a"), cube_object("b")],
        };
        assert!(scene.get("b").is_some());
        assert!(scene.get("missing").is_none());
    }
}
