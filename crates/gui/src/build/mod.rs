//! Scene mesh building: turns a `SceneDescription` into world-space render
//! meshes. Primitives are generated locally; CSG subtraction is delegated to
//! the `vcad` kernel.

mod cache;
mod csg;
mod primitives;

pub use cache::MeshCache;
pub use primitives::{primitive_mesh, transform_matrix};

use std::collections::HashMap;

use shared::{SceneDescription, SceneObject, Shape};

use crate::viewport::mesh::MeshData;

/// Build meshes for all visible objects. Per-object failures are collected
/// (object id → message) instead of aborting the whole build.
pub fn build_scene_meshes(
    scene: &SceneDescription,
) -> (HashMap<String, MeshData>, HashMap<String, String>) {
    let mut meshes: HashMap<String, MeshData> = HashMap::new();
    let mut errors: HashMap<String, String> = HashMap::new();

    for object in &scene.objects {
        if !object.visible {
            continue;
        }

        match build_object_mesh(object, scene) {
            Ok(mesh_data) => {
                meshes.insert(object.id.clone(), mesh_data);
            }
            Err(msg) => {
                tracing::warn!("failed to build mesh for {}: {msg}", object.id);
                errors.insert(object.id.clone(), msg);
            }
        }
    }

    (meshes, errors)
}

/// Build the world-space mesh of a single object
pub fn build_object_mesh(
    object: &SceneObject,
    scene: &SceneDescription,
) -> Result<MeshData, String> {
    let model = transform_matrix(&object.transform);

    match &object.shape {
        Shape::Primitive { primitive } => {
            Ok(primitive_mesh(primitive, object.color).transformed(&model))
        }
        Shape::Difference { left, right } => {
            let left_obj = scene
                .get(left)
                .ok_or_else(|| format!("unknown left operand '{left}'"))?;
            let right_obj = scene
                .get(right)
                .ok_or_else(|| format!("unknown right operand '{right}'"))?;

            // World-space subtraction of the operands; this object's own
            // transform then offsets the result.
            let mesh = csg::difference_mesh(left_obj, right_obj, object.color)?;
            Ok(mesh.transformed(&model))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;
    use crate::validation::MeshValidator;

    #[test]
    fn test_empty_scene() {
        let (meshes, errors) = build_scene_meshes(&empty_scene());
        assert!(meshes.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_single_cube() {
        let (meshes, errors) = build_scene_meshes(&single_cube_scene());
        assert!(errors.is_empty(), "build errors: {errors:?}");
        assert_eq!(meshes.len(), 1);

        let v = MeshValidator::new(meshes.get("cube").unwrap());
        assert!(v.validate_all().is_empty());
        let dims = v.dimensions();
        assert!((dims[0] - 2.0).abs() < 0.01);
        assert!((dims[1] - 1.0).abs() < 0.01);
        assert!((dims[2] - 3.0).abs() < 0.01);
    }

    #[test]
    fn test_hidden_objects_skipped() {
        let mut scene = single_cube_scene();
        scene.objects[0].visible = false;
        let (meshes, errors) = build_scene_meshes(&scene);
        assert!(meshes.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_difference_with_missing_operand_reports_error() {
        let mut scene = single_cube_scene();
        scene.objects.push(shared::SceneObject {
            id: "bad".to_string(),
            name: "Bad".to_string(),
            shape: shared::Shape::Difference {
                left: "cube".to_string(),
                right: "nope".to_string(),
            },
            transform: shared::Transform::new(),
            color: [1.0, 1.0, 1.0],
            visible: true,
            pickable: false,
        });

        let (meshes, errors) = build_scene_meshes(&scene);
        assert_eq!(meshes.len(), 1);
        assert!(errors.contains_key("bad"));
    }

    #[test]
    fn test_transform_offsets_mesh() {
        let mut scene = single_cube_scene();
        scene.objects[0].transform = shared::Transform::at(5.0, 0.0, 0.0);
        let (meshes, _) = build_scene_meshes(&scene);
        let v = MeshValidator::new(meshes.get("cube").unwrap());
        let center = v.aabb().center();
        assert!((center.x - 5.0).abs() < 0.01);
    }
}
