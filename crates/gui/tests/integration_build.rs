//! Integration tests for the mesh build pipeline:
//! SceneDescription → build_scene_meshes → validated mesh output.

use placer_gui_lib::build::build_scene_meshes;
use placer_gui_lib::fixtures::*;
use placer_gui_lib::validation::MeshValidator;

#[test]
fn test_cube_end_to_end() {
    let (meshes, errors) = build_scene_meshes(&single_cube_scene());

    assert!(errors.is_empty(), "Build errors: {errors:?}");
    assert_eq!(meshes.len(), 1);

    let mesh = meshes.get("cube").unwrap();
    let v = MeshValidator::new(mesh);
    let validation_errors = v.validate_all();
    assert!(
        validation_errors.is_empty(),
        "Validation errors: {validation_errors:?}"
    );
    assert!(v.vertex_count() > 0);
    assert!(v.triangle_count() > 0);
}

#[test]
fn test_demo_scene_builds_clean() {
    let scene = demo_scene();
    let (meshes, errors) = build_scene_meshes(&scene);

    assert!(errors.is_empty(), "Build errors: {errors:?}");

    // Hidden ground plane is skipped; everything else produces a mesh
    let visible = scene.objects.iter().filter(|o| o.visible).count();
    assert_eq!(meshes.len(), visible);

    for (id, mesh) in &meshes {
        let v = MeshValidator::new(mesh);
        let errors = v.validate_all();
        assert!(errors.is_empty(), "{id} validation errors: {errors:?}");
    }
}

#[test]
fn test_csg_subtraction_carves_material() {
    let scene = demo_scene();
    let (meshes, errors) = build_scene_meshes(&scene);
    assert!(errors.is_empty(), "Build errors: {errors:?}");

    let result = meshes.get("csg-result").unwrap();
    let v = MeshValidator::new(result);
    assert!(v.vertex_count() > 0);

    // The subtraction result is offset to the opposite side of the scene
    let center = v.aabb().center();
    assert!(center.x < 0.0, "expected result at negative x, got {center}");

    // Carving a sphere out of the box adds facets beyond the box's 12 triangles
    assert!(v.triangle_count() > 12);
}

#[test]
fn test_sphere_dimensions() {
    let mut scene = empty_scene();
    scene.objects.push(shared::SceneObject {
        id: "ball".to_string(),
        name: "Ball".to_string(),
        shape: shared::Shape::Primitive {
            primitive: shared::Primitive::Sphere { radius: 1.2 },
        },
        transform: shared::Transform::new(),
        color: [1.0, 1.0, 1.0],
        visible: true,
        pickable: false,
    });

    let (meshes, errors) = build_scene_meshes(&scene);
    assert!(errors.is_empty());

    let v = MeshValidator::new(meshes.get("ball").unwrap());
    let dims = v.dimensions();
    for d in dims {
        assert!((d - 2.4).abs() < 0.05, "sphere dimension {d}");
    }
}

#[test]
fn test_rotated_cube_keeps_valid_normals() {
    let mut scene = single_cube_scene();
    scene.objects[0].transform.rotation = [0.3, 0.7, -0.2];

    let (meshes, errors) = build_scene_meshes(&scene);
    assert!(errors.is_empty());

    let v = MeshValidator::new(meshes.get("cube").unwrap());
    assert!(v.are_normals_normalized(1e-3));
}

#[test]
fn test_error_does_not_abort_other_objects() {
    let mut scene = single_cube_scene();
    scene.objects.push(shared::SceneObject {
        id: "broken".to_string(),
        name: "Broken".to_string(),
        shape: shared::Shape::Difference {
            left: "cube".to_string(),
            right: "missing".to_string(),
        },
        transform: shared::Transform::new(),
        color: [1.0, 1.0, 1.0],
        visible: true,
        pickable: false,
    });

    let (meshes, errors) = build_scene_meshes(&scene);
    assert!(meshes.contains_key("cube"));
    assert!(errors.contains_key("broken"));
}
