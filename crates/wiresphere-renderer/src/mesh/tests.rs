use wiresphere_common::Color;
use wiresphere_core::{Material, Mesh, PerspectiveCamera, ResourceId, SceneFrame, Transform};

use super::*;
use crate::matrix::transform_point;

fn mesh(material: Material, transform: Transform) -> Mesh {
    Mesh {
        geometry: ResourceId(1),
        material_id: ResourceId(2),
        material,
        transform,
    }
}

fn frame<'a>(
    camera: &'a PerspectiveCamera,
    group: &'a Transform,
    meshes: &'a [Mesh],
) -> SceneFrame<'a> {
    SceneFrame {
        background: Color::BLACK,
        camera,
        lights: &[],
        group,
        meshes,
    }
}

#[test]
fn uniform_sizes() {
    assert_eq!(std::mem::size_of::<MeshVertex>(), 12);
    assert_eq!(std::mem::size_of::<MeshUniforms>(), 80);
}

#[test]
fn uniforms_carry_current_opacity() {
    let camera = PerspectiveCamera::new(75.0, 1.0);
    let group = Transform::IDENTITY;
    let mut m = mesh(
        Material::double_sided(Color::from_rgb_u32(0xff6b35), 0.0),
        Transform::IDENTITY,
    );
    m.material.opacity = 0.4;
    let meshes = [m];
    let u = mesh_uniforms(&frame(&camera, &group, &meshes), &meshes[0]);
    assert!((u.color[0] - 1.0).abs() < 1e-6);
    assert!((u.color[3] - 0.4).abs() < 1e-6);
}

#[test]
fn group_transform_applies_to_every_mesh() {
    let camera = PerspectiveCamera::new(75.0, 1.0);
    let mut group = Transform::IDENTITY;
    group.position = [1.0, 0.0, 0.0];
    let meshes = [mesh(
        Material::wireframe(Color::BLACK, 1.0),
        Transform::IDENTITY,
    )];
    let u = mesh_uniforms(&frame(&camera, &group, &meshes), &meshes[0]);
    let clip = transform_point(&u.mvp, [0.0, 0.0, 0.0]);
    // Shifted right of center, still five units in front of the camera.
    assert!(clip[0] / clip[3] > 0.0);
    assert!((clip[3] - 5.0).abs() < 1e-5);
}

#[test]
fn mesh_transform_composes_inside_group() {
    let camera = PerspectiveCamera::new(75.0, 1.0);
    let mut group = Transform::IDENTITY;
    group.set_uniform_scale(2.0);
    let mut local = Transform::IDENTITY;
    local.position = [0.0, 1.0, 0.0];
    let meshes = [mesh(Material::wireframe(Color::BLACK, 1.0), local)];
    let u = mesh_uniforms(&frame(&camera, &group, &meshes), &meshes[0]);

    let mut expected_group = Transform::IDENTITY;
    expected_group.position = [0.0, 2.0, 0.0];
    let plain = [mesh(
        Material::wireframe(Color::BLACK, 1.0),
        Transform::IDENTITY,
    )];
    let reference = mesh_uniforms(&frame(&camera, &expected_group, &plain), &plain[0]);

    let a = transform_point(&u.mvp, [0.0, 0.0, 0.0]);
    let b = transform_point(&reference.mvp, [0.0, 0.0, 0.0]);
    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x - y).abs() < 1e-5);
    }
}

#[test]
fn resource_table_never_reuses_ids() {
    let mut table = ResourceTable::new();
    let a = table.insert("sphere");
    let b = table.insert("material");
    assert_ne!(a, b);
    assert_eq!(table.remove(a), Some("sphere"));
    assert_eq!(table.remove(a), None);
    let c = table.insert("plane");
    assert_ne!(c, a);
    assert_eq!(table.get(c), Some(&"plane"));
    assert_eq!(table.len(), 2);
}

#[test]
fn resource_table_clear_reports_leftovers() {
    let mut table = ResourceTable::new();
    table.insert(1);
    table.insert(2);
    assert_eq!(table.clear(), 2);
    assert!(table.is_empty());
    assert_eq!(table.clear(), 0);
}
