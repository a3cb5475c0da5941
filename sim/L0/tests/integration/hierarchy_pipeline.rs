//! Hierarchy propagation across chains, forests and re-parented updates.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use nalgebra::{Point3, UnitQuaternion, Vector3};
use sim_hierarchy::{Hierarchy, HierarchyError};
use sim_types::Transform;

use crate::test_utils::{assert_point_near, assert_transform_near};

fn three_level_chain() -> Hierarchy<&'static str> {
    let mut h = Hierarchy::new();
    h.add_root(
        "base",
        "base",
        Transform::from_translation_rotation(
            Vector3::new(1.0, 0.0, 0.0),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2),
        ),
    )
    .unwrap();
    h.add_child_with_rotation(
        "arm",
        "arm",
        "base",
        Vector3::new(0.0, 2.0, 0.0),
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), FRAC_PI_4),
    )
    .unwrap();
    h.add_child("hand", "hand", "arm", Vector3::new(0.0, 0.0, 0.5))
        .unwrap();
    h
}

#[test]
fn three_level_chain_global_is_local_product() {
    let mut h = three_level_chain();
    h.update_global_transforms();

    let base = *h.local("base").unwrap();
    let arm = *h.local("arm").unwrap();
    let hand = *h.local("hand").unwrap();

    assert_transform_near(h.global("base").unwrap(), &base);
    assert_transform_near(h.global("arm").unwrap(), &base.compose(&arm));
    assert_transform_near(
        h.global("hand").unwrap(),
        &base.compose(&arm).compose(&hand),
    );
}

#[test]
fn three_level_chain_known_positions() {
    let mut h = three_level_chain();
    h.update_global_transforms();

    // Base rotates +90° about Z, so the arm's +Y offset lands on -X.
    assert_point_near(
        &h.global("arm").unwrap().transform_point(&Point3::origin()),
        &Point3::new(-1.0, 0.0, 0.0),
    );

    // The hand's +Z offset is tilted 45° about the arm's X (world Y).
    let s = 0.5 * FRAC_PI_4.sin();
    let c = 0.5 * FRAC_PI_4.cos();
    assert_point_near(
        &h.global("hand").unwrap().transform_point(&Point3::origin()),
        &Point3::new(-1.0 + s, 0.0, c),
    );
}

#[test]
fn root_global_equals_local() {
    let mut h: Hierarchy = Hierarchy::new();
    let local = Transform::from_parts(
        Vector3::new(3.0, -4.0, 0.5),
        UnitQuaternion::from_euler_angles(0.3, -1.1, 2.0),
        1.7,
    );
    h.add_root((), "root", local).unwrap();
    h.add_child((), "child", "root", Vector3::new(1.0, 1.0, 1.0))
        .unwrap();

    h.update_global_transforms();
    assert_eq!(h.global("root").unwrap(), &local);

    h.lookup("root").unwrap().translation.z = -9.0;
    h.update_global_transforms();
    assert_eq!(h.global("root").unwrap(), h.local("root").unwrap());
}

#[test]
fn lookup_edits_flow_to_descendants() {
    let mut h = three_level_chain();
    h.update_global_transforms();
    let before = h.global("hand").unwrap().translation;

    h.lookup("base").unwrap().translation += Vector3::new(0.0, 0.0, 10.0);

    // Globals are stale until the next propagation.
    assert_eq!(h.global("hand").unwrap().translation, before);

    h.update_global_transforms();
    let after = h.global("hand").unwrap().translation;
    assert!((after - before - Vector3::new(0.0, 0.0, 10.0)).norm() < 1e-12);
}

#[test]
fn uniform_scale_stretches_child_offsets() {
    let mut h: Hierarchy = Hierarchy::new();
    h.add_root(
        (),
        "root",
        Transform::from_parts(Vector3::zeros(), UnitQuaternion::identity(), 2.0),
    )
    .unwrap();
    h.add_child((), "child", "root", Vector3::new(1.0, 0.0, 0.0))
        .unwrap();
    h.update_global_transforms();

    let child = h.global("child").unwrap();
    assert_eq!(child.translation, Vector3::new(2.0, 0.0, 0.0));
    assert_eq!(child.scale, 2.0);
}

#[test]
fn forest_roots_are_independent() {
    let mut h: Hierarchy = Hierarchy::new();
    h.add_root((), "a", Transform::from_translation(Vector3::x()))
        .unwrap();
    h.add_root((), "b", Transform::from_translation(Vector3::y()))
        .unwrap();
    h.add_child((), "a1", "a", Vector3::z()).unwrap();
    h.add_child((), "b1", "b", Vector3::z()).unwrap();
    h.update_global_transforms();

    assert_eq!(h.roots().count(), 2);
    assert_eq!(
        h.global("a1").unwrap().translation,
        Vector3::new(1.0, 0.0, 1.0)
    );
    assert_eq!(
        h.global("b1").unwrap().translation,
        Vector3::new(0.0, 1.0, 1.0)
    );
}

#[test]
fn invalid_insertions_leave_hierarchy_unchanged() {
    let mut h = three_level_chain();

    let err = h
        .add_child("ghost", "ghost", "nowhere", Vector3::zeros())
        .unwrap_err();
    assert!(matches!(err, HierarchyError::UnknownParent { .. }));

    let err = h
        .add_child("arm", "arm", "base", Vector3::zeros())
        .unwrap_err();
    assert!(matches!(err, HierarchyError::DuplicateName(_)));

    assert_eq!(h.len(), 3);
    assert!(!h.contains("ghost"));
    assert!(h.lookup("ghost").is_err());
}
