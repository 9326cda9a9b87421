use convex_support3d::math::{Isometry, Real, Vector};
use convex_support3d::query::{self, ContactPatches};
use convex_support3d::shape::{BoxCore, ConvexCore, ConvexShape, PointsCore, SegmentCore};

fn unit_box(pose: Isometry<Real>) -> ConvexShape<'static> {
    ConvexShape::new(BoxCore::new(Vector::repeat(2.0)), 0.0, pose)
}

#[test]
fn stacked_boxes() {
    let a = unit_box(Isometry::translation(0.0, 1.9, 0.0));
    let b = unit_box(Isometry::identity());

    let contacts = query::contact_convex_convex(&a, &b, 0.0);
    assert_eq!(contacts.len(), 4);
    assert_relative_eq!(contacts.normal, Vector::y(), epsilon = 1.0e-3);
    for pt in contacts.iter() {
        assert_relative_eq!(pt.depth, -0.1, epsilon = 1.0e-3);
        assert_relative_eq!(pt.position.y, 0.95, epsilon = 1.0e-3);
        assert!(pt.position.x.abs() <= 1.0 + 1.0e-3);
        assert!(pt.position.z.abs() <= 1.0 + 1.0e-3);
    }
}

#[test]
fn twisted_stacked_boxes() {
    let a = unit_box(Isometry::new(
        Vector::new(0.0, 1.9, 0.0),
        Vector::new(0.0, 0.3, 0.0),
    ));
    let b = unit_box(Isometry::identity());

    let contacts = query::contact_convex_convex(&a, &b, 0.0);
    assert_eq!(contacts.len(), 4);
    assert_relative_eq!(contacts.normal, Vector::y(), epsilon = 1.0e-3);
    for pt in contacts.iter() {
        assert_relative_eq!(pt.depth, -0.1, epsilon = 5.0e-3);
        assert!(pt.position.x.abs() <= 1.0 + 1.0e-3);
        assert!(pt.position.z.abs() <= 1.0 + 1.0e-3);
    }
}

#[test]
fn separated_boxes_within_contact_distance() {
    let a = unit_box(Isometry::translation(0.0, 2.05, 0.0));
    let b = unit_box(Isometry::identity());

    assert!(query::contact_convex_convex(&a, &b, 0.01).is_empty());

    let contacts = query::contact_convex_convex(&a, &b, 0.1);
    assert_eq!(contacts.len(), 4);
    for pt in contacts.iter() {
        assert_relative_eq!(pt.depth, 0.05, epsilon = 1.0e-3);
    }
}

#[test]
fn far_apart_boxes() {
    let a = unit_box(Isometry::translation(0.0, 5.0, 0.0));
    let b = unit_box(Isometry::identity());
    assert!(query::contact_convex_convex(&a, &b, 0.1).is_empty());
}

#[test]
fn back_faces_are_culled() {
    let a = unit_box(Isometry::translation(0.0, 1.9, 0.0));
    let b = unit_box(Isometry::identity());

    assert!(query::contact_convex_convex_culled(&a, &b, 0.0, &-Vector::y()).is_empty());
    assert_eq!(
        query::contact_convex_convex_culled(&a, &b, 0.0, &Vector::y()).len(),
        4
    );
}

#[test]
fn overlapping_dilated_points() {
    let a = ConvexShape::new(ConvexCore::Point, 0.5, Isometry::translation(0.0, 0.9, 0.0));
    let b = ConvexShape::new(ConvexCore::Point, 0.5, Isometry::identity());

    let contacts = query::contact_convex_convex(&a, &b, 0.0);
    assert_eq!(contacts.len(), 1);
    assert_relative_eq!(contacts.normal, Vector::y(), epsilon = 1.0e-4);
    assert_relative_eq!(contacts.points[0].depth, -0.1, epsilon = 1.0e-4);
    assert_relative_eq!(contacts.points[0].position.y, 0.45, epsilon = 1.0e-4);
}

#[test]
fn capsule_across_hull() {
    let cloud = crate::cube_points(1.0);
    let hull = ConvexShape::new(
        PointsCore::unscaled(&cloud),
        0.0,
        Isometry::identity(),
    );
    let capsule = ConvexShape::new(
        SegmentCore::new(1.0),
        0.25,
        Isometry::translation(0.0, 1.2, 0.0),
    );

    let contacts = query::contact_convex_convex(&capsule, &hull, 0.0);
    assert_eq!(contacts.len(), 2);
    assert_relative_eq!(contacts.normal, Vector::y(), epsilon = 1.0e-3);
    for pt in contacts.iter() {
        assert_relative_eq!(pt.depth, -0.05, epsilon = 1.0e-3);
        assert!(pt.position.x.abs() <= 0.5 + 1.0e-3);
    }
}

#[test]
fn box_bridging_two_boxes() {
    let bridge = unit_box(Isometry::translation(1.0, 1.95, 0.0));
    let supports = [
        unit_box(Isometry::identity()),
        unit_box(Isometry::translation(2.0, 0.0, 0.0)),
    ];

    let mut patches = ContactPatches::new();
    for support in &supports {
        patches.add_contacts(&query::contact_convex_convex(&bridge, support, 0.0));
    }

    assert_eq!(patches.num_patches(), 1);
    assert!(patches.num_points() >= 3 && patches.num_points() <= 4);
    for pt in patches.patches()[0].points() {
        assert_relative_eq!(pt.depth, -0.05, epsilon = 1.0e-3);
        assert!(pt.position.x >= -1.0e-3 && pt.position.x <= 2.0 + 1.0e-3);
    }
}
