use convex_support3d::math::{Isometry, Real, Vector};
use convex_support3d::query;
use convex_support3d::shape::{BoxCore, ConvexShape, CylinderCore, EllipsoidCore, Plane};

#[test]
fn box_resting_on_plane() {
    let plane = Plane::new(Vector::y_axis(), 0.0);
    let cuboid = ConvexShape::new(
        BoxCore::new(Vector::repeat(2.0)),
        0.0,
        Isometry::translation(0.0, 0.99, 0.0),
    );

    let contacts = query::contact_plane_convex(&plane, &cuboid, 0.0);
    assert_eq!(contacts.len(), 4);
    assert_eq!(contacts.normal, -Vector::y());

    for pt in contacts.iter() {
        assert_relative_eq!(pt.depth, -0.01, epsilon = 1.0e-5);
        assert_relative_eq!(pt.position.y, -0.005, epsilon = 1.0e-5);
        assert_relative_eq!(pt.position.x.abs(), 1.0, epsilon = 1.0e-5);
        assert_relative_eq!(pt.position.z.abs(), 1.0, epsilon = 1.0e-5);
    }
}

#[test]
fn sphere_touches_plane_at_one_point() {
    let plane = Plane::new(Vector::y_axis(), 0.0);
    let sphere = ConvexShape::new(
        EllipsoidCore::new(Vector::repeat(1.0)),
        0.0,
        Isometry::translation(0.5, 0.5, 0.0),
    );

    let contacts = query::contact_plane_convex(&plane, &sphere, 0.0);
    assert_eq!(contacts.len(), 1);
    assert_relative_eq!(contacts.points[0].depth, -0.5, epsilon = 1.0e-5);
    assert_relative_eq!(contacts.points[0].position.x, 0.5, epsilon = 1.0e-5);
    assert_relative_eq!(contacts.points[0].position.y, -0.25, epsilon = 1.0e-5);
}

#[test]
fn margin_and_contact_distance() {
    let plane = Plane::new(Vector::y_axis(), 0.0);
    let cylinder = ConvexShape::new(
        CylinderCore::new(2.0, 0.5),
        0.1,
        Isometry::new(
            Vector::new(0.0, 1.2, 0.0),
            Vector::z() * std::f64::consts::FRAC_PI_2 as Real,
        ),
    );

    // The cap of the dilated cylinder is 0.1 above the plane.
    assert!(query::contact_plane_convex(&plane, &cylinder, 0.05).is_empty());

    let contacts = query::contact_plane_convex(&plane, &cylinder, 0.2);
    assert_eq!(contacts.len(), 4);
    for pt in contacts.iter() {
        assert_relative_eq!(pt.depth, 0.1, epsilon = 1.0e-4);
    }
}
