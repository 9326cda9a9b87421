extern crate nalgebra as na;

use convex_support3d::query;
use convex_support3d::shape::{ConeCore, ConvexShape, Plane};
use na::{Isometry3, Vector3};

fn main() {
    let ground = Plane::new(Vector3::y_axis(), 0.0);
    let cone = ConvexShape::new(
        ConeCore::new(1.0, 0.5),
        0.0,
        Isometry3::new(
            Vector3::new(0.0, 0.49, 0.0),
            Vector3::z() * core::f32::consts::FRAC_PI_2,
        ),
    );

    let contacts = query::contact_plane_convex(&ground, &cone, 0.0);

    // The base of the cone lies on the ground.
    assert_eq!(contacts.len(), 4);
    assert!(contacts.iter().all(|pt| pt.depth < 0.0));
}
