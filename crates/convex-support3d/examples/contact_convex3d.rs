extern crate nalgebra as na;

use convex_support3d::query::{self, ContactPatches};
use convex_support3d::shape::{BoxCore, ConvexShape, CylinderCore};
use na::{Isometry3, Vector3};

fn main() {
    let floor = ConvexShape::new(
        BoxCore::new(Vector3::new(10.0, 1.0, 10.0)),
        0.0,
        Isometry3::translation(0.0, -0.5, 0.0),
    );
    let cube = ConvexShape::new(
        BoxCore::new(Vector3::new(1.0, 1.0, 1.0)),
        0.02,
        Isometry3::translation(0.0, 0.51, 0.0),
    );
    let barrel = ConvexShape::new(
        CylinderCore::new(1.0, 0.4),
        0.02,
        Isometry3::new(Vector3::new(3.0, 0.41, 0.0), Vector3::x() * 0.5),
    );
    let prediction = 0.1;

    let mut patches = ContactPatches::new();
    for shape in [&cube, &barrel] {
        let contacts = query::contact_convex_convex(shape, &floor, prediction);
        println!(
            "{:?} on floor: {} contacts, normal {:?}",
            shape.core_type(),
            contacts.len(),
            contacts.normal
        );
        patches.add_contacts(&contacts);
    }

    assert_eq!(patches.num_patches(), 1);
    for (i, pt) in patches.patches()[0].points().iter().enumerate() {
        println!("contact {i}: {:?}, depth {}", pt.position, pt.depth);
    }
}
