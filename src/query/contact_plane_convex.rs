use crate::math::Real;
use crate::query::{ContactPoint, ContactTolerances, ConvexContacts};
use crate::shape::{ConvexShape, Plane};

/// Computes up to four contacts between a plane and a convex shape.
///
/// The contact normal is the opposite of the plane normal. Each contact is positioned
/// halfway between the shape surface and the plane, and its depth is the signed
/// distance of the shape surface to the plane. No contact is generated if the shape
/// is farther than `contact_distance` from the plane.
pub fn contact_plane_convex(
    plane: &Plane,
    shape: &ConvexShape,
    contact_distance: Real,
) -> ConvexContacts {
    contact_plane_convex_with_tolerances(
        plane,
        shape,
        contact_distance,
        &ContactTolerances::default(),
    )
}

/// Computes up to four contacts between a plane and a convex shape, with custom tolerances.
pub fn contact_plane_convex_with_tolerances(
    plane: &Plane,
    shape: &ConvexShape,
    contact_distance: Real,
    tolerances: &ContactTolerances,
) -> ConvexContacts {
    let normal = -plane.normal_vector();
    let mut contacts = ConvexContacts::new(normal);

    let support = shape.support(&normal);
    let dist = plane.distance(&support);

    if dist >= contact_distance {
        return contacts;
    }

    let face = shape.contact_face(&normal, &support, tolerances);

    if face.is_empty() {
        contacts
            .points
            .push(ContactPoint::new(support + normal * dist * 0.5, dist));
    } else {
        for pt in &face.points {
            let depth = plane.distance(pt);
            contacts
                .points
                .push(ContactPoint::new(pt + normal * depth * 0.5, depth));
        }
    }

    contacts
}
