use crate::math::{Point, Real, Vector};
use crate::query::{ContactTolerances, ConvexContacts, DistanceOracle, FaceClipper, GjkEpaOracle};
use crate::shape::ConvexShape;

/// Computes up to four contacts between two convex shapes.
///
/// The contact normal points from `shape_b` toward `shape_a`. No contact is generated
/// if the shapes are farther than `contact_distance` apart.
pub fn contact_convex_convex(
    shape_a: &ConvexShape,
    shape_b: &ConvexShape,
    contact_distance: Real,
) -> ConvexContacts {
    contact_convex_convex_culled(shape_a, shape_b, contact_distance, &Vector::zeros())
}

/// Computes up to four contacts between two convex shapes, with back-face culling.
///
/// No contact is generated if the contact normal points against `cull_direction`,
/// e.g., if `shape_a` lies behind a triangle with normal `cull_direction`. A zero
/// `cull_direction` disables culling.
pub fn contact_convex_convex_culled(
    shape_a: &ConvexShape,
    shape_b: &ConvexShape,
    contact_distance: Real,
    cull_direction: &Vector<Real>,
) -> ConvexContacts {
    contact_convex_convex_with_tolerances(
        shape_a,
        shape_b,
        contact_distance,
        cull_direction,
        &ContactTolerances::default(),
    )
}

/// Computes up to four contacts between two convex shapes, with custom tolerances.
///
/// See [`contact_convex_convex_culled`] for the meaning of `cull_direction`.
pub fn contact_convex_convex_with_tolerances(
    shape_a: &ConvexShape,
    shape_b: &ConvexShape,
    contact_distance: Real,
    cull_direction: &Vector<Real>,
    tolerances: &ContactTolerances,
) -> ConvexContacts {
    contact_convex_convex_with_oracle(
        &mut GjkEpaOracle::new(),
        shape_a,
        shape_b,
        contact_distance,
        cull_direction,
        tolerances,
    )
}

/// Computes up to four contacts between two convex shapes, using the given oracle for
/// the distance and penetration queries.
pub fn contact_convex_convex_with_oracle<O: DistanceOracle + ?Sized>(
    oracle: &mut O,
    shape_a: &ConvexShape,
    shape_b: &ConvexShape,
    contact_distance: Real,
    cull_direction: &Vector<Real>,
    tolerances: &ContactTolerances,
) -> ConvexContacts {
    let max_dist = shape_a.margin + shape_b.margin + contact_distance;

    let Some(mut sep) = oracle.separation_distance(shape_a, shape_b, max_dist) else {
        return ConvexContacts::default();
    };

    if sep.distance < tolerances.overlap_epsilon {
        match oracle.penetration_depth(shape_a, shape_b) {
            Some(depth) => sep = depth,
            None => return ConvexContacts::default(),
        }
    }

    if sep.distance > max_dist {
        return ConvexContacts::default();
    }

    let axis = sep.axis.into_inner();
    if cull_direction.dot(&axis) < -tolerances.cull_epsilon {
        return ConvexContacts::default();
    }

    // Move the closest points of the cores onto the dilated surfaces.
    let point_a = sep.point_a - axis * shape_a.margin;
    let point_b = sep.point_b + axis * shape_b.margin;

    generate_contact_patch_with_tolerances(
        shape_a, shape_b, &point_a, &point_b, &axis, tolerances,
    )
}

/// Computes up to four contacts between two convex shapes from the output of a
/// distance query.
///
/// `point_a` and `point_b` are on the dilated surfaces of the shapes, and the unit
/// `axis` points from `shape_b` toward `shape_a`.
pub fn generate_contact_patch(
    shape_a: &ConvexShape,
    shape_b: &ConvexShape,
    point_a: &Point<Real>,
    point_b: &Point<Real>,
    axis: &Vector<Real>,
) -> ConvexContacts {
    generate_contact_patch_with_tolerances(
        shape_a,
        shape_b,
        point_a,
        point_b,
        axis,
        &ContactTolerances::default(),
    )
}

/// Same as [`generate_contact_patch`], with custom tolerances.
pub fn generate_contact_patch_with_tolerances(
    shape_a: &ConvexShape,
    shape_b: &ConvexShape,
    point_a: &Point<Real>,
    point_b: &Point<Real>,
    axis: &Vector<Real>,
    tolerances: &ContactTolerances,
) -> ConvexContacts {
    let mut clipper =
        FaceClipper::with_tolerances(shape_a, shape_b, point_a, point_b, axis, tolerances);
    clipper.clip();
    clipper.contact()
}
