use crate::math::{Point, Real, Rotation, UnitVector, Vector};

/// Rotates `points` around the axis passing through `center` along `normal`,
/// so that the direction from `center` to `points[0]` matches the direction
/// from `center` to the projection of `reference` onto the plane orthogonal to
/// `normal`.
///
/// The points are left untouched if either direction is degenerate, or if they
/// are already aligned.
pub fn rotate_points(
    center: &Point<Real>,
    reference: &Point<Real>,
    normal: &Vector<Real>,
    points: &mut [Point<Real>],
) {
    let eps = Real::EPSILON;

    let Some(first) = points.first() else {
        return;
    };
    let Some(dir0) = (first - center).try_normalize(eps) else {
        return;
    };

    let to_ref = reference - center;
    let Some(dir1) = (to_ref - normal * normal.dot(&to_ref)).try_normalize(eps) else {
        return;
    };

    let cross = dir0.cross(&dir1);
    if cross.norm() < eps {
        return;
    }

    let axis = if normal.dot(&cross) > 0.0 {
        *normal
    } else {
        -*normal
    };
    let angle = dir0.dot(&dir1).clamp(-1.0, 1.0).acos();
    let rot = Rotation::from_axis_angle(&UnitVector::new_normalize(axis), angle);

    for pt in points.iter_mut() {
        *pt = center + rot * (*pt - center);
    }
}
