use crate::math::{Point, Real, Vector};
use arrayvec::ArrayVec;

/// Selects up to four points of `points` forming the largest quadrilateral.
///
/// The points are assumed to lie (approximately) on a plane orthogonal to
/// `normal`. The returned indices are distinct. If `keep_first` is `true`,
/// the first point is always part of the result and appears first.
///
/// The selection starts with the farthest pair of points (or the point
/// farthest from `points[0]` if `keep_first` is set), then adds the points
/// with the largest distance on each side of the line passing through that
/// pair. Ties keep the first candidate found. Returns an empty set only if
/// `points` is empty.
pub fn reduce_polygon(
    points: &[Point<Real>],
    normal: &Vector<Real>,
    keep_first: bool,
) -> ArrayVec<usize, 4> {
    let eps = Real::EPSILON;
    let mut result = ArrayVec::new();

    if points.is_empty() {
        return result;
    }

    let (i0, i1) = if keep_first {
        let p0 = &points[0];
        let mut best = 0;
        let mut max_dist = -Real::MAX;

        for (j, p1) in points.iter().enumerate() {
            let dist = (p1 - p0).norm_squared();
            if dist > max_dist + eps {
                max_dist = dist;
                best = j;
            }
        }

        (0, best)
    } else {
        let mut best = (0, 0);
        let mut max_dist = -Real::MAX;

        for (i, p0) in points.iter().enumerate() {
            for (j, p1) in points.iter().enumerate() {
                let dist = (p1 - p0).norm_squared();
                if dist > max_dist + eps {
                    max_dist = dist;
                    best = (i, j);
                }
            }
        }

        best
    };

    result.push(i0);

    if i0 == i1 {
        // All the points are the same.
        return result;
    }

    result.push(i1);

    let p0 = &points[i0];
    let n01 = normal.cross(&(points[i1] - p0));
    let mut i2 = None;
    let mut i3 = None;
    let mut min_dist = 0.0;
    let mut max_dist = 0.0;

    for (i, pt) in points.iter().enumerate() {
        let d = n01.dot(&(pt - p0));

        if d < min_dist - eps {
            i2 = Some(i);
            min_dist = d;
        }

        if d > max_dist + eps {
            i3 = Some(i);
            max_dist = d;
        }
    }

    for id in [i2, i3].into_iter().flatten() {
        if !result.contains(&id) {
            result.push(id);
        }
    }

    result
}
