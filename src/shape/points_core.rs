//! Convex hull of a borrowed point cloud.

use crate::math::{Point, Real, Rotation, Vector};
use crate::query::ContactTolerances;
use crate::shape::contact_face::MAX_FACE_POINTS;
use crate::shape::{ContactFace, ConvexCoreError};
use crate::utils::{
    ccw_face_normal, normalize_or_zero, point_cloud_support_point_id, reduce_polygon,
};
use arrayvec::ArrayVec;

/// The maximum number of points of a [`PointsCore`].
pub const MAX_CLOUD_POINTS: usize = u8::MAX as usize;

/// The convex hull of a set of points, deformed by an oriented anisotropic scale.
///
/// The points are borrowed from the caller and are never copied. Each point `p` is
/// used as `R⁻¹ * S * R * p` where `R` is `rotation` and `S` is the diagonal matrix
/// built from `scale`.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct PointsCore<'a> {
    /// The points, before scaling.
    pub points: &'a [Point<Real>],
    /// The scale applied along the axes of the scaling frame.
    pub scale: Vector<Real>,
    /// The orientation of the scaling frame.
    pub rotation: Rotation<Real>,
}

impl<'a> PointsCore<'a> {
    /// Creates a new point cloud core.
    #[inline]
    pub fn new(points: &'a [Point<Real>], scale: Vector<Real>, rotation: Rotation<Real>) -> Self {
        debug_assert!(
            points.len() <= MAX_CLOUD_POINTS,
            "a point cloud core supports at most {MAX_CLOUD_POINTS} points."
        );
        Self {
            points,
            scale,
            rotation,
        }
    }

    /// Creates a new point cloud core, checking its number of points and its scale.
    pub fn try_new(
        points: &'a [Point<Real>],
        scale: Vector<Real>,
        rotation: Rotation<Real>,
    ) -> Result<Self, ConvexCoreError> {
        let core = Self {
            points,
            scale,
            rotation,
        };
        core.validate()?;
        Ok(core)
    }

    /// Checks the parameters of this point cloud.
    pub fn validate(&self) -> Result<(), ConvexCoreError> {
        if self.points.len() > MAX_CLOUD_POINTS {
            return Err(ConvexCoreError::TooManyPoints(self.points.len()));
        }
        if !self.scale.iter().all(|s| s.is_finite()) {
            return Err(ConvexCoreError::InvalidScale);
        }
        Ok(())
    }

    /// A point cloud core without scaling.
    #[inline]
    pub fn unscaled(points: &'a [Point<Real>]) -> Self {
        Self::new(points, Vector::repeat(1.0), Rotation::identity())
    }

    /// Applies the oriented scaling of this core to `v`.
    #[inline]
    pub fn scale_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.rotation
            .inverse_transform_vector(&self.scale.component_mul(&(self.rotation * v)))
    }

    /// The `i`-th point of this core, after scaling.
    #[inline]
    pub fn point(&self, i: usize) -> Point<Real> {
        Point::from(self.scale_vector(&self.points[i].coords))
    }

    /// The scaled point farthest along `dir`, or the origin if there is no point.
    pub fn local_support(&self, dir: &Vector<Real>) -> Point<Real> {
        // The oriented scaling is symmetric: maximizing `dir · T(p)` is maximizing `T(dir) · p`.
        let d = self.scale_vector(dir);

        if d.norm() < Real::EPSILON {
            return Point::origin();
        }

        point_cloud_support_point_id(&d, self.points)
            .map(|i| self.point(i))
            .unwrap_or_else(Point::origin)
    }

    /// Up to four scaled points lying on the hull face facing `dir`.
    ///
    /// The face plane is inferred from the (up to) three points farthest along `dir`. It
    /// is rejected unless nearly aligned with `dir`. The first point of the returned face
    /// is the one farthest along `dir`.
    pub fn contact_face(&self, dir: &Vector<Real>, tolerances: &ContactTolerances) -> ContactFace {
        let d = normalize_or_zero(dir);
        if d == Vector::zeros() {
            return ContactFace::empty();
        }

        // Top-three points along `d`, sorted by decreasing projection, first-seen first.
        let mut top: ArrayVec<(Real, usize), 3> = ArrayVec::new();
        for i in 0..self.points.len() {
            let dot = d.dot(&self.point(i).coords);
            let pos = top.iter().position(|(best, _)| dot > *best).unwrap_or(top.len());
            if pos < 3 {
                if top.is_full() {
                    let _ = top.pop();
                }
                top.insert(pos, (dot, i));
            }
        }

        if top.len() < 2 {
            return ContactFace::empty();
        }

        let p0 = self.point(top[0].1);
        let p1 = self.point(top[1].1);
        let normal = if let Some(&(_, i2)) = top.get(2) {
            let p2 = self.point(i2);
            self.face_normal3(&d, &p0, &p1, &p2, tolerances)
        } else {
            let e = p1 - p0;
            let n = normalize_or_zero(&e.cross(&d.cross(&e)));
            (d.dot(&n) > tolerances.face_alignment).then_some(n)
        };

        let Some(normal) = normal else {
            return ContactFace::empty();
        };

        let max_proj = normal.dot(&p0.coords);
        let mut face = ContactFace::empty();
        face.normal = normal;

        for i in 0..self.points.len() {
            let p = self.point(i);
            if (normal.dot(&p.coords) - max_proj).abs() >= tolerances.face_plane_epsilon {
                continue;
            }

            let mut candidates: ArrayVec<Point<Real>, { MAX_FACE_POINTS + 1 }> = ArrayVec::new();
            candidates.push(p);
            candidates.extend(face.points.iter().copied());
            for j in 1..candidates.len() {
                if candidates[0].coords.dot(&d) < candidates[j].coords.dot(&d) {
                    candidates.swap(0, j);
                }
            }

            face.points = reduce_polygon(&candidates, &d, true)
                .into_iter()
                .map(|k| candidates[k])
                .collect();
        }

        if face.len() < 2 {
            return ContactFace::empty();
        }

        face
    }

    /// Selects the face normal from three extreme points, facing `d`.
    fn face_normal3(
        &self,
        d: &Vector<Real>,
        p0: &Point<Real>,
        p1: &Point<Real>,
        p2: &Point<Real>,
        tolerances: &ContactTolerances,
    ) -> Option<Vector<Real>> {
        let e1 = p1 - p0;
        let e2 = p2 - p0;

        if let Some(n0) = ccw_face_normal([p0, p1, p2]) {
            let dot0 = d.dot(&n0);
            if dot0.abs() > tolerances.face_alignment {
                return Some(if dot0 < 0.0 { -n0.into_inner() } else { n0.into_inner() });
            }
        }

        // Fall back to the planes containing one of the edges and nearly orthogonal to `d`.
        [e1, e2].iter().find_map(|e| {
            let n = normalize_or_zero(&e.cross(d).cross(e));
            (d.dot(&n) > tolerances.face_alignment).then_some(n)
        })
    }
}
