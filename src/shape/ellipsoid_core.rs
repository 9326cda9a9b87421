//! Ellipsoid core.

use crate::math::{Matrix, Point, Real, Vector};
use crate::query::ContactTolerances;
use crate::shape::convex_core_error::check_non_negative3;
use crate::shape::{ContactFace, ConvexCoreError};
use crate::utils::{normalize_or_zero, sign};

/// An axis-aligned ellipsoid centered at the origin.
///
/// Radii may be zero, turning the ellipsoid into a disk (one zero radius) or a
/// segment (two zero radii).
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EllipsoidCore {
    /// The radius along each local axis.
    pub radii: Vector<Real>,
}

impl EllipsoidCore {
    /// Creates a new ellipsoid core.
    #[inline]
    pub fn new(radii: Vector<Real>) -> Self {
        debug_assert!(
            radii.iter().all(|r| *r >= 0.0),
            "the ellipsoid radii must be non-negative."
        );
        Self { radii }
    }

    /// Creates a new ellipsoid core, checking that its radii are non-negative.
    pub fn try_new(radii: Vector<Real>) -> Result<Self, ConvexCoreError> {
        let core = Self { radii };
        core.validate()?;
        Ok(core)
    }

    /// Checks the parameters of this ellipsoid.
    pub fn validate(&self) -> Result<(), ConvexCoreError> {
        check_non_negative3("radii", &self.radii)
    }

    /// The point of this ellipsoid farthest along `dir`.
    ///
    /// The ellipsoid is the image of the unit sphere by `diag(radii)`, so its
    /// support point is the image of the sphere's support along `diag(radii)ᵀ * dir`.
    pub fn local_support(&self, dir: &Vector<Real>) -> Point<Real> {
        let xform = Matrix::from_diagonal(&self.radii);
        let dir1 = normalize_or_zero(&(xform.transpose() * dir));
        Point::from(xform * dir1)
    }

    /// The flat features of a degenerate ellipsoid.
    ///
    /// A disk seen along its normal yields four rim points, and a segment seen from
    /// its side yields its two ends. Any other configuration has no flat feature.
    pub fn contact_face(&self, dir: &Vector<Real>, tolerances: &ContactTolerances) -> ContactFace {
        let d = normalize_or_zero(dir);
        let eps = Real::EPSILON;
        let r = &self.radii;
        let mut face = ContactFace::empty();

        for axis0 in 0..3 {
            let axis1 = (axis0 + 1) % 3;
            let axis2 = (axis0 + 2) % 3;

            if d[axis0].abs() > tolerances.face_alignment
                && r[axis0] < eps
                && r[axis1] > eps
                && r[axis2] > eps
            {
                face.normal[axis0] = sign(d[axis0]);

                for (axis, s) in [(axis1, 1.0), (axis1, -1.0), (axis2, 1.0), (axis2, -1.0)] {
                    let mut pt = Point::origin();
                    pt[axis] = s * r[axis];
                    face.points.push(pt);
                }

                return face;
            }

            if d[axis0].abs() < tolerances.edge_alignment
                && r[axis0] > eps
                && r[axis1] < eps
                && r[axis2] < eps
            {
                face.normal[axis1] = d[axis1];
                face.normal[axis2] = d[axis2];
                face.normal = normalize_or_zero(&face.normal);

                for s in [1.0, -1.0] {
                    let mut pt = Point::origin();
                    pt[axis0] = s * r[axis0];
                    face.points.push(pt);
                }

                return face;
            }
        }

        face
    }
}
