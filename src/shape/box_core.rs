//! Box core.

use crate::math::{Point, Real, Vector};
use crate::query::ContactTolerances;
use crate::shape::convex_core_error::check_non_negative3;
use crate::shape::{ContactFace, ConvexCoreError};
use crate::utils::{normalize_or_zero, sign};

/// An axis-aligned box centered at the origin.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BoxCore {
    /// The full size of the box along each local axis.
    pub extents: Vector<Real>,
}

impl BoxCore {
    /// Creates a new box core from its full extents.
    #[inline]
    pub fn new(extents: Vector<Real>) -> Self {
        debug_assert!(
            extents.iter().all(|e| *e >= 0.0),
            "the box extents must be non-negative."
        );
        Self { extents }
    }

    /// Creates a new box core, checking that its extents are non-negative.
    pub fn try_new(extents: Vector<Real>) -> Result<Self, ConvexCoreError> {
        let core = Self { extents };
        core.validate()?;
        Ok(core)
    }

    /// Checks the parameters of this box.
    pub fn validate(&self) -> Result<(), ConvexCoreError> {
        check_non_negative3("extents", &self.extents)
    }

    /// The vertex of this box farthest along `dir`.
    #[inline]
    pub fn local_support(&self, dir: &Vector<Real>) -> Point<Real> {
        Point::new(
            sign(dir.x) * self.extents.x * 0.5,
            sign(dir.y) * self.extents.y * 0.5,
            sign(dir.z) * self.extents.z * 0.5,
        )
    }

    /// The face (4 points) or edge (2 points) of this box facing `dir`.
    ///
    /// A face is returned if `dir` is nearly aligned with one of the local axes, and an
    /// edge if `dir` is nearly orthogonal to an axis without being aligned with another.
    /// Flat boxes never report faces along their flat axes' orthogonal directions.
    pub fn contact_face(&self, dir: &Vector<Real>, tolerances: &ContactTolerances) -> ContactFace {
        let d = normalize_or_zero(dir);
        let eps = Real::EPSILON;
        let ext = self.extents * 0.5;
        let mut face = ContactFace::empty();

        for axis0 in 0..3 {
            let axis1 = (axis0 + 1) % 3;
            let axis2 = (axis0 + 2) % 3;

            if d[axis0].abs() > tolerances.face_alignment
                && (self.extents[axis1] > eps || self.extents[axis2] > eps)
            {
                let s = sign(d[axis0]);
                face.normal[axis0] = s;

                for (s1, s2) in [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)] {
                    let mut pt = Point::origin();
                    pt[axis0] = s * ext[axis0];
                    pt[axis1] = s1 * ext[axis1];
                    pt[axis2] = s2 * ext[axis2];
                    face.points.push(pt);
                }

                return face;
            }

            if d[axis0].abs() < tolerances.edge_alignment
                && self.extents[axis0] > eps
                && (d[axis1].abs() < tolerances.face_alignment || self.extents[axis2] < eps)
                && (d[axis2].abs() < tolerances.face_alignment || self.extents[axis1] < eps)
            {
                face.normal[axis1] = d[axis1];
                face.normal[axis2] = d[axis2];
                face.normal = normalize_or_zero(&face.normal);

                for s0 in [1.0, -1.0] {
                    let mut pt = Point::origin();
                    pt[axis0] = s0 * ext[axis0];
                    pt[axis1] = sign(d[axis1]) * ext[axis1];
                    pt[axis2] = sign(d[axis2]) * ext[axis2];
                    face.points.push(pt);
                }

                return face;
            }
        }

        face
    }
}
