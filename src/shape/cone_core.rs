//! Cone core, with its apex along the positive local `x` axis.

use crate::math::{Point, Real, Vector};
use crate::query::ContactTolerances;
use crate::shape::cylinder_core::{cap_face, RADIAL_EPSILON};
use crate::shape::convex_core_error::check_non_negative;
use crate::shape::{ContactFace, ConvexCoreError};
use crate::utils::{normalize_or_zero, sign};

/// A cone centered at the origin, with its apex at `(height / 2, 0, 0)` and its
/// base disk at `x = -height / 2`.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ConeCore {
    /// The full height of the cone.
    pub height: Real,
    /// The radius of the base disk.
    pub radius: Real,
}

impl ConeCore {
    /// Creates a new cone core.
    #[inline]
    pub fn new(height: Real, radius: Real) -> Self {
        debug_assert!(
            height >= 0.0 && radius >= 0.0,
            "the cone height and radius must be non-negative."
        );
        Self { height, radius }
    }

    /// Creates a new cone core, checking that its height and radius are non-negative.
    pub fn try_new(height: Real, radius: Real) -> Result<Self, ConvexCoreError> {
        let core = Self { height, radius };
        core.validate()?;
        Ok(core)
    }

    /// Checks the parameters of this cone.
    pub fn validate(&self) -> Result<(), ConvexCoreError> {
        check_non_negative("height", self.height)?;
        check_non_negative("radius", self.radius)
    }

    /// The sine of the half-angle at the apex.
    fn sin_half_angle(&self) -> Real {
        self.radius / (self.height * self.height + self.radius * self.radius).sqrt()
    }

    /// The point of this cone farthest along `dir`: either its apex or a point of the base rim.
    pub fn local_support(&self, dir: &Vector<Real>) -> Point<Real> {
        let half_h = self.height * 0.5;

        if self.height + self.radius <= 0.0 {
            return Point::origin();
        }

        let d = normalize_or_zero(dir);

        if d.x > self.sin_half_angle() {
            return Point::new(half_h, 0.0, 0.0);
        }

        if d.y.abs() < RADIAL_EPSILON && d.z.abs() < RADIAL_EPSILON {
            return Point::new(-half_h, self.radius, 0.0);
        }

        let radial = normalize_or_zero(&Vector::new(0.0, d.y, d.z));
        Point::new(-half_h, 0.0, 0.0) + radial * self.radius
    }

    /// The base (4 rim points) or slant line (2 points) of this cone facing `dir`.
    ///
    /// A flat cone (zero height) also exposes its base along the positive `x` axis.
    pub fn contact_face(
        &self,
        dir: &Vector<Real>,
        reference: &Point<Real>,
        tolerances: &ContactTolerances,
    ) -> ContactFace {
        if self.height + self.radius <= 0.0 {
            return ContactFace::empty();
        }

        let d = normalize_or_zero(dir);
        let eps = RADIAL_EPSILON;

        if (d.x < -tolerances.face_alignment
            || (d.x > tolerances.face_alignment && self.height < eps))
            && self.radius > 0.0
        {
            return cap_face(sign(d.x), self.height * 0.5, self.radius, reference);
        }

        if self.height > 0.0 {
            let sin_a = self.sin_half_angle();
            let cos_a = (1.0 - sin_a * sin_a).max(0.0).sqrt();
            let cos_d = (1.0 - d.x * d.x).max(0.0).sqrt();
            // Sine of the angle between `d` and the slant normal.
            let d_x = d.x * cos_a - cos_d * sin_a;

            if d_x.abs() < tolerances.edge_alignment {
                let Some(dr) = Vector::new(0.0, d.y, d.z).try_normalize(0.0) else {
                    return ContactFace::empty();
                };
                let normal =
                    normalize_or_zero(&Vector::new(self.radius / self.height, dr.y, dr.z));
                let half_h = self.height * 0.5;
                return ContactFace::new(
                    normal,
                    &[
                        Point::new(half_h, 0.0, 0.0),
                        Point::new(-half_h, 0.0, 0.0) + dr * self.radius,
                    ],
                );
            }
        }

        ContactFace::empty()
    }
}
