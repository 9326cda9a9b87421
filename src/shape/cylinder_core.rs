//! Cylinder core, with its axis along the local `x` axis.

use crate::math::{Point, Real, Vector};
use crate::query::ContactTolerances;
use crate::shape::convex_core_error::check_non_negative;
use crate::shape::{ContactFace, ConvexCoreError};
use crate::utils::{normalize_or_zero, rotate_points, sign};

/// Radial components below this magnitude are considered zero by support queries.
pub(crate) const RADIAL_EPSILON: Real = 1.0e-5;

/// A cylinder centered at the origin, with its axis along the local `x` axis.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CylinderCore {
    /// The full height of the cylinder.
    pub height: Real,
    /// The radius of the cylinder.
    pub radius: Real,
}

impl CylinderCore {
    /// Creates a new cylinder core.
    #[inline]
    pub fn new(height: Real, radius: Real) -> Self {
        debug_assert!(
            height >= 0.0 && radius >= 0.0,
            "the cylinder height and radius must be non-negative."
        );
        Self { height, radius }
    }

    /// Creates a new cylinder core, checking that its height and radius are non-negative.
    pub fn try_new(height: Real, radius: Real) -> Result<Self, ConvexCoreError> {
        let core = Self { height, radius };
        core.validate()?;
        Ok(core)
    }

    /// Checks the parameters of this cylinder.
    pub fn validate(&self) -> Result<(), ConvexCoreError> {
        check_non_negative("height", self.height)?;
        check_non_negative("radius", self.radius)
    }

    /// The point of this cylinder farthest along `dir`.
    ///
    /// Directions parallel to the axis return the rim point `(±h/2, r, 0)`.
    pub fn local_support(&self, dir: &Vector<Real>) -> Point<Real> {
        let h = self.height * 0.5;
        let d = normalize_or_zero(dir);

        if d.y.abs() < RADIAL_EPSILON && d.z.abs() < RADIAL_EPSILON {
            return Point::new(sign(d.x) * h, self.radius, 0.0);
        }

        let radial = normalize_or_zero(&Vector::new(0.0, d.y, d.z));
        Point::new(sign(d.x) * h, 0.0, 0.0) + radial * self.radius
    }

    /// The cap (4 rim points) or side line (2 points) of this cylinder facing `dir`.
    ///
    /// Cap points are rotated around the axis so that the first one lies toward
    /// `reference`.
    pub fn contact_face(
        &self,
        dir: &Vector<Real>,
        reference: &Point<Real>,
        tolerances: &ContactTolerances,
    ) -> ContactFace {
        let d = normalize_or_zero(dir);

        if d.x.abs() > tolerances.face_alignment && self.radius > 0.0 {
            return cap_face(sign(d.x), self.height * 0.5, self.radius, reference);
        }

        if d.x.abs() < tolerances.edge_alignment && self.height > 0.0 {
            let Some(dr) = Vector::new(0.0, d.y, d.z).try_normalize(0.0) else {
                return ContactFace::empty();
            };
            let h = self.height * 0.5;
            return ContactFace::new(
                dr,
                &[
                    Point::new(h, 0.0, 0.0) + dr * self.radius,
                    Point::new(-h, 0.0, 0.0) + dr * self.radius,
                ],
            );
        }

        ContactFace::empty()
    }
}

/// Four points of the circular cap at `x = side * half_height`, rotated toward `reference`.
pub(crate) fn cap_face(
    side: Real,
    half_height: Real,
    radius: Real,
    reference: &Point<Real>,
) -> ContactFace {
    let x = side * half_height;
    let normal = Vector::new(side, 0.0, 0.0);
    let mut face = ContactFace::new(
        normal,
        &[
            Point::new(x, radius, 0.0),
            Point::new(x, 0.0, radius),
            Point::new(x, -radius, 0.0),
            Point::new(x, 0.0, -radius),
        ],
    );
    rotate_points(&Point::new(x, 0.0, 0.0), reference, &normal, &mut face.points);
    face
}
