//! Segment core, aligned with the local `x` axis.

use crate::math::{Point, Real, Vector};
use crate::query::ContactTolerances;
use crate::shape::convex_core_error::check_non_negative;
use crate::shape::{ContactFace, ConvexCoreError};
use crate::utils::{normalize_or_zero, sign};

/// A segment of the given length, centered at the origin and aligned with the local `x` axis.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SegmentCore {
    /// The full length of the segment.
    pub length: Real,
}

impl SegmentCore {
    /// Creates a new segment core.
    #[inline]
    pub fn new(length: Real) -> Self {
        debug_assert!(length >= 0.0, "the segment length must be non-negative.");
        Self { length }
    }

    /// Creates a new segment core, checking that its length is non-negative.
    pub fn try_new(length: Real) -> Result<Self, ConvexCoreError> {
        let core = Self { length };
        core.validate()?;
        Ok(core)
    }

    /// Checks the parameters of this segment.
    pub fn validate(&self) -> Result<(), ConvexCoreError> {
        check_non_negative("length", self.length)
    }

    /// The endpoint of this segment farthest along `dir`.
    #[inline]
    pub fn local_support(&self, dir: &Vector<Real>) -> Point<Real> {
        Point::new(sign(dir.x) * self.length * 0.5, 0.0, 0.0)
    }

    /// The whole segment if `dir` is nearly orthogonal to it.
    pub fn contact_face(&self, dir: &Vector<Real>, tolerances: &ContactTolerances) -> ContactFace {
        let d = normalize_or_zero(dir);
        let radial = Vector::new(0.0, d.y, d.z);

        if d.x.abs() >= tolerances.edge_alignment || radial == Vector::zeros() {
            return ContactFace::empty();
        }

        let half = self.length * 0.5;
        ContactFace::new(
            normalize_or_zero(&radial),
            &[Point::new(half, 0.0, 0.0), Point::new(-half, 0.0, 0.0)],
        )
    }
}
