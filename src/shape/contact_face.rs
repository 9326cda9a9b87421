use crate::math::{Isometry, Point, Real, Vector};
use arrayvec::ArrayVec;

/// The maximum number of points of a contact face.
pub const MAX_FACE_POINTS: usize = 4;

/// A near-planar set of up to four points on the boundary of a convex core,
/// facing a given direction.
///
/// An empty face means the direction is not aligned with any flat feature of the
/// core, in which case the support point alone should be used.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactFace {
    /// The outward normal of the face.
    pub normal: Vector<Real>,
    /// The points of the face.
    pub points: ArrayVec<Point<Real>, MAX_FACE_POINTS>,
}

impl ContactFace {
    /// A face without any point.
    #[inline]
    pub fn empty() -> Self {
        Self {
            normal: Vector::zeros(),
            points: ArrayVec::new(),
        }
    }

    /// A face with the given normal and points.
    ///
    /// Points beyond [`MAX_FACE_POINTS`] are ignored.
    pub fn new(normal: Vector<Real>, points: &[Point<Real>]) -> Self {
        Self {
            normal,
            points: points.iter().copied().take(MAX_FACE_POINTS).collect(),
        }
    }

    /// The number of points of this face.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this face contain no point?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Transforms this face by `pos`, then pushes every point outward by `margin`
    /// along the transformed normal.
    pub fn transform_and_dilate(&mut self, pos: &Isometry<Real>, margin: Real) {
        self.normal = pos * self.normal;
        let offset = self.normal * margin;

        for pt in self.points.iter_mut() {
            *pt = pos * *pt + offset;
        }
    }
}

impl Default for ContactFace {
    fn default() -> Self {
        Self::empty()
    }
}
