use crate::math::{Point, Real, Vector};
use arrayvec::ArrayVec;

/// The maximum number of contacts generated between two convex shapes.
pub const MAX_CONVEX_CONTACTS: usize = 4;

/// A single contact point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactPoint {
    /// The contact position, in world-space.
    pub position: Point<Real>,
    /// The signed separation along the contact normal.
    ///
    /// Negative if the shapes are penetrating.
    pub depth: Real,
}

impl ContactPoint {
    /// Creates a new contact point.
    #[inline]
    pub fn new(position: Point<Real>, depth: Real) -> Self {
        Self { position, depth }
    }
}

/// Up to four contact points sharing the same contact normal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ConvexContacts {
    /// The contact normal, in world-space.
    ///
    /// For convex-convex contacts, it points from the second shape toward the first one.
    /// For plane-convex contacts, it is the opposite of the plane normal.
    pub normal: Vector<Real>,
    /// The contact points.
    pub points: ArrayVec<ContactPoint, MAX_CONVEX_CONTACTS>,
}

impl ConvexContacts {
    /// An empty set of contacts with the given normal.
    pub fn new(normal: Vector<Real>) -> Self {
        Self {
            normal,
            points: ArrayVec::new(),
        }
    }

    /// The number of contact points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this contain no contact point at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates through the contact points.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &ContactPoint> {
        self.points.iter()
    }

    /// The smallest depth among the contact points, if any.
    pub fn min_depth(&self) -> Option<Real> {
        self.points.iter().map(|pt| pt.depth).reduce(Real::min)
    }
}

impl Default for ConvexContacts {
    fn default() -> Self {
        Self::new(Vector::zeros())
    }
}
