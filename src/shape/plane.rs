use crate::math::{Point, Real, UnitVector, Vector};

/// A plane, as the set of points `p` such that `normal · p + bias = 0`.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Plane {
    /// The plane normal.
    pub normal: UnitVector<Real>,
    /// The signed offset of the plane along its normal, negated.
    pub bias: Real,
}

impl Plane {
    /// Creates a plane from its normal and bias.
    #[inline]
    pub fn new(normal: UnitVector<Real>, bias: Real) -> Self {
        Self { normal, bias }
    }

    /// The plane with the given normal passing through `point`.
    #[inline]
    pub fn from_point_normal(point: &Point<Real>, normal: UnitVector<Real>) -> Self {
        Self {
            normal,
            bias: -normal.dot(&point.coords),
        }
    }

    /// The signed distance from `point` to this plane, positive on the normal side.
    #[inline]
    pub fn distance(&self, point: &Point<Real>) -> Real {
        self.normal.dot(&point.coords) + self.bias
    }

    /// The plane normal as a regular vector.
    #[inline]
    pub fn normal_vector(&self) -> Vector<Real> {
        self.normal.into_inner()
    }
}
