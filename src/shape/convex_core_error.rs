use crate::math::Real;

/// Invalid parameters of a convex core or of a convex shape.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ConvexCoreError {
    /// A length, extent, radius or height is negative or NaN.
    #[error("the {name} of the convex core must be non-negative, found {value}.")]
    NegativeDimension {
        /// The name of the invalid parameter.
        name: &'static str,
        /// The invalid value.
        value: Real,
    },
    /// The margin of a convex shape is negative or NaN.
    #[error("the margin must be non-negative, found {0}.")]
    NegativeMargin(Real),
    /// A point cloud core has more points than supported.
    #[error("a point cloud core supports at most 255 points, found {0}.")]
    TooManyPoints(usize),
    /// The scale of a point cloud core is not finite.
    #[error("the scale of a point cloud core must be finite.")]
    InvalidScale,
}

/// Checks that `value` is non-negative. NaN is rejected.
pub(crate) fn check_non_negative(name: &'static str, value: Real) -> Result<(), ConvexCoreError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConvexCoreError::NegativeDimension { name, value })
    }
}

/// Checks that every component of `v` is non-negative.
pub(crate) fn check_non_negative3(
    name: &'static str,
    v: &crate::math::Vector<Real>,
) -> Result<(), ConvexCoreError> {
    v.iter().try_for_each(|x| check_non_negative(name, *x))
}
