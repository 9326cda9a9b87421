//! Miscellaneous utilities.

use crate::math::{Real, Vector};

/// The sign of `x` as `1.0` or `-1.0`.
///
/// Unlike `Real::signum`, zero (of either sign) maps to `1.0` so that
/// support points along a zero component always pick the positive side.
#[inline]
pub fn sign(x: Real) -> Real {
    if x >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Normalizes `v`, or returns the zero vector if `v` has a zero length.
#[inline]
pub fn normalize_or_zero(v: &Vector<Real>) -> Vector<Real> {
    v.try_normalize(0.0).unwrap_or_else(Vector::zeros)
}

/// Trait to compute the orthonormal basis of a vector.
pub trait WBasis: Sized {
    /// The type of the array of orthonormal vectors.
    type Basis;
    /// Computes the vectors which, when combined with `self`, form an orthonormal basis.
    fn orthonormal_basis(self) -> Self::Basis;
}

impl WBasis for Vector<Real> {
    type Basis = [Vector<Real>; 2];
    // Robust and branchless implementation from Pixar:
    // https://graphics.pixar.com/library/OrthonormalB/paper.pdf
    fn orthonormal_basis(self) -> [Vector<Real>; 2] {
        let sign = (1.0 as Real).copysign(self.z);
        let a = -1.0 / (sign + self.z);
        let b = self.x * self.y * a;

        [
            Vector::new(1.0 + sign * self.x * self.x * a, sign * b, -sign * self.x),
            Vector::new(b, sign + self.y * self.y * a, -self.y),
        ]
    }
}
