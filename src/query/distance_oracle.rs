//! Closest points and penetration depth between two convex shapes.

use crate::math::{Isometry, Point, Real, UnitVector, Vector};
use crate::parry::query::epa::EPA;
use crate::parry::query::gjk::{self, CSOPoint, GJKResult, VoronoiSimplex};
use crate::shape::ConvexShape;

/// The closest points, or deepest penetration points, of two convex shapes.
///
/// Everything is expressed in world-space. The points and the distance ignore the
/// margins of the shapes, i.e., they relate the two cores.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Separation {
    /// The signed distance between the cores, negative if they overlap.
    ///
    /// Always equal to `axis · (point_a - point_b)`.
    pub distance: Real,
    /// The closest (or deepest) point on the core of the first shape.
    pub point_a: Point<Real>,
    /// The closest (or deepest) point on the core of the second shape.
    pub point_b: Point<Real>,
    /// The separating axis, pointing from the second shape toward the first one.
    pub axis: UnitVector<Real>,
}

impl Separation {
    /// Converts the output of GJK or EPA, expressed in the local-space of the first shape,
    /// into a world-space separation.
    ///
    /// `normal1` points from the first shape toward the second one.
    fn from_local(
        pos1: &Isometry<Real>,
        local_pt1: &Point<Real>,
        local_pt2: &Point<Real>,
        normal1: &UnitVector<Real>,
    ) -> Self {
        let distance = normal1.dot(&(local_pt2 - local_pt1));
        Self {
            distance,
            point_a: pos1 * local_pt1,
            point_b: pos1 * local_pt2,
            axis: -(pos1 * *normal1),
        }
    }
}

/// Computes the separation between two convex shapes.
///
/// Implementors only see the cores of the shapes, through their support functions, and
/// must ignore the margins.
pub trait DistanceOracle {
    /// The closest points between the cores of `shape_a` and `shape_b`.
    ///
    /// Returns `None` if the cores are farther than `max_distance` apart. If the cores
    /// overlap, the returned distance is zero or negative and the penetration depth
    /// should be queried with [`DistanceOracle::penetration_depth`].
    fn separation_distance(
        &mut self,
        shape_a: &ConvexShape,
        shape_b: &ConvexShape,
        max_distance: Real,
    ) -> Option<Separation>;

    /// The deepest points between the overlapping cores of `shape_a` and `shape_b`.
    ///
    /// If the cores don't overlap, their closest points are returned instead. Returns
    /// `None` if no result could be computed.
    fn penetration_depth(
        &mut self,
        shape_a: &ConvexShape,
        shape_b: &ConvexShape,
    ) -> Option<Separation>;
}

/// A distance oracle based on the GJK and EPA algorithms.
///
/// The internal simplex and polytope are reused across queries.
pub struct GjkEpaOracle {
    simplex: VoronoiSimplex,
    epa: EPA,
}

impl GjkEpaOracle {
    /// Creates a new oracle.
    pub fn new() -> Self {
        Self {
            simplex: VoronoiSimplex::new(),
            epa: EPA::new(),
        }
    }

    /// Runs GJK on the cores, leaving the final simplex in `self.simplex`.
    fn run_gjk(
        &mut self,
        pos12: &Isometry<Real>,
        shape_a: &ConvexShape,
        shape_b: &ConvexShape,
        max_distance: Real,
    ) -> GJKResult {
        let init_dir = UnitVector::try_new(pos12.translation.vector, crate::math::DEFAULT_EPSILON)
            .unwrap_or_else(Vector::x_axis);
        self.simplex
            .reset(CSOPoint::from_shapes(pos12, shape_a, shape_b, &init_dir));
        gjk::closest_points(pos12, shape_a, shape_b, max_distance, true, &mut self.simplex)
    }
}

impl Default for GjkEpaOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl DistanceOracle for GjkEpaOracle {
    fn separation_distance(
        &mut self,
        shape_a: &ConvexShape,
        shape_b: &ConvexShape,
        max_distance: Real,
    ) -> Option<Separation> {
        let pos12 = shape_a.pose.inv_mul(&shape_b.pose);

        match self.run_gjk(&pos12, shape_a, shape_b, max_distance) {
            GJKResult::ClosestPoints(pt1, pt2, normal1) => {
                Some(Separation::from_local(&shape_a.pose, &pt1, &pt2, &normal1))
            }
            GJKResult::Intersection => {
                // Only the fact that the cores overlap is known at this point.
                let point_a = Point::from(shape_a.pose.translation.vector);
                let point_b = Point::from(shape_b.pose.translation.vector);
                let axis = UnitVector::try_new(point_a - point_b, crate::math::DEFAULT_EPSILON)
                    .unwrap_or_else(Vector::y_axis);
                Some(Separation {
                    distance: 0.0,
                    point_a,
                    point_b,
                    axis,
                })
            }
            GJKResult::Proximity(_) | GJKResult::NoIntersection(_) => None,
        }
    }

    fn penetration_depth(
        &mut self,
        shape_a: &ConvexShape,
        shape_b: &ConvexShape,
    ) -> Option<Separation> {
        let pos12 = shape_a.pose.inv_mul(&shape_b.pose);

        match self.run_gjk(&pos12, shape_a, shape_b, Real::MAX) {
            GJKResult::ClosestPoints(pt1, pt2, normal1) => {
                Some(Separation::from_local(&shape_a.pose, &pt1, &pt2, &normal1))
            }
            GJKResult::Intersection => {
                let result = self
                    .epa
                    .closest_points(&pos12, shape_a, shape_b, &self.simplex);

                if result.is_none() {
                    log::debug!(
                        "EPA failed to compute the penetration between {:?} and {:?} cores.",
                        shape_a.core_type(),
                        shape_b.core_type()
                    );
                }

                result.map(|(pt1, pt2, normal1)| {
                    Separation::from_local(&shape_a.pose, &pt1, &pt2, &normal1)
                })
            }
            GJKResult::Proximity(_) | GJKResult::NoIntersection(_) => None,
        }
    }
}
