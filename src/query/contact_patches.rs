//! Accumulation of contact points into a bounded set of contact patches.

use crate::math::{Point, Real, Vector};
use crate::query::{ContactPoint, ContactTolerances, ConvexContacts};
use crate::utils::reduce_polygon;
use arrayvec::ArrayVec;

/// The maximum number of patches of a [`ContactPatches`].
pub const MAX_PATCHES: usize = 16;
/// The maximum number of points of a single [`ContactPatch`].
pub const MAX_PATCH_POINTS: usize = 4;

/// Contact points sharing the same contact normal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactPatch {
    normal: Vector<Real>,
    points: ArrayVec<ContactPoint, MAX_PATCH_POINTS>,
}

impl ContactPatch {
    fn new(normal: Vector<Real>, point: ContactPoint) -> Self {
        let mut points = ArrayVec::new();
        points.push(point);
        Self { normal, points }
    }

    /// The contact normal shared by all the points of this patch.
    #[inline]
    pub fn normal(&self) -> &Vector<Real> {
        &self.normal
    }

    /// The points of this patch. The first one is the deepest.
    #[inline]
    pub fn points(&self) -> &[ContactPoint] {
        &self.points
    }

    /// The smallest depth among the points of this patch.
    pub fn min_depth(&self) -> Real {
        self.points
            .iter()
            .map(|pt| pt.depth)
            .fold(Real::MAX, Real::min)
    }
}

/// A bounded set of contact patches, built incrementally one contact point at a time.
///
/// Points are grouped by contact normal: a point joins the first patch with a normal
/// similar to its own, in which case only the four points of that patch forming the
/// largest quadrilateral are kept, the deepest one included. Otherwise, it starts a new
/// patch. Once [`MAX_PATCHES`] patches exist, a new patch only replaces an existing one
/// if its normal is more distinct from all the others than the two most similar
/// existing patches are from each other. The shallower of these two is then evicted.
///
/// This structure is not thread-safe: concurrent insertions must be serialized by the
/// caller.
#[derive(Clone, Debug)]
pub struct ContactPatches {
    patches: ArrayVec<ContactPatch, MAX_PATCHES>,
    num_points: usize,
    same_normal: Real,
}

impl Default for ContactPatches {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactPatches {
    /// An empty set of patches, with the default normal similarity threshold.
    pub fn new() -> Self {
        Self::with_tolerances(&ContactTolerances::default())
    }

    /// An empty set of patches, using `tolerances.same_normal` as the normal
    /// similarity threshold.
    pub fn with_tolerances(tolerances: &ContactTolerances) -> Self {
        Self {
            patches: ArrayVec::new(),
            num_points: 0,
            same_normal: tolerances.same_normal,
        }
    }

    /// Removes all the patches.
    pub fn clear(&mut self) {
        self.patches.clear();
        self.num_points = 0;
    }

    /// The number of patches.
    #[inline]
    pub fn num_patches(&self) -> usize {
        self.patches.len()
    }

    /// The total number of points, all patches included.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// The number of points of the `patch`-th patch.
    #[inline]
    pub fn num_patch_points(&self, patch: usize) -> usize {
        self.patches[patch].points.len()
    }

    /// The normal of the `patch`-th patch.
    #[inline]
    pub fn patch_normal(&self, patch: usize) -> &Vector<Real> {
        &self.patches[patch].normal
    }

    /// The `point`-th point of the `patch`-th patch.
    #[inline]
    pub fn patch_point(&self, patch: usize, point: usize) -> &ContactPoint {
        &self.patches[patch].points[point]
    }

    /// The patches.
    #[inline]
    pub fn patches(&self) -> &[ContactPatch] {
        &self.patches
    }

    /// Adds all the points of `contacts`, with their shared normal.
    pub fn add_contacts(&mut self, contacts: &ConvexContacts) {
        for pt in contacts.iter() {
            self.add_point(&pt.position, &contacts.normal, pt.depth);
        }
    }

    /// Adds a contact point.
    pub fn add_point(&mut self, position: &Point<Real>, normal: &Vector<Real>, depth: Real) {
        let point = ContactPoint::new(*position, depth);

        match self
            .patches
            .iter()
            .position(|patch| patch.normal.dot(normal) >= self.same_normal)
        {
            Some(i) => self.add_patch_point(i, point),
            None => self.add_patch(normal, point),
        }
    }

    fn add_patch(&mut self, normal: &Vector<Real>, point: ContactPoint) {
        if !self.patches.is_full() {
            self.patches.push(ContactPatch::new(*normal, point));
            self.num_points += 1;
            return;
        }

        let max_dot_new = self
            .patches
            .iter()
            .map(|patch| normal.dot(&patch.normal))
            .fold(-Real::MAX, Real::max);

        let mut max_dot_pair = -Real::MAX;
        let mut pair = (0, 1);
        for (i, patch_i) in self.patches.iter().enumerate() {
            for (j, patch_j) in self.patches.iter().enumerate().skip(i + 1) {
                let dot = patch_i.normal.dot(&patch_j.normal);
                if dot > max_dot_pair {
                    max_dot_pair = dot;
                    pair = (i, j);
                }
            }
        }

        if max_dot_new > max_dot_pair {
            log::debug!(
                "Contact patches full: dropping a point with normal {:?}.",
                normal
            );
            return;
        }

        let (i, j) = pair;
        let evicted = if self.patches[i].min_depth() > self.patches[j].min_depth() {
            i
        } else {
            j
        };
        log::debug!(
            "Contact patches full: evicting the patch with normal {:?}.",
            self.patches[evicted].normal
        );

        self.num_points -= self.patches[evicted].points.len();
        self.patches[evicted] = ContactPatch::new(*normal, point);
        self.num_points += 1;
    }

    fn add_patch_point(&mut self, patch_id: usize, point: ContactPoint) {
        let patch = &mut self.patches[patch_id];

        let mut candidates: ArrayVec<ContactPoint, { MAX_PATCH_POINTS + 1 }> = ArrayVec::new();
        candidates.push(point);
        candidates.extend(patch.points.iter().copied());

        // Move the new point back until the deepest point is first.
        for i in 0..candidates.len() - 1 {
            if candidates[i].depth > candidates[i + 1].depth {
                candidates.swap(i, i + 1);
            } else {
                break;
            }
        }

        let positions: ArrayVec<Point<Real>, { MAX_PATCH_POINTS + 1 }> =
            candidates.iter().map(|pt| pt.position).collect();
        let kept = reduce_polygon(&positions, &patch.normal, true);

        self.num_points -= patch.points.len();
        patch.points = kept.into_iter().map(|k| candidates[k]).collect();
        self.num_points += patch.points.len();
    }
}
