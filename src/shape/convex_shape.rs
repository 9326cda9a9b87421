use crate::math::{Isometry, Point, Real, Vector};
use crate::parry::bounding_volume::Aabb;
use crate::parry::shape::SupportMap;
use crate::query::ContactTolerances;
use crate::shape::{ContactFace, ConvexCore, ConvexCoreError, ConvexCoreType};

/// A convex core dilated by a margin and placed in world-space.
///
/// The shape is the Minkowski sum of the core and a ball of radius `margin`.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct ConvexShape<'a> {
    /// The undilated shape.
    pub core: ConvexCore<'a>,
    /// The radius of the dilation of the core.
    pub margin: Real,
    /// The position of the core in world-space.
    pub pose: Isometry<Real>,
}

impl<'a> ConvexShape<'a> {
    /// Creates a new convex shape.
    ///
    /// The core parameters and the margin are only checked in debug builds. Use
    /// [`ConvexShape::try_new`] to check them unconditionally.
    pub fn new(core: impl Into<ConvexCore<'a>>, margin: Real, pose: Isometry<Real>) -> Self {
        let shape = Self {
            core: core.into(),
            margin,
            pose,
        };
        debug_assert!(shape.validate().is_ok(), "invalid convex shape: {shape:?}");
        shape
    }

    /// Creates a new convex shape after checking its core parameters and margin.
    pub fn try_new(
        core: impl Into<ConvexCore<'a>>,
        margin: Real,
        pose: Isometry<Real>,
    ) -> Result<Self, ConvexCoreError> {
        let shape = Self {
            core: core.into(),
            margin,
            pose,
        };
        shape.validate()?;
        Ok(shape)
    }

    /// The type of the core of this shape.
    #[inline]
    pub fn core_type(&self) -> ConvexCoreType {
        self.core.core_type()
    }

    /// Checks the core parameters and the margin of this shape.
    pub fn validate(&self) -> Result<(), ConvexCoreError> {
        if !(self.margin >= 0.0) {
            return Err(ConvexCoreError::NegativeMargin(self.margin));
        }
        self.core.validate()
    }

    /// Does this shape have valid parameters?
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// The support point of the core, without margin, in the local frame of the core.
    #[inline]
    pub fn local_support(&self, dir: &Vector<Real>) -> Point<Real> {
        self.core.local_support(dir)
    }

    /// The world-space support point of this shape along the world-space direction `dir`,
    /// including the margin.
    ///
    /// The margin offset is `dir * margin`, so `dir` should be normalized to get a point
    /// on the dilated surface.
    pub fn support(&self, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = self.pose.inverse_transform_vector(dir);
        self.pose * self.local_support(&local_dir) + dir * self.margin
    }

    /// The world-space flat feature of this shape facing the world-space direction `dir`.
    ///
    /// `point` is a world-space point close to the contact, typically a closest point.
    /// The face points are pushed outward by the margin along the face normal.
    pub fn contact_face(
        &self,
        dir: &Vector<Real>,
        point: &Point<Real>,
        tolerances: &ContactTolerances,
    ) -> ContactFace {
        let local_dir = self.pose.inverse_transform_vector(dir);
        let local_point = self.pose.inverse_transform_point(point);
        let mut face = self.core.contact_face(&local_dir, &local_point, tolerances);
        face.transform_and_dilate(&self.pose, self.margin);
        face
    }

    /// An axis-aligned box enclosing this shape, from its support points along the world axes.
    pub fn compute_aabb(&self) -> Aabb {
        let mins = Point::new(
            self.support(&-Vector::x()).x,
            self.support(&-Vector::y()).y,
            self.support(&-Vector::z()).z,
        );
        let maxs = Point::new(
            self.support(&Vector::x()).x,
            self.support(&Vector::y()).y,
            self.support(&Vector::z()).z,
        );
        Aabb::new(mins, maxs)
    }
}

impl SupportMap for ConvexShape<'_> {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.local_support(dir)
    }
}
