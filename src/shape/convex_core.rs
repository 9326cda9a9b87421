use crate::math::{Point, Real, Vector};
use crate::query::ContactTolerances;
use crate::shape::{
    BoxCore, ConeCore, ContactFace, ConvexCoreError, CylinderCore, EllipsoidCore, PointsCore,
    SegmentCore,
};
use core::mem::size_of;
use num_derive::FromPrimitive;

/// The maximum size of the parameters of a convex core, the borrowed point slice excepted.
pub const MAX_CORE_SIZE: usize = 10 * size_of::<Real>();

static_assertions::const_assert!(size_of::<SegmentCore>() <= MAX_CORE_SIZE);
static_assertions::const_assert!(size_of::<BoxCore>() <= MAX_CORE_SIZE);
static_assertions::const_assert!(size_of::<EllipsoidCore>() <= MAX_CORE_SIZE);
static_assertions::const_assert!(size_of::<CylinderCore>() <= MAX_CORE_SIZE);
static_assertions::const_assert!(size_of::<ConeCore>() <= MAX_CORE_SIZE);
static_assertions::const_assert!(
    size_of::<PointsCore<'static>>()
        <= MAX_CORE_SIZE + size_of::<&'static [Point<Real>]>()
);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// Enum representing the type of a convex core.
pub enum ConvexCoreType {
    /// A single point.
    Point = 0,
    /// A segment.
    Segment,
    /// A box.
    Box,
    /// An ellipsoid.
    Ellipsoid,
    /// A cylinder.
    Cylinder,
    /// A cone.
    Cone,
    /// The convex hull of a point cloud.
    Points,
}

impl ConvexCoreType {
    /// The core type with the given numeric tag, if any.
    pub fn from_u8(tag: u8) -> Option<Self> {
        num::FromPrimitive::from_u8(tag)
    }
}

/// The shape of a convex primitive before its dilation by a margin.
///
/// Every core is expressed in its own local frame, centered at the origin. Segments,
/// cylinders and cones are aligned with the local `x` axis.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum ConvexCore<'a> {
    /// A single point at the origin.
    Point,
    /// A segment.
    Segment(SegmentCore),
    /// A box.
    Box(BoxCore),
    /// An ellipsoid.
    Ellipsoid(EllipsoidCore),
    /// A cylinder.
    Cylinder(CylinderCore),
    /// A cone.
    Cone(ConeCore),
    /// The convex hull of borrowed points.
    Points(PointsCore<'a>),
}

impl<'a> ConvexCore<'a> {
    /// The type of this core.
    pub fn core_type(&self) -> ConvexCoreType {
        match self {
            ConvexCore::Point => ConvexCoreType::Point,
            ConvexCore::Segment(_) => ConvexCoreType::Segment,
            ConvexCore::Box(_) => ConvexCoreType::Box,
            ConvexCore::Ellipsoid(_) => ConvexCoreType::Ellipsoid,
            ConvexCore::Cylinder(_) => ConvexCoreType::Cylinder,
            ConvexCore::Cone(_) => ConvexCoreType::Cone,
            ConvexCore::Points(_) => ConvexCoreType::Points,
        }
    }

    /// Checks that the parameters of this core describe a valid shape.
    pub fn validate(&self) -> Result<(), ConvexCoreError> {
        match self {
            ConvexCore::Point => Ok(()),
            ConvexCore::Segment(s) => s.validate(),
            ConvexCore::Box(b) => b.validate(),
            ConvexCore::Ellipsoid(e) => e.validate(),
            ConvexCore::Cylinder(c) => c.validate(),
            ConvexCore::Cone(c) => c.validate(),
            ConvexCore::Points(p) => p.validate(),
        }
    }

    /// The point of this core farthest along `dir`, in its local frame.
    pub fn local_support(&self, dir: &Vector<Real>) -> Point<Real> {
        match self {
            ConvexCore::Point => Point::origin(),
            ConvexCore::Segment(s) => s.local_support(dir),
            ConvexCore::Box(b) => b.local_support(dir),
            ConvexCore::Ellipsoid(e) => e.local_support(dir),
            ConvexCore::Cylinder(c) => c.local_support(dir),
            ConvexCore::Cone(c) => c.local_support(dir),
            ConvexCore::Points(p) => p.local_support(dir),
        }
    }

    /// The flat feature of this core facing `dir`, in its local frame.
    ///
    /// The `reference` point is used by round cores to orient the points of their
    /// circular faces. An empty face is returned if `dir` doesn't face any flat
    /// feature.
    pub fn contact_face(
        &self,
        dir: &Vector<Real>,
        reference: &Point<Real>,
        tolerances: &ContactTolerances,
    ) -> ContactFace {
        match self {
            ConvexCore::Point => ContactFace::empty(),
            ConvexCore::Segment(s) => s.contact_face(dir, tolerances),
            ConvexCore::Box(b) => b.contact_face(dir, tolerances),
            ConvexCore::Ellipsoid(e) => e.contact_face(dir, tolerances),
            ConvexCore::Cylinder(c) => c.contact_face(dir, reference, tolerances),
            ConvexCore::Cone(c) => c.contact_face(dir, reference, tolerances),
            ConvexCore::Points(p) => p.contact_face(dir, tolerances),
        }
    }
}

impl From<SegmentCore> for ConvexCore<'_> {
    fn from(core: SegmentCore) -> Self {
        ConvexCore::Segment(core)
    }
}

impl From<BoxCore> for ConvexCore<'_> {
    fn from(core: BoxCore) -> Self {
        ConvexCore::Box(core)
    }
}

impl From<EllipsoidCore> for ConvexCore<'_> {
    fn from(core: EllipsoidCore) -> Self {
        ConvexCore::Ellipsoid(core)
    }
}

impl From<CylinderCore> for ConvexCore<'_> {
    fn from(core: CylinderCore) -> Self {
        ConvexCore::Cylinder(core)
    }
}

impl From<ConeCore> for ConvexCore<'_> {
    fn from(core: ConeCore) -> Self {
        ConvexCore::Cone(core)
    }
}

impl<'a> From<PointsCore<'a>> for ConvexCore<'a> {
    fn from(core: PointsCore<'a>) -> Self {
        ConvexCore::Points(core)
    }
}
