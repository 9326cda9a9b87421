//! Convex cores and the convex shapes built from them.

pub use self::box_core::BoxCore;
pub use self::cone_core::ConeCore;
pub use self::contact_face::{ContactFace, MAX_FACE_POINTS};
pub use self::convex_core::{ConvexCore, ConvexCoreType, MAX_CORE_SIZE};
pub use self::convex_core_error::ConvexCoreError;
pub use self::convex_shape::ConvexShape;
pub use self::cylinder_core::CylinderCore;
pub use self::ellipsoid_core::EllipsoidCore;
pub use self::plane::Plane;
pub use self::points_core::{PointsCore, MAX_CLOUD_POINTS};
pub use self::segment_core::SegmentCore;

mod box_core;
mod cone_core;
mod contact_face;
mod convex_core;
mod convex_core_error;
mod convex_shape;
mod cylinder_core;
mod ellipsoid_core;
mod plane;
mod points_core;
mod segment_core;
