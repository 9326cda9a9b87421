//! Contact generation between convex shapes.
//!
//! The main entry points are:
//!
//! * [`contact_convex_convex`] to compute up to four contacts between two [`ConvexShape`]s.
//! * [`contact_plane_convex`] to compute up to four contacts between a [`Plane`] and a
//!   [`ConvexShape`].
//! * [`ContactPatches`] to merge contacts from many queries into a bounded set of patches.
//!
//! Contact generation relies on a [`DistanceOracle`] for the closest points and separating
//! axis of two shapes, then on a [`FaceClipper`] to turn them into a contact patch.
//!
//! [`ConvexShape`]: crate::shape::ConvexShape
//! [`Plane`]: crate::shape::Plane

pub use self::contact_convex_convex::{
    contact_convex_convex, contact_convex_convex_culled, contact_convex_convex_with_oracle,
    contact_convex_convex_with_tolerances, generate_contact_patch,
    generate_contact_patch_with_tolerances,
};
pub use self::contact_patches::{ContactPatch, ContactPatches, MAX_PATCHES, MAX_PATCH_POINTS};
pub use self::contact_plane_convex::{contact_plane_convex, contact_plane_convex_with_tolerances};
pub use self::contact_tolerances::ContactTolerances;
pub use self::convex_contacts::{ContactPoint, ConvexContacts, MAX_CONVEX_CONTACTS};
pub use self::distance_oracle::{DistanceOracle, GjkEpaOracle, Separation};
pub use self::face_clipper::{FaceClipper, MAX_CLIP_PLANES, MAX_POLYGON_POINTS};

mod contact_convex_convex;
mod contact_patches;
mod contact_plane_convex;
mod contact_tolerances;
mod convex_contacts;
mod distance_oracle;
mod face_clipper;
