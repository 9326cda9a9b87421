use crate::math::Real;

/// Tolerances controlling contact-face selection, face clipping, and patch merging.
///
/// These values were tuned for shapes with dimensions around one unit. Scenes using
/// a very different unit scale, or `f64` scalars with much tighter requirements, may
/// need different values.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactTolerances {
    /// Two contact normals with a dot product greater or equal to this value are
    /// considered equal by [`ContactPatches`](crate::query::ContactPatches).
    pub same_normal: Real,
    /// Cosine above which a direction is considered aligned with a face normal (~8 degrees).
    pub face_alignment: Real,
    /// Cosine below which a direction is considered orthogonal to a face normal, i.e.,
    /// facing an edge (~82 degrees).
    pub edge_alignment: Real,
    /// Signed-distance tolerance used when clipping a polygon against a plane, and when
    /// testing whether the ends of two segments overlap.
    pub clip_epsilon: Real,
    /// Squared distance below which two clipped contact points are merged.
    pub merge_epsilon: Real,
    /// Distance to the extremal plane below which a point of a point cloud is part of
    /// its contact face.
    pub face_plane_epsilon: Real,
    /// Tolerance of the back-face culling test of convex-convex contacts.
    pub cull_epsilon: Real,
    /// Separation distance below which two shapes are considered overlapping, switching
    /// the distance oracle to its penetration-depth query.
    pub overlap_epsilon: Real,
}

impl ContactTolerances {
    /// Creates a [`ContactTolerances`] with the default values except for `same_normal`.
    pub fn with_same_normal(same_normal: Real) -> Self {
        Self {
            same_normal,
            ..Default::default()
        }
    }
}

impl Default for ContactTolerances {
    fn default() -> Self {
        Self {
            same_normal: 0.999,
            face_alignment: 0.99,
            edge_alignment: 0.14,
            clip_epsilon: 1.0e-5,
            merge_epsilon: 1.0e-6,
            face_plane_epsilon: 1.0e-4,
            cull_epsilon: 1.0e-5,
            overlap_epsilon: Real::EPSILON,
        }
    }
}
