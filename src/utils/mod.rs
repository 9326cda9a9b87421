//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::point_cloud_support_point::point_cloud_support_point_id;
pub use self::reduce_polygon::reduce_polygon;
pub use self::rotate_points::rotate_points;
pub use self::wops::{normalize_or_zero, sign, WBasis};

mod ccw_face_normal;
mod point_cloud_support_point;
mod reduce_polygon;
mod rotate_points;
mod wops;
