//! Clipping of two contact faces into a contact patch.

use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::{ContactPoint, ContactTolerances, ConvexContacts, MAX_CONVEX_CONTACTS};
use crate::shape::{ContactFace, ConvexShape, Plane, MAX_FACE_POINTS};
use crate::utils::{reduce_polygon, WBasis};
use arrayvec::ArrayVec;

/// The maximum number of planes bounding the two contact faces.
pub const MAX_CLIP_PLANES: usize = MAX_FACE_POINTS * 2;
/// The maximum number of vertices of the clipped polygon, its reference point included.
pub const MAX_POLYGON_POINTS: usize = MAX_CLIP_PLANES + 4 + 1;

type ClipPlanes = ArrayVec<Plane, MAX_CLIP_PLANES>;
type Polygon = ArrayVec<Point<Real>, MAX_POLYGON_POINTS>;

/// Computes up to four contact points between two convex shapes from their contact faces.
///
/// The clipper is given the closest (or deepest) points of two shapes and their
/// separating axis. It retrieves the contact face of each shape around that axis, then
/// builds a polygon orthogonal to the axis and clips it by the planes bounding both
/// faces. The largest quadrilateral of the clipped polygon forms the contact patch.
///
/// If either shape has no flat feature facing the other, a single contact point
/// is generated between the two closest points.
pub struct FaceClipper {
    point0: Point<Real>,
    point1: Point<Real>,
    axis: Vector<Real>,
    face0: ContactFace,
    face1: ContactFace,
    tolerances: ContactTolerances,
    contacts: ArrayVec<ContactPoint, MAX_CONVEX_CONTACTS>,
}

impl FaceClipper {
    /// Initializes a clipper with the default tolerances.
    ///
    /// The points are on the (margin-dilated) surfaces of `shape0` and `shape1`, and
    /// the unit `axis` points from `shape1` toward `shape0`.
    pub fn new(
        shape0: &ConvexShape,
        shape1: &ConvexShape,
        point0: &Point<Real>,
        point1: &Point<Real>,
        axis: &Vector<Real>,
    ) -> Self {
        Self::with_tolerances(
            shape0,
            shape1,
            point0,
            point1,
            axis,
            &ContactTolerances::default(),
        )
    }

    /// Initializes a clipper with custom tolerances.
    pub fn with_tolerances(
        shape0: &ConvexShape,
        shape1: &ConvexShape,
        point0: &Point<Real>,
        point1: &Point<Real>,
        axis: &Vector<Real>,
        tolerances: &ContactTolerances,
    ) -> Self {
        Self {
            point0: *point0,
            point1: *point1,
            axis: *axis,
            face0: shape0.contact_face(&-axis, point0, tolerances),
            face1: shape1.contact_face(axis, point1, tolerances),
            tolerances: *tolerances,
            contacts: ArrayVec::new(),
        }
    }

    /// The contact faces of the first and second shapes.
    pub fn faces(&self) -> (&ContactFace, &ContactFace) {
        (&self.face0, &self.face1)
    }

    /// Computes the contact points.
    pub fn clip(&mut self) {
        self.contacts.clear();

        if self.face0.len() < 2 || self.face1.len() < 2 {
            log::trace!(
                "Clipping {}x{} faces: single point.",
                self.face0.len(),
                self.face1.len()
            );
            self.clip_none();
        } else if self.face0.len() == 2 && self.face1.len() == 2 {
            log::trace!("Clipping 2x2 faces: segment overlap.");
            self.clip_2x2();
        } else {
            log::trace!(
                "Clipping {}x{} faces: polygon clipping.",
                self.face0.len(),
                self.face1.len()
            );
            self.clip_nxn();
        }
    }

    /// The contacts computed by the last call to [`FaceClipper::clip`].
    ///
    /// The contact normal is the separating axis.
    pub fn contact(&self) -> ConvexContacts {
        ConvexContacts {
            normal: self.axis,
            points: self.contacts.clone(),
        }
    }

    /// A single contact halfway between the two reference points.
    fn clip_none(&mut self) {
        self.contacts.clear();
        self.contacts.push(ContactPoint::new(
            na::center(&self.point0, &self.point1),
            self.axis.dot(&(self.point0 - self.point1)),
        ));
    }

    /// Overlap of two segments.
    ///
    /// Clipping segments by each other's bounding planes would rarely keep two points, so
    /// instead each endpoint is projected onto the other segment and kept if it lands
    /// within it.
    fn clip_2x2(&mut self) {
        let eps = self.tolerances.clip_epsilon;
        let (a, b) = (self.face0.points[0], self.face0.points[1]);
        let (c, d) = (self.face1.points[0], self.face1.points[1]);
        let axis = self.axis;

        let ab = b - a;
        let cd = d - c;

        // Crossing segments only touch at one point.
        if ab.cross(&cd).dot(&axis).abs() > eps
            || ab.norm_squared() <= Real::EPSILON
            || cd.norm_squared() <= Real::EPSILON
        {
            return self.clip_none();
        }

        let mut points: ArrayVec<ContactPoint, 4> = ArrayVec::new();

        // Endpoints of the first segment projected on the second one, and conversely.
        // The depth is always measured from the second face to the first one.
        for (p, (s0, s1), on_first) in [
            (a, (c, d), true),
            (b, (c, d), true),
            (c, (a, b), false),
            (d, (a, b), false),
        ] {
            let dir = s1 - s0;
            if (p - s0).dot(&dir) > -eps && (p - s1).dot(&-dir) > -eps {
                let proj = s0 + dir * (dir.dot(&(p - s0)) / dir.norm_squared());
                let depth = if on_first {
                    axis.dot(&(p - proj))
                } else {
                    axis.dot(&(proj - p))
                };
                points.push(ContactPoint::new(na::center(&p, &proj), depth));
            }
        }

        let merge_eps = self.tolerances.merge_epsilon;
        for i in (0..points.len()).rev() {
            for j in (0..i).rev() {
                if (points[i].position - points[j].position).norm_squared() < merge_eps {
                    if points[i].depth < points[j].depth {
                        points[j] = points[i];
                    }
                    let _ = points.swap_remove(i);
                    break;
                }
            }
        }

        if points.is_empty() {
            log::debug!("Disjoint parallel segments: falling back to a single contact point.");
            return self.clip_none();
        }

        self.contacts = points;
    }

    /// General polygon clipping.
    fn clip_nxn(&mut self) {
        let mut planes = ClipPlanes::new();
        self.push_edge_planes(&self.face0, &mut planes);
        self.push_edge_planes(&self.face1, &mut planes);

        let mut polygon = self.make_polygon();
        for plane in &planes {
            self.clip_polygon(plane, &mut polygon);
        }

        if polygon.is_empty() {
            log::debug!("Contact faces clipped to an empty polygon.");
        }

        let mid = na::center(&self.point0, &self.point1);
        if polygon.try_push(mid).is_err() {
            // Replace the last vertex so the reference point is always a candidate.
            let last = polygon.len() - 1;
            polygon[last] = mid;
        }

        let mut points: ArrayVec<ContactPoint, MAX_POLYGON_POINTS> = polygon
            .iter()
            .map(|p| {
                let p0 = self.project_on_face(p, &self.face0);
                let p1 = self.project_on_face(p, &self.face1);
                ContactPoint::new(na::center(&p0, &p1), self.axis.dot(&(p0 - p1)))
            })
            .collect();

        let mut deepest = 0;
        for (i, pt) in points.iter().enumerate() {
            if pt.depth < points[deepest].depth {
                deepest = i;
            }
        }
        points.swap(0, deepest);

        let positions: ArrayVec<Point<Real>, MAX_POLYGON_POINTS> =
            points.iter().map(|pt| pt.position).collect();
        self.contacts = reduce_polygon(&positions, &self.axis, true)
            .into_iter()
            .map(|i| points[i])
            .collect();
    }

    /// Pushes the planes parallel to the axis bounding the given face.
    ///
    /// The hull edges are found by walking from the first point: an edge `(s, e)` is
    /// accepted when no other point lies strictly on its outer side.
    fn push_edge_planes(&self, face: &ContactFace, planes: &mut ClipPlanes) {
        let pts = &face.points;
        let n = pts.len();

        if n < 3 {
            return;
        }

        let eps = self.tolerances.clip_epsilon;
        let eps2 = eps * eps;
        let mut start = 0;
        let mut stop = None;

        for _ in 0..2 * n + 1 {
            let s = pts[start];
            let edge = (0..n).filter(|i| *i != start).find_map(|i| {
                let normal = (pts[i] - s).cross(&self.axis);
                if normal.norm_squared() < eps2 {
                    return None;
                }
                let normal = normal.normalize();
                let is_edge = (0..n)
                    .filter(|j| *j != i && *j != start)
                    .all(|j| (pts[j] - s).dot(&normal) <= eps);
                is_edge.then_some((i, normal))
            });

            match edge {
                Some((end, normal)) => {
                    let plane = Plane::new(
                        UnitVector::new_unchecked(-normal),
                        normal.dot(&s.coords),
                    );
                    if planes.try_push(plane).is_err() {
                        return;
                    }
                    let _ = stop.get_or_insert(start);
                    start = end;
                }
                None if stop.is_none() && start + 1 < n => start += 1,
                None => return,
            }

            if stop == Some(start) {
                return;
            }
        }
    }

    /// The polygon to clip: one of the faces if it is a segment, or a quad orthogonal to
    /// the axis bounding both faces otherwise.
    fn make_polygon(&self) -> Polygon {
        let mut polygon = Polygon::new();

        for face in [&self.face0, &self.face1] {
            if face.len() == 2 {
                polygon.extend(face.points.iter().copied());
                return polygon;
            }
        }

        let [x, y] = self.axis.orthonormal_basis();
        let (mut min_x, mut max_x) = (Real::MAX, -Real::MAX);
        let (mut min_y, mut max_y) = (Real::MAX, -Real::MAX);

        for p in self.face0.points.iter().chain(self.face1.points.iter()) {
            let (px, py) = (p.coords.dot(&x), p.coords.dot(&y));
            min_x = min_x.min(px);
            max_x = max_x.max(px);
            min_y = min_y.min(py);
            max_y = max_y.max(py);
        }

        let center = na::center(&self.point0, &self.point1);
        let (cx, cy) = (center.coords.dot(&x), center.coords.dot(&y));
        for (qx, qy) in [(min_x, min_y), (max_x, min_y), (max_x, max_y), (min_x, max_y)] {
            polygon.push(center + x * (qx - cx) + y * (qy - cy));
        }

        polygon
    }

    /// Sutherland-Hodgman clipping of `polygon` by the half-space in front of `plane`.
    fn clip_polygon(&self, plane: &Plane, polygon: &mut Polygon) {
        let eps = self.tolerances.clip_epsilon;
        let n = polygon.len();
        let dists: ArrayVec<Real, MAX_POLYGON_POINTS> =
            polygon.iter().map(|p| plane.distance(p)).collect();
        let mut clipped = Polygon::new();

        for i0 in 0..n {
            let i1 = (i0 + 1) % n;
            let (d0, d1) = (dists[i0], dists[i1]);
            let (p0, p1) = (polygon[i0], polygon[i1]);
            let crossing = || p0 + (p1 - p0) * (d0 / (d0 - d1));

            // The polygon can only grow by one vertex per plane, so pushes never fail
            // on convex inputs.
            if d0 > -eps {
                let _ = clipped.try_push(p0);
                if d1 < -eps && d0 - d1 > eps {
                    let _ = clipped.try_push(crossing());
                }
            } else if d1 > -eps && d1 - d0 > eps {
                let _ = clipped.try_push(crossing());
            }
        }

        *polygon = clipped;
    }

    /// Projects `p` along the axis onto the plane of `face`.
    fn project_on_face(&self, p: &Point<Real>, face: &ContactFace) -> Point<Real> {
        let denom = self.axis.dot(&face.normal);

        if denom.abs() <= Real::EPSILON {
            return *p;
        }

        let offset = face.normal.dot(&(p - face.points[0]));
        p - self.axis * (offset / denom)
    }
}
