#[macro_use]
extern crate approx;

use convex_support3d::math::{Isometry, Point, Real, Vector};
use oorandom::Rand32;

mod contact_faces;
mod convex_convex_contact;
mod core_support;
mod plane_convex_contact;
mod reduce_polygon;

const SEED: u64 = 0x5eed_c0de;

fn rand_real(rng: &mut Rand32, min: Real, max: Real) -> Real {
    min + (max - min) * rng.rand_float() as Real
}

/// A random unit vector, roughly uniformly distributed on the sphere.
fn rand_dir(rng: &mut Rand32) -> Vector<Real> {
    loop {
        let v = Vector::new(
            rand_real(rng, -1.0, 1.0),
            rand_real(rng, -1.0, 1.0),
            rand_real(rng, -1.0, 1.0),
        );
        let norm = v.norm();
        if norm > 0.1 && norm <= 1.0 {
            return v / norm;
        }
    }
}

fn rand_pose(rng: &mut Rand32) -> Isometry<Real> {
    let translation = Vector::new(
        rand_real(rng, -5.0, 5.0),
        rand_real(rng, -5.0, 5.0),
        rand_real(rng, -5.0, 5.0),
    );
    let axisangle = rand_dir(rng) * rand_real(rng, 0.0, 3.0);
    Isometry::new(translation, axisangle)
}

/// The eight corners of a cube with the given half-extent.
fn cube_points(half: Real) -> Vec<Point<Real>> {
    let mut pts = Vec::new();
    for x in [-half, half] {
        for y in [-half, half] {
            for z in [-half, half] {
                pts.push(Point::new(x, y, z));
            }
        }
    }
    pts
}
