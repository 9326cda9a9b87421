use crate::{cube_points, rand_dir, rand_pose, rand_real, SEED};
use convex_support3d::math::{Isometry, Point, Real, Rotation, Vector};
use convex_support3d::shape::{
    BoxCore, ConeCore, ConvexCore, ConvexShape, CylinderCore, EllipsoidCore, PointsCore,
    SegmentCore,
};
use oorandom::Rand32;

/// Points sampled on the boundary of each core, used as membership witnesses.
fn witnesses(core: &ConvexCore, rng: &mut Rand32) -> Vec<Point<Real>> {
    let mut out = Vec::new();

    for _ in 0..64 {
        let t = rand_real(rng, 0.0, std::f64::consts::TAU as Real);
        let (s, c) = t.sin_cos();
        let u = rand_real(rng, -1.0, 1.0);

        let pt = match core {
            ConvexCore::Point => Point::origin(),
            ConvexCore::Segment(seg) => Point::new(u * seg.length * 0.5, 0.0, 0.0),
            ConvexCore::Box(b) => {
                let signs = rand_dir(rng).map(|x| if x >= 0.0 { 0.5 } else { -0.5 });
                Point::from(b.extents.component_mul(&signs))
            }
            ConvexCore::Ellipsoid(e) => Point::from(e.radii.component_mul(&rand_dir(rng))),
            ConvexCore::Cylinder(cyl) => {
                Point::new(u * cyl.height * 0.5, cyl.radius * c, cyl.radius * s)
            }
            ConvexCore::Cone(cone) => {
                if u > 0.8 {
                    Point::new(cone.height * 0.5, 0.0, 0.0)
                } else {
                    Point::new(-cone.height * 0.5, cone.radius * c, cone.radius * s)
                }
            }
            ConvexCore::Points(cloud) => {
                let i = rng.rand_range(0..cloud.points.len() as u32) as usize;
                cloud.point(i)
            }
        };
        out.push(pt);
    }

    out
}

fn test_cores(cloud: &[Point<Real>]) -> Vec<ConvexCore<'_>> {
    vec![
        ConvexCore::Point,
        SegmentCore::new(3.0).into(),
        BoxCore::new(Vector::new(1.0, 2.0, 3.0)).into(),
        BoxCore::new(Vector::new(2.0, 0.0, 1.0)).into(),
        EllipsoidCore::new(Vector::new(0.5, 1.0, 2.0)).into(),
        EllipsoidCore::new(Vector::new(0.0, 1.0, 1.0)).into(),
        CylinderCore::new(2.0, 0.5).into(),
        ConeCore::new(2.0, 1.0).into(),
        ConeCore::new(1.0, 3.0).into(),
        PointsCore::new(
            cloud,
            Vector::new(1.0, 2.0, 0.5),
            Rotation::from_euler_angles(0.3, 0.2, 0.1),
        )
        .into(),
    ]
}

#[test]
fn local_support_is_farthest() {
    let mut rng = Rand32::new(SEED);
    let cloud = cube_points(1.0);

    for core in test_cores(&cloud) {
        let witnesses = witnesses(&core, &mut rng);

        for _ in 0..200 {
            let dir = rand_dir(&mut rng);
            let support = core.local_support(&dir);
            let max = support.coords.dot(&dir);

            for w in &witnesses {
                assert!(
                    w.coords.dot(&dir) <= max + 1.0e-4,
                    "{:?}: witness {:?} beyond support {:?} along {:?}",
                    core.core_type(),
                    w,
                    support,
                    dir
                );
            }
        }
    }
}

#[test]
fn margin_offsets_support_along_direction() {
    let mut rng = Rand32::new(SEED + 1);
    let cloud = cube_points(0.5);

    for core in test_cores(&cloud) {
        for _ in 0..50 {
            let pose = rand_pose(&mut rng);
            let margin = rand_real(&mut rng, 0.0, 0.5);
            let dir = rand_dir(&mut rng);

            let bare = ConvexShape::new(core, 0.0, pose);
            let dilated = ConvexShape::new(core, margin, pose);
            assert_relative_eq!(
                dilated.support(&dir),
                bare.support(&dir) + dir * margin,
                epsilon = 1.0e-4
            );
        }
    }
}

#[test]
fn aabb_encloses_support_points() {
    let mut rng = Rand32::new(SEED + 2);
    let cloud = cube_points(0.5);

    for core in test_cores(&cloud) {
        let shape = ConvexShape::new(core, 0.1, rand_pose(&mut rng));
        let aabb = shape.compute_aabb();

        for _ in 0..100 {
            let p = shape.support(&rand_dir(&mut rng));
            for i in 0..3 {
                assert!(p[i] >= aabb.mins[i] - 1.0e-4 && p[i] <= aabb.maxs[i] + 1.0e-4);
            }
        }
    }
}

#[test]
fn degenerate_directions_are_finite() {
    let cloud = cube_points(1.0);

    for core in test_cores(&cloud) {
        let shape = ConvexShape::new(core, 0.1, Isometry::identity());
        for dir in [Vector::zeros(), Vector::x(), -Vector::x(), Vector::new(1.0e-9, 0.0, 0.0)] {
            let p = shape.support(&dir);
            assert!(
                p.iter().all(|x| x.is_finite()),
                "{:?} along {dir:?}",
                core.core_type()
            );
        }
    }
}
