use crate::{cube_points, rand_dir, rand_pose, rand_real, SEED};
use convex_support3d::math::{Point, Real, Rotation, Vector};
use convex_support3d::query::ContactTolerances;
use convex_support3d::shape::{
    BoxCore, ConeCore, ConvexCore, ConvexShape, CylinderCore, EllipsoidCore, PointsCore,
    SegmentCore,
};
use oorandom::Rand32;

/// Directions concentrated around the face and edge normals of a box, where flat
/// features are most likely to be reported.
fn feature_dir(rng: &mut Rand32) -> Vector<Real> {
    let mut base = Vector::zeros();
    base[rng.rand_range(0..3) as usize] = if rng.rand_float() < 0.5 { 1.0 } else { -1.0 };
    if rng.rand_float() < 0.5 {
        base[rng.rand_range(0..3) as usize] += if rng.rand_float() < 0.5 { 1.0 } else { -1.0 };
    }

    let jitter = rand_real(rng, 0.0, 0.15);
    let dir = base.try_normalize(1.0e-3).unwrap_or_else(Vector::x) + rand_dir(rng) * jitter;
    dir.normalize()
}

#[test]
fn box_faces_mirror_across_yz_plane() {
    let mut rng = Rand32::new(SEED);
    let extents = Vector::new(2.0, 4.0, 6.0);
    let cuboid = BoxCore::new(extents);
    let tol = ContactTolerances::default();

    for _ in 0..500 {
        let dir = feature_dir(&mut rng);
        let mirrored = Vector::new(-dir.x, dir.y, dir.z);

        let face = cuboid.contact_face(&dir, &tol);
        let mirrored_face = cuboid.contact_face(&mirrored, &tol);
        assert_eq!(face.len(), mirrored_face.len(), "along {dir:?}");

        // Points are not emitted in the same order on both sides.
        for p in &face.points {
            let image = Point::new(-p.x, p.y, p.z);
            assert!(
                mirrored_face
                    .points
                    .iter()
                    .any(|q| relative_eq!(*q, image, epsilon = 1.0e-6)),
                "along {dir:?}: no mirror image of {p:?} in {:?}",
                mirrored_face.points
            );
        }

        // Every point is a corner of the box.
        for p in face.points.iter().chain(mirrored_face.points.iter()) {
            for k in 0..3 {
                assert_relative_eq!(p[k].abs(), extents[k] * 0.5);
            }
        }

        if face.len() == 4 {
            let k = face.normal.iamax();
            assert_relative_eq!(face.normal[k].abs(), 1.0);
            for p in &face.points {
                assert_relative_eq!(p[k] * face.normal[k], extents[k] * 0.5);
            }
        }

        if !face.is_empty() {
            assert_relative_eq!(face.normal.x, -mirrored_face.normal.x, epsilon = 1.0e-6);
        }
    }
}

#[test]
fn face_points_stay_behind_the_support_plane() {
    let mut rng = Rand32::new(SEED + 1);
    let cloud = cube_points(1.0);
    let tol = ContactTolerances::default();
    let cores: [ConvexCore; 9] = [
        SegmentCore::new(2.0).into(),
        BoxCore::new(Vector::new(1.0, 2.0, 3.0)).into(),
        BoxCore::new(Vector::new(2.0, 2.0, 0.0)).into(),
        EllipsoidCore::new(Vector::new(0.0, 1.0, 2.0)).into(),
        EllipsoidCore::new(Vector::new(0.0, 0.0, 2.0)).into(),
        CylinderCore::new(2.0, 0.5).into(),
        ConeCore::new(2.0, 1.0).into(),
        ConeCore::new(0.0, 1.0).into(),
        PointsCore::new(&cloud, Vector::new(1.0, 0.5, 2.0), Rotation::identity()).into(),
    ];

    let mut num_faces = 0;

    for core in cores {
        for _ in 0..300 {
            let shape = ConvexShape::new(core, rand_real(&mut rng, 0.0, 0.2), rand_pose(&mut rng));
            let dir = shape.pose * feature_dir(&mut rng);
            let support = shape.support(&dir);
            let face = shape.contact_face(&dir, &support, &tol);

            if face.is_empty() {
                continue;
            }

            num_faces += 1;
            assert_relative_eq!(face.normal.norm(), 1.0, epsilon = 1.0e-4);
            assert!(face.normal.dot(&dir) > 0.0, "{:?}", core.core_type());

            for pt in &face.points {
                assert!(
                    pt.coords.dot(&dir) <= support.coords.dot(&dir) + 1.0e-3,
                    "{:?}: face point {pt:?} beyond support {support:?}",
                    core.core_type()
                );
            }
        }
    }

    assert!(num_faces > 0);
}

#[test]
fn polytope_faces_contain_the_support_point() {
    let mut rng = Rand32::new(SEED + 2);
    let cloud = cube_points(1.0);
    let tol = ContactTolerances::default();
    let cores: [ConvexCore; 3] = [
        SegmentCore::new(2.0).into(),
        BoxCore::new(Vector::new(1.0, 2.0, 3.0)).into(),
        PointsCore::new(
            &cloud,
            Vector::new(1.0, 0.5, 2.0),
            Rotation::from_euler_angles(0.1, 0.2, 0.3),
        )
        .into(),
    ];

    for core in cores {
        for _ in 0..300 {
            let dir = feature_dir(&mut rng);
            let support = core.local_support(&dir);
            let face = core.contact_face(&dir, &support, &tol);

            if let Some(max) = face
                .points
                .iter()
                .map(|pt| pt.coords.dot(&dir))
                .reduce(Real::max)
            {
                assert_relative_eq!(max, support.coords.dot(&dir), epsilon = 1.0e-4);
            }
        }
    }
}
