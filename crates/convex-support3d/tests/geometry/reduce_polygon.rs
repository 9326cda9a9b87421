use crate::{rand_real, SEED};
use convex_support3d::math::{Point, Vector};
use convex_support3d::utils::reduce_polygon;
use oorandom::Rand32;

#[test]
fn reduced_indices_are_distinct_and_bounded() {
    let mut rng = Rand32::new(SEED);

    for keep_first in [false, true] {
        for _ in 0..200 {
            let n = rng.rand_range(1..20) as usize;
            let points: Vec<_> = (0..n)
                .map(|_| Point::new(rand_real(&mut rng, -1.0, 1.0), 0.0, rand_real(&mut rng, -1.0, 1.0)))
                .collect();

            let kept = reduce_polygon(&points, &Vector::y(), keep_first);
            assert!(!kept.is_empty() && kept.len() <= 4);
            assert!(kept.iter().all(|i| *i < n));

            for (k, i) in kept.iter().enumerate() {
                assert!(!kept[k + 1..].contains(i));
            }

            if keep_first {
                assert_eq!(kept[0], 0);
            }
        }
    }
}

#[test]
fn small_convex_polygons_are_kept_whole() {
    let square = [
        Point::new(1.0, 0.0, 1.0),
        Point::new(-1.0, 0.0, -1.0),
        Point::new(-1.0, 0.0, 1.0),
        Point::new(1.0, 0.0, -1.0),
    ];
    let triangle = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(2.0, 0.0, 0.0),
        Point::new(0.5, 0.0, 1.0),
    ];

    for keep_first in [false, true] {
        let mut kept = reduce_polygon(&square, &Vector::y(), keep_first);
        kept.sort_unstable();
        assert_eq!(kept.as_slice(), &[0, 1, 2, 3]);

        let mut kept = reduce_polygon(&triangle, &Vector::y(), keep_first);
        kept.sort_unstable();
        assert_eq!(kept.as_slice(), &[0, 1, 2]);
    }
}

#[test]
fn duplicates_and_empty_input() {
    let same = [Point::new(1.0, 2.0, 3.0); 5];
    assert_eq!(reduce_polygon(&same, &Vector::y(), false).len(), 1);
    assert_eq!(reduce_polygon(&same, &Vector::y(), true).as_slice(), &[0]);
    assert!(reduce_polygon(&[], &Vector::y(), false).is_empty());
}

#[test]
fn interior_points_are_discarded() {
    let points = [
        Point::new(0.1, 0.0, 0.1),
        Point::new(1.0, 0.0, 1.0),
        Point::new(0.0, 0.0, 0.0),
        Point::new(-1.0, 0.0, -1.0),
        Point::new(-1.0, 0.0, 1.0),
        Point::new(1.0, 0.0, -1.0),
    ];

    let mut kept = reduce_polygon(&points, &Vector::y(), false);
    kept.sort_unstable();
    assert_eq!(kept.as_slice(), &[1, 3, 4, 5]);

    let kept = reduce_polygon(&points, &Vector::y(), true);
    assert_eq!(kept[0], 0);
    assert_eq!(kept.len(), 4);
}
