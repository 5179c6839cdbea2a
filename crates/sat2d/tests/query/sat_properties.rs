use crate::common::{gap_along, random_in, random_polygon};
use nalgebra::Vector2;
use oorandom::Rand32;
use sat2d::query::details::{
    intersection_test_polygon_polygon, intersection_test_polygon_polygon_with_cache,
    SeparatingAxisCache,
};
use sat2d::query::sat;

const NUM_PAIRS: usize = 2000;

#[test]
fn intersection_test_is_symmetric() {
    let mut rng = Rand32::new(42);
    let mut num_hits = 0;

    for _ in 0..NUM_PAIRS {
        let p1 = random_polygon(&mut rng);
        let p2 = random_polygon(&mut rng);
        let hit = intersection_test_polygon_polygon(&p1, &p2);

        assert_eq!(hit, intersection_test_polygon_polygon(&p2, &p1));
        assert_eq!(hit, p1.separating_axis(&p2).is_none());
        assert_eq!(hit, p2.separating_axis(&p1).is_none());
        num_hits += hit as usize;
    }

    // Make sure both outcomes were exercised.
    assert!(num_hits > 0 && num_hits < NUM_PAIRS);
}

#[test]
fn rectangle_shortcut_matches_per_edge_axes() {
    let mut rng = Rand32::new(7);

    for _ in 0..NUM_PAIRS {
        let p1 = random_polygon(&mut rng);
        let p2 = random_polygon(&mut rng);

        // Opposite edges of a rotated rectangle are only parallel up to rounding, so both
        // axis sets may disagree on nearly-touching pairs.
        let depth = sat::polygon_edge_normals(p1.vertices())
            .chain(sat::polygon_edge_normals(p2.vertices()))
            .map(|axis| gap_along(&p1, &p2, &axis))
            .fold(f32::MIN, f32::max);
        if depth.abs() < 1.0e-2 {
            continue;
        }

        assert_eq!(
            intersection_test_polygon_polygon(&p1, &p2),
            sat::convex_points_find_separating_axis(p1.vertices(), p2.vertices()).is_none(),
            "{p1:?} vs {p2:?}"
        );
    }
}

#[test]
fn reported_axis_separates_projections() {
    let mut rng = Rand32::new(1234);

    for _ in 0..NUM_PAIRS {
        let p1 = random_polygon(&mut rng);
        let p2 = random_polygon(&mut rng);

        if let Some(sep) = sat::polygon_polygon_find_separating_axis(&p1, &p2) {
            assert!(gap_along(&p1, &p2, &sep.axis) > 0.0);

            let owner = match sep.owner {
                sat::AxisOwner::First => &p1,
                sat::AxisOwner::Second => &p2,
            };
            assert_eq!(sat::polygon_normals(owner)[sep.index], sep.axis);
        }
    }
}

#[test]
fn common_translation_keeps_shapes_apart() {
    let mut rng = Rand32::new(99);
    let mut num_tested = 0;

    for _ in 0..NUM_PAIRS {
        let mut p1 = random_polygon(&mut rng);
        let mut p2 = random_polygon(&mut rng);
        let shift = Vector2::new(
            random_in(&mut rng, -1000.0, 1000.0),
            random_in(&mut rng, -1000.0, 1000.0),
        );

        let Some(sep) = p1.separating_axis(&p2) else {
            continue;
        };

        // Skip nearly-touching pairs, rounding could bring them into contact.
        if gap_along(&p1, &p2, &sep.axis) < 1.0 {
            continue;
        }

        p1.translate(&shift);
        p2.translate(&shift);
        assert!(!intersection_test_polygon_polygon(&p1, &p2));
        num_tested += 1;
    }

    assert!(num_tested > 0);
}

#[test]
fn moving_along_separating_axis_keeps_shapes_apart() {
    let mut rng = Rand32::new(2024);

    for _ in 0..NUM_PAIRS {
        let p1 = random_polygon(&mut rng);
        let mut p2 = random_polygon(&mut rng);

        let Some(sep) = p1.separating_axis(&p2) else {
            continue;
        };

        let p1_proj = sat::project_on_axis(p1.vertices(), &sep.axis);
        let p2_proj = sat::project_on_axis(p2.vertices(), &sep.axis);
        let away = if p2_proj.min() > p1_proj.max() {
            sep.axis
        } else {
            -sep.axis
        };

        p2.translate(&(away.normalize() * 5000.0));
        assert!(!intersection_test_polygon_polygon(&p1, &p2));
    }
}

#[test]
fn cached_test_matches_uncached_test() {
    let mut rng = Rand32::new(5);
    let p1 = random_polygon(&mut rng);
    let mut p2 = random_polygon(&mut rng);
    let mut cache = SeparatingAxisCache::new();

    for _ in 0..NUM_PAIRS {
        let step = Vector2::new(
            random_in(&mut rng, -15.0, 15.0),
            random_in(&mut rng, -15.0, 15.0),
        );
        p2.translate(&step);
        p2.rotate_about_center(random_in(&mut rng, -5.0, 5.0));

        // Keep the wandering shape around the other one.
        let back = (p1.center() - p2.center()) * 0.05;
        p2.translate(&back);

        assert_eq!(
            intersection_test_polygon_polygon_with_cache(&p1, &p2, &mut cache),
            intersection_test_polygon_polygon(&p1, &p2)
        );
    }
}
