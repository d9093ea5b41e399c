//! Property tests for convex-hull borders.
//!
//! Inputs live on an integer grid so cross products are exact; query points
//! carry irrational-looking offsets so they never sit on a hull edge.

use border::prelude::*;
use proptest::prelude::*;

fn grid_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-50i32..50, -50i32..50), 1..60).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| Vec2::new(x as f64, y as f64))
            .collect()
    })
}

fn off_grid_query() -> impl Strategy<Value = Point> {
    (-60i32..60, -60i32..60).prop_map(|(x, y)| {
        Vec2::new(
            x as f64 + std::f64::consts::FRAC_1_PI,
            y as f64 + 1.0 / std::f64::consts::E,
        )
    })
}

proptest! {
    #[test]
    fn every_input_point_is_inside_or_on_hull(pts in grid_points()) {
        let b = ConvexHullBorder::new(&pts).unwrap();
        for p in &pts {
            prop_assert!(b.is_inside(*p) || b.min_distance(*p) < 1e-9);
        }
    }

    #[test]
    fn hull_is_strictly_convex(pts in grid_points()) {
        let b = ConvexHullBorder::new(&pts).unwrap();
        let h = b.points();
        prop_assume!(h.len() >= 3);
        let n = h.len();
        for i in 0..n {
            prop_assert!(cross(h[i], h[(i + 1) % n], h[(i + 2) % n]) > 0.0);
        }
    }

    #[test]
    fn hull_is_minimal_subset(pts in grid_points()) {
        let b = ConvexHullBorder::new(&pts).unwrap();
        let h = b.points();
        prop_assert!(!h.is_empty());
        prop_assert!(h.len() <= pts.len());
        for (i, v) in h.iter().enumerate() {
            prop_assert!(pts.contains(v));
            prop_assert!(!h[i + 1..].contains(v));
        }
    }

    #[test]
    fn containment_agrees_with_distance(pts in grid_points(), q in off_grid_query()) {
        let b = ConvexHullBorder::new(&pts).unwrap();
        let d = b.min_distance(q);
        if b.is_inside(q) {
            prop_assert_eq!(d, 0.0);
        } else {
            prop_assert!(d > 0.0);
        }
    }

    #[test]
    fn outside_distance_matches_brute_force(pts in grid_points(), q in off_grid_query()) {
        let b = ConvexHullBorder::new(&pts).unwrap();
        prop_assume!(!b.is_inside(q));
        let h = b.points();
        let brute = (0..h.len())
            .map(|i| segment_distance_sq(q, h[i], h[(i + 1) % h.len()]))
            .fold(f64::INFINITY, f64::min);
        prop_assert_eq!(b.min_distance(q), brute);
        // never farther than the nearest vertex
        let nearest_vertex = h
            .iter()
            .map(|v| (q - v).norm_squared())
            .fold(f64::INFINITY, f64::min);
        prop_assert!(b.min_distance(q) <= nearest_vertex);
    }

    #[test]
    fn permutation_keeps_hull_and_queries(
        (pts, shuffled) in grid_points().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
        q in off_grid_query(),
    ) {
        let a = ConvexHullBorder::new(&pts).unwrap();
        let b = ConvexHullBorder::new(&shuffled).unwrap();
        prop_assert_eq!(a.points(), b.points());
        prop_assert_eq!(a.is_inside(q), b.is_inside(q));
        prop_assert_eq!(a.min_distance(q), b.min_distance(q));
    }

    #[test]
    fn center_is_an_input_point(pts in grid_points()) {
        let b = ConvexHullBorder::new(&pts).unwrap();
        let c = b.center();
        prop_assert!(pts.contains(&c));
        prop_assert_eq!(c, b.center());
    }
}

#[test]
fn random_clouds_satisfy_containment() {
    let cfg = CloudCfg {
        count: PointCount::Uniform { min: 3, max: 300 },
        half_extent: 100.0,
        center: Vec2::new(-20.0, 35.0),
    };
    for index in 0..50 {
        let pts = draw_cloud(cfg, ReplayToken { seed: 9, index });
        let b = ConvexHullBorder::new(&pts).unwrap();
        for p in &pts {
            assert!(b.is_inside(*p) || b.min_distance(*p) < 1e-9);
        }
        assert!(b.is_inside(b.center()) || b.min_distance(b.center()) < 1e-9);
    }
}
