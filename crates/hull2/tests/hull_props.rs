//! Property tests for the hull contract over arbitrary integer grids.
//! Integer-valued coordinates keep the orientation predicate exact, so the
//! properties can be asserted without tolerances.

use hull2::geom2::orient;
use hull2::prelude::*;
use proptest::prelude::*;

fn to_points(raw: &[(i32, i32)]) -> Vec<Vec2<f64>> {
    raw.iter()
        .map(|&(x, y)| Vec2::new(x as f64, y as f64))
        .collect()
}

fn canonical(ring: &[Vec2<f64>]) -> Vec<Vec2<f64>> {
    let start = ring
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (a.x, a.y)
                .partial_cmp(&(b.x, b.y))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
        .unwrap_or(0);
    (0..ring.len())
        .map(|k| ring[(start + k) % ring.len()])
        .collect()
}

proptest! {
    #[test]
    fn hull_vertices_come_from_the_input(raw in prop::collection::vec((-50i32..=50, -50i32..=50), 1..200)) {
        let input = to_points(&raw);
        let hull = compute_hull(&input).unwrap();
        prop_assert!(!hull.is_empty());
        for v in &hull {
            prop_assert!(input.contains(v));
        }
    }

    #[test]
    fn every_input_point_is_contained(raw in prop::collection::vec((-50i32..=50, -50i32..=50), 1..200)) {
        let input = to_points(&raw);
        let hull = compute_hull(&input).unwrap();
        match hull.as_slice() {
            [only] => {
                for p in &input {
                    prop_assert_eq!(p, only);
                }
            }
            [a, b] => {
                for p in &input {
                    prop_assert_eq!(orient(*a, *b, *p), 0.0);
                    let t = (p - a).dot(&(b - a));
                    prop_assert!(t >= 0.0 && t <= (b - a).norm_squared());
                }
            }
            ring => {
                let n = ring.len();
                for p in &input {
                    for i in 0..n {
                        prop_assert!(orient(ring[i], ring[(i + 1) % n], *p) >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn hull_is_convex_and_ccw(raw in prop::collection::vec((-50i32..=50, -50i32..=50), 3..200)) {
        let input = to_points(&raw);
        let hull = compute_hull(&input).unwrap();
        let n = hull.len();
        if n >= 3 {
            for i in 0..n {
                let (a, b, c) = (hull[i], hull[(i + 1) % n], hull[(i + 2) % n]);
                prop_assert!(orient(a, b, c) >= 0.0);
            }
        }
    }

    #[test]
    fn input_order_is_irrelevant(
        raw in prop::collection::vec((-50i32..=50, -50i32..=50), 1..100),
        seed in any::<u64>(),
    ) {
        use rand::seq::SliceRandom;
        use rand::SeedableRng;
        let input = to_points(&raw);
        let reference = canonical(&compute_hull(&input).unwrap());
        let mut shuffled = input;
        shuffled.shuffle(&mut rand::rngs::StdRng::seed_from_u64(seed));
        prop_assert_eq!(canonical(&compute_hull(&shuffled).unwrap()), reference);
    }

    #[test]
    fn recomputing_on_hull_vertices_is_idempotent(raw in prop::collection::vec((-50i32..=50, -50i32..=50), 1..200)) {
        let input = to_points(&raw);
        let hull = compute_hull(&input).unwrap();
        let again = compute_hull(&hull).unwrap();
        prop_assert_eq!(canonical(&again), canonical(&hull));
    }
}
