//! Base-case hulls for 1–3 points.

use nalgebra::Vector2;

use crate::geom2::orient;

use super::types::Hull;

/// Build the hull of 1–3 distinct points, already sorted by (x, y).
///
/// Winding is normalized here: a clockwise triangle is flipped to
/// counterclockwise, and a collinear triple collapses to its two extreme
/// points (the sort makes those the first and last), so no zero-area
/// triangle ever reaches a merge.
pub(crate) fn base_hull(pts: &[Vector2<f64>]) -> Hull {
    debug_assert!((1..=3).contains(&pts.len()));
    match pts {
        [p] => Hull::from_ccw(vec![*p]),
        [a, b] => Hull::from_ccw(vec![*a, *b]),
        [a, b, c] => {
            let o = orient(*a, *b, *c);
            if o > 0.0 {
                Hull::from_ccw(vec![*a, *b, *c])
            } else if o < 0.0 {
                Hull::from_ccw(vec![*a, *c, *b])
            } else {
                // Collinear: keep the extremes only.
                Hull::from_ccw(vec![*a, *c])
            }
        }
        _ => unreachable!("driver splits until 1..=3 points remain"),
    }
}
