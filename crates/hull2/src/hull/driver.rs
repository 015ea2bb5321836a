//! Entry points: validation, the one-time sort, and the recursion.

use std::time::Instant;

use nalgebra::Vector2;

use crate::error::HullError;
use crate::observe::{HullCfg, HullObserver, NoopObserver, Style};

use super::base::base_hull;
use super::merge::merge;
use super::types::Hull;

/// Compute the convex hull of `points`.
///
/// Returns the hull's vertices in counterclockwise winding; length ≥ 1 for
/// any valid input. Empty input and non-finite coordinates are rejected
/// with [`HullError::InvalidInput`].
pub fn compute_hull(points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>, HullError> {
    compute_hull_with(points, &HullCfg::default(), &mut NoopObserver).map(Hull::into_vertices)
}

/// [`compute_hull`] with an observer receiving sub-hulls, tangents, and
/// phase timings. With `cfg.animate` unset only the final hull and the
/// timings are reported.
pub fn compute_hull_with(
    points: &[Vector2<f64>],
    cfg: &HullCfg,
    obs: &mut dyn HullObserver,
) -> Result<Hull, HullError> {
    let mut pts = validated(points)?;

    let t_sort = Instant::now();
    sort_dedup(&mut pts);
    obs.timing("sort", t_sort.elapsed().as_secs_f64());

    let t_hull = Instant::now();
    let hull = solve(&pts, cfg, obs)?;
    obs.timing("hull", t_hull.elapsed().as_secs_f64());

    obs.hull(&hull.segments(), Style::new(cfg.colors.hull, false));
    Ok(hull)
}

/// Fork-join variant: recursion branches above `threshold` points run via
/// `rayon::join`. No observer (the branches race); results are identical to
/// the sequential entry points.
#[cfg(feature = "parallel")]
pub fn compute_hull_par(
    points: &[Vector2<f64>],
    threshold: usize,
) -> Result<Vec<Vector2<f64>>, HullError> {
    let mut pts = validated(points)?;
    sort_dedup(&mut pts);
    solve_par(&pts, threshold.max(4)).map(Hull::into_vertices)
}

fn validated(points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>, HullError> {
    if points.is_empty() {
        return Err(HullError::InvalidInput("point set is empty"));
    }
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(HullError::InvalidInput("non-finite coordinate"));
    }
    Ok(points.to_vec())
}

/// Sort ascending by x (ties by y) and drop exact duplicates. Done once;
/// the recursion below only ever takes sub-slices.
fn sort_dedup(pts: &mut Vec<Vector2<f64>>) {
    pts.sort_by(|a, b| {
        match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        }
    });
    pts.dedup();
}

/// Recursive divide-and-conquer on an x-sorted, deduplicated slice.
fn solve(pts: &[Vector2<f64>], cfg: &HullCfg, obs: &mut dyn HullObserver) -> Result<Hull, HullError> {
    if pts.len() <= 3 {
        let h = base_hull(pts);
        if cfg.animate {
            obs.hull(&h.segments(), Style::new(cfg.colors.sub_hull, true));
        }
        return Ok(h);
    }
    // Midpoint split keeps every left x ≤ every right x.
    let mid = pts.len() / 2;
    let left = solve(&pts[..mid], cfg, obs)?;
    let right = solve(&pts[mid..], cfg, obs)?;
    let (merged, tangents) = merge(&left, &right)?;
    if cfg.animate {
        let style = Style::new(cfg.colors.tangent, true);
        obs.tangent(tangents.upper, style);
        obs.tangent(tangents.lower, style);
        obs.hull(&merged.segments(), Style::new(cfg.colors.sub_hull, true));
    }
    Ok(merged)
}

#[cfg(feature = "parallel")]
fn solve_par(pts: &[Vector2<f64>], threshold: usize) -> Result<Hull, HullError> {
    if pts.len() <= 3 {
        return Ok(base_hull(pts));
    }
    let mid = pts.len() / 2;
    let (left, right) = if pts.len() > threshold {
        rayon::join(
            || solve_par(&pts[..mid], threshold),
            || solve_par(&pts[mid..], threshold),
        )
    } else {
        (solve_par(&pts[..mid], threshold), solve_par(&pts[mid..], threshold))
    };
    let (merged, _) = merge(&left?, &right?)?;
    Ok(merged)
}
