//! Tangent-finding merge of two horizontally separated hulls.
//!
//! Given counterclockwise hulls `L` and `R` with every x of `L` ≤ every x
//! of `R`, the merge finds the upper and lower bridging tangents by walking
//! candidates around each ring, then stitches the two outer arcs into one
//! counterclockwise polygon. Points strictly inside the union are dropped.
//!
//! Walk conventions (both tangents start from the rightmost vertex of `L`
//! and the leftmost vertex of `R`):
//! - upper tangent: `L` advances counterclockwise, `R` clockwise, while the
//!   candidate's neighbor lies strictly above the current tangent line;
//! - lower tangent: the mirror image (`L` clockwise, `R` counterclockwise,
//!   neighbors strictly below).
//!
//! A neighbor exactly on the line only wins if it is strictly farther from
//! the opposite anchor, so collinear runs resolve deterministically to the
//! far endpoint and the walk cannot oscillate between equal candidates.
//! Each walk is still capped by a step budget; exceeding it means the
//! separation invariant was broken upstream and surfaces as an error
//! instead of a hang.

use nalgebra::Vector2;

use crate::error::HullError;
use crate::geom2::{dist2, orient, Seg2};

use super::types::Hull;

/// The two bridging edges a merge found, for observers.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Tangents {
    pub upper: Seg2,
    pub lower: Seg2,
}

/// Merge two counterclockwise hulls under the horizontal-separation
/// invariant. Returns the combined hull plus the tangents used.
pub(crate) fn merge(l: &Hull, r: &Hull) -> Result<(Hull, Tangents), HullError> {
    let (ui, uj) = upper_tangent(l, r)?;
    let (li, lj) = lower_tangent(l, r)?;

    // Stitch counterclockwise: L's outer (left-facing) arc runs from the
    // upper tangent vertex down around the leftmost point to the lower
    // tangent vertex; R's outer arc runs from the lower tangent vertex
    // around the rightmost point back up to the upper tangent vertex.
    let mut verts = Vec::with_capacity(l.len() + r.len());
    l.extend_arc_ccw(ui, li, &mut verts);
    r.extend_arc_ccw(lj, uj, &mut verts);

    let tangents = Tangents {
        upper: Seg2::new(l.vertex(ui), r.vertex(uj)),
        lower: Seg2::new(l.vertex(li), r.vertex(lj)),
    };
    Ok((Hull::from_ccw(verts), tangents))
}

/// Upper tangent: indices `(i, j)` into `L` and `R` such that every vertex
/// of both hulls lies on or below the directed line `L[i] → R[j]`.
fn upper_tangent(l: &Hull, r: &Hull) -> Result<(usize, usize), HullError> {
    let (nl, nr) = (l.len(), r.len());
    let mut i = l.rightmost_idx();
    let mut j = r.leftmost_idx();
    let mut budget = walk_budget(nl, nr);

    loop {
        let mut moved = false;
        // Raise the left endpoint: counterclockwise over L's upper chain.
        while nl > 1 {
            spend(&mut budget)?;
            let ni = (i + 1) % nl;
            if raises_left(l.vertex(i), r.vertex(j), l.vertex(ni)) {
                i = ni;
                moved = true;
            } else {
                break;
            }
        }
        // Raise the right endpoint: clockwise over R's upper chain.
        while nr > 1 {
            spend(&mut budget)?;
            let nj = (j + nr - 1) % nr;
            if raises_right(l.vertex(i), r.vertex(j), r.vertex(nj)) {
                j = nj;
                moved = true;
            } else {
                break;
            }
        }
        if !moved {
            return Ok((i, j));
        }
    }
}

/// Lower tangent: mirror image of [`upper_tangent`]; every vertex ends up
/// on or above the line `L[i] → R[j]`.
fn lower_tangent(l: &Hull, r: &Hull) -> Result<(usize, usize), HullError> {
    let (nl, nr) = (l.len(), r.len());
    let mut i = l.rightmost_idx();
    let mut j = r.leftmost_idx();
    let mut budget = walk_budget(nl, nr);

    loop {
        let mut moved = false;
        // Lower the left endpoint: clockwise over L's lower chain.
        while nl > 1 {
            spend(&mut budget)?;
            let pi = (i + nl - 1) % nl;
            if lowers_left(l.vertex(i), r.vertex(j), l.vertex(pi)) {
                i = pi;
                moved = true;
            } else {
                break;
            }
        }
        // Lower the right endpoint: counterclockwise over R's lower chain.
        while nr > 1 {
            spend(&mut budget)?;
            let nj = (j + 1) % nr;
            if lowers_right(l.vertex(i), r.vertex(j), r.vertex(nj)) {
                j = nj;
                moved = true;
            } else {
                break;
            }
        }
        if !moved {
            return Ok((i, j));
        }
    }
}

/// Candidate `cand` replaces the left endpoint `li` of an upper tangent when
/// it lies strictly above the line, or on it but farther from the right
/// anchor (the deterministic collinear tie-break).
#[inline]
fn raises_left(li: Vector2<f64>, rj: Vector2<f64>, cand: Vector2<f64>) -> bool {
    let o = orient(li, rj, cand);
    o > 0.0 || (o == 0.0 && dist2(cand, rj) > dist2(li, rj))
}

#[inline]
fn raises_right(li: Vector2<f64>, rj: Vector2<f64>, cand: Vector2<f64>) -> bool {
    let o = orient(li, rj, cand);
    o > 0.0 || (o == 0.0 && dist2(cand, li) > dist2(rj, li))
}

#[inline]
fn lowers_left(li: Vector2<f64>, rj: Vector2<f64>, cand: Vector2<f64>) -> bool {
    let o = orient(li, rj, cand);
    o < 0.0 || (o == 0.0 && dist2(cand, rj) > dist2(li, rj))
}

#[inline]
fn lowers_right(li: Vector2<f64>, rj: Vector2<f64>, cand: Vector2<f64>) -> bool {
    let o = orient(li, rj, cand);
    o < 0.0 || (o == 0.0 && dist2(cand, li) > dist2(rj, li))
}

// Advances are monotone (at most nl + nr in total) and every alternation
// pass costs two extra failing checks, so real walks stay well under this.
#[inline]
fn walk_budget(nl: usize, nr: usize) -> usize {
    4 * (nl + nr) + 16
}

#[inline]
fn spend(budget: &mut usize) -> Result<(), HullError> {
    if *budget == 0 {
        return Err(HullError::InternalInvariantViolation(
            "tangent walk exceeded its step budget",
        ));
    }
    *budget -= 1;
    Ok(())
}
