//! The hull polygon: an ordered vertex ring in counterclockwise winding.

use nalgebra::Vector2;

use crate::geom2::Seg2;

/// Convex polygon produced by the hull computation.
///
/// Invariants:
/// - Vertices are distinct and wind counterclockwise (a consecutive triple
///   never turns clockwise; zero turns are allowed for collinear boundary
///   runs and for the degenerate 1- and 2-vertex forms).
/// - Every input point of the computation that produced it lies on or
///   inside the polygon.
///
/// A hull is constructed bottom-up from base cases and consumed/replaced at
/// every merge level; the top-level result is the final hull.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    verts: Vec<Vector2<f64>>,
}

impl Hull {
    /// Wrap a vertex ring that already satisfies the invariants.
    pub(crate) fn from_ccw(verts: Vec<Vector2<f64>>) -> Self {
        debug_assert!(!verts.is_empty());
        Self { verts }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Vertices in counterclockwise order.
    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.verts
    }

    pub fn into_vertices(self) -> Vec<Vector2<f64>> {
        self.verts
    }

    #[inline]
    pub(crate) fn vertex(&self, i: usize) -> Vector2<f64> {
        self.verts[i]
    }

    /// Index of the rightmost vertex (ties broken upward).
    pub(crate) fn rightmost_idx(&self) -> usize {
        max_idx_by_xy(&self.verts)
    }

    /// Index of the leftmost vertex (ties broken downward).
    pub(crate) fn leftmost_idx(&self) -> usize {
        min_idx_by_xy(&self.verts)
    }

    /// Append the counterclockwise arc `from ..= to` (inclusive, wrapping)
    /// onto `out`. `from == to` contributes the single vertex.
    pub(crate) fn extend_arc_ccw(&self, from: usize, to: usize, out: &mut Vec<Vector2<f64>>) {
        let n = self.verts.len();
        let mut i = from;
        loop {
            out.push(self.verts[i]);
            if i == to {
                break;
            }
            i = (i + 1) % n;
        }
    }

    /// Boundary as directed segments in traversal order. The polygon is
    /// closed modulo the vertex count, so a 2-vertex hull yields its two
    /// opposite edges and a single vertex yields none.
    pub fn segments(&self) -> Vec<Seg2> {
        let n = self.verts.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| Seg2::new(self.verts[i], self.verts[(i + 1) % n]))
            .collect()
    }
}

pub(crate) fn min_idx_by_xy(pts: &[Vector2<f64>]) -> usize {
    let mut best = 0usize;
    for (i, p) in pts.iter().enumerate().skip(1) {
        let q = pts[best];
        if p.x < q.x || (p.x == q.x && p.y < q.y) {
            best = i;
        }
    }
    best
}

pub(crate) fn max_idx_by_xy(pts: &[Vector2<f64>]) -> usize {
    let mut best = 0usize;
    for (i, p) in pts.iter().enumerate().skip(1) {
        let q = pts[best];
        if p.x > q.x || (p.x == q.x && p.y > q.y) {
            best = i;
        }
    }
    best
}
