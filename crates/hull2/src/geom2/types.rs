//! Segment type and the cross-product orientation predicate.

use nalgebra::Vector2;

/// Directed segment from `a` to `b`.
///
/// Hull boundaries hand these out in counterclockwise traversal order; the
/// segment owns its endpoints (copies), so consumers can hold on to them
/// across merges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seg2 {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Seg2 {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self { a, b }
    }

    /// Reversed copy (`b` to `a`).
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

/// Orientation of `c` relative to the directed line `a → b`.
///
/// Returns `(b−a) × (c−a)`: positive when `c` is counterclockwise (left) of
/// `a → b`, negative when clockwise (right), zero when collinear. Exact for
/// the sign conventions used here; no epsilon is applied.
#[inline]
pub fn orient(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Squared euclidean distance. Used for collinear tie-breaks where only the
/// comparison matters.
#[inline]
pub fn dist2(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (b - a).norm_squared()
}
