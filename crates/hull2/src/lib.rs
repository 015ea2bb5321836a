//! Divide-and-conquer convex hulls in the plane.
//!
//! Purpose
//! - Compute the convex hull of a finite planar point set by sorting on x,
//!   splitting recursively, building ≤3-point base hulls, and stitching
//!   sub-hulls with upper/lower tangent walks.
//! - Expose the computation's intermediate geometry (sub-hulls, tangents,
//!   timings) through an injected [`observe::HullObserver`], so a rendering
//!   or teaching layer can animate the run without touching the algorithm.
//!
//! Design notes
//! - Hulls are vertex sequences in counterclockwise winding; the orientation
//!   predicate [`geom2::orient`] is the sole turn/tangent primitive.
//! - The driver sorts (x, then y) and deduplicates once up front; every
//!   merge then operates on horizontally separated sub-hulls, which is what
//!   makes the straight tangent walks correct.

pub mod error;
pub mod geom2;
pub mod hull;
pub mod observe;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::HullError;
pub use hull::{compute_hull, compute_hull_with, Hull};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::HullError;
    pub use crate::geom2::rand::{draw_points, CloudCfg, CloudShape, ReplayToken};
    pub use crate::geom2::{orient, Seg2};
    pub use crate::hull::{compute_hull, compute_hull_with, Hull};
    pub use crate::observe::{Color, ColorScheme, HullCfg, HullObserver, NoopObserver, Style};
    pub use nalgebra::Vector2 as Vec2;
}

#[cfg(feature = "parallel")]
pub use hull::compute_hull_par;
