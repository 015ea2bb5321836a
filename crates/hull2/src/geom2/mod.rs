//! Planar primitives: points, directed segments, and the orientation test.
//!
//! Purpose
//! - Keep the geometric vocabulary small: points are plain
//!   `Vector2<f64>` values with exact equality, segments are ordered point
//!   pairs, and every turn/tangent decision in the crate reduces to the one
//!   cross-product sign test in [`orient`].

pub mod rand;
mod types;

pub use types::{dist2, orient, Seg2};
