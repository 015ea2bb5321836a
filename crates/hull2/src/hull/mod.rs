//! Divide-and-conquer convex hull.
//!
//! Purpose
//! - Turn an x-sorted, deduplicated point sequence into a convex polygon:
//!   `driver` splits and recurses, `base` handles ≤3 points, `merge`
//!   stitches two horizontally separated hulls with upper/lower tangent
//!   walks.
//!
//! Why this design
//! - The one-time sort plus midpoint split guarantee that every merge sees
//!   a left hull whose x-coordinates are all ≤ the right hull's. Under that
//!   separation the two bridging tangents can be found by monotone walks
//!   around each hull, so the merge never needs a general polygon union.
//!
//! Split for readability: `types.rs` (the `Hull` polygon), `base.rs`
//! (base-case builder), `merge.rs` (tangent walks + stitch), `driver.rs`
//! (validation, sort, recursion, observer wiring).

mod base;
mod driver;
mod merge;
mod types;

pub use driver::{compute_hull, compute_hull_with};
pub use types::Hull;

#[cfg(feature = "parallel")]
pub use driver::compute_hull_par;
