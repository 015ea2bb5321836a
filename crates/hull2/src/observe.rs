//! Observer interface and run configuration.
//!
//! Purpose
//! - Decouple the hull computation from its presentation. The original form
//!   of this tool drove a GUI directly (draw hull, blink tangent, status
//!   text) through process-wide color/pause globals; here the algorithm
//!   emits fire-and-forget notifications to an injected [`HullObserver`]
//!   and all presentation knobs travel in an explicit [`HullCfg`].
//!
//! The core never blocks on the observer and ignores anything it does;
//! `step_delay` is consumed by animating observers, never by the algorithm.

use std::time::Duration;

use crate::geom2::Seg2;

/// Display colors recognized by style hints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

/// Which color to use for each kind of reported geometry.
#[derive(Clone, Copy, Debug)]
pub struct ColorScheme {
    /// Final hull.
    pub hull: Color,
    /// Intermediate sub-hulls produced during recursion.
    pub sub_hull: Color,
    /// Tangent edges found during merges.
    pub tangent: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            hull: Color::Red,
            sub_hull: Color::Green,
            tangent: Color::Blue,
        }
    }
}

/// Style hint forwarded with every geometry notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    pub color: Color,
    /// True for intermediate geometry that a renderer would erase again.
    pub transient: bool,
}

impl Style {
    #[inline]
    pub fn new(color: Color, transient: bool) -> Self {
        Self { color, transient }
    }
}

/// Run configuration passed explicitly into the top-level call.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Emit intermediate sub-hull and tangent notifications.
    pub animate: bool,
    /// Suggested pause between animation steps; consumed by observers only.
    pub step_delay: Duration,
    pub colors: ColorScheme,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            animate: false,
            step_delay: Duration::from_millis(250),
            colors: ColorScheme::default(),
        }
    }
}

/// Receiver for the computation's observable events.
///
/// All methods default to no-ops; implement only what the presentation
/// layer needs. No return values: nothing an observer does can influence
/// the algorithm.
pub trait HullObserver {
    /// A hull boundary was produced: a sub-hull during recursion
    /// (`style.transient`), or the final hull (non-transient, always
    /// reported once at the end).
    fn hull(&mut self, _edges: &[Seg2], _style: Style) {}

    /// A merge step located one of its two bridging tangents.
    fn tangent(&mut self, _edge: Seg2, _style: Style) {}

    /// Elapsed wall-clock seconds for a labeled phase ("sort", "hull").
    fn timing(&mut self, _label: &str, _seconds: f64) {}
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl HullObserver for NoopObserver {}
