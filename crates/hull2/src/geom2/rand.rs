//! Random point clouds in 2D (seeded, replayable).
//!
//! Purpose
//! - Provide a small, deterministic sampler for the point sets used by
//!   tests, benches, and the CLI generator. Draws are parameterized by a
//!   replay token `(seed, index)` so any cloud can be reproduced exactly.
//!
//! Model
//! - `UniformSquare` fills an axis-aligned square, `Gaussian` clusters
//!   around the origin, and `CircleRim` places points on a circle — the
//!   last one stresses the merge's collinear/cocircular tie-breaks because
//!   every sampled point ends up on the hull.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Spatial distribution of a sampled cloud.
#[derive(Clone, Copy, Debug)]
pub enum CloudShape {
    /// Uniform in `[-half_extent, half_extent]²`.
    UniformSquare { half_extent: f64 },
    /// Isotropic Gaussian around the origin.
    Gaussian { sigma: f64 },
    /// On the circle of the given radius (every point is extreme).
    CircleRim { radius: f64 },
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 64,
            shape: CloudShape::UniformSquare { half_extent: 1.0 },
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points from the configured shape.
pub fn draw_points(cfg: CloudCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count)
        .map(|_| match cfg.shape {
            CloudShape::UniformSquare { half_extent } => {
                let h = half_extent.abs().max(1e-9);
                Vector2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h))
            }
            CloudShape::Gaussian { sigma } => {
                let s = sigma.abs().max(1e-9);
                // Box-Muller: two uniforms -> one standard-normal pair.
                let u1: f64 = rng.gen_range(f64::MIN_POSITIVE..1.0);
                let u2: f64 = rng.gen::<f64>();
                let r = (-2.0 * u1.ln()).sqrt();
                let th = std::f64::consts::TAU * u2;
                Vector2::new(r * th.cos() * s, r * th.sin() * s)
            }
            CloudShape::CircleRim { radius } => {
                let r = radius.abs().max(1e-9);
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                Vector2::new(th.cos() * r, th.sin() * r)
            }
        })
        .collect()
}
