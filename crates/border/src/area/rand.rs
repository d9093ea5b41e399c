//! Random point clouds for borders (uniform squares, jittered rings, replay tokens).
//!
//! Purpose
//! - Small, deterministic samplers for tests, benchmarks and the CLI. A draw is
//!   fully determined by its config and a replay token `(seed, index)`.
//!
//! Model
//! - `draw_cloud`: i.i.d. uniform points in an axis-aligned square.
//! - `draw_ring`: points on a circle at equally spaced angles, each jittered by
//!   less than half the spacing so their order is kept. Every point is
//!   a hull vertex, which makes hull sizes predictable.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n.max(1),
            PointCount::Uniform { min, max } => {
                let lo = min.max(1);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: PointCount,
    /// Half side length of the sampling square (radius for rings). Clamped to be positive.
    pub half_extent: f64,
    pub center: Point,
}
impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(32),
            half_extent: 1.0,
            center: Vector2::zeros(),
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
        // SplitMix64 finalizer.
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

/// Uniform points in `center ± half_extent` on both axes.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let h = cfg.half_extent.max(1e-9);
    (0..n)
        .map(|_| {
            let x = rng.gen_range(-h..=h);
            let y = rng.gen_range(-h..=h);
            cfg.center + Vector2::new(x, y)
        })
        .collect()
}

/// Points on the circle of radius `half_extent`, at least three of them.
///
/// Angles are equally spaced with jitter below half the spacing, so they stay
/// distinct and the points stay in convex position.
pub fn draw_ring(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng).max(3);
    let r = cfg.half_extent.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * 0.3 * delta;
            let th = phase + (k as f64) * delta + jitter;
            cfg.center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}
