//! Seeded point-set generators (uniform, ring, clustered, grid).
//!
//! Purpose
//! - Stand in for "random-generate" in a front end, and give tests and demos
//!   reproducible inputs with very different hull sizes: a ring puts almost
//!   every point on the hull, a cluster almost none.
//!
//! Model
//! - Every distribution is laid out relative to `Bounds` (fractions of the
//!   box extent), so the same shapes appear at any scale.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point distribution shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Distribution {
    /// Uniform in the bounding box.
    Uniform,
    /// Ring around the box centre with radius 35% of the smaller extent and
    /// radial noise of ±`noise_frac` of that extent.
    Circle { noise_frac: f64 },
    /// 80% Gaussian cluster around the centre (σ = 8% of the extent, clamped
    /// into the box), 20% uniform outliers.
    Clustered,
    /// Jittered lattice spanning the middle 70% of the box.
    Grid,
}

impl Distribution {
    pub const NAMES: [&'static str; 4] = ["uniform", "circle", "clustered", "grid"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "uniform" | "random" => Some(Distribution::Uniform),
            "circle" | "ring" => Some(Distribution::Circle { noise_frac: 0.03 }),
            "clustered" | "cluster" => Some(Distribution::Clustered),
            "grid" => Some(Distribution::Grid),
            _ => None,
        }
    }
}

/// Axis-aligned sampling box `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: Point::new(0.0, 0.0),
            max: Point::new(100.0, 100.0),
        }
    }
}

impl Bounds {
    #[inline]
    fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }
    #[inline]
    fn extent(&self) -> Point {
        self.max - self.min
    }
    #[inline]
    fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
        )
    }
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

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
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw `n` points from `dist` inside `bounds`.
///
/// Notes
/// - A degenerate box (zero extent on an axis) yields points on that line.
/// - `Grid` uses a `ceil(sqrt(n))` lattice and stops after `n` points.
pub fn draw_points(dist: Distribution, n: usize, bounds: Bounds, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    match dist {
        Distribution::Uniform => (0..n).map(|_| uniform_in(&mut rng, bounds)).collect(),
        Distribution::Circle { noise_frac } => {
            let c = bounds.center();
            let ext = bounds.extent();
            let span = ext.x.min(ext.y);
            let r0 = 0.35 * span;
            let noise = noise_frac.abs() * span;
            (0..n)
                .map(|i| {
                    let th = std::f64::consts::TAU * (i as f64) / (n as f64);
                    let r = r0 + symmetric(&mut rng, noise);
                    bounds.clamp(c + Point::new(th.cos(), th.sin()) * r)
                })
                .collect()
        }
        Distribution::Clustered => {
            let c = bounds.center();
            let ext = bounds.extent();
            let sigma = Point::new(0.08 * ext.x, 0.08 * ext.y);
            let core = n * 4 / 5;
            let mut pts: Vec<Point> = (0..core)
                .map(|_| {
                    let (gx, gy) = standard_normal_pair(&mut rng);
                    bounds.clamp(c + Point::new(gx * sigma.x, gy * sigma.y))
                })
                .collect();
            pts.extend((core..n).map(|_| uniform_in(&mut rng, bounds)));
            pts
        }
        Distribution::Grid => {
            let side = ((n as f64).sqrt().ceil() as usize).max(2);
            let ext = bounds.extent();
            let origin = bounds.min + ext * 0.15;
            let step = Point::new(0.7 * ext.x, 0.7 * ext.y) / ((side - 1) as f64);
            let jitter = Point::new(0.02 * ext.x, 0.02 * ext.y);
            let mut pts = Vec::with_capacity(n);
            'outer: for i in 0..side {
                for j in 0..side {
                    if pts.len() == n {
                        break 'outer;
                    }
                    let base = origin + Point::new(step.x * i as f64, step.y * j as f64);
                    let p = base
                        + Point::new(
                            symmetric(&mut rng, jitter.x),
                            symmetric(&mut rng, jitter.y),
                        );
                    pts.push(bounds.clamp(p));
                }
            }
            pts
        }
    }
}

#[inline]
fn uniform_in<R: Rng>(rng: &mut R, b: Bounds) -> Point {
    Point::new(
        b.min.x + rng.gen::<f64>() * (b.max.x - b.min.x),
        b.min.y + rng.gen::<f64>() * (b.max.y - b.min.y),
    )
}

/// Uniform in `[-amp, amp]`.
#[inline]
fn symmetric<R: Rng>(rng: &mut R, amp: f64) -> f64 {
    (rng.gen::<f64>() * 2.0 - 1.0) * amp
}

/// Box–Muller transform: two independent N(0, 1) samples.
fn standard_normal_pair<R: Rng>(rng: &mut R) -> (f64, f64) {
    // u1 in (0, 1] keeps ln finite.
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = rng.gen::<f64>();
    let r = (-2.0 * u1.ln()).sqrt();
    let th = std::f64::consts::TAU * u2;
    (r * th.cos(), r * th.sin())
}
