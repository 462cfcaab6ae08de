//! Convex hull construction with recorded steps.
//!
//! Purpose
//! - `compute_hull` is the single entry point: validate, deduplicate, run the
//!   selected algorithm, and return the hull with its complete step log.
//! - Runs are pure functions of `(points, algorithm, cfg)`; nothing is shared
//!   between invocations and nothing is drawn while computing.
//!
//! Conventions
//! - Vertices are reported counter-clockwise with no repeated closing vertex.
//! - Fewer than three distinct points, or all points collinear, produce a
//!   degenerate `HullShape` instead of an error.
//!
//! Code cross-refs: `geom2::{orientation, dedup_points}`, `steps::StepRecorder`

mod gift_wrap;
mod graham;
mod steps;

use std::fmt;
use std::str::FromStr;

use crate::error::{HullError, Result};
use crate::geom2::{
    dedup_points, is_duplicate, orientation, point_in_convex_polygon, polygon_area,
    squared_distance, GeomCfg, Point,
};
use steps::StepRecorder;

pub use steps::{Frame, HullStep, Playback, StepKind, StepLog};

/// Hull construction algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Jarvis march, `O(n·h)`.
    GiftWrapping,
    /// Graham scan, `O(n log n)`.
    AngularSweep,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::GiftWrapping, Algorithm::AngularSweep];

    /// Canonical selector string.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::GiftWrapping => "gift-wrapping",
            Algorithm::AngularSweep => "angular-sweep",
        }
    }

    /// Short label used when printing hulls.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::GiftWrapping => "Jarvis",
            Algorithm::AngularSweep => "Graham",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = HullError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        match key.as_str() {
            "gift-wrapping" | "giftwrapping" | "jarvis" | "jarvis-march" => {
                Ok(Algorithm::GiftWrapping)
            }
            "angular-sweep" | "angularsweep" | "graham" | "graham-scan" => {
                Ok(Algorithm::AngularSweep)
            }
            _ => Err(HullError::InvalidAlgorithm { name: s.to_string() }),
        }
    }
}

/// Explicit degeneracy of a hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HullShape {
    /// No input points.
    Empty,
    /// One distinct point.
    Point,
    /// Two distinct points, or every point collinear.
    Segment,
    /// A proper convex polygon (at least three vertices).
    Polygon,
}

impl HullShape {
    fn from_vertex_count(m: usize) -> Self {
        match m {
            0 => HullShape::Empty,
            1 => HullShape::Point,
            2 => HullShape::Segment,
            _ => HullShape::Polygon,
        }
    }
}

/// Final hull plus the steps that built it. Immutable once returned.
#[derive(Clone, Debug, PartialEq)]
pub struct HullResult {
    algorithm: Algorithm,
    vertices: Vec<Point>,
    steps: StepLog,
    shape: HullShape,
}

impl HullResult {
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Hull vertices, counter-clockwise, closing vertex not repeated.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn steps(&self) -> &StepLog {
        &self.steps
    }

    #[inline]
    pub fn shape(&self) -> HullShape {
        self.shape
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Fresh playback cursor at the first step.
    pub fn playback(&self) -> Playback<'_> {
        Playback::new(&self.steps, &self.vertices)
    }

    /// Boundary edges `(v_k, v_{k+1})` including the closing edge, as drawn
    /// for a closed polygon. A segment yields its single edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let m = self.vertices.len();
        let count = match m {
            0 | 1 => 0,
            2 => 1,
            _ => m,
        };
        (0..count).map(move |k| (self.vertices[k], self.vertices[(k + 1) % m]))
    }

    /// Signed area; positive for a polygon, zero for degenerate shapes.
    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices)
    }

    /// Inside-or-on-boundary test.
    pub fn contains(&self, p: Point, cfg: GeomCfg) -> bool {
        point_in_convex_polygon(p, &self.vertices, cfg)
    }

    /// Every cyclic consecutive triple turns left (vacuous for degenerate shapes).
    pub fn is_convex_ccw(&self, cfg: GeomCfg) -> bool {
        let m = self.vertices.len();
        if m < 3 {
            return true;
        }
        (0..m).all(|k| {
            let a = self.vertices[k];
            let b = self.vertices[(k + 1) % m];
            let c = self.vertices[(k + 2) % m];
            orientation(a, b, c, cfg).is_left()
        })
    }

    /// Same vertices regardless of starting vertex or direction.
    pub fn same_vertex_set(&self, other: &HullResult, cfg: GeomCfg) -> bool {
        let covers = |xs: &[Point], ys: &[Point]| {
            xs.iter()
                .all(|&x| ys.iter().any(|&y| is_duplicate(x, y, cfg)))
        };
        self.vertices.len() == other.vertices.len()
            && covers(self.vertices(), other.vertices())
            && covers(other.vertices(), self.vertices())
    }

    /// Hull sequence extended with every input point lying on a hull edge,
    /// ordered along the edge. The start vertex is not repeated.
    pub fn with_boundary_points(&self, points: &[Point], cfg: GeomCfg) -> Vec<Point> {
        if self.vertices.len() < 2 {
            return self.vertices.clone();
        }
        let distinct = dedup_points(points, cfg);
        let mut out = Vec::with_capacity(distinct.len());
        for (a, b) in self.edges() {
            out.push(a);
            let mut on_edge: Vec<Point> = distinct
                .iter()
                .copied()
                .filter(|&r| {
                    !is_duplicate(r, a, cfg)
                        && !is_duplicate(r, b, cfg)
                        && point_in_convex_polygon(r, &[a, b], cfg)
                })
                .collect();
            on_edge.sort_by(|p, q| squared_distance(a, *p).total_cmp(&squared_distance(a, *q)));
            out.extend(on_edge);
        }
        if self.shape == HullShape::Segment {
            out.push(self.vertices[1]);
        }
        out
    }
}

/// Hull of `points` with default tolerances.
pub fn compute_hull(points: &[Point], algorithm: Algorithm) -> Result<HullResult> {
    compute_hull_with(points, algorithm, GeomCfg::default())
}

/// Hull with the algorithm given by name; unknown names are
/// `HullError::InvalidAlgorithm`.
pub fn compute_hull_named(points: &[Point], name: &str) -> Result<HullResult> {
    compute_hull(points, name.parse()?)
}

/// Hull of `points` under explicit tolerances.
///
/// Errors: `HullError::NonFinitePoint` for NaN or infinite coordinates.
/// Degenerate inputs are not errors (see `HullShape`).
pub fn compute_hull_with(
    points: &[Point],
    algorithm: Algorithm,
    cfg: GeomCfg,
) -> Result<HullResult> {
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinitePoint { index });
    }
    let distinct = dedup_points(points, cfg);
    let n_distinct = distinct.len();
    let mut rec = StepRecorder::new();
    let vertices = if n_distinct < 3 {
        distinct
    } else {
        match algorithm {
            Algorithm::GiftWrapping => gift_wrap::gift_wrap(&distinct, cfg, &mut rec),
            Algorithm::AngularSweep => graham::graham_scan(&distinct, cfg, &mut rec),
        }
    };
    let steps = rec.finish();
    let shape = HullShape::from_vertex_count(vertices.len());
    tracing::debug!(
        %algorithm,
        input = points.len(),
        distinct = n_distinct,
        hull = vertices.len(),
        steps = steps.len(),
        ?shape,
        "hull computed"
    );
    Ok(HullResult {
        algorithm,
        vertices,
        steps,
        shape,
    })
}

#[cfg(test)]
mod tests;
