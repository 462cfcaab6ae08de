//! Gift wrapping (Jarvis march), `O(n·h)`.
//!
//! Start at the lexicographically smallest point `(x, then y)`, which is
//! always a hull vertex, and repeatedly wrap to the candidate that leaves no
//! point strictly to its right. Collinear ties go to the farthest candidate,
//! so interior points of hull edges are never visited.

use super::graham::graham_scan;
use super::steps::{StepKind, StepRecorder};
use crate::geom2::{orientation, squared_distance, GeomCfg, Orientation, Point};

/// Index of the point with minimum x, ties by minimum y.
pub(crate) fn leftmost(pts: &[Point]) -> usize {
    let mut best = 0;
    for (i, p) in pts.iter().enumerate().skip(1) {
        let b = pts[best];
        if p.x < b.x || (p.x == b.x && p.y < b.y) {
            best = i;
        }
    }
    best
}

/// Counter-clockwise hull of at least three distinct points.
///
/// Records one `Commit` step per hull vertex after the start: the committed
/// vertices so far and the candidate being committed. The last step commits
/// the start again (the closing edge); the returned hull never repeats it.
pub(crate) fn gift_wrap(pts: &[Point], cfg: GeomCfg, rec: &mut StepRecorder) -> Vec<Point> {
    debug_assert!(pts.len() >= 3);
    let start = leftmost(pts);
    let mut hull: Vec<Point> = Vec::new();
    let mut visited = vec![false; pts.len()];
    let mut p = start;
    loop {
        hull.push(pts[p]);
        visited[p] = true;
        let mut q = if p == 0 { 1 } else { 0 };
        for r in 0..pts.len() {
            if r == p || r == q {
                continue;
            }
            match orientation(pts[p], pts[q], pts[r], cfg) {
                Orientation::RightTurn => q = r,
                Orientation::Collinear
                    if squared_distance(pts[p], pts[r]) > squared_distance(pts[p], pts[q]) =>
                {
                    q = r
                }
                _ => {}
            }
        }
        rec.record(StepKind::Commit, &hull, pts[q]);
        if q == start {
            break;
        }
        if visited[q] {
            // Only reachable when a loose epsilon makes the predicate inconsistent.
            tracing::warn!(
                n = pts.len(),
                chain = hull.len(),
                "gift wrapping revisited a vertex; closing the committed chain"
            );
            return close_chain(&hull, cfg);
        }
        p = q;
    }
    hull
}

/// Convex hull of a committed chain that failed to close, rotated to start
/// at its leftmost vertex.
pub(crate) fn close_chain(chain: &[Point], cfg: GeomCfg) -> Vec<Point> {
    if chain.len() < 3 {
        return chain.to_vec();
    }
    let mut hull = graham_scan(chain, cfg, &mut StepRecorder::new());
    let first = leftmost(&hull);
    hull.rotate_left(first);
    hull
}
