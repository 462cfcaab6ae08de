//! Angular sweep (Graham scan), `O(n log n)`.
//!
//! The pivot is the lowest point `(y, then x)`; every other point lies in the
//! half-plane at angles `[0, π)` from it, so the orientation test alone is a
//! total order on polar angle. Equal angles are ordered by increasing
//! distance, which lets the sweep drop inner collinear points and keep the
//! outermost one on each ray.

use std::cmp::Ordering;

use super::steps::{StepKind, StepRecorder};
use crate::geom2::{orientation, squared_distance, GeomCfg, Orientation, Point};

/// Index of the point with minimum y, ties by minimum x.
pub(crate) fn lowest(pts: &[Point]) -> usize {
    let mut best = 0;
    for (i, p) in pts.iter().enumerate().skip(1) {
        let b = pts[best];
        if p.y < b.y || (p.y == b.y && p.x < b.x) {
            best = i;
        }
    }
    best
}

/// Polar-angle order around `pivot`, ties by distance (closer first).
fn polar_cmp(pivot: Point, a: Point, b: Point, cfg: GeomCfg) -> Ordering {
    match orientation(pivot, a, b, cfg) {
        Orientation::LeftTurn => Ordering::Less,
        Orientation::RightTurn => Ordering::Greater,
        Orientation::Collinear => squared_distance(pivot, a).total_cmp(&squared_distance(pivot, b)),
    }
}

/// Counter-clockwise hull of at least three distinct points, starting at the
/// pivot.
///
/// Records a `Push` for the pivot, one for each pushed point, and a `Pop` for
/// every pop; each snapshot holds the stack after the operation and the point
/// under consideration.
pub(crate) fn graham_scan(pts: &[Point], cfg: GeomCfg, rec: &mut StepRecorder) -> Vec<Point> {
    debug_assert!(pts.len() >= 3);
    let pivot_idx = lowest(pts);
    let pivot = pts[pivot_idx];
    let mut rest: Vec<Point> = pts
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != pivot_idx)
        .map(|(_, p)| *p)
        .collect();
    rest.sort_by(|a, b| polar_cmp(pivot, *a, *b, cfg));

    let mut stack: Vec<Point> = Vec::with_capacity(pts.len());
    stack.push(pivot);
    rec.record(StepKind::Push, &stack, pivot);
    stack.push(rest[0]);
    rec.record(StepKind::Push, &stack, rest[0]);

    for &p in &rest[1..] {
        while stack.len() >= 2 {
            let top = stack[stack.len() - 1];
            let below = stack[stack.len() - 2];
            if orientation(below, top, p, cfg).is_left() {
                break;
            }
            stack.pop();
            rec.record(StepKind::Pop, &stack, p);
        }
        stack.push(p);
        rec.record(StepKind::Push, &stack, p);
    }
    stack
}
