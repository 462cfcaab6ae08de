use super::types::{GeomCfg, Orientation, Point};

/// Signed cross product `(b − a) × (c − a)`; twice the signed triangle area.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Turn direction of `a → b → c`.
///
/// Collinear iff `|cross| <= eps_orient · |b − a| · |c − a|`, i.e. the sine of
/// the angle at `a` is within `eps_orient`. The test is scale invariant.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point, cfg: GeomCfg) -> Orientation {
    let z = cross(a, b, c);
    let tol = cfg.eps_orient * (b - a).norm() * (c - a).norm();
    if z > tol {
        Orientation::LeftTurn
    } else if z < -tol {
        Orientation::RightTurn
    } else {
        Orientation::Collinear
    }
}

#[inline]
pub fn squared_distance(a: Point, b: Point) -> f64 {
    (b - a).norm_squared()
}

/// Both coordinates within `cfg.eps_dup` (an absolute distance).
#[inline]
pub fn is_duplicate(a: Point, b: Point, cfg: GeomCfg) -> bool {
    (a.x - b.x).abs() <= cfg.eps_dup && (a.y - b.y).abs() <= cfg.eps_dup
}

/// Drop duplicate points, keeping the first occurrence and the input order.
///
/// A point is dropped iff it duplicates an earlier point that was kept.
/// Candidates are found through an x-sorted index, so the cost stays near
/// `O(n log n)` unless many points share an x-window of width `eps_dup`.
pub fn dedup_points(points: &[Point], cfg: GeomCfg) -> Vec<Point> {
    let n = points.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| points[i].x.total_cmp(&points[j].x).then(i.cmp(&j)));
    let mut rank = vec![0usize; n];
    for (r, &i) in order.iter().enumerate() {
        rank[i] = r;
    }
    let mut kept = vec![false; n];
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let p = points[i];
        let r = rank[i];
        let seen = |j: usize| j < i && kept[j] && is_duplicate(points[j], p, cfg);
        let left = order[..r]
            .iter()
            .rev()
            .take_while(|&&j| p.x - points[j].x <= cfg.eps_dup)
            .any(|&j| seen(j));
        let right = !left
            && order[r + 1..]
                .iter()
                .take_while(|&&j| points[j].x - p.x <= cfg.eps_dup)
                .any(|&j| seen(j));
        if !left && !right {
            kept[i] = true;
            out.push(p);
        }
    }
    out
}

/// Inside-or-on-boundary test against a counter-clockwise convex hull.
///
/// Degenerate hulls are handled by shape: an empty hull contains nothing, a
/// single vertex contains its duplicates, a two-vertex hull contains the
/// closed segment.
pub fn point_in_convex_polygon(p: Point, hull: &[Point], cfg: GeomCfg) -> bool {
    match hull.len() {
        0 => false,
        1 => is_duplicate(p, hull[0], cfg),
        2 => {
            let (a, b) = (hull[0], hull[1]);
            orientation(a, b, p, cfg).is_collinear()
                && p.x >= a.x.min(b.x) - cfg.eps_dup
                && p.x <= a.x.max(b.x) + cfg.eps_dup
                && p.y >= a.y.min(b.y) - cfg.eps_dup
                && p.y <= a.y.max(b.y) + cfg.eps_dup
        }
        m => (0..m).all(|k| !orientation(hull[k], hull[(k + 1) % m], p, cfg).is_right()),
    }
}

/// Signed shoelace area; positive for counter-clockwise vertex order.
pub fn polygon_area(vertices: &[Point]) -> f64 {
    let m = vertices.len();
    if m < 3 {
        return 0.0;
    }
    let mut a = 0.0;
    for k in 0..m {
        let p = vertices[k];
        let q = vertices[(k + 1) % m];
        a += p.x * q.y - q.x * p.y;
    }
    0.5 * a
}
