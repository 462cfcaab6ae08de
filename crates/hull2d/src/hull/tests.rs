use super::gift_wrap::close_chain;
use super::{
    compute_hull, compute_hull_named, Algorithm, Frame, HullResult, HullShape, StepKind,
};
use crate::error::HullError;
use crate::geom2::{dedup_points, orientation, GeomCfg, Point};
use crate::geom2::rand::{draw_points, Bounds, Distribution, ReplayToken};
use nalgebra::vector;
use proptest::prelude::*;

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| vector![x, y]).collect()
}

fn both(points: &[Point]) -> [HullResult; 2] {
    Algorithm::ALL.map(|algo| compute_hull(points, algo).unwrap())
}

#[test]
fn degenerate_inputs_take_explicit_shapes() {
    for r in both(&[]) {
        assert!(r.is_empty());
        assert_eq!(r.shape(), HullShape::Empty);
        assert!(r.steps().is_empty());
    }
    let p = pts(&[(3.0, 4.0)]);
    for r in both(&p) {
        assert_eq!(r.vertices(), p.as_slice());
        assert_eq!(r.shape(), HullShape::Point);
    }
    let pq = pts(&[(3.0, 4.0), (-1.0, 2.0)]);
    for r in both(&pq) {
        assert_eq!(r.vertices(), pq.as_slice());
        assert_eq!(r.shape(), HullShape::Segment);
    }
}

#[test]
fn collinear_input_collapses_to_extreme_endpoints() {
    let p = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    for r in both(&p) {
        assert_eq!(r.vertices(), pts(&[(0.0, 0.0), (2.0, 2.0)]).as_slice());
        assert_eq!(r.shape(), HullShape::Segment);
        assert!(!r.steps().is_empty(), "{}", r.algorithm());
    }
}

#[test]
fn collinear_input_in_scrambled_order() {
    let p = pts(&[(2.0, 1.0), (-4.0, -2.0), (0.0, 0.0), (6.0, 3.0), (4.0, 2.0)]);
    for r in both(&p) {
        assert!(r.same_vertex_set(
            &compute_hull(&pts(&[(-4.0, -2.0), (6.0, 3.0)]), r.algorithm()).unwrap(),
            GeomCfg::default()
        ));
        assert_eq!(r.len(), 2);
    }
}

#[test]
fn square_with_interior_point() {
    let p = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (1.0, 1.0)]);
    let corners = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
    for r in both(&p) {
        assert_eq!(r.vertices(), corners.as_slice(), "{}", r.algorithm());
        assert_eq!(r.shape(), HullShape::Polygon);
        assert!((r.area() - 4.0).abs() < 1e-12);
    }
}

#[test]
fn duplicates_are_collapsed() {
    let p = pts(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
    let expected = pts(&[(0.0, 0.0), (2.0, 0.0), (1.0, 1.0)]);
    for r in both(&p) {
        assert_eq!(r.vertices(), expected.as_slice(), "{}", r.algorithm());
    }
    // all identical
    let same = pts(&[(5.0, 5.0); 4]);
    for r in both(&same) {
        assert_eq!(r.shape(), HullShape::Point);
        assert_eq!(r.vertices(), &same[..1]);
    }
}

#[test]
fn collinear_points_on_edges_are_not_vertices() {
    let p = pts(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (2.0, 1.0),
        (2.0, 2.0),
        (1.0, 2.0),
        (0.0, 2.0),
        (0.0, 1.0),
    ]);
    for r in both(&p) {
        assert_eq!(r.len(), 4, "{}", r.algorithm());
        assert!(r.is_convex_ccw(GeomCfg::default()));
    }
}

#[test]
fn gift_wrapping_commits_one_step_per_vertex() {
    let p = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (1.0, 1.0)]);
    let r = compute_hull(&p, Algorithm::GiftWrapping).unwrap();
    let steps = r.steps();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps.count_kind(StepKind::Commit), 4);
    let first = steps.get(0).unwrap();
    assert_eq!(first.hull, pts(&[(0.0, 0.0)]));
    assert_eq!(first.candidate, vector![2.0, 0.0]);
    // the closing step commits the start again
    let last = steps.get(3).unwrap();
    assert_eq!(last.hull.as_slice(), r.vertices());
    assert_eq!(last.candidate, vector![0.0, 0.0]);
}

#[test]
fn angular_sweep_records_pushes_and_pops() {
    let p = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (1.0, 1.0)]);
    let r = compute_hull(&p, Algorithm::AngularSweep).unwrap();
    let kinds: Vec<StepKind> = r.steps().iter().map(|s| s.kind).collect();
    use StepKind::{Pop, Push};
    assert_eq!(kinds, vec![Push, Push, Push, Pop, Push, Push]);
    let pop = r.steps().get(3).unwrap();
    assert_eq!(pop.hull, pts(&[(0.0, 0.0), (2.0, 0.0)]));
    assert_eq!(pop.candidate, vector![2.0, 2.0]);
    assert_eq!(r.steps().get(5).unwrap().hull.as_slice(), r.vertices());
}

#[test]
fn step_log_resets_between_runs() {
    let p = pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]);
    let a = compute_hull(&p, Algorithm::AngularSweep).unwrap();
    let b = compute_hull(&p, Algorithm::AngularSweep).unwrap();
    assert_eq!(a.steps().len(), b.steps().len());
    assert_eq!(a, b);
}

#[test]
fn playback_walks_steps_then_final_hull() {
    let p = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (1.0, 1.0)]);
    let r = compute_hull(&p, Algorithm::AngularSweep).unwrap();
    let mut pb = r.playback();
    assert_eq!(pb.frame_count(), r.steps().len() + 1);
    assert!(matches!(pb.current(), Frame::Step(s) if s.kind == StepKind::Push));
    assert!(!pb.back());
    let mut advanced = 0;
    while pb.advance() {
        advanced += 1;
    }
    assert_eq!(advanced, r.steps().len());
    assert_eq!(pb.current(), Frame::Final(r.vertices()));
    pb.rewind();
    pb.seek(2);
    assert_eq!(pb.frame(), 2);
    pb.skip_to_end();
    assert!(pb.is_finished());

    let frames: Vec<Frame<'_>> = r.playback().collect();
    assert_eq!(frames.len(), r.steps().len() + 1);
    assert_eq!(frames.last(), Some(&Frame::Final(r.vertices())));
}

#[test]
fn boundary_points_are_inserted_along_edges() {
    let p = pts(&[
        (0.0, 0.0),
        (2.0, 0.0),
        (2.0, 2.0),
        (0.0, 2.0),
        (1.0, 1.0),
        (1.0, 0.0),
        (2.0, 1.0),
    ]);
    let r = compute_hull(&p, Algorithm::GiftWrapping).unwrap();
    assert_eq!(
        r.with_boundary_points(&p, GeomCfg::default()),
        pts(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (2.0, 2.0),
            (0.0, 2.0)
        ])
    );

    let line = pts(&[(2.0, 2.0), (0.0, 0.0), (3.0, 3.0), (1.0, 1.0)]);
    let r = compute_hull(&line, Algorithm::AngularSweep).unwrap();
    assert_eq!(
        r.with_boundary_points(&line, GeomCfg::default()),
        pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)])
    );
}

#[test]
fn edges_close_the_polygon() {
    let p = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    let r = compute_hull(&p, Algorithm::GiftWrapping).unwrap();
    let edges: Vec<_> = r.edges().collect();
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[2], (vector![0.0, 1.0], vector![0.0, 0.0]));

    let seg = compute_hull(&p[..2], Algorithm::GiftWrapping).unwrap();
    assert_eq!(seg.edges().count(), 1);
}

#[test]
fn invalid_algorithm_is_rejected() {
    let p = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    let err = compute_hull_named(&p, "quickhull").unwrap_err();
    assert_eq!(
        err,
        HullError::InvalidAlgorithm {
            name: "quickhull".into()
        }
    );
    assert_eq!(
        compute_hull_named(&p, "Graham").unwrap().algorithm(),
        Algorithm::AngularSweep
    );
    assert_eq!("jarvis_march".parse::<Algorithm>(), Ok(Algorithm::GiftWrapping));
    for algo in Algorithm::ALL {
        assert_eq!(algo.to_string().parse::<Algorithm>(), Ok(algo));
    }
}

#[test]
fn non_finite_points_are_rejected() {
    let p = pts(&[(0.0, 0.0), (f64::NAN, 1.0), (0.0, 1.0)]);
    assert_eq!(
        compute_hull(&p, Algorithm::GiftWrapping).unwrap_err(),
        HullError::NonFinitePoint { index: 1 }
    );
    let p = pts(&[(0.0, 0.0), (1.0, f64::INFINITY)]);
    assert!(compute_hull(&p, Algorithm::AngularSweep).is_err());
}

#[test]
fn ring_puts_most_points_on_hull() {
    let p = draw_points(
        Distribution::Circle { noise_frac: 0.0 },
        64,
        Bounds::default(),
        ReplayToken::new(42),
    );
    let [gw, sw] = both(&p);
    assert_eq!(gw.len(), 64);
    assert!(gw.same_vertex_set(&sw, GeomCfg::default()));
}

#[test]
fn seeded_distributions_cross_validate() {
    let cfg = GeomCfg::default();
    for (k, name) in Distribution::NAMES.iter().enumerate() {
        let dist = Distribution::from_name(name).unwrap();
        let p = draw_points(dist, 300, Bounds::default(), ReplayToken { seed: 42, index: k as u64 });
        let [gw, sw] = both(&p);
        assert!(gw.same_vertex_set(&sw, cfg), "{name}");
        for r in [&gw, &sw] {
            assert!(r.is_convex_ccw(cfg), "{name} {}", r.algorithm());
            let loose = GeomCfg::with_eps(1e-9);
            assert!(p.iter().all(|&q| r.contains(q, loose)), "{name}");
        }
    }
}

#[test]
fn micro_scale_clouds_keep_full_hulls() {
    let cfg = GeomCfg::default();
    let tiny = Bounds {
        min: vector![0.0, 0.0],
        max: vector![1e-6, 1e-6],
    };
    for index in 0..50 {
        let p = draw_points(Distribution::Uniform, 37, tiny, ReplayToken { seed: 7, index });
        let [gw, sw] = both(&p);
        assert!(gw.same_vertex_set(&sw, cfg), "cloud {index}");
        for r in [&gw, &sw] {
            assert_eq!(r.shape(), HullShape::Polygon, "cloud {index}");
            assert!(r.is_convex_ccw(cfg), "cloud {index}");
            assert!(p.iter().all(|&q| r.contains(q, GeomCfg::exact())), "cloud {index}");
        }
    }
}

#[test]
fn rescaling_does_not_change_the_hull() {
    let base = pts(&[(0.0, 0.0), (2.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5), (0.0, 0.5)]);
    for scale in [1e-9, 1.0, 1e9] {
        let scaled: Vec<Point> = base.iter().map(|q| q * scale).collect();
        for r in both(&scaled) {
            let expected: Vec<Point> = pts(&[(0.0, 0.0), (2.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
                .iter()
                .map(|q| q * scale)
                .collect();
            assert_eq!(r.vertices(), expected.as_slice(), "{} at {scale}", r.algorithm());
        }
    }
}

#[test]
fn unclosed_chain_is_replaced_by_its_hull() {
    let chain = pts(&[(0.0, 0.0), (2.0, 0.0), (1.0, 0.5), (2.0, 2.0), (0.0, 2.0)]);
    assert_eq!(
        close_chain(&chain, GeomCfg::default()),
        pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])
    );
    assert_eq!(close_chain(&chain[..2], GeomCfg::default()), chain[..2].to_vec());
}

fn grid_points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-20i32..20, -20i32..20), 0..max_len).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| vector![x as f64, y as f64])
            .collect()
    })
}

fn float_points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 0..max_len)
        .prop_map(|v| v.into_iter().map(|(x, y)| vector![x, y]).collect())
}

proptest! {
    #[test]
    fn prop_every_input_point_is_covered(p in grid_points(40)) {
        let cfg = GeomCfg::default();
        for r in both(&p) {
            for q in &p {
                prop_assert!(r.contains(*q, cfg), "{} misses {:?}", r.algorithm(), q);
            }
        }
    }

    #[test]
    fn prop_algorithms_agree(p in grid_points(40)) {
        let [gw, sw] = both(&p);
        prop_assert_eq!(gw.shape(), sw.shape());
        prop_assert!(gw.same_vertex_set(&sw, GeomCfg::default()));
    }

    #[test]
    fn prop_hull_is_strictly_convex_ccw(p in grid_points(40)) {
        for r in both(&p) {
            prop_assert!(r.is_convex_ccw(GeomCfg::default()));
            if r.shape() == HullShape::Polygon {
                prop_assert!(r.area() > 0.0);
            }
        }
    }

    #[test]
    fn prop_vertices_come_from_input(p in grid_points(40)) {
        for r in both(&p) {
            for v in r.vertices() {
                prop_assert!(p.contains(v));
            }
            // no repeated vertex, in particular no closing duplicate
            let distinct = dedup_points(r.vertices(), GeomCfg::default());
            prop_assert_eq!(distinct.len(), r.len());
        }
    }

    #[test]
    fn prop_deterministic(p in grid_points(40)) {
        for algo in Algorithm::ALL {
            prop_assert_eq!(compute_hull(&p, algo).unwrap(), compute_hull(&p, algo).unwrap());
        }
    }

    #[test]
    fn prop_step_log_accounts_for_hull(p in grid_points(40)) {
        let distinct = dedup_points(&p, GeomCfg::default()).len();
        let [gw, sw] = both(&p);
        if distinct >= 3 {
            prop_assert_eq!(gw.steps().count_kind(StepKind::Commit), gw.len());
            let pushes = sw.steps().count_kind(StepKind::Push);
            let pops = sw.steps().count_kind(StepKind::Pop);
            prop_assert_eq!(pushes - pops, sw.len());
            prop_assert_eq!(pushes, distinct);
        } else {
            prop_assert!(gw.steps().is_empty() && sw.steps().is_empty());
        }
    }

    #[test]
    fn prop_float_inputs_never_turn_clockwise(p in float_points(60)) {
        let cfg = GeomCfg::default();
        let loose = GeomCfg::with_eps(1e-9);
        for r in both(&p) {
            let v = r.vertices();
            let m = v.len();
            if m >= 3 {
                for k in 0..m {
                    prop_assert!(!orientation(v[k], v[(k + 1) % m], v[(k + 2) % m], cfg).is_right());
                }
            }
            for q in &p {
                prop_assert!(r.contains(*q, loose));
            }
        }
    }
}
