use assertables::assert_in_delta;
use svgpoly::{parse_path, Bezier, Line, Point, Shape};

use super::utils::{assert_points_near, pts};

#[test]
fn test_line_segments() {
    let line = Line::new(Point::new(1., 2.), Point::new(-3., 4.));
    assert_eq!(line.segments(), pts(&[(1., 2.), (-3., 4.)]));
}

#[test]
fn test_square_segments() {
    let path = parse_path("M0,0 L10,0 L10,10 Z").unwrap();
    assert_eq!(
        path.segments(0.),
        vec![pts(&[(0., 0.), (10., 0.), (10., 10.), (0., 0.)])]
    );
}

#[test]
fn test_quadratic_max_resolution() {
    let path = parse_path("M0,0 Q5,10 10,0").unwrap();
    let segs = path.segments(0.);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].len(), 1000);
    assert_eq!(segs[0][0], Point::new(0., 0.));
    assert!(!segs[0].contains(&Point::new(10., 0.)));
    // peak of the curve
    assert_eq!(segs[0][500], Point::new(5., 5.));
}

#[test]
fn test_step_count_bounds() {
    let curve = Bezier::new(pts(&[(0., 0.), (0., 10.), (10., 10.), (10., 0.)])).unwrap();
    assert_eq!(curve.step_count(0.), 1000);
    for precision in [0.001, 0.01, 0.1, 1., 10., 100., 1e6] {
        let n = curve.step_count(precision);
        assert!((10..=1000).contains(&n), "{n} steps at {precision}");
        assert_eq!(curve.segments(precision).len(), n);
    }
    // rough length 30
    assert_eq!(curve.step_count(1.), 31);
}

#[test]
fn test_flattening_converges() {
    let curve = Bezier::new(pts(&[(0., 0.), (0., 10.), (10., 10.), (10., 0.)])).unwrap();
    let coarse = curve.segments(10.);
    let fine = curve.segments(0.);
    assert_eq!(coarse[0], Point::new(0., 0.));
    assert_eq!(fine[0], Point::new(0., 0.));

    let end = Point::new(10., 0.);
    let coarse_gap = (end - coarse[coarse.len() - 1]).length();
    let fine_gap = (end - fine[fine.len() - 1]).length();
    assert!(fine_gap < coarse_gap);
    assert_in_delta!(fine_gap, 0., 0.05);
}

#[test]
fn test_mixed_subpaths() {
    let path = parse_path("M0,0 L1,0 Q2,0 2,1 L2,2 m1,1 v1").unwrap();
    let segs = path.segments(5.);
    assert_eq!(segs.len(), 2);
    let first = &segs[0];
    // the first line's end is shared with the curve start, so appears once;
    // the curve's own endpoint is not sampled, so the second line adds both
    assert_eq!(first.len(), 2 + 9 + 2);
    assert_eq!(first[1], Point::new(1., 0.));
    assert_ne!(first[2], Point::new(1., 0.));
    assert_eq!(first[first.len() - 2], Point::new(2., 1.));
    assert_eq!(first[first.len() - 1], Point::new(2., 2.));
    assert_points_near(&segs[1], &pts(&[(3., 3.), (3., 4.)]), 1e-12);
}
