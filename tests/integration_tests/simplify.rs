use svgpoly::path::simplify_polyline;
use svgpoly::{parse_path, Point, Shape};

use super::utils::pts;

#[test]
fn test_simplify_collinear() {
    let line = pts(&[(0., 0.), (5., 0.), (10., 0.)]);
    for precision in [0., 0.5, 2., 1000.] {
        assert_eq!(
            simplify_polyline(&line, precision),
            pts(&[(0., 0.), (10., 0.)])
        );
    }
}

#[test]
fn test_simplify_endpoints() {
    let path = parse_path("M3,1 C3,8 12,8 12,1 S20,-6 20,1").unwrap();
    for precision in [0.01, 0.1, 1.] {
        let full = path.segments(precision);
        let simple = path.simplify(precision);
        assert_eq!(simple.len(), full.len());
        for (s, f) in simple.iter().zip(&full) {
            assert_eq!(s.first(), f.first());
            assert_eq!(s.last(), f.last());
            assert!(s.len() <= f.len());
        }
    }
}

#[test]
fn test_simplify_idempotent() {
    let path = parse_path("M0,0 L4,0 L8,0 L8,8 Q0,8 0,0").unwrap();
    for precision in [0.05, 0.5] {
        for seg in path.simplify(precision) {
            assert_eq!(simplify_polyline(&seg, precision), seg);
        }
    }
}

#[test]
fn test_simplify_keeps_shape() {
    let path = parse_path("M0,0 h10 v10 h-10 z").unwrap();
    assert_eq!(
        path.simplify(0.1),
        vec![pts(&[(0., 0.), (10., 0.), (10., 10.), (0., 10.), (0., 0.)])]
    );

    let path = parse_path("M0,0 L1,0.01 L2,0 L3,0.01 L4,0").unwrap();
    assert_eq!(
        path.simplify(0.1),
        vec![vec![Point::new(0., 0.), Point::new(4., 0.)]]
    );
}
