use svgpoly::{extract_str, ExtractConfig, Point};

pub fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&c| c.into()).collect()
}

pub fn extract_default(input: &str) -> String {
    extract_str(input, &ExtractConfig::default()).expect("Extract failure")
}

/// Assert each point pair is within `delta` on both axes.
pub fn assert_points_near(actual: &[Point], expected: &[Point], delta: f64) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} != {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            (a.x - e.x).abs() <= delta && (a.y - e.y).abs() <= delta,
            "\n {a}\nnot near\n {e}"
        );
    }
}
