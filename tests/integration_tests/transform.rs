use assertables::assert_in_delta;
use svgpoly::{extract_str, Angle, BoundingBox, Document, ExtractConfig, Point, Shape, Transform};

use super::utils::{assert_points_near, pts};

const SHAPES: &str = r#"<svg>
  <path d="M1,1 L3,1 Q4,1 4,2"/>
  <g><circle cx="-2" cy="0" r="1"/><path d="M0,-1 V-3"/></g>
</svg>"#;

#[test]
fn test_translate_additive() {
    let (a, b) = (Point::new(3., -1.5), Point::new(-0.25, 8.));
    let mut twice: Document = SHAPES.parse().unwrap();
    twice.translate(a).translate(b);
    let mut once: Document = SHAPES.parse().unwrap();
    once.translate(a + b);
    assert_eq!(twice.bbox(), once.bbox());
    assert_eq!(twice.segments(0.1), once.segments(0.1));
}

#[test]
fn test_scale_multiplicative() {
    let mut twice: Document = SHAPES.parse().unwrap();
    twice.scale(4.).scale(0.5);
    let mut once: Document = SHAPES.parse().unwrap();
    once.scale(2.);
    assert_eq!(twice.bbox(), once.bbox());
    assert_eq!(twice.segments(0.1), once.segments(0.1));
    assert_eq!(once.bbox(), Some(BoundingBox::new(-6., -6., 8., 4.)));
}

#[test]
fn test_rotate_about_origin() {
    let mut doc: Document = r#"<svg><path d="M1,0 L2,0 L2,1"/></svg>"#.parse().unwrap();
    doc.rotate(Angle::from_degrees(90.));
    let segs = doc.segments(0.);
    assert_points_near(&segs[0], &pts(&[(0., 1.), (0., 2.), (-1., 2.)]), 1e-12);

    doc.rotate(Angle::from_degrees(-90.));
    let segs = doc.segments(0.);
    assert_points_near(&segs[0], &pts(&[(1., 0.), (2., 0.), (2., 1.)]), 1e-12);
}

#[test]
fn test_configured_transform() {
    let cfg = ExtractConfig {
        scale: 10.,
        rotate: 180.,
        translate: Point::new(100., 100.),
        bbox_only: true,
        ..Default::default()
    };
    let output = extract_str(r#"<svg><path d="M1,2 L3,4"/></svg>"#, &cfg).unwrap();
    let nums: Vec<f64> = output.split_whitespace().map(|n| n.parse().unwrap()).collect();
    assert_eq!(nums.len(), 4);
    // (10,20)-(30,40), rotated to (-30,-40)-(-10,-20), then offset
    assert_in_delta!(nums[0], 70., 1e-9);
    assert_in_delta!(nums[1], 60., 1e-9);
    assert_in_delta!(nums[2], 90., 1e-9);
    assert_in_delta!(nums[3], 80., 1e-9);
}
