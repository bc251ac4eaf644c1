use svgpoly::{parse_path, Error, Line, MoveTo, Point, Primitive};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn line(a: Point, b: Point) -> Primitive {
    Primitive::Line(Line::new(a, b))
}

#[test]
fn test_parse_square() {
    let path = parse_path("M0,0 L10,0 L10,10 Z").unwrap();
    assert_eq!(
        path.items,
        vec![
            Primitive::MoveTo(MoveTo::new(pt(0., 0.))),
            line(pt(0., 0.), pt(10., 0.)),
            line(pt(10., 0.), pt(10., 10.)),
            line(pt(10., 10.), pt(0., 0.)),
        ]
    );
}

#[test]
fn test_parse_hv() {
    let path = parse_path("M0,0 H5 V5").unwrap();
    assert_eq!(
        path.items[1..],
        [line(pt(0., 0.), pt(5., 0.)), line(pt(5., 0.), pt(5., 5.))]
    );

    let path = parse_path("m1,1 h2 v-3").unwrap();
    assert_eq!(
        path.items[1..],
        [line(pt(1., 1.), pt(3., 1.)), line(pt(3., 1.), pt(3., -2.))]
    );
}

#[test]
fn test_parse_curves() {
    let path = parse_path("M0,0 C0,10 10,10 10,0 S20,-10 20,0").unwrap();
    let Primitive::Bezier(s) = &path.items[2] else {
        panic!("expected Bezier");
    };
    assert_eq!(s.dimension(), 4);
    // reflection of (10,10) about (10,0)
    assert_eq!(s.control_point(1).unwrap(), pt(10., -10.));

    let path = parse_path("M0,0 q5,5 10,0 t10,0").unwrap();
    let Primitive::Bezier(t) = &path.items[2] else {
        panic!("expected Bezier");
    };
    assert_eq!(t.points(), [pt(10., 0.), pt(15., -5.), pt(20., 0.)]);
}

#[test]
fn test_parse_arc_ignored() {
    let path = parse_path("M0,0 A5,5 0 0 1 10,0 l0,5").unwrap();
    assert_eq!(path.items.len(), 2);
    assert_eq!(path.items[1], line(pt(0., 0.), pt(0., 5.)));
}

#[test]
fn test_parse_close_keeps_pen() {
    let path = parse_path("M0,0 L10,0 Z l0,5").unwrap();
    assert_eq!(path.items.len(), 4);
    assert_eq!(path.items[2], line(pt(10., 0.), pt(0., 0.)));
    assert_eq!(path.items[3], line(pt(10., 0.), pt(10., 5.)));
}

#[test]
fn test_parse_spaced_sign() {
    let path = parse_path("M0,0 L- 5,5 l+ 1 - 1").unwrap();
    assert_eq!(path.items[1], line(pt(0., 0.), pt(-5., 5.)));
    assert_eq!(path.items[2], line(pt(-5., 5.), pt(-4., 4.)));
}

#[test]
fn test_parse_errors() {
    assert!(matches!(parse_path("10,10"), Err(Error::MalformedPath(_))));
    assert!(matches!(parse_path("M0,0 L5"), Err(Error::MalformedPath(_))));
    assert!(matches!(parse_path("M0,0 X5,5"), Err(Error::MalformedPath(_))));
    assert!(parse_path("").unwrap().items.is_empty());
}
