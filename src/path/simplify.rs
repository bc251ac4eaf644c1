use crate::geometry::{Angle, Point};

/// Reduce a polyline by removing points which are (within `precision`)
/// aligned with the current line.
///
/// Reduction passes are repeated until one removes nothing, so simplifying
/// an already simplified polyline returns it unchanged.
///
/// The first and last points are always kept. Polylines of fewer than three
/// points are returned unchanged.
pub fn simplify_polyline(points: &[Point], precision: f64) -> Vec<Point> {
    let mut current = reduce(points, precision);
    loop {
        // each pass keeps a subsequence of its input
        let next = reduce(&current, precision);
        if next.len() == current.len() {
            return next;
        }
        current = next;
    }
}

/// A single reduction pass.
///
/// Each candidate point is tested against the reference line through the
/// last two anchor points: rotating it into the frame where that line is
/// the x-axis makes its ordinate the perpendicular deviation. A point
/// deviating by more than `precision` becomes a new vertex; otherwise it
/// only extends the current run along the line and replaces the run's end.
fn reduce(points: &[Point], precision: f64) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut kept = vec![points[0], points[1]];
    // reference line anchors
    let mut p1 = points[0];
    let mut p2 = points[1];

    for &p3 in &points[2..] {
        // a is the reference vector
        let a = p2 - p1;
        if a.length() == 0. {
            kept.pop();
            kept.push(p3);
            p2 = p3;
            continue;
        }
        // b is the tested vector
        let b = p3 - p1;
        if b.length() == 0. {
            continue;
        }
        let theta = -Angle::of(a);
        let c = b.rot(theta);
        let tail = kept[kept.len() - 1];
        let tail_x = (tail - p1).rot(theta).x;

        // doubling back along the line is a real vertex, even if aligned
        if c.y.abs() > precision || c.x < tail_x {
            kept.push(p3);
            p1 = tail;
            p2 = p3;
        } else {
            let last = kept.len() - 1;
            kept[last] = p3;
        }
    }

    if let Some(&end) = points.last() {
        if kept.last() != Some(&end) {
            kept.push(end);
        }
    }
    kept
}
