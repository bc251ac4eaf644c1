//! Drawing primitives produced by parsing path data.
//!
//! Each primitive can report its bounding box, flatten itself to a list of
//! points ("segments") and be transformed in place.

use std::fmt;

use itertools::Itertools;
use log::debug;

use crate::constants::{MAX_BEZIER_STEPS, MIN_BEZIER_STEPS};
use crate::errors::{Error, Result};
use crate::geometry::{Angle, BoundingBox, Point};

/// In-place affine transformations, chainable.
///
/// Rotation is always about the origin; to rotate about some other point,
/// translate it to the origin first and back afterwards.
pub trait Transform {
    fn scale(&mut self, ratio: f64) -> &mut Self;
    fn translate(&mut self, offset: Point) -> &mut Self;
    fn rotate(&mut self, angle: Angle) -> &mut Self;
}

/// Start of a new subpath
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveTo {
    pub dest: Point,
}

impl MoveTo {
    pub fn new(dest: Point) -> Self {
        Self { dest }
    }

    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(self.dest.x, self.dest.y, self.dest.x, self.dest.y)
    }
}

impl Transform for MoveTo {
    fn scale(&mut self, ratio: f64) -> &mut Self {
        self.dest *= ratio;
        self
    }

    fn translate(&mut self, offset: Point) -> &mut Self {
        self.dest += offset;
        self
    }

    fn rotate(&mut self, angle: Angle) -> &mut Self {
        self.dest = self.dest.rot(angle);
        self
    }
}

impl fmt::Display for MoveTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveTo {}", self.dest)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }

    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    /// A line is already straight; its segments are just its endpoints.
    pub fn segments(&self) -> Vec<Point> {
        vec![self.start, self.end]
    }
}

impl Transform for Line {
    fn scale(&mut self, ratio: f64) -> &mut Self {
        self.start *= ratio;
        self.end *= ratio;
        self
    }

    fn translate(&mut self, offset: Point) -> &mut Self {
        self.start += offset;
        self.end += offset;
        self
    }

    fn rotate(&mut self, angle: Angle) -> &mut Self {
        self.start = self.start.rot(angle);
        self.end = self.end.rot(angle);
        self
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line from {} to {}", self.start, self.end)
    }
}

/// A Bezier curve defined by its control points.
///
/// The dimension is the number of control points; path data only ever
/// produces quadratic (3) and cubic (4) curves, but nothing here depends
/// on that.
#[derive(Debug, Clone, PartialEq)]
pub struct Bezier {
    points: Vec<Point>,
}

impl Bezier {
    /// Create a Bezier curve; at least a start and end point are required.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 2 {
            return Err(Error::InvalidValue(
                "Bezier control point count".to_string(),
                points.len().to_string(),
            ));
        }
        Ok(Self { points })
    }

    pub fn dimension(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn control_point(&self, index: usize) -> Result<Point> {
        self.points
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange(index, self.dimension()))
    }

    /// Rough length: the length of the control polygon, which is an
    /// upper bound of the curve length.
    pub fn rough_length(&self) -> f64 {
        self.points
            .iter()
            .tuple_windows()
            .map(|(&p1, &p2)| Line::new(p1, p2).length())
            .sum()
    }

    /// Rough bounding box: the extent of the control points, which always
    /// contains the curve.
    pub fn bbox(&self) -> BoundingBox {
        let first = self.points[0];
        self.points[1..].iter().fold(
            BoundingBox::new(first.x, first.y, first.x, first.y),
            |bb, pt| bb.combine(&BoundingBox::new(pt.x, pt.y, pt.x, pt.y)),
        )
    }

    /// Number of points the curve is flattened to for a given precision.
    ///
    /// `precision` is the minimum significant segment length; zero selects
    /// the maximum resolution.
    pub fn step_count(&self, precision: f64) -> usize {
        if precision > 0. {
            // clamp before casting; the ratio can exceed usize::MAX
            ((self.rough_length() / precision).floor() + 1.)
                .clamp(MIN_BEZIER_STEPS as f64, MAX_BEZIER_STEPS as f64) as usize
        } else {
            MAX_BEZIER_STEPS
        }
    }

    /// Polyline approximation of the curve.
    ///
    /// The curve is sampled at `t = i/n` for `i` in `0..n`; the final
    /// control point (`t = 1`) is not included.
    pub fn segments(&self, precision: f64) -> Vec<Point> {
        let n = self.step_count(precision);
        debug!("flattening Bezier{} into {n} points", self.dimension());
        (0..n).map(|i| self.point_at(i as f64 / n as f64)).collect()
    }

    /// Evaluate the curve at `t` by de Casteljau reduction: each pass
    /// interpolates adjacent pairs of points, leaving one fewer point,
    /// until only one remains.
    pub fn point_at(&self, t: f64) -> Point {
        let mut res = self.points.clone();
        for n in (2..=res.len()).rev() {
            for i in 0..n - 1 {
                res[i] = res[i].lerp(res[i + 1], t);
            }
        }
        res[0]
    }
}

impl Transform for Bezier {
    fn scale(&mut self, ratio: f64) -> &mut Self {
        self.points.iter_mut().for_each(|p| *p *= ratio);
        self
    }

    fn translate(&mut self, offset: Point) -> &mut Self {
        self.points.iter_mut().for_each(|p| *p += offset);
        self
    }

    fn rotate(&mut self, angle: Angle) -> &mut Self {
        self.points.iter_mut().for_each(|p| *p = p.rot(angle));
        self
    }
}

impl fmt::Display for Bezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bezier{} : {}",
            self.dimension(),
            self.points.iter().join(", ")
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    MoveTo(MoveTo),
    Line(Line),
    Bezier(Bezier),
}

impl Primitive {
    pub fn bbox(&self) -> BoundingBox {
        match self {
            Self::MoveTo(m) => m.bbox(),
            Self::Line(l) => l.bbox(),
            Self::Bezier(b) => b.bbox(),
        }
    }

    /// Flattened points; a `MoveTo` draws nothing.
    pub fn segments(&self, precision: f64) -> Vec<Point> {
        match self {
            Self::MoveTo(_) => Vec::new(),
            Self::Line(l) => l.segments(),
            Self::Bezier(b) => b.segments(precision),
        }
    }
}

impl Transform for Primitive {
    fn scale(&mut self, ratio: f64) -> &mut Self {
        match self {
            Self::MoveTo(m) => {
                m.scale(ratio);
            }
            Self::Line(l) => {
                l.scale(ratio);
            }
            Self::Bezier(b) => {
                b.scale(ratio);
            }
        }
        self
    }

    fn translate(&mut self, offset: Point) -> &mut Self {
        match self {
            Self::MoveTo(m) => {
                m.translate(offset);
            }
            Self::Line(l) => {
                l.translate(offset);
            }
            Self::Bezier(b) => {
                b.translate(offset);
            }
        }
        self
    }

    fn rotate(&mut self, angle: Angle) -> &mut Self {
        match self {
            Self::MoveTo(m) => {
                m.rotate(angle);
            }
            Self::Line(l) => {
                l.rotate(angle);
            }
            Self::Bezier(b) => {
                b.rotate(angle);
            }
        }
        self
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(m) => write!(f, "{m}"),
            Self::Line(l) => write!(f, "{l}"),
            Self::Bezier(b) => write!(f, "{b}"),
        }
    }
}
