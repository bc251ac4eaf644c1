mod parser;
mod simplify;
mod syntax;

use std::fmt;
use std::str::FromStr;

use crate::drawable::Shape;
use crate::errors::{Error, Result};
use crate::geometry::{Angle, BoundingBox, Point};
use crate::primitives::{Primitive, Transform};

pub use parser::parse_primitives;
pub use simplify::simplify_polyline;
pub use syntax::{PathSyntax, SvgPathSyntax};

/// An SVG `<path>`: the primitives drawn by its path data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub id: Option<String>,
    pub style: Option<String>,
    pub items: Vec<Primitive>,
}

impl Path {
    /// Parse path data (the `d` attribute) into a new `Path`.
    pub fn parse(data: &str) -> Result<Self> {
        Ok(Self {
            items: parse_primitives(data)?,
            ..Default::default()
        })
    }

    pub fn with_id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }

    pub fn with_style(mut self, style: Option<String>) -> Self {
        self.style = style;
        self
    }
}

impl Shape for Path {
    fn bbox(&self) -> Option<BoundingBox> {
        BoundingBox::union(self.items.iter().map(Primitive::bbox))
    }

    /// Flatten the path into one list of points per subpath.
    ///
    /// Each `MoveTo` starts a new subpath. Where one primitive starts at the
    /// point the previous one ended, that shared point appears only once.
    fn segments(&self, precision: f64) -> Vec<Vec<Point>> {
        let mut ret = Vec::new();
        let mut seg: Vec<Point> = Vec::new();
        for item in &self.items {
            if let Primitive::MoveTo(_) = item {
                if !seg.is_empty() {
                    ret.push(std::mem::take(&mut seg));
                }
                continue;
            }
            let mut points = item.segments(precision).into_iter().peekable();
            if seg.last().is_some() && seg.last() == points.peek() {
                points.next();
            }
            seg.extend(points);
        }
        if !seg.is_empty() {
            ret.push(seg);
        }
        ret
    }

    /// Flatten the path, then drop points aligned (within `precision`)
    /// with their neighbours.
    fn simplify(&self, precision: f64) -> Vec<Vec<Point>> {
        self.segments(precision)
            .iter()
            .map(|seg| simplify_polyline(seg, precision))
            .collect()
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl Transform for Path {
    fn scale(&mut self, ratio: f64) -> &mut Self {
        for item in &mut self.items {
            item.scale(ratio);
        }
        self
    }

    fn translate(&mut self, offset: Point) -> &mut Self {
        for item in &mut self.items {
            item.translate(offset);
        }
        self
    }

    fn rotate(&mut self, angle: Angle) -> &mut Self {
        for item in &mut self.items {
            item.rotate(angle);
        }
        self
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
