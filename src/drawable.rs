//! The drawable tree: groups, paths and circles.
//!
//! Ownership is strictly tree-shaped; each `Group` owns its children, and
//! every operation recurses through them. Nothing derived (bounding boxes,
//! segments) is stored on the tree.

use crate::geometry::{Angle, BoundingBox, Point};
use crate::path::Path;
use crate::primitives::Transform;

/// Geometry which can be measured and flattened.
pub trait Shape: Transform {
    /// Bounding box of everything drawn, or `None` if nothing is.
    fn bbox(&self) -> Option<BoundingBox>;

    /// Polyline approximation, one list of points per subpath.
    ///
    /// `precision` is the minimum significant segment length for curves;
    /// zero selects the finest resolution.
    fn segments(&self, precision: f64) -> Vec<Vec<Point>>;

    /// As `segments`, with points aligned (within `precision`) with their
    /// neighbours removed.
    fn simplify(&self, precision: f64) -> Vec<Vec<Point>>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Group(Group),
    Path(Path),
    Circle(Circle),
}

impl Shape for Drawable {
    fn bbox(&self) -> Option<BoundingBox> {
        match self {
            Self::Group(g) => g.bbox(),
            Self::Path(p) => p.bbox(),
            Self::Circle(c) => c.bbox(),
        }
    }

    fn segments(&self, precision: f64) -> Vec<Vec<Point>> {
        match self {
            Self::Group(g) => g.segments(precision),
            Self::Path(p) => p.segments(precision),
            Self::Circle(c) => c.segments(precision),
        }
    }

    fn simplify(&self, precision: f64) -> Vec<Vec<Point>> {
        match self {
            Self::Group(g) => g.simplify(precision),
            Self::Path(p) => p.simplify(precision),
            Self::Circle(c) => c.simplify(precision),
        }
    }
}

impl Transform for Drawable {
    fn scale(&mut self, ratio: f64) -> &mut Self {
        match self {
            Self::Group(g) => {
                g.scale(ratio);
            }
            Self::Path(p) => {
                p.scale(ratio);
            }
            Self::Circle(c) => {
                c.scale(ratio);
            }
        }
        self
    }

    fn translate(&mut self, offset: Point) -> &mut Self {
        match self {
            Self::Group(g) => {
                g.translate(offset);
            }
            Self::Path(p) => {
                p.translate(offset);
            }
            Self::Circle(c) => {
                c.translate(offset);
            }
        }
        self
    }

    fn rotate(&mut self, angle: Angle) -> &mut Self {
        match self {
            Self::Group(g) => {
                g.rotate(angle);
            }
            Self::Path(p) => {
                p.rotate(angle);
            }
            Self::Circle(c) => {
                c.rotate(angle);
            }
        }
        self
    }
}

impl From<Group> for Drawable {
    fn from(value: Group) -> Self {
        Self::Group(value)
    }
}

impl From<Path> for Drawable {
    fn from(value: Path) -> Self {
        Self::Path(value)
    }
}

impl From<Circle> for Drawable {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

/// An SVG `<g>` element, or any other ordered collection of drawables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub id: Option<String>,
    pub items: Vec<Drawable>,
}

impl Group {
    pub fn new(id: Option<String>) -> Self {
        Self {
            id,
            items: Vec::new(),
        }
    }

    pub fn append(&mut self, item: impl Into<Drawable>) {
        self.items.push(item.into());
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Shape for Group {
    fn bbox(&self) -> Option<BoundingBox> {
        BoundingBox::union(self.items.iter().filter_map(Shape::bbox))
    }

    fn segments(&self, precision: f64) -> Vec<Vec<Point>> {
        self.items
            .iter()
            .flat_map(|item| item.segments(precision))
            .collect()
    }

    fn simplify(&self, precision: f64) -> Vec<Vec<Point>> {
        self.items
            .iter()
            .flat_map(|item| item.simplify(precision))
            .collect()
    }
}

impl Transform for Group {
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

/// An SVG `<circle>` element.
///
/// Circles have a closed-form bounding box and are not flattened; they
/// contribute no segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub id: Option<String>,
    pub style: Option<String>,
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            id: None,
            style: None,
            center,
            radius,
        }
    }
}

impl Shape for Circle {
    fn bbox(&self) -> Option<BoundingBox> {
        let r = Point::new(self.radius, self.radius);
        let (min, max) = (self.center - r, self.center + r);
        Some(BoundingBox::new(min.x, min.y, max.x, max.y))
    }

    fn segments(&self, _precision: f64) -> Vec<Vec<Point>> {
        Vec::new()
    }

    fn simplify(&self, _precision: f64) -> Vec<Vec<Point>> {
        Vec::new()
    }
}

impl Transform for Circle {
    fn scale(&mut self, ratio: f64) -> &mut Self {
        self.center *= ratio;
        self.radius *= ratio;
        self
    }

    fn translate(&mut self, offset: Point) -> &mut Self {
        self.center += offset;
        self
    }

    fn rotate(&mut self, angle: Angle) -> &mut Self {
        self.center = self.center.rot(angle);
        self
    }
}
