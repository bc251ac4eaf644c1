mod bbox;
mod point;

pub use bbox::BoundingBox;
pub use point::{Angle, Point};
