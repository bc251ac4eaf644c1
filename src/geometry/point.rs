use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub};

/// A 2-D coordinate, also used as a vector from the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn coord(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Euclidean length of the vector `[origin, self]`
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Rotate the vector `[origin, self]` by `angle`
    pub fn rot(&self, angle: Angle) -> Self {
        Self::new(
            self.x * angle.cos - self.y * angle.sin,
            self.x * angle.sin + self.y * angle.cos,
        )
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: Point, t: f64) -> Self {
        *self + (other - *self) * t
    }
}

impl From<(f64, f64)> for Point {
    fn from(value: (f64, f64)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}

impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3},{:.3})", self.x, self.y)
    }
}

/// A trigonometric angle, with sine and cosine precomputed for rotations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    radians: f64,
    cos: f64,
    sin: f64,
}

impl Angle {
    pub fn from_radians(radians: f64) -> Self {
        Self {
            radians,
            cos: radians.cos(),
            sin: radians.sin(),
        }
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Direction of the vector `[origin, pt]`.
    ///
    /// A zero-length vector has no direction; it is treated as angle 0.
    pub fn of(pt: Point) -> Self {
        let len = pt.length();
        let (cos, sin) = if len == 0. {
            (1., 0.)
        } else {
            (pt.x / len, pt.y / len)
        };
        // acos loses the sign; recover it from the sine
        let mut radians = cos.clamp(-1., 1.).acos();
        if sin < 0. {
            radians = -radians;
        }
        Self { radians, cos, sin }
    }

    pub const fn radians(&self) -> f64 {
        self.radians
    }

    pub const fn cos(&self) -> f64 {
        self.cos
    }

    pub const fn sin(&self) -> f64 {
        self.sin
    }
}

impl From<Point> for Angle {
    fn from(value: Point) -> Self {
        Self::of(value)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::of(Point::new(self.cos, -self.sin))
    }
}
