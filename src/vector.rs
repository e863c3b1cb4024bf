/// 2D point/vector value type used throughout the kernel
use crate::errors::GeometryError;
use euclid::default::{Point2D, Vector2D};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    /// Vector of the given length pointing at `angle` radians
    pub fn from_polar(angle: f64, length: f64) -> Self {
        Vector::new(angle.cos() * length, angle.sin() * length)
    }

    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction.
    /// A zero-length vector has no direction and is rejected.
    pub fn normalize(self) -> Result<Vector, GeometryError> {
        let mag = self.magnitude();
        if mag == 0.0 || !mag.is_finite() {
            return Err(GeometryError::domain(format!(
                "cannot normalize vector ({}, {}) with magnitude {mag}",
                self.x, self.y
            )));
        }
        Ok(Vector::new(self.x / mag, self.y / mag))
    }

    pub fn scale(self, factor: f64) -> Self {
        Vector::new(self.x * factor, self.y * factor)
    }

    pub fn distance_to(self, other: Vector) -> f64 {
        (other - self).magnitude()
    }

    /// Angle of the vector as returned by `atan2(y, x)`
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Point at fraction `f` of the way from `self` to `other`
    pub fn lerp(self, other: Vector, f: f64) -> Self {
        self + (other - self).scale(f)
    }

    /// Uniformly random point on the segment between two points
    pub fn random_point_between(a: Vector, b: Vector, rng: &mut fastrand::Rng) -> Self {
        a.lerp(b, rng.f64())
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub(crate) fn ensure_finite(self) -> Result<Self, GeometryError> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(GeometryError::NonFiniteCoordinate { x: self.x, y: self.y })
        }
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}

impl From<Vector> for Point2D<f64> {
    fn from(v: Vector) -> Self {
        Point2D::new(v.x, v.y)
    }
}

impl From<Point2D<f64>> for Vector {
    fn from(p: Point2D<f64>) -> Self {
        Vector::new(p.x, p.y)
    }
}

impl From<Vector> for Vector2D<f64> {
    fn from(v: Vector) -> Self {
        Vector2D::new(v.x, v.y)
    }
}

impl From<Vector2D<f64>> for Vector {
    fn from(v: Vector2D<f64>) -> Self {
        Vector::new(v.x, v.y)
    }
}
