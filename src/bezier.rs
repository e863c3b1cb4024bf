/// Cubic Bezier curve defined by four control points
use crate::cubic_utils::{bezier_coeffs, CubicCoefficients};
use crate::errors::GeometryError;
use crate::vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierCurve {
    points: [Vector; 4],
}

impl BezierCurve {
    /// Build a curve from start point, two control points and end point.
    /// Coordinates are taken as-is; NaN or infinity propagate into every evaluation.
    pub fn new(p0: Vector, p1: Vector, p2: Vector, p3: Vector) -> Self {
        BezierCurve {
            points: [p0, p1, p2, p3],
        }
    }

    /// Like [`BezierCurve::new`] but rejects non-finite control points
    pub fn try_new(p0: Vector, p1: Vector, p2: Vector, p3: Vector) -> Result<Self, GeometryError> {
        for p in [p0, p1, p2, p3] {
            p.ensure_finite()?;
        }
        Ok(BezierCurve::new(p0, p1, p2, p3))
    }

    /// Point on the curve at parameter `t`.
    ///
    /// The Bernstein form is valid for any real `t`; nothing is clamped.
    pub fn evaluate(&self, t: f64) -> Vector {
        let [p0, p1, p2, p3] = self.points;
        let u = 1.0 - t;
        let u2 = u * u;
        let t2 = t * t;
        p0 * (u2 * u) + p1 * (3.0 * t * u2) + p2 * (3.0 * t2 * u) + p3 * (t2 * t)
    }

    pub fn control_points(&self) -> &[Vector; 4] {
        &self.points
    }

    pub fn start_point(&self) -> Vector {
        self.points[0]
    }

    pub fn end_point(&self) -> Vector {
        self.points[3]
    }

    /// Power-basis coefficients of x(t)
    pub fn x_coefficients(&self) -> CubicCoefficients<f64> {
        let [p0, p1, p2, p3] = self.points;
        bezier_coeffs(p0.x, p1.x, p2.x, p3.x)
    }

    /// Power-basis coefficients of y(t)
    pub fn y_coefficients(&self) -> CubicCoefficients<f64> {
        let [p0, p1, p2, p3] = self.points;
        bezier_coeffs(p0.y, p1.y, p2.y, p3.y)
    }

    /// Polyline approximation with `segments + 1` evenly spaced samples in t
    pub fn sample(&self, segments: usize) -> Vec<Vector> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.evaluate(i as f64 / segments as f64))
            .collect()
    }
}
