//! Analytic intersection of a cubic Bezier curve with a straight line.
//!
//! The line is turned into its implicit form `A·x + B·y + C = 0`, the curve's
//! x(t) and y(t) are substituted in, and the resulting cubic in `t` is handed
//! to [`solve_cubic`].

use crate::bezier::BezierCurve;
use crate::cubic_utils::solve_cubic;
use crate::errors::GeometryError;
use crate::vector::Vector;
use serde::{Deserialize, Serialize};

/// Line through two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Vector,
    pub end: Vector,
}

impl Line {
    pub fn new(start: Vector, end: Vector) -> Self {
        Line { start, end }
    }

    /// `(A, B, C)` of `A·x + B·y + C = 0`
    ///
    /// From `(x - x1) / (x2 - x1) = (y - y1) / (y2 - y1)`:
    /// A = y2-y1, B = x1-x2, C = x1·(y1-y2) + y1·(x2-x1)
    pub fn implicit_coefficients(&self) -> (f64, f64, f64) {
        let (x1, y1) = (self.start.x, self.start.y);
        let (x2, y2) = (self.end.x, self.end.y);
        let a = y2 - y1;
        let b = x1 - x2;
        let c = x1 * (y1 - y2) + y1 * (x2 - x1);
        (a, b, c)
    }
}

/// Parameters `t ∈ [0, 1]` at which `curve` crosses `line`.
///
/// Values are positions along the curve, not points; pair them with
/// [`BezierCurve::evaluate`] or use [`intersection_points`]. The order is
/// whatever the solver produced.
///
/// When the substituted cubic loses its t³ term (for example a zero-length
/// line) the solver's [`GeometryError::Domain`] is returned unchanged.
pub fn intersect(curve: &BezierCurve, line: &Line) -> Result<Vec<f64>, GeometryError> {
    let (a, b, c) = line.implicit_coefficients();
    let bx = curve.x_coefficients();
    let by = curve.y_coefficients();

    let p3 = a * bx[0] + b * by[0];
    let p2 = a * bx[1] + b * by[1];
    let p1 = a * bx[2] + b * by[2];
    let p0 = a * bx[3] + b * by[3] + c;

    let roots = solve_cubic(p3, p2, p1, p0)?;
    let ts = roots.to_vec();
    log::trace!("curve/line intersection: {} root(s) in [0, 1]: {ts:?}", ts.len());
    Ok(ts)
}

/// Intersection points as `(t, point)` pairs
pub fn intersection_points(
    curve: &BezierCurve,
    line: &Line,
) -> Result<Vec<(f64, Vector)>, GeometryError> {
    Ok(intersect(curve, line)?
        .into_iter()
        .map(|t| (t, curve.evaluate(t)))
        .collect())
}
