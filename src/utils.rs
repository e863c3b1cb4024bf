use crate::models::ViewBox;
use crate::vector::Vector;
use std::f64::consts::{PI, TAU};
use std::time::Duration;

/// Reduce an angle into `[0, 2π)`
pub fn normalize_angle(angle: f64) -> f64 {
    let reduced = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if reduced >= TAU {
        0.0
    } else {
        reduced
    }
}

/// Spin advanced by a wheel in `elapsed` time: half a turn per `period`
pub fn delta_angle_for_elapsed(elapsed: Duration, period: Duration) -> f64 {
    let period_ms = period.as_secs_f64() * 1000.0;
    if period_ms <= 0.0 {
        return 0.0;
    }
    elapsed.as_secs_f64() * 1000.0 * PI / period_ms
}

/// Calculate the viewbox that encompasses all points, extended by `margin`
/// on every side (used for circles drawn around a point)
pub fn calculate_viewbox(points: &[Vector], margin: f64) -> ViewBox {
    const PADDING: f64 = 40.0;

    if points.is_empty() {
        return ViewBox {
            min_x: 0.0,
            min_y: 0.0,
            width: 800.0,
            height: 600.0,
        };
    }

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for p in points.iter().filter(|p| p.is_finite()) {
        min_x = min_x.min(p.x - margin);
        min_y = min_y.min(p.y - margin);
        max_x = max_x.max(p.x + margin);
        max_y = max_y.max(p.y + margin);
    }

    if !min_x.is_finite() {
        return ViewBox {
            min_x: 0.0,
            min_y: 0.0,
            width: 800.0,
            height: 600.0,
        };
    }

    ViewBox {
        min_x: min_x - PADDING,
        min_y: min_y - PADDING,
        width: max_x - min_x + PADDING * 2.0,
        height: max_y - min_y + PADDING * 2.0,
    }
}
