//! Rolling-contact kinematics: a circle rolling around a regular polygon.
//!
//! Along an edge the body rolls without slipping, so a spin of `θ` radians
//! moves the contact point `θ·radius` along the edge. At a corner it pivots
//! around the corner until its contact normal lines up with the next edge.

use crate::errors::GeometryError;
use crate::polygon::RegularPolygonPath;
use crate::utils::normalize_angle;
use crate::vector::Vector;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Upper bound on phase changes in one step once whole laps are removed.
/// A partial lap visits each edge and corner at most twice.
const PHASE_LIMIT_PER_SIDE: usize = 4;

/// The circle being rolled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingBody {
    pub position: Vector,
    /// Spin in radians, kept in `[0, 2π)`
    pub rotation: f64,
    pub radius: f64,
}

impl RollingBody {
    pub fn new(position: Vector, radius: f64) -> Result<Self, GeometryError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidBody(format!(
                "radius must be finite and positive, got {radius}"
            )));
        }
        Ok(RollingBody {
            position: position.ensure_finite()?,
            rotation: 0.0,
            radius,
        })
    }

    /// Replace the position; non-finite coordinates are rejected and the
    /// position stays as it was.
    pub fn set_position(&mut self, position: Vector) -> Result<(), GeometryError> {
        self.position = position.ensure_finite()?;
        Ok(())
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = normalize_angle(rotation);
    }

    pub fn spin(&mut self, delta_angle: f64) {
        self.set_rotation(self.rotation + delta_angle);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionPhase {
    Rolling,
    Pivoting,
}

/// Where the body touches the polygon and how it is moving
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingContactState {
    /// While rolling: the corner the current edge starts from.
    /// While pivoting: the corner being pivoted around.
    pub corner_index: usize,
    pub phase: MotionPhase,
    pub contact_point: Vector,
    pub pivot_angle: f64,
    /// Start of the sweep plus the exterior turn, so it lies in
    /// `[0, 2π + exterior angle)` and can pass `2π` at the last corner.
    pub pivot_end_angle: f64,
}

impl RollingContactState {
    pub fn is_rolling(&self) -> bool {
        self.phase == MotionPhase::Rolling
    }
}

/// Part of a step's angle spent in one phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConsumedSegment {
    pub phase: MotionPhase,
    pub corner_index: usize,
    pub angle: f64,
}

/// Result of a single [`RollingContactSimulator::step`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub body: RollingBody,
    pub segments: Vec<ConsumedSegment>,
    /// Complete trips around the polygon skipped before stepping
    pub laps_skipped: u64,
    pub lap_angle: f64,
}

impl StepReport {
    /// Total angle used by the step, laps included
    pub fn consumed(&self) -> f64 {
        self.laps_skipped as f64 * self.lap_angle
            + self.segments.iter().map(|s| s.angle).sum::<f64>()
    }

    /// Number of times the body changed between rolling and pivoting
    pub fn transitions(&self) -> usize {
        self.segments
            .windows(2)
            .filter(|w| w[0].phase != w[1].phase)
            .count()
    }
}

/// Advances one body around one polygon path
#[derive(Debug, Clone)]
pub struct RollingContactSimulator {
    path: RegularPolygonPath,
    body: RollingBody,
    state: RollingContactState,
}

impl RollingContactSimulator {
    /// Body of `body_radius` resting on corner 0, offset along that corner's
    /// outward normal, ready to roll along the first edge.
    pub fn new(path: RegularPolygonPath, body_radius: f64) -> Result<Self, GeometryError> {
        let (body, state) = Self::initial(&path, body_radius)?;
        Ok(RollingContactSimulator { path, body, state })
    }

    fn initial(
        path: &RegularPolygonPath,
        body_radius: f64,
    ) -> Result<(RollingBody, RollingContactState), GeometryError> {
        let corner = path.corner(0)?;
        let position = corner.position + Vector::from_polar(corner.normal_angle, body_radius);
        let body = RollingBody::new(position, body_radius)?;
        let state = RollingContactState {
            corner_index: 0,
            phase: MotionPhase::Rolling,
            contact_point: corner.position,
            pivot_angle: normalize_angle(corner.normal_angle),
            pivot_end_angle: normalize_angle(corner.normal_angle),
        };
        Ok((body, state))
    }

    /// Put the body back where [`RollingContactSimulator::new`] placed it
    pub fn reset(&mut self) -> Result<(), GeometryError> {
        let (body, state) = Self::initial(&self.path, self.body.radius)?;
        self.body = body;
        self.state = state;
        Ok(())
    }

    pub fn path(&self) -> &RegularPolygonPath {
        &self.path
    }

    pub fn body(&self) -> &RollingBody {
        &self.body
    }

    pub fn state(&self) -> &RollingContactState {
        &self.state
    }

    pub fn is_rolling(&self) -> bool {
        self.state.is_rolling()
    }

    /// Spin needed to bring the body once around the polygon
    pub fn lap_angle(&self) -> f64 {
        self.path.perimeter() / self.body.radius + TAU
    }

    /// Spin the body by `delta_angle` radians and move it accordingly.
    ///
    /// The whole angle is used up before returning, so one call can cross
    /// several corners. On error nothing is modified.
    pub fn step(&mut self, delta_angle: f64) -> Result<StepReport, GeometryError> {
        if !delta_angle.is_finite() || delta_angle < 0.0 {
            return Err(GeometryError::domain(format!(
                "delta angle must be finite and non-negative, got {delta_angle}"
            )));
        }

        let mut body = self.body;
        let mut state = self.state;
        let radius = body.radius;

        // spin is independent of rolling or pivoting
        body.spin(delta_angle);

        let lap_angle = self.lap_angle();
        let mut remaining = delta_angle;
        let mut laps_skipped = 0u64;
        if remaining > lap_angle {
            remaining %= lap_angle;
            laps_skipped = ((delta_angle - remaining) / lap_angle).round() as u64;
            log::debug!("skipping {laps_skipped} full lap(s) of {lap_angle:.4} rad");
        }

        let mut segments = Vec::new();
        let limit = PHASE_LIMIT_PER_SIDE * self.path.side_count() + 4;

        while remaining > 0.0 {
            if segments.len() >= limit {
                return Err(GeometryError::domain(format!(
                    "rolling step did not settle after {limit} phases ({remaining} rad left)"
                )));
            }

            let consumed = match state.phase {
                MotionPhase::Rolling => self.roll(&mut state, &mut body, remaining)?,
                MotionPhase::Pivoting => self.pivot(&mut state, &mut body, remaining)?,
            };
            segments.push(consumed);
            remaining -= consumed.angle;
        }

        log::trace!(
            "step {delta_angle:.6} rad -> {:?} at ({:.3}, {:.3}), corner {}",
            state.phase,
            body.position.x,
            body.position.y,
            state.corner_index
        );

        self.body = body;
        self.state = state;

        Ok(StepReport {
            body,
            segments,
            laps_skipped,
            lap_angle,
        })
    }

    fn roll(
        &self,
        state: &mut RollingContactState,
        body: &mut RollingBody,
        remaining: f64,
    ) -> Result<ConsumedSegment, GeometryError> {
        let index = state.corner_index;
        let edge = *self.path.corner(index)?;
        let next_index = self.path.next_index(index);
        let next = *self.path.corner(next_index)?;

        let distance_to_corner = state.contact_point.distance_to(next.position);
        let travel = remaining * body.radius;

        if travel <= distance_to_corner {
            state.contact_point = if travel == distance_to_corner {
                next.position
            } else {
                state.contact_point + edge.direction * travel
            };
            body.position =
                state.contact_point + Vector::from_polar(edge.normal_angle, body.radius);
            return Ok(ConsumedSegment {
                phase: MotionPhase::Rolling,
                corner_index: index,
                angle: remaining,
            });
        }

        // angle = distance / radius
        let used = distance_to_corner / body.radius;
        let (start, end) = pivot_sweep(edge.normal_angle, next.normal_angle);

        state.contact_point = next.position;
        state.pivot_angle = start;
        state.pivot_end_angle = end;
        state.corner_index = next_index;
        state.phase = MotionPhase::Pivoting;
        body.position = next.position + Vector::from_polar(start, body.radius);

        log::debug!("reached corner {next_index}, pivoting {start:.4} -> {end:.4}");

        Ok(ConsumedSegment {
            phase: MotionPhase::Rolling,
            corner_index: index,
            angle: used,
        })
    }

    fn pivot(
        &self,
        state: &mut RollingContactState,
        body: &mut RollingBody,
        remaining: f64,
    ) -> Result<ConsumedSegment, GeometryError> {
        let index = state.corner_index;
        let corner = self.path.corner_position(index)?;
        let target = state.pivot_angle + remaining;

        let used = if target < state.pivot_end_angle {
            state.pivot_angle = target;
            remaining
        } else {
            let used = (state.pivot_end_angle - state.pivot_angle).max(0.0);
            state.pivot_angle = state.pivot_end_angle;
            state.phase = MotionPhase::Rolling;
            log::debug!("finished pivot on corner {index}, rolling");
            used
        };

        body.position = corner + Vector::from_polar(state.pivot_angle, body.radius);

        Ok(ConsumedSegment {
            phase: MotionPhase::Pivoting,
            corner_index: index,
            angle: used,
        })
    }
}

/// Start and end of a pivot from one edge normal to the next.
///
/// The start is reduced into `[0, 2π)` and the end is placed at the start plus
/// the positive turn between the two, so the end is never behind the start.
pub fn pivot_sweep(from_normal: f64, to_normal: f64) -> (f64, f64) {
    let start = normalize_angle(from_normal);
    let sweep = normalize_angle(to_normal - from_normal);
    (start, start + sweep)
}
