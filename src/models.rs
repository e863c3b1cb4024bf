use crate::color_utils::{parse_colour, slice_count_for, DEFAULT_WHEEL_COLOURS};
use crate::errors::ConfigError;
use crate::intersection::Line;
use crate::polygon::RegularPolygonPath;
use crate::rolling::{MotionPhase, RollingContactSimulator};
use crate::vector::Vector;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_VIEWPORT_SIZE: f64 = 500.0;
pub const DEFAULT_FRAME_RATE: f64 = 24.0;
pub const DEFAULT_WHEEL_PERIOD_MS: f64 = 3000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonConfig {
    pub sides: usize,
    pub radius: f64,
    #[serde(default)]
    pub rotation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelConfig {
    pub radius: f64,
    pub slices: usize,
    #[serde(default = "default_period_ms")]
    pub period_ms: f64,
    #[serde(default = "default_colours")]
    pub colours: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Everything needed to build and pace one wheel scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    pub viewport: Viewport,
    pub polygon: PolygonConfig,
    pub wheel: WheelConfig,
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,
}

fn default_period_ms() -> f64 {
    DEFAULT_WHEEL_PERIOD_MS
}

fn default_frame_rate() -> f64 {
    DEFAULT_FRAME_RATE
}

fn default_colours() -> Vec<String> {
    DEFAULT_WHEEL_COLOURS.iter().map(|c| c.to_string()).collect()
}

impl Default for SceneConfig {
    fn default() -> Self {
        let mut config = SceneConfig::for_viewport(
            DEFAULT_VIEWPORT_SIZE,
            DEFAULT_VIEWPORT_SIZE,
            &mut fastrand::Rng::with_seed(0),
        );
        config.polygon.sides = 6;
        config.wheel.slices = slice_count_for(8, config.wheel.colours.len());
        config
    }
}

impl SceneConfig {
    /// Lay out a scene inside a `width × height` viewport: the polygon takes
    /// 40% of the usable radius and the wheel half of what is left, with a
    /// random number of sides and slices between 3 and 11.
    pub fn for_viewport(width: f64, height: f64, rng: &mut fastrand::Rng) -> Self {
        let max_total_radius = width.min(height) / 2.0;
        let polygon_radius = 0.4 * max_total_radius;
        let wheel_radius = (max_total_radius - polygon_radius) / 2.0;
        let colours = default_colours();

        SceneConfig {
            viewport: Viewport { width, height },
            polygon: PolygonConfig {
                sides: rng.usize(3..=11),
                radius: polygon_radius,
                rotation: 0.0,
            },
            wheel: WheelConfig {
                radius: wheel_radius,
                slices: slice_count_for(rng.usize(3..=11), colours.len()),
                period_ms: DEFAULT_WHEEL_PERIOD_MS,
                colours,
            },
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }

    /// Check every field before any geometry is built
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("viewport.width", self.viewport.width)?;
        positive("viewport.height", self.viewport.height)?;
        positive("polygon.radius", self.polygon.radius)?;
        positive("wheel.radius", self.wheel.radius)?;
        positive("wheel.periodMs", self.wheel.period_ms)?;
        positive("frameRate", self.frame_rate)?;
        if !self.polygon.rotation.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "polygon.rotation",
                reason: format!("must be finite, got {}", self.polygon.rotation),
            });
        }
        if self.polygon.sides < 3 {
            return Err(ConfigError::InvalidValue {
                field: "polygon.sides",
                reason: format!("need at least 3, got {}", self.polygon.sides),
            });
        }
        if self.wheel.slices == 0 {
            return Err(ConfigError::InvalidValue {
                field: "wheel.slices",
                reason: "need at least one slice".to_string(),
            });
        }
        if self.wheel.colours.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "wheel.colours",
                reason: "need at least one colour".to_string(),
            });
        }
        for colour in &self.wheel.colours {
            parse_colour(colour)?;
        }
        self.wheel_period()?;
        self.frame_interval()?;
        Ok(())
    }

    pub fn center(&self) -> Vector {
        Vector::new(self.viewport.width / 2.0, self.viewport.height / 2.0)
    }

    pub fn build_path(&self) -> Result<RegularPolygonPath, ConfigError> {
        Ok(RegularPolygonPath::new(
            self.center(),
            self.polygon.radius,
            self.polygon.sides,
            self.polygon.rotation,
        )?)
    }

    pub fn build_simulator(&self) -> Result<RollingContactSimulator, ConfigError> {
        self.validate()?;
        Ok(RollingContactSimulator::new(
            self.build_path()?,
            self.wheel.radius,
        )?)
    }

    /// Time for one spin of `π` radians
    pub fn wheel_period(&self) -> Result<Duration, ConfigError> {
        duration_secs("wheel.periodMs", self.wheel.period_ms / 1000.0)
    }

    pub fn frame_interval(&self) -> Result<Duration, ConfigError> {
        duration_secs("frameRate", 1.0 / self.frame_rate)
    }
}

fn duration_secs(field: &'static str, secs: f64) -> Result<Duration, ConfigError> {
    Duration::try_from_secs_f64(secs).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: format!("{secs} s is not a usable duration: {e}"),
    })
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("must be finite and positive, got {value}"),
        })
    }
}

/// One simulated frame of a rolling trace
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceFrame {
    pub frame: u64,
    pub time_ms: f64,
    pub position: Vector,
    pub rotation: f64,
    pub phase: MotionPhase,
    pub corner_index: usize,
    pub contact_point: Vector,
}

/// A curve/line intersection query read from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveRequest {
    pub curve: [Vector; 4],
    pub line: Line,
}

/// Intersection answer written as JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntersectionResult {
    pub t: f64,
    pub point: Vector,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}
