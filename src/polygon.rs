/// Path along the perimeter of a regular (equilateral) polygon
use crate::errors::GeometryError;
use crate::vector::Vector;
use std::f64::consts::TAU;

/// One corner of the path plus the edge leaving it toward the next corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    pub position: Vector,
    /// Unit vector toward the next corner
    pub direction: Vector,
    /// `atan2(dy, dx)` of the edge toward the next corner
    pub slope_angle: f64,
    /// Edge direction rotated by 90°, pointing away from the interior
    pub normal_angle: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegularPolygonPath {
    center: Vector,
    radius: f64,
    rotation: f64,
    corners: Vec<Corner>,
}

impl RegularPolygonPath {
    /// Place `side_count` corners at `rotation + k·2π/side_count`, each `radius`
    /// away from `center`, in increasing angle order.
    pub fn new(
        center: Vector,
        radius: f64,
        side_count: usize,
        rotation: f64,
    ) -> Result<Self, GeometryError> {
        if side_count < 3 {
            return Err(GeometryError::InvalidPolygon(format!(
                "a polygon needs at least 3 sides, got {side_count}"
            )));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidPolygon(format!(
                "radius must be finite and positive, got {radius}"
            )));
        }
        if !rotation.is_finite() {
            return Err(GeometryError::InvalidPolygon(format!(
                "rotation must be finite, got {rotation}"
            )));
        }
        center.ensure_finite()?;

        let wedge = TAU / side_count as f64;
        let positions: Vec<Vector> = (0..side_count)
            .map(|k| center + Vector::from_polar(rotation + k as f64 * wedge, radius))
            .collect();

        let mut corners = Vec::with_capacity(side_count);
        for (i, &position) in positions.iter().enumerate() {
            let next = positions[(i + 1) % side_count];
            let edge = next - position;
            corners.push(Corner {
                position,
                direction: edge.normalize()?,
                slope_angle: edge.y.atan2(edge.x),
                normal_angle: (-edge.x).atan2(edge.y),
            });
        }

        Ok(RegularPolygonPath {
            center,
            radius,
            rotation,
            corners,
        })
    }

    pub fn side_count(&self) -> usize {
        self.corners.len()
    }

    pub fn center(&self) -> Vector {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn corners(&self) -> &[Corner] {
        &self.corners
    }

    /// Checked lookup. Indices past the last corner are reported, not wrapped.
    pub fn corner(&self, index: usize) -> Result<&Corner, GeometryError> {
        self.corners.get(index).ok_or_else(|| {
            log::warn!(
                "invalid corner index {index} for a {}-sided path",
                self.corners.len()
            );
            GeometryError::InvalidCornerIndex {
                index,
                side_count: self.corners.len(),
            }
        })
    }

    pub fn corner_position(&self, index: usize) -> Result<Vector, GeometryError> {
        Ok(self.corner(index)?.position)
    }

    pub fn slope_angle(&self, index: usize) -> Result<f64, GeometryError> {
        Ok(self.corner(index)?.slope_angle)
    }

    pub fn normal_angle(&self, index: usize) -> Result<f64, GeometryError> {
        Ok(self.corner(index)?.normal_angle)
    }

    /// Index of the corner after `index`, wrapping around
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.corners.len()
    }

    /// Lookup that reduces `index` modulo the side count
    pub fn wrapped_corner(&self, index: usize) -> &Corner {
        &self.corners[index % self.corners.len()]
    }

    /// Length of the edge leaving corner `index`
    pub fn edge_length(&self, index: usize) -> Result<f64, GeometryError> {
        let start = self.corner_position(index)?;
        let end = self.wrapped_corner(index + 1).position;
        Ok(start.distance_to(end))
    }

    pub fn perimeter(&self) -> f64 {
        (0..self.corners.len())
            .map(|i| {
                self.corners[i]
                    .position
                    .distance_to(self.wrapped_corner(i + 1).position)
            })
            .sum()
    }

    /// Turn between two consecutive edges
    pub fn exterior_angle(&self) -> f64 {
        TAU / self.corners.len() as f64
    }
}
