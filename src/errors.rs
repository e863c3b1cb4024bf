//! Error types shared by the geometry kernel and the scene configuration

/// Everything the kernel can report instead of producing NaN or panicking
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A precondition on the numeric input does not hold
    #[error("domain error: {0}")]
    Domain(String),
    /// Corner lookup outside `0..side_count`
    #[error("invalid corner index {index} (polygon has {side_count} corners)")]
    InvalidCornerIndex { index: usize, side_count: usize },
    /// Polygon parameters that cannot describe a regular polygon
    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),
    /// Rolling body parameters out of range
    #[error("invalid rolling body: {0}")]
    InvalidBody(String),
    /// A coordinate was NaN or infinite
    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
}

impl GeometryError {
    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        GeometryError::Domain(msg.into())
    }
}

/// Problems found while validating a scene configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid colour {value:?}: {reason}")]
    InvalidColour { value: String, reason: String },
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
