pub mod bezier;
pub mod color_utils;
pub mod converter;
pub mod cubic_utils;
pub mod errors;
pub mod intersection;
pub mod models;
pub mod polygon;
pub mod renderer;
pub mod rolling;
pub mod utils;
pub mod vector;

pub use bezier::BezierCurve;
pub use converter::convert_svg_to_png;
pub use cubic_utils::{solve_cubic, CubicRoots};
pub use errors::{ConfigError, GeometryError};
pub use intersection::{intersect, intersection_points, Line};
pub use models::SceneConfig;
pub use polygon::{Corner, RegularPolygonPath};
pub use renderer::generate_svg;
pub use rolling::{MotionPhase, RollingBody, RollingContactSimulator, RollingContactState, StepReport};
pub use vector::Vector;
