use crate::bezier::BezierCurve;
use crate::color_utils::slice_colour;
use crate::intersection::Line;
use crate::models::ViewBox;
use crate::polygon::RegularPolygonPath;
use crate::rolling::RollingBody;
use crate::utils::calculate_viewbox;
use crate::vector::Vector;
use euclid::default::Point2D;
use std::f64::consts::{PI, TAU};
use std::fmt::Write;

const CURVE_SEGMENTS: usize = 64;
const MARKER_RADIUS: f64 = 3.0;

/// A Bezier curve drawn over the scene with a line and its crossings
#[derive(Debug, Clone, Copy)]
pub struct CurveOverlay<'a> {
    pub curve: &'a BezierCurve,
    pub line: &'a Line,
    pub hits: &'a [(f64, Vector)],
}

/// Everything needed to paint one frame of the wheel scene
#[derive(Debug, Clone, Copy)]
pub struct SceneSnapshot<'a> {
    pub path: &'a RegularPolygonPath,
    pub body: &'a RollingBody,
    pub slices: usize,
    pub colours: &'a [String],
    pub overlay: Option<CurveOverlay<'a>>,
}

impl SceneSnapshot<'_> {
    fn extent_points(&self) -> Vec<Vector> {
        let mut points: Vec<Vector> = self.path.corners().iter().map(|c| c.position).collect();
        // the wheel sweeps around the polygon, so frame its whole orbit
        let reach = self.path.radius() + 2.0 * self.body.radius;
        points.push(self.path.center() + Vector::new(reach, reach));
        points.push(self.path.center() - Vector::new(reach, reach));
        points.push(self.body.position);
        if let Some(overlay) = self.overlay {
            points.extend(overlay.curve.control_points());
            points.push(overlay.line.start);
            points.push(overlay.line.end);
        }
        points
    }
}

/// Render a snapshot as a standalone SVG document.
/// When `viewbox` is `None` it is fitted around the scene.
pub fn generate_svg(scene: &SceneSnapshot, viewbox: Option<ViewBox>) -> String {
    let vb = viewbox.unwrap_or_else(|| calculate_viewbox(&scene.extent_points(), 0.0));

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
        vb.width, vb.height, vb.min_x, vb.min_y, vb.width, vb.height
    );

    svg.push_str(&render_polygon(scene.path));
    svg.push_str(&render_wheel(scene.body, scene.slices, scene.colours));
    if let Some(overlay) = scene.overlay {
        svg.push_str(&render_overlay(&overlay));
    }

    svg.push_str("</svg>\n");
    svg
}

fn format_points(points: impl Iterator<Item = Point2D<f64>>) -> String {
    points
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_polygon(path: &RegularPolygonPath) -> String {
    let points = format_points(path.corners().iter().map(|c| Point2D::from(c.position)));
    format!(
        r#"  <polygon points="{}" fill="black" stroke="black" stroke-width="1"/>
"#,
        points
    )
}

fn render_wheel(body: &RollingBody, slices: usize, colours: &[String]) -> String {
    let center = body.position;
    let r = body.radius;

    if slices <= 1 {
        let fill = slice_colour(colours, 0).unwrap_or("#000000");
        return format!(
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>
"#,
            center.x, center.y, r, fill
        );
    }

    let slice_angle = TAU / slices as f64;
    let large_arc = if slice_angle > PI { 1 } else { 0 };
    let mut out = String::from("  <g class=\"wheel\">\n");

    for i in 0..slices {
        let start_angle = body.rotation + i as f64 * slice_angle;
        let start = center + Vector::from_polar(start_angle, r);
        let end = center + Vector::from_polar(start_angle + slice_angle, r);
        let fill = slice_colour(colours, i).unwrap_or("#000000");
        let _ = writeln!(
            out,
            r#"    <path d="M {} {} L {} {} A {} {} 0 {} 1 {} {} Z" fill="{}"/>"#,
            center.x, center.y, start.x, start.y, r, r, large_arc, end.x, end.y, fill
        );
    }

    out.push_str("  </g>\n");
    out
}

fn render_overlay(overlay: &CurveOverlay) -> String {
    let curve_points = format_points(
        overlay
            .curve
            .sample(CURVE_SEGMENTS)
            .into_iter()
            .map(Point2D::from),
    );
    let mut out = format!(
        r#"  <polyline points="{}" fill="none" stroke="red" stroke-width="7"/>
  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black" stroke-width="1"/>
"#,
        curve_points,
        overlay.line.start.x,
        overlay.line.start.y,
        overlay.line.end.x,
        overlay.line.end.y
    );
    for (_, point) in overlay.hits {
        let _ = writeln!(
            out,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="black"/>"#,
            point.x, point.y, MARKER_RADIUS
        );
    }
    out
}
