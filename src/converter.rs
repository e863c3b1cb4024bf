use anyhow::Result;
use resvg::usvg::{self, Tree};
use std::path::Path;
use tiny_skia::Pixmap;

/// Rasterise an SVG document to a PNG file.
/// `background` fills the canvas first; `None` means white.
pub fn convert_svg_to_png(
    svg_content: &str,
    output_path: &Path,
    background: Option<(u8, u8, u8, u8)>,
) -> Result<()> {
    // no text in the scene, so the default (empty) font database is enough
    let options = usvg::Options::default();
    let tree = Tree::from_str(svg_content, &options)?;

    let size = tree.size();
    let width = (size.width().ceil() as u32).max(1);
    let height = (size.height().ceil() as u32).max(1);

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| anyhow::anyhow!("Failed to create {width}x{height} pixmap"))?;

    let (r, g, b, a) = background.unwrap_or((255, 255, 255, 255));
    if a > 0 {
        pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap
        .save_png(output_path)
        .map_err(|e| anyhow::anyhow!("Failed to write PNG file {output_path:?}: {e}"))?;

    Ok(())
}
