use std::{path::Path, sync::Arc};

use anyhow::Context as _;

use crate::{
    foundation::error::{CalheatError, CalheatResult},
    layout::composer::HeatmapLayout,
    render::svg::{SvgStyle, render_svg},
};

/// Largest raster edge accepted, in pixels.
pub const MAX_RASTER_DIM: u32 = 16_384;

/// Parse SVG text with system fonts available for the labels.
pub fn parse_svg(svg: &str) -> CalheatResult<usvg::Tree> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    let opts = usvg::Options {
        fontdb: Arc::new(db),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts).context("parse heat map svg")?;
    Ok(tree)
}

/// Rasterize SVG text into a straight-alpha RGBA8 image of `width × height`.
pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> CalheatResult<image::RgbaImage> {
    let tree = parse_svg(svg)?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| CalheatError::render(format!("failed to allocate {width}x{height} pixmap")))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| CalheatError::render("pixmap size does not match image buffer"))
}

/// Render a layout to pixels at its canvas size (rounded up).
#[tracing::instrument(skip_all, fields(width = layout.canvas.width, height = layout.canvas.height))]
pub fn rasterize(layout: &HeatmapLayout, style: &SvgStyle) -> CalheatResult<image::RgbaImage> {
    fn to_px(v: f64, name: &str) -> CalheatResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(CalheatError::render(format!("canvas {name} must be > 0, got {v}")));
        }
        let px = v.ceil();
        if px > f64::from(MAX_RASTER_DIM) {
            return Err(CalheatError::render(format!(
                "canvas {name} {px} exceeds {MAX_RASTER_DIM}"
            )));
        }
        Ok(px as u32)
    }

    let width = to_px(layout.canvas.width, "width")?;
    let height = to_px(layout.canvas.height, "height")?;
    rasterize_svg(&render_svg(layout, style), width, height)
}

/// Write an image as PNG, creating parent directories as needed.
pub fn write_png(img: &image::RgbaImage, path: impl AsRef<Path>) -> CalheatResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
