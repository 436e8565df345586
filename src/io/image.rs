//! PNG export of a knot layout's segments and markers
//!
//! Geometry is stroked and filled with `tiny-skia`, then handed to `image` for
//! encoding.

use image::RgbaImage;
use tiny_skia::{FillRule, LineCap, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use crate::algorithm::layout::KnotLayout;
use crate::io::configuration::{Color, MAX_IMAGE_DIMENSION, ViewParams};
use crate::io::error::{KnotError, Result, invalid_parameter};
use crate::spatial::coordinate::NodeKind;
use crate::spatial::geometry::Point;

/// Pixel size of the canvas for a layout
///
/// # Errors
///
/// Returns `KnotError::InvalidParameter` if either side exceeds
/// `MAX_IMAGE_DIMENSION`.
pub fn canvas_size(layout: &KnotLayout, view: &ViewParams) -> Result<(u32, u32)> {
    let span = |nodes: usize, padding: u32| -> u64 {
        2 * u64::from(padding)
            + nodes.saturating_sub(1) as u64 * u64::from(view.unit_length)
            + 1
    };
    let width = span(layout.composite_width(), view.x_padding);
    let height = span(layout.composite_height(), view.y_padding);

    let limit = u64::from(MAX_IMAGE_DIMENSION);
    if width > limit || height > limit {
        return Err(invalid_parameter(
            "unit_length",
            &view.unit_length,
            &format!("canvas {width}x{height} exceeds {MAX_IMAGE_DIMENSION} pixels per side"),
        ));
    }
    Ok((width as u32, height as u32))
}

/// Rasterize a layout
///
/// Visible segments are stroked in the line colour; hidden guides and anchor
/// markers are drawn only when enabled in `view`. Grid points land on pixel
/// centres.
///
/// # Errors
///
/// Returns `KnotError::InvalidParameter` for invalid view parameters or an
/// oversized canvas.
pub fn render_layout(layout: &KnotLayout, view: &ViewParams) -> Result<RgbaImage> {
    view.validate()?;
    let (width, height) = canvas_size(layout, view)?;
    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
        invalid_parameter("unit_length", &view.unit_length, &"canvas has no area")
    })?;
    pixmap.fill(skia_color(view.background));

    let to_pixel = |point: Point| -> (f32, f32) {
        (
            (f64::from(view.x_padding) + 0.5 + point.x * f64::from(view.unit_length)) as f32,
            (f64::from(view.y_padding) + 0.5 + point.y * f64::from(view.unit_length)) as f32,
        )
    };

    let segments = layout.all_segments();
    let strokes = |visible: bool| {
        let mut path = PathBuilder::new();
        for segment in segments.iter().filter(|segment| segment.visible == visible) {
            let (from_x, from_y) = to_pixel(segment.start());
            let (to_x, to_y) = to_pixel(segment.end());
            path.move_to(from_x, from_y);
            path.line_to(to_x, to_y);
        }
        path.finish()
    };

    if view.draw_guides
        && let Some(guides) = strokes(false)
    {
        stroke(&mut pixmap, &guides, 1.0, view.guide_color, view.anti_alias);
    }

    if let Some(strands) = strokes(true) {
        stroke(
            &mut pixmap,
            &strands,
            view.stroke_width as f32,
            view.line_color,
            view.anti_alias,
        );
    }

    if view.draw_markers {
        let markers = layout.markers();
        for (kind, color) in [
            (NodeKind::Primary, view.primary_color),
            (NodeKind::Secondary, view.secondary_color),
        ] {
            let mut path = PathBuilder::new();
            for marker in markers.iter().filter(|marker| marker.kind == kind) {
                let (x, y) = to_pixel(Point::at(marker.coordinate));
                path.push_circle(x, y, view.dot_radius as f32);
            }
            if let Some(dots) = path.finish() {
                pixmap.fill_path(
                    &dots,
                    &paint(color, view.anti_alias),
                    FillRule::Winding,
                    Transform::identity(),
                    None,
                );
            }
        }
    }

    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();
    RgbaImage::from_raw(width, height, pixels).ok_or_else(|| {
        invalid_parameter(
            "unit_length",
            &view.unit_length,
            &"rendered pixels do not fill the canvas",
        )
    })
}

/// Render a layout and save it as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The view parameters are invalid or the canvas is too large
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_layout_as_png(
    layout: &KnotLayout,
    view: &ViewParams,
    output_path: &std::path::Path,
) -> Result<()> {
    let img = render_layout(layout, view)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| KnotError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| KnotError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

fn skia_color([red, green, blue, alpha]: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(red, green, blue, alpha)
}

fn paint(color: Color, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(color));
    paint.anti_alias = anti_alias;
    paint
}

fn stroke(pixmap: &mut Pixmap, path: &Path, width: f32, color: Color, anti_alias: bool) {
    let style = Stroke {
        width,
        line_cap: LineCap::Round,
        ..Stroke::default()
    };
    pixmap.stroke_path(
        path,
        &paint(color, anti_alias),
        &style,
        Transform::identity(),
        None,
    );
}
