// File: crates/plot-core/src/raster.rs
// Summary: Skia raster backend; paints a DrawPlan onto a canvas and encodes CPU surfaces to PNG.

use std::io::Cursor;

use skia_safe as skia;
use tracing::trace;

use crate::error::{PlotError, Result};
use crate::geometry::{Point, Rect};
use crate::plan::{DrawPlan, Primitive, Stroke};
use crate::text::TextShaper;
use crate::types::Rgba;

pub(crate) fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn pt(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn rect(r: Rect) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn fill_paint(c: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(c));
    paint
}

fn stroke_paint(s: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(s.width);
    paint.set_color(to_skia(s.color));
    paint
}

fn path_through(points: &[Point], close: bool) -> Option<skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut path = skia::Path::new();
    path.move_to(pt(*first));
    for p in rest {
        path.line_to(pt(*p));
    }
    if close {
        path.close();
    }
    Some(path)
}

/// Paint `plan` onto `canvas`. The canvas may belong to a window or an offscreen surface.
pub fn paint(canvas: &skia::Canvas, plan: &DrawPlan) {
    let full = skia::Rect::from_xywh(0.0, 0.0, plan.width as f32, plan.height as f32);
    canvas.draw_rect(full, &fill_paint(plan.background));

    let Some(plot) = plan.plot_rect else { return };
    let shaper = TextShaper::new();

    for prim in &plan.primitives {
        match prim {
            Primitive::Rect { rect: r, fill, stroke } => {
                if let Some(c) = fill {
                    canvas.draw_rect(rect(*r), &fill_paint(*c));
                }
                if let Some(s) = stroke {
                    canvas.draw_rect(rect(*r), &stroke_paint(s));
                }
            }
            Primitive::Line { from, to, stroke } => {
                canvas.draw_line(pt(*from), pt(*to), &stroke_paint(stroke));
            }
            Primitive::Polyline { points, stroke } => {
                if let Some(path) = path_through(points, false) {
                    let mut paint = stroke_paint(stroke);
                    paint.set_stroke_cap(skia::paint::Cap::Round);
                    paint.set_stroke_join(skia::paint::Join::Round);
                    canvas.draw_path(&path, &paint);
                }
            }
            Primitive::Polygon { points, fill, clip } => {
                let Some(path) = path_through(points, true) else { continue };
                if *clip {
                    canvas.save();
                    canvas.clip_rect(rect(plot), skia::ClipOp::Intersect, true);
                    canvas.draw_path(&path, &fill_paint(*fill));
                    canvas.restore();
                } else {
                    canvas.draw_path(&path, &fill_paint(*fill));
                }
            }
            Primitive::Circle { center, radius, fill } => {
                canvas.draw_circle(pt(*center), *radius as f32, &fill_paint(*fill));
            }
            Primitive::Text { text, at, style, anchor, baseline, rotation } => {
                shaper.draw(canvas, text, at.x as f32, at.y as f32, style, *anchor, *baseline, *rotation);
            }
        }
    }
    trace!(primitives = plan.primitives.len(), "raster paint complete");
}

/// Render `plan` on a CPU raster surface and read it back as unpremultiplied RGBA8.
/// Returns the pixels and the row stride in bytes.
pub fn render_rgba8(plan: &DrawPlan) -> Result<(Vec<u8>, usize)> {
    let (width, height) = (plan.width, plan.height);
    let surface_err = || PlotError::Surface { width, height };

    let mut surface = skia::surfaces::raster_n32_premul((width, height)).ok_or_else(surface_err)?;
    paint(surface.canvas(), plan);

    let info = skia::ImageInfo::new(
        (width, height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = width as usize * 4;
    let mut pixels = vec![0u8; stride * height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(surface_err());
    }
    Ok((pixels, stride))
}

/// Render `plan` and encode it as PNG bytes.
pub fn render_png(plan: &DrawPlan) -> Result<Vec<u8>> {
    let (pixels, _) = render_rgba8(plan)?;
    let img = image::RgbaImage::from_raw(plan.width as u32, plan.height as u32, pixels)
        .ok_or(PlotError::Surface { width: plan.width, height: plan.height })?;
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    Ok(bytes)
}
