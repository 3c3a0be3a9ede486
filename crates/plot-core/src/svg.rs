// File: crates/plot-core/src/svg.rs
// Summary: SVG backend; serializes a DrawPlan into a standalone SVG document.

use std::fmt::Write as _;

use crate::geometry::Point;
use crate::plan::{Baseline, DrawPlan, Primitive, Stroke, TextAnchor, TextStyle};
use crate::types::Rgba;

/// Id of the clip path covering the plot rectangle.
pub const PLOT_CLIP_ID: &str = "plotClip";

/// Serialize `plan` as an SVG document whose size and viewBox match the plan.
pub fn render(plan: &DrawPlan) -> String {
    let (w, h) = (plan.width, plan.height);
    let mut out = String::with_capacity(256 + plan.primitives.len() * 96);
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );

    if let Some(clip) = plan.plot_rect {
        let _ = writeln!(
            out,
            r#"  <defs><clipPath id="{PLOT_CLIP_ID}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath></defs>"#,
            num(clip.left),
            num(clip.top),
            num(clip.width()),
            num(clip.height()),
        );
    }

    let _ = writeln!(
        out,
        r#"  <rect x="0" y="0" width="{w}" height="{h}"{}/>"#,
        fill_attrs(plan.background)
    );

    for p in &plan.primitives {
        write_primitive(&mut out, p);
    }

    out.push_str("</svg>\n");
    out
}

fn write_primitive(out: &mut String, p: &Primitive) {
    match p {
        Primitive::Rect { rect, fill, stroke } => {
            let fill = fill.map(fill_attrs).unwrap_or_else(|| r#" fill="none""#.to_string());
            let stroke = stroke.map(|s| stroke_attrs(&s)).unwrap_or_default();
            let _ = writeln!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}"{fill}{stroke}/>"#,
                num(rect.left),
                num(rect.top),
                num(rect.width()),
                num(rect.height()),
            );
        }
        Primitive::Line { from, to, stroke } => {
            let _ = writeln!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
                num(from.x),
                num(from.y),
                num(to.x),
                num(to.y),
                stroke_attrs(stroke),
            );
        }
        Primitive::Polyline { points, stroke } => {
            let _ = writeln!(
                out,
                r#"  <path d="{}" fill="none"{} stroke-linecap="round" stroke-linejoin="round"/>"#,
                path_data(points, false),
                stroke_attrs(stroke),
            );
        }
        Primitive::Polygon { points, fill, clip } => {
            let clip = if *clip { format!(r#" clip-path="url(#{PLOT_CLIP_ID})""#) } else { String::new() };
            let _ = writeln!(out, r#"  <path d="{}"{}{clip}/>"#, path_data(points, true), fill_attrs(*fill));
        }
        Primitive::Circle { center, radius, fill } => {
            let _ = writeln!(
                out,
                r#"  <circle cx="{}" cy="{}" r="{}"{}/>"#,
                num(center.x),
                num(center.y),
                num(*radius),
                fill_attrs(*fill),
            );
        }
        Primitive::Text { text, at, style, anchor, baseline, rotation } => {
            write_text(out, text, *at, style, *anchor, *baseline, *rotation);
        }
    }
}

fn write_text(
    out: &mut String,
    text: &str,
    at: Point,
    style: &TextStyle,
    anchor: TextAnchor,
    baseline: Baseline,
    rotation: f32,
) {
    let (x, y) = (num(at.x), num(at.y));
    let _ = write!(out, r#"  <text x="{x}" y="{y}""#);
    match anchor {
        TextAnchor::Start => {}
        TextAnchor::Middle => out.push_str(r#" text-anchor="middle""#),
        TextAnchor::End => out.push_str(r#" text-anchor="end""#),
    }
    if baseline == Baseline::Middle {
        out.push_str(r#" dominant-baseline="middle""#);
    }
    let _ = write!(
        out,
        r#" font-family="{}" font-size="{}""#,
        escape_xml(&style.family),
        num(style.size as f64)
    );
    if style.bold {
        out.push_str(r#" font-weight="bold""#);
    }
    out.push_str(&fill_attrs(style.color));
    if rotation != 0.0 {
        let _ = write!(out, r#" transform="rotate({} {x} {y})""#, num(rotation as f64));
    }
    let _ = writeln!(out, ">{}</text>", escape_xml(text));
}

fn path_data(points: &[Point], close: bool) -> String {
    let mut d = String::with_capacity(points.len() * 16);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{cmd} {} {}", num(p.x), num(p.y));
    }
    if close && !points.is_empty() {
        d.push_str(" Z");
    }
    d
}

fn fill_attrs(c: Rgba) -> String {
    if c.is_opaque() {
        format!(r#" fill="{}""#, c.with_alpha(255).to_css())
    } else {
        format!(r#" fill="{}" fill-opacity="{}""#, c.with_alpha(255).to_css(), opacity(c.a))
    }
}

fn stroke_attrs(s: &Stroke) -> String {
    let mut attrs = format!(r#" stroke="{}" stroke-width="{}""#, s.color.with_alpha(255).to_css(), num(s.width as f64));
    if !s.color.is_opaque() {
        let _ = write!(attrs, r#" stroke-opacity="{}""#, opacity(s.color.a));
    }
    attrs
}

fn opacity(a: u8) -> String {
    num(a as f64 / 255.0)
}

/// Compact number text: at most three decimals, no trailing zeros, no `-0`.
fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Escape the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
