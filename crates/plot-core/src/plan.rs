// File: crates/plot-core/src/plan.rs
// Summary: Backend-agnostic layout pass producing an ordered list of draw primitives.
// Notes:
// - Both the Skia raster backend and the SVG backend consume the same plan, so
//   geometry is computed exactly once per draw.
// - Order of primitives is paint order: grid, frame and labels, then per series
//   error band / line / points, then the legend.

use tracing::{debug, trace};

use crate::chart::{Chart, RenderOptions};
use crate::format::format_tick;
use crate::geometry::{Point, Rect};
use crate::mapper::CoordinateMapper;
use crate::series::Series;
use crate::theme::Theme;
use crate::types::{Rgba, ERROR_REGION_ALPHA};

/// Length of axis tick marks, in pixels.
pub const TICK_LEN: f64 = 5.0;
/// Vertical distance between legend rows, in pixels.
pub const LEGEND_ROW_HEIGHT: f64 = 20.0;
/// Length of the legend line sample, in pixels.
pub const LEGEND_SAMPLE_LEN: f64 = 30.0;
/// Radius of the legend point sample, in pixels.
pub const LEGEND_POINT_RADIUS: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Rgba, width: f32) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    Alphabetic,
    Middle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub family: String,
    pub size: f32,
    pub bold: bool,
    pub color: Rgba,
}

/// One drawing operation in surface coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Rect { rect: Rect, fill: Option<Rgba>, stroke: Option<Stroke> },
    Line { from: Point, to: Point, stroke: Stroke },
    Polyline { points: Vec<Point>, stroke: Stroke },
    /// Closed, filled polygon. `clip` restricts painting to the plot rectangle.
    Polygon { points: Vec<Point>, fill: Rgba, clip: bool },
    Circle { center: Point, radius: f64, fill: Rgba },
    /// `rotation` is in degrees around `at`, clockwise positive (SVG convention).
    Text {
        text: String,
        at: Point,
        style: TextStyle,
        anchor: TextAnchor,
        baseline: Baseline,
        rotation: f32,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawPlan {
    pub width: i32,
    pub height: i32,
    pub background: Rgba,
    /// `None` when the margins leave no room; the plan is then background only.
    pub plot_rect: Option<Rect>,
    pub primitives: Vec<Primitive>,
}

impl DrawPlan {
    pub fn is_degenerate(&self) -> bool {
        self.plot_rect.is_none()
    }
}

/// Lay out `chart` on a `width` x `height` surface.
pub fn layout(chart: &Chart, width: i32, height: i32, opts: &RenderOptions) -> DrawPlan {
    let theme = &chart.theme;
    let mut plan = DrawPlan {
        width,
        height,
        background: theme.colors.background,
        plot_rect: None,
        primitives: Vec::new(),
    };

    let Some(mapper) = CoordinateMapper::new(&chart.x_axis, &chart.y_axis, width, height, theme.margins) else {
        debug!(width, height, "plot area is empty; drawing background only");
        return plan;
    };
    let plot = mapper.plot_rect();
    plan.plot_rect = Some(plot);

    let x_ticks = chart.x_axis.ticks_with(opts.tick_mode, opts.tick_count);
    let y_ticks = chart.y_axis.ticks_with(opts.tick_mode, opts.tick_count);

    let mut out = Vec::new();
    push_grid(&mut out, theme, &mapper, &x_ticks, &y_ticks);
    push_frame(&mut out, chart, &mapper, height, &x_ticks, &y_ticks, opts.draw_labels);

    for s in chart.series() {
        push_series(&mut out, s, &mapper);
    }

    push_legend(&mut out, chart, width, opts.draw_labels);

    debug!(primitives = out.len(), series = chart.series().len(), "layout complete");
    plan.primitives = out;
    plan
}

fn text_style(theme: &Theme, size: f32, bold: bool) -> TextStyle {
    TextStyle { family: theme.fonts.family.clone(), size, bold, color: theme.colors.foreground }
}

fn push_grid(
    out: &mut Vec<Primitive>,
    theme: &Theme,
    m: &CoordinateMapper,
    x_ticks: &[f64],
    y_ticks: &[f64],
) {
    let plot = m.plot_rect();
    let grid = theme.grid;
    // Clean ticks may sit just outside the range; keep lines inside the frame.
    let inside_x = |sx: f64| sx >= plot.left - 0.5 && sx <= plot.right + 0.5;
    let inside_y = |sy: f64| sy >= plot.top - 0.5 && sy <= plot.bottom + 0.5;

    if grid.show_minor {
        let stroke = Stroke::new(theme.colors.grid_minor, grid.minor_line_width);
        for w in x_ticks.windows(2) {
            let sx = m.to_surface_x((w[0] + w[1]) * 0.5);
            if inside_x(sx) {
                out.push(Primitive::Line { from: Point::new(sx, plot.top), to: Point::new(sx, plot.bottom), stroke });
            }
        }
        for w in y_ticks.windows(2) {
            let sy = m.to_surface_y((w[0] + w[1]) * 0.5);
            if inside_y(sy) {
                out.push(Primitive::Line { from: Point::new(plot.left, sy), to: Point::new(plot.right, sy), stroke });
            }
        }
    }

    if grid.show_major {
        let stroke = Stroke::new(theme.colors.grid_major, grid.major_line_width);
        for &tx in x_ticks {
            let sx = m.to_surface_x(tx);
            if inside_x(sx) {
                out.push(Primitive::Line { from: Point::new(sx, plot.top), to: Point::new(sx, plot.bottom), stroke });
            }
        }
        for &ty in y_ticks {
            let sy = m.to_surface_y(ty);
            if inside_y(sy) {
                out.push(Primitive::Line { from: Point::new(plot.left, sy), to: Point::new(plot.right, sy), stroke });
            }
        }
    }
}

fn push_frame(
    out: &mut Vec<Primitive>,
    chart: &Chart,
    m: &CoordinateMapper,
    height: i32,
    x_ticks: &[f64],
    y_ticks: &[f64],
    labels: bool,
) {
    let theme = &chart.theme;
    let plot = m.plot_rect();
    let height = height as f64;

    out.push(Primitive::Rect { rect: plot, fill: None, stroke: Some(Stroke::new(theme.colors.axis_border, 1.0)) });

    let tick_stroke = Stroke::new(theme.colors.foreground, 1.0);
    let tick_font = text_style(theme, theme.fonts.tick_size, theme.fonts.tick_bold);

    for &tx in x_ticks {
        let sx = m.to_surface_x(tx);
        out.push(Primitive::Line {
            from: Point::new(sx, plot.bottom),
            to: Point::new(sx, plot.bottom + TICK_LEN),
            stroke: tick_stroke,
        });
        if labels {
            out.push(Primitive::Text {
                text: format_tick(tx, &theme.axis_format),
                at: Point::new(sx, plot.bottom + 20.0),
                style: tick_font.clone(),
                anchor: TextAnchor::Middle,
                baseline: Baseline::Alphabetic,
                rotation: 0.0,
            });
        }
    }

    for &ty in y_ticks {
        let sy = m.to_surface_y(ty);
        out.push(Primitive::Line {
            from: Point::new(plot.left - TICK_LEN, sy),
            to: Point::new(plot.left, sy),
            stroke: tick_stroke,
        });
        if labels {
            out.push(Primitive::Text {
                text: format_tick(ty, &theme.axis_format),
                at: Point::new(plot.left - 10.0, sy),
                style: tick_font.clone(),
                anchor: TextAnchor::End,
                baseline: Baseline::Middle,
                rotation: 0.0,
            });
        }
    }

    if !labels {
        return;
    }

    let label_font = text_style(theme, theme.fonts.label_size, theme.fonts.label_bold);
    if !chart.xlabel.is_empty() {
        out.push(Primitive::Text {
            text: chart.xlabel.clone(),
            at: Point::new(plot.center_x(), height - 20.0),
            style: label_font.clone(),
            anchor: TextAnchor::Middle,
            baseline: Baseline::Alphabetic,
            rotation: 0.0,
        });
    }
    if !chart.ylabel.is_empty() {
        out.push(Primitive::Text {
            text: chart.ylabel.clone(),
            at: Point::new(20.0, height / 2.0),
            style: label_font,
            anchor: TextAnchor::Middle,
            baseline: Baseline::Alphabetic,
            rotation: -90.0,
        });
    }
    if !chart.title.is_empty() {
        out.push(Primitive::Text {
            text: chart.title.clone(),
            at: Point::new(plot.center_x(), 30.0),
            style: text_style(theme, theme.fonts.title_size, theme.fonts.title_bold),
            anchor: TextAnchor::Middle,
            baseline: Baseline::Alphabetic,
            rotation: 0.0,
        });
    }
}

fn push_series(out: &mut Vec<Primitive>, s: &Series, m: &CoordinateMapper) {
    if s.is_empty() {
        trace!(series = s.name(), "empty series skipped");
        return;
    }
    let color = s.style.resolved_color();
    let xs = s.x();
    let ys = s.y();

    if let Some((lower, upper)) = s.error_region() {
        let mut points = Vec::with_capacity(xs.len() * 2);
        points.extend(xs.iter().zip(upper).map(|(&x, &y)| m.to_surface(x, y)));
        points.extend(xs.iter().zip(lower).rev().map(|(&x, &y)| m.to_surface(x, y)));
        out.push(Primitive::Polygon { points, fill: color.with_alpha(ERROR_REGION_ALPHA), clip: true });
    }

    if s.style.line_width > 0.0 && xs.len() >= 2 {
        let points = xs.iter().zip(ys).map(|(&x, &y)| m.to_surface(x, y)).collect();
        out.push(Primitive::Polyline { points, stroke: Stroke::new(color, s.style.line_width) });
    }

    if s.style.show_points {
        let radius = s.style.point_radius as f64;
        for (&x, &y) in xs.iter().zip(ys) {
            out.push(Primitive::Circle { center: m.to_surface(x, y), radius, fill: color });
        }
    }
}

fn push_legend(out: &mut Vec<Primitive>, chart: &Chart, width: i32, labels: bool) {
    let series = chart.series();
    if series.is_empty() {
        return;
    }
    let theme = &chart.theme;
    let legend_x = width as f64 - theme.margins.right as f64 + 20.0;
    let legend_y = theme.margins.top as f64 + 30.0;
    let font = text_style(theme, theme.fonts.legend_size, theme.fonts.legend_bold);

    if labels {
        out.push(Primitive::Text {
            text: "Legend".to_string(),
            at: Point::new(legend_x, legend_y - 10.0),
            style: font.clone(),
            anchor: TextAnchor::Start,
            baseline: Baseline::Alphabetic,
            rotation: 0.0,
        });
    }

    for (i, s) in series.iter().enumerate() {
        let row = legend_y + i as f64 * LEGEND_ROW_HEIGHT - 5.0;
        let color = s.style.resolved_color();
        if s.style.line_width > 0.0 {
            out.push(Primitive::Line {
                from: Point::new(legend_x, row),
                to: Point::new(legend_x + LEGEND_SAMPLE_LEN, row),
                stroke: Stroke::new(color, s.style.line_width),
            });
        }
        if s.style.show_points {
            out.push(Primitive::Circle {
                center: Point::new(legend_x + LEGEND_SAMPLE_LEN * 0.5, row),
                radius: LEGEND_POINT_RADIUS,
                fill: color,
            });
        }
        if labels {
            out.push(Primitive::Text {
                text: s.name().to_string(),
                at: Point::new(legend_x + LEGEND_SAMPLE_LEN + 10.0, row),
                style: font.clone(),
                anchor: TextAnchor::Start,
                baseline: Baseline::Middle,
                rotation: 0.0,
            });
        }
    }
}
