// File: crates/plot-core/src/mapper.rs
// Summary: Data-space to surface-space transform for the plot rectangle.

use crate::axis::Axis;
use crate::geometry::{Point, Rect};
use crate::types::Insets;

/// Maps data coordinates into the plot rectangle of a `width` x `height` surface.
/// Surface y grows downward, so data `y_min` lands on the bottom edge.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateMapper {
    x_min: f64,
    x_span: f64,
    y_min: f64,
    y_span: f64,
    height: f64,
    margins: Insets,
    plot_w: f64,
    plot_h: f64,
}

impl CoordinateMapper {
    /// `None` when the margins leave no positive plot area; callers treat that as "draw nothing".
    pub fn new(x_axis: &Axis, y_axis: &Axis, width: i32, height: i32, margins: Insets) -> Option<Self> {
        Self::from_bounds(x_axis.min, x_axis.max, y_axis.min, y_axis.max, width, height, margins)
    }

    pub fn from_bounds(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        width: i32,
        height: i32,
        margins: Insets,
    ) -> Option<Self> {
        let plot_w = width as i64 - margins.hsum() as i64;
        let plot_h = height as i64 - margins.vsum() as i64;
        if plot_w <= 0 || plot_h <= 0 {
            return None;
        }
        Some(Self {
            x_min,
            x_span: span(x_min, x_max),
            y_min,
            y_span: span(y_min, y_max),
            height: height as f64,
            margins,
            plot_w: plot_w as f64,
            plot_h: plot_h as f64,
        })
    }

    #[inline]
    pub fn to_surface_x(&self, x: f64) -> f64 {
        (x - self.x_min) / self.x_span * self.plot_w + self.margins.left as f64
    }

    #[inline]
    pub fn to_surface_y(&self, y: f64) -> f64 {
        self.height - self.margins.bottom as f64 - (y - self.y_min) / self.y_span * self.plot_h
    }

    #[inline]
    pub fn to_surface(&self, x: f64, y: f64) -> Point {
        Point::new(self.to_surface_x(x), self.to_surface_y(y))
    }

    /// The plot rectangle in surface coordinates.
    pub fn plot_rect(&self) -> Rect {
        Rect::from_ltwh(self.margins.left as f64, self.margins.top as f64, self.plot_w, self.plot_h)
    }

    pub fn plot_width(&self) -> f64 { self.plot_w }
    pub fn plot_height(&self) -> f64 { self.plot_h }
}

/// Axis span with zero or non-finite spans treated as 1.
fn span(min: f64, max: f64) -> f64 {
    let s = max - min;
    if s == 0.0 || !s.is_finite() { 1.0 } else { s }
}
