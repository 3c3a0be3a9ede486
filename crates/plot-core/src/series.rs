// File: crates/plot-core/src/series.rs
// Summary: Series model (named x/y data with optional error bounds) and per-series style.
// Notes:
// - Numeric buffers are owned by the series. Their contents may be overwritten
//   between frames (animation), but their lengths never change after construction.

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};
use crate::types::Rgba;

/// Visual style of a series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// `None` asks the chart to assign the next palette color when the series is added.
    pub color: Option<Rgba>,
    /// Stroke width; `0.0` suppresses the connecting line.
    pub line_width: f32,
    pub show_points: bool,
    pub point_radius: u32,
}

impl Default for Style {
    fn default() -> Self {
        Self { color: None, line_width: 2.0, show_points: false, point_radius: 3 }
    }
}

impl Style {
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width.max(0.0);
        self
    }

    pub fn with_points(mut self, radius: u32) -> Self {
        self.show_points = true;
        self.point_radius = radius;
        self
    }

    /// Scatter style: markers only, no connecting line.
    pub fn scatter(radius: u32) -> Self {
        Self::default().with_line_width(0.0).with_points(radius)
    }

    /// Resolved color; an unattached series with no color draws in blue.
    pub fn resolved_color(&self) -> Rgba {
        self.color.unwrap_or(Rgba::BLUE)
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    name: String,
    x: Vec<f64>,
    y: Vec<f64>,
    pub style: Style,
    y_lower: Option<Vec<f64>>,
    y_upper: Option<Vec<f64>>,
}

impl Series {
    /// Build a series, rejecting `x`/`y` of different lengths.
    pub fn new(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        let name = name.into();
        check_len(&name, "y", x.len(), y.len())?;
        Ok(Self { name, x, y, style: Style::default(), y_lower: None, y_upper: None })
    }

    /// Build a series with lower/upper bounds around `y`.
    pub fn with_bounds(
        name: impl Into<String>,
        x: Vec<f64>,
        y: Vec<f64>,
        y_lower: Vec<f64>,
        y_upper: Vec<f64>,
    ) -> Result<Self> {
        Self::new(name, x, y)?.bounds(Some(y_lower), Some(y_upper))
    }

    /// Attach (or clear) bound sequences. Each present bound must match `x` in length.
    pub fn bounds(mut self, y_lower: Option<Vec<f64>>, y_upper: Option<Vec<f64>>) -> Result<Self> {
        if let Some(lo) = &y_lower {
            check_len(&self.name, "y_lower", self.x.len(), lo.len())?;
        }
        if let Some(hi) = &y_upper {
            check_len(&self.name, "y_upper", self.x.len(), hi.len())?;
        }
        self.y_lower = y_lower;
        self.y_upper = y_upper;
        Ok(self)
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn x(&self) -> &[f64] { &self.x }
    pub fn y(&self) -> &[f64] { &self.y }
    pub fn y_lower(&self) -> Option<&[f64]> { self.y_lower.as_deref() }
    pub fn y_upper(&self) -> Option<&[f64]> { self.y_upper.as_deref() }

    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// True only when both bounds are present.
    pub fn has_error_region(&self) -> bool {
        self.y_lower.is_some() && self.y_upper.is_some()
    }

    /// Both bounds, when the series has an error region.
    pub fn error_region(&self) -> Option<(&[f64], &[f64])> {
        match (&self.y_lower, &self.y_upper) {
            (Some(lo), Some(hi)) => Some((lo.as_slice(), hi.as_slice())),
            _ => None,
        }
    }

    // In-place mutation. Slices cannot change length, so the invariant holds.

    pub fn x_mut(&mut self) -> &mut [f64] { &mut self.x }
    pub fn y_mut(&mut self) -> &mut [f64] { &mut self.y }
    pub fn y_lower_mut(&mut self) -> Option<&mut [f64]> { self.y_lower.as_deref_mut() }
    pub fn y_upper_mut(&mut self) -> Option<&mut [f64]> { self.y_upper.as_deref_mut() }

    /// Overwrite `x` element-wise; `values` must have the current length.
    pub fn replace_x(&mut self, values: &[f64]) -> Result<()> {
        check_len(&self.name, "x", self.x.len(), values.len())?;
        self.x.copy_from_slice(values);
        Ok(())
    }

    /// Overwrite `y` element-wise; `values` must have the current length.
    pub fn replace_y(&mut self, values: &[f64]) -> Result<()> {
        check_len(&self.name, "y", self.y.len(), values.len())?;
        self.y.copy_from_slice(values);
        Ok(())
    }

    /// Overwrite both bounds element-wise. A missing bound is attached from
    /// `lower`/`upper`, so afterwards the series always has an error region.
    pub fn replace_bounds(&mut self, lower: &[f64], upper: &[f64]) -> Result<()> {
        let n = self.x.len();
        check_len(&self.name, "y_lower", n, lower.len())?;
        check_len(&self.name, "y_upper", n, upper.len())?;
        overwrite(&mut self.y_lower, lower);
        overwrite(&mut self.y_upper, upper);
        Ok(())
    }
}

fn overwrite(slot: &mut Option<Vec<f64>>, values: &[f64]) {
    match slot {
        Some(buf) => buf.copy_from_slice(values),
        None => *slot = Some(values.to_vec()),
    }
}

fn check_len(series: &str, field: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(PlotError::LengthMismatch { series: series.to_string(), field, expected, actual })
    }
}
