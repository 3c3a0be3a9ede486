// File: crates/plot-core/src/chart.rs
// Summary: Chart model (series, axes, theme, palette cursor) and the render/save entry points.

use std::path::Path;

use skia_safe as skia;
use tracing::debug;

use crate::axis::{Axis, TickMode, DEFAULT_TICKS};
use crate::error::Result;
use crate::plan::{self, DrawPlan};
use crate::series::Series;
use crate::theme::Theme;
use crate::types::{Rgba, HEIGHT, WIDTH};
use crate::{raster, svg};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Tick algorithm for both axes. `Uniform` unless set otherwise.
    pub tick_mode: TickMode,
    pub tick_count: usize,
    /// Emit tick labels, axis labels, title and legend text.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            tick_mode: TickMode::Uniform,
            tick_count: DEFAULT_TICKS,
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn sized(width: i32, height: i32) -> Self {
        Self { width, height, ..Self::default() }
    }
}

pub struct Chart {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub theme: Theme,
    series: Vec<Series>,
    palette_cursor: usize,
}

impl Chart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            xlabel: String::new(),
            ylabel: String::new(),
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            theme: Theme::default(),
            series: Vec::new(),
            palette_cursor: 0,
        }
    }

    pub fn with_labels(mut self, xlabel: impl Into<String>, ylabel: impl Into<String>) -> Self {
        self.xlabel = xlabel.into();
        self.ylabel = ylabel.into();
        self.x_axis.label = self.xlabel.clone();
        self.y_axis.label = self.ylabel.clone();
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Attach a series. An unset color takes the next palette entry; the
    /// series' x/y values widen the axis ranges.
    pub fn add_series(&mut self, mut series: Series) {
        if series.style.color.is_none() {
            series.style.color = Some(self.next_color());
        }
        self.x_axis.merge_range(series.x());
        self.y_axis.merge_range(series.y());
        self.series.push(series);
    }

    /// Build and attach a plain line series; `color: None` uses the palette.
    pub fn add_xy(
        &mut self,
        name: impl Into<String>,
        x: Vec<f64>,
        y: Vec<f64>,
        color: Option<Rgba>,
    ) -> Result<()> {
        let mut series = Series::new(name, x, y)?;
        series.style.color = color;
        self.add_series(series);
        Ok(())
    }

    fn next_color(&mut self) -> Rgba {
        let c = self.theme.colors.series_color(self.palette_cursor);
        self.palette_cursor += 1;
        c
    }

    /// Index of the next palette color to hand out.
    pub fn palette_cursor(&self) -> usize { self.palette_cursor }

    /// Recompute both axis ranges from the current series values.
    /// Call after mutating series in place; unlike `add_series` this can shrink ranges.
    pub fn update_axes_ranges(&mut self) {
        self.x_axis.reset_range(self.series.iter().flat_map(|s| s.x().iter().copied()));
        self.y_axis.reset_range(self.series.iter().flat_map(|s| s.y().iter().copied()));
    }

    /// Series in insertion (and drawing) order.
    pub fn series(&self) -> &[Series] { &self.series }

    /// Same backing storage as [`Chart::series`], for in-place data updates.
    pub fn series_mut(&mut self) -> &mut [Series] { &mut self.series }

    pub fn series_named(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name() == name)
    }

    pub fn series_named_mut(&mut self, name: &str) -> Option<&mut Series> {
        self.series.iter_mut().find(|s| s.name() == name)
    }

    /// Lay the chart out without drawing it.
    pub fn plan(&self, opts: &RenderOptions) -> DrawPlan {
        plan::layout(self, opts.width, opts.height, opts)
    }

    /// Draw onto a live canvas of the given pixel size (window, offscreen surface, ...).
    pub fn draw(&self, canvas: &skia::Canvas, width: i32, height: i32) {
        self.draw_with(canvas, &RenderOptions::sized(width, height));
    }

    /// Draw onto a live canvas sized `opts.width` x `opts.height`, honoring tick mode and labels.
    pub fn draw_with(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        raster::paint(canvas, &self.plan(opts));
    }

    /// Render into an RGBA8 buffer. Returns `(pixels, width, height, row_stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (px, stride) = raster::render_rgba8(&self.plan(opts))?;
        Ok((px, opts.width, opts.height, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        raster::render_png(&self.plan(opts))
    }

    /// Render the chart to a PNG at `path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_file(path.as_ref(), &bytes)
    }

    pub fn render_to_svg_string(&self, opts: &RenderOptions) -> String {
        svg::render(&self.plan(opts))
    }

    pub fn render_to_svg(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let doc = self.render_to_svg_string(opts);
        write_file(path.as_ref(), doc.as_bytes())
    }

    /// Save to `path`: `.svg` (any case) writes SVG, anything else PNG.
    pub fn save(&self, path: impl AsRef<Path>, width: i32, height: i32) -> Result<()> {
        let path = path.as_ref();
        let opts = RenderOptions::sized(width, height);
        if is_svg_path(path) {
            self.render_to_svg(&opts, path)
        } else {
            self.render_to_png(&opts, path)
        }
    }

    /// Save as SVG regardless of the file extension.
    pub fn save_svg(&self, path: impl AsRef<Path>, width: i32, height: i32) -> Result<()> {
        self.render_to_svg(&RenderOptions::sized(width, height), path)
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new("")
    }
}

pub fn is_svg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "saved plot");
    Ok(())
}
