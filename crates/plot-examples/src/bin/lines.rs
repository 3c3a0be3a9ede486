// File: crates/plot-examples/src/bin/lines.rs
// Summary: Minimal example that renders a sine and cosine line chart to PNG.

use anyhow::Result;
use plot_core::{Chart, RenderOptions, Series, Style};
use plot_examples::{init_logging, out_path};
use tracing::info;

fn main() -> Result<()> {
    init_logging();

    let x: Vec<f64> = (0..=100).map(|i| i as f64 * 0.1).collect();
    let sin: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    let cos: Vec<f64> = x.iter().map(|v| v.cos()).collect();

    let mut chart = Chart::new("Sine and Cosine").with_labels("x", "f(x)");
    chart.add_xy("sin(x)", x.clone(), sin, None)?;
    chart.add_series(Series::new("cos(x)", x, cos)?.with_style(Style::default().with_line_width(1.5)));

    let out = out_path("example_lines.png")?;
    chart.render_to_png(&RenderOptions::default(), &out)?;
    info!(path = %out.display(), "wrote chart");
    Ok(())
}
