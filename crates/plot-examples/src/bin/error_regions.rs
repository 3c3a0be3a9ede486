// File: crates/plot-examples/src/bin/error_regions.rs
// Summary: Noisy measurement with a confidence band, a model line and sample points.

use anyhow::Result;
use plot_core::{Chart, RenderOptions, Rgba, Series, Style};
use plot_examples::{init_logging, out_path};
use tracing::info;

fn main() -> Result<()> {
    init_logging();

    let x: Vec<f64> = (0..60).map(|i| i as f64 * 0.2).collect();
    let mean: Vec<f64> = x.iter().map(|v| (v * 0.8).sin() * 2.0 + v * 0.3).collect();
    // Band widens along x.
    let lower: Vec<f64> = x.iter().zip(&mean).map(|(v, m)| m - (0.3 + v * 0.05)).collect();
    let upper: Vec<f64> = x.iter().zip(&mean).map(|(v, m)| m + (0.3 + v * 0.05)).collect();

    let mut chart = Chart::new("Measurement with Confidence Band").with_labels("Time (s)", "Signal");
    chart.add_series(Series::with_bounds("mean ± σ", x.clone(), mean, lower, upper)?);

    let model: Vec<f64> = x.iter().map(|v| v * 0.3).collect();
    chart.add_series(
        Series::new("linear model", x.clone(), model)?
            .with_style(Style::default().with_color(Rgba::rgb(214, 39, 40)).with_line_width(1.0)),
    );

    let samples_x: Vec<f64> = x.iter().step_by(6).copied().collect();
    let samples_y: Vec<f64> = samples_x.iter().map(|v| (v * 0.8).sin() * 2.0 + v * 0.3 + 0.2).collect();
    chart.add_series(Series::new("samples", samples_x, samples_y)?.with_style(Style::scatter(4)));

    let opts = RenderOptions::default();
    let png = out_path("example_error_regions.png")?;
    let svg = out_path("example_error_regions.svg")?;
    chart.render_to_png(&opts, &png)?;
    chart.render_to_svg(&opts, &svg)?;
    info!(png = %png.display(), svg = %svg.display(), "wrote charts");
    Ok(())
}
