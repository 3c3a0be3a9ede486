// File: crates/plot-examples/src/bin/svg.rs
// Summary: Vector export of multi-series lines, a scatter plot and error regions.

use anyhow::Result;
use plot_core::{Chart, Rgba, Series, Style};
use plot_examples::{init_logging, out_path};
use tracing::info;

/// Deterministic jitter in [-0.5, 0.5).
fn jitter(i: usize) -> f64 {
    let h = (i as u64).wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (h >> 11) as f64 / (1u64 << 53) as f64 - 0.5
}

fn save(chart: &Chart, name: &str) -> Result<()> {
    let out = out_path(name)?;
    // Extension picks the vector backend.
    chart.save(&out, 800, 600)?;
    info!(path = %out.display(), "wrote svg");
    Ok(())
}

fn main() -> Result<()> {
    init_logging();

    let x: Vec<f64> = (0..=100).map(|i| i as f64 / 10.0).collect();
    let mut multi = Chart::new("Multiple Series - SVG Export").with_labels("Time (s)", "Amplitude");
    multi.add_xy("sin(x)", x.clone(), x.iter().map(|v| v.sin()).collect(), None)?;
    multi.add_xy("cos(x)", x.clone(), x.iter().map(|v| v.cos()).collect(), None)?;
    multi.add_xy("sin(2x)/2", x.clone(), x.iter().map(|v| (v * 2.0).sin() / 2.0).collect(), None)?;
    save(&multi, "example_multi_series.svg")?;

    let xs: Vec<f64> = (0..=50).map(|i| i as f64 / 5.0).collect();
    let ys: Vec<f64> = xs.iter().enumerate().map(|(i, v)| v.sin() + jitter(i) * 0.3).collect();
    let mut scatter = Chart::new("Scatter Plot - SVG Export").with_labels("x", "y");
    scatter.add_series(Series::new("noisy data", xs, ys)?.with_style(Style::scatter(3)));
    save(&scatter, "example_scatter.svg")?;

    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    let lower = x.iter().map(|v| v.sin() - 0.2 - 0.1 * v.cos().abs()).collect();
    let upper = x.iter().map(|v| v.sin() + 0.2 + 0.1 * v.cos().abs()).collect();
    let mut bands = Chart::new("Error Regions - SVG Export").with_labels("x", "y ± error");
    bands.add_series(
        Series::with_bounds("sin(x) ± error", x.clone(), y, lower, upper)?
            .with_style(Style::default().with_color(Rgba::rgb(0, 100, 200)).with_line_width(2.5)),
    );
    save(&bands, "example_error_regions.svg")?;
    Ok(())
}
