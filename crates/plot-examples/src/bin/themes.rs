// File: crates/plot-examples/src/bin/themes.rs
// Summary: Renders the same data with every theme preset, a custom theme and a JSON theme.

use anyhow::{Context, Result};
use plot_core::theme::{self, Theme};
use plot_core::{Chart, RenderOptions, Rgba, TickMode};
use plot_examples::{init_logging, out_path};
use tracing::info;

fn sample_chart(title: &str, theme: Theme) -> Result<Chart> {
    let x: Vec<f64> = (0..=50).map(|i| i as f64 * 2.0).collect();
    let mut chart = Chart::new(title).with_labels("X Values", "Y Values").with_theme(theme);
    chart.add_xy("Linear", x.clone(), x.clone(), None)?;
    chart.add_xy("Linear ×1.5", x.clone(), x.iter().map(|v| v * 1.5).collect(), None)?;
    chart.add_xy("Quadratic", x.clone(), x.iter().map(|v| v * v / 50.0).collect(), None)?;
    Ok(chart)
}

fn main() -> Result<()> {
    init_logging();

    // Clean ticks: 0..2000 reads 0, 500, 1000, ... rather than 1999.96.
    let x: Vec<f64> = (0..=100).map(|i| i as f64 * 20.0).collect();
    let y: Vec<f64> = x.iter().map(|v| v * v / 1000.0).collect();
    let mut clean = Chart::new("Clean Axis Formatting").with_labels("X Values (0 to 2000)", "Y Values");
    clean.add_xy("f(x) = x²/1000", x, y, None)?;
    let opts = RenderOptions { tick_mode: TickMode::Clean, ..RenderOptions::default() };
    let out = out_path("theme_clean_axes.svg")?;
    clean.render_to_svg(&opts, &out)?;
    info!(path = %out.display(), "wrote clean-axis chart");

    for preset in theme::presets() {
        let name = preset.name.clone();
        let chart = sample_chart(&format!("{name} theme"), preset)?;
        let out = out_path(&format!("theme_{name}.png"))?;
        chart.save(&out, 800, 600)?;
        info!(theme = %name, path = %out.display(), "wrote themed chart");
    }

    let base = Theme::default();
    let mut custom = Theme { name: "custom".to_string(), ..base.clone() };
    custom.fonts.title_size = 22.0;
    custom.fonts.label_size = 16.0;
    custom.colors.background = Rgba::rgb(250, 250, 245);
    custom.colors.palette = vec![Rgba::rgb(0, 100, 200), Rgba::rgb(200, 50, 50), Rgba::rgb(50, 150, 50)];
    custom.axis_format.max_decimals = 1;

    // Themes round-trip through JSON so they can be kept alongside data.
    let json_path = out_path("theme_custom.json")?;
    std::fs::write(&json_path, custom.to_json_string()?)
        .with_context(|| format!("writing {}", json_path.display()))?;
    let loaded = Theme::from_json_file(&json_path)?;

    let chart = sample_chart("Custom theme", loaded)?;
    let out = out_path("theme_custom.svg")?;
    chart.save(&out, 800, 600)?;
    info!(path = %out.display(), "wrote custom-theme chart");
    Ok(())
}
