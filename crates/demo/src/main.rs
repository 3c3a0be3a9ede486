// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV of x and y columns and renders it to PNG and SVG.
// Usage: plot-demo <data.csv> [theme-name | theme.json] [--clean-ticks]
// Columns: first column is x; every other numeric column becomes a series.
// Optional `<name>_lower` / `<name>_upper` columns become that series' error band.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plot_core::theme::{self, Theme};
use plot_core::{Chart, RenderOptions, Series, TickMode};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

struct Args {
    input: PathBuf,
    theme: Option<String>,
    clean_ticks: bool,
}

fn parse_args() -> Result<Args> {
    let mut input = None;
    let mut theme = None;
    let mut clean_ticks = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--clean-ticks" => clean_ticks = true,
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            _ if theme.is_none() => theme = Some(arg),
            _ => anyhow::bail!("unexpected argument '{arg}'"),
        }
    }
    let input = input.context("usage: plot-demo <data.csv> [theme-name | theme.json] [--clean-ticks]")?;
    Ok(Args { input, theme, clean_ticks })
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = parse_args()?;
    let theme = load_theme(args.theme.as_deref())?;
    info!(theme = %theme.name, "using theme");

    let table = load_columns(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    if table.rows == 0 {
        anyhow::bail!("no rows loaded; check headers/delimiter.");
    }
    info!(rows = table.rows, columns = table.headers.len(), "loaded table");

    let stem = args.input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut chart = Chart::new(stem).with_labels(table.headers[0].clone(), "value").with_theme(theme);
    for series in build_series(&table)? {
        chart.add_series(series);
    }

    let opts = RenderOptions {
        tick_mode: if args.clean_ticks { TickMode::Clean } else { TickMode::Uniform },
        ..RenderOptions::default()
    };
    let png = out_name(stem, "png");
    let svg = out_name(stem, "svg");
    chart.render_to_png(&opts, &png)?;
    chart.render_to_svg(&opts, &svg)?;
    info!(png = %png.display(), svg = %svg.display(), "wrote charts");
    Ok(())
}

/// Preset name, or a path to a JSON theme file.
fn load_theme(arg: Option<&str>) -> Result<Theme> {
    let Some(arg) = arg else { return Ok(Theme::default()) };
    if arg.to_ascii_lowercase().ends_with(".json") {
        return Theme::from_json_file(arg).with_context(|| format!("loading theme file '{arg}'"));
    }
    let found = theme::find(arg);
    if !found.name.eq_ignore_ascii_case(arg) {
        warn!(requested = arg, "unknown theme; using default");
    }
    Ok(found)
}

struct Table {
    headers: Vec<String>,
    /// Column-major; rows with an unparsable x are dropped, other blanks become NaN.
    columns: Vec<Vec<f64>>,
    rows: usize,
}

fn load_columns(path: &Path) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    if headers.len() < 2 {
        anyhow::bail!("need at least two columns (x and y), found {}", headers.len());
    }
    debug!(?headers, "csv headers");

    let mut columns = vec![Vec::new(); headers.len()];
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let Some(x) = rec.get(0).and_then(|s| s.parse::<f64>().ok()) else {
            skipped += 1;
            continue;
        };
        columns[0].push(x);
        for (i, col) in columns.iter_mut().enumerate().skip(1) {
            col.push(rec.get(i).and_then(|s| s.parse::<f64>().ok()).unwrap_or(f64::NAN));
        }
    }
    if skipped > 0 {
        warn!(skipped, "rows without a numeric x were skipped");
    }
    let rows = columns[0].len();
    Ok(Table { headers, columns, rows })
}

fn build_series(table: &Table) -> Result<Vec<Series>> {
    let find = |name: &str| table.headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let is_bound = |h: &str| {
        let h = h.to_ascii_lowercase();
        h.ends_with("_lower") || h.ends_with("_upper")
    };

    let x = &table.columns[0];
    let mut out = Vec::new();
    for (i, name) in table.headers.iter().enumerate().skip(1) {
        if is_bound(name) {
            continue;
        }
        let series = Series::new(name.clone(), x.clone(), table.columns[i].clone())?;
        let lower = find(&format!("{name}_lower")).map(|j| table.columns[j].clone());
        let upper = find(&format!("{name}_upper")).map(|j| table.columns[j].clone());
        out.push(series.bounds(lower, upper)?);
    }
    if out.is_empty() {
        anyhow::bail!("no value columns found besides x");
    }
    Ok(out)
}

/// target/out/chart_<stem>.<ext>
fn out_name(stem: &str, ext: &str) -> PathBuf {
    PathBuf::from("target/out").join(format!("chart_{stem}.{ext}"))
}
