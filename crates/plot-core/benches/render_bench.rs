use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plot_core::{Chart, RenderOptions, Series};

fn build_chart_xy(n: usize, band: bool) -> Chart {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&v| (v * 0.01).sin() * 10.0 + v * 0.0001).collect();
    let mut ch = Chart::new("bench").with_labels("X", "Y");
    let series = if band {
        let lo = y.iter().map(|v| v - 1.0).collect();
        let hi = y.iter().map(|v| v + 1.0).collect();
        Series::with_bounds("s", x, y, lo, hi)
    } else {
        Series::new("s", x, y)
    };
    ch.add_series(series.expect("equal lengths"));
    ch
}

fn bench_render(c: &mut Criterion) {
    let opts = RenderOptions { width: 800, height: 500, draw_labels: false, ..RenderOptions::default() };

    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("xy_{n}"), |b| {
            let ch = build_chart_xy(n, false);
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
        group.bench_function(format!("band_{n}"), |b| {
            let ch = build_chart_xy(n, true);
            b.iter(|| -> Result<()> {
                black_box(ch.render_to_png_bytes(&opts)?);
                Ok(())
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("layout");
    group.bench_function("plan_50000", |b| {
        let ch = build_chart_xy(50_000, true);
        b.iter(|| black_box(ch.plan(&opts)));
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
