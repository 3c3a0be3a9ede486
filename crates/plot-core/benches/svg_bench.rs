use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plot_core::{Chart, RenderOptions};

fn build_chart(n: usize, series: usize) -> Result<Chart> {
    let mut ch = Chart::new("svg bench");
    for s in 0..series {
        let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.1).collect();
        let y: Vec<f64> = x.iter().map(|&v| (v + s as f64).cos() * (s + 1) as f64).collect();
        ch.add_xy(format!("series {s}"), x, y, None)?;
    }
    Ok(ch)
}

fn bench_svg(c: &mut Criterion) {
    let opts = RenderOptions::default();
    let mut group = c.benchmark_group("render_svg_string");
    for &n in &[1_000usize, 20_000usize] {
        group.bench_function(format!("xy_{n}x4"), |b| {
            let ch = build_chart(n, 4).expect("bench chart");
            b.iter(|| black_box(ch.render_to_svg_string(&opts)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_svg);
criterion_main!(benches);
