// File: crates/plot-examples/src/bin/animated.rs
// Summary: Headless animation: a travelling wave updated in place, each frame written as a PNG.

use anyhow::Result;
use plot_core::{Animator, Chart, RenderOptions};
use plot_examples::{init_logging, out_path};
use tracing::{info, warn};

const FRAMES: u64 = 40;

fn main() -> Result<()> {
    init_logging();

    let x: Vec<f64> = (0..200).map(|i| i as f64 * 0.05).collect();
    let mut chart = Chart::new("Animated Series").with_labels("x", "amplitude");
    chart.add_xy("wave", x.clone(), x.iter().map(|v| v.sin()).collect(), None)?;
    chart.add_xy("envelope", x.clone(), x.iter().map(|v| (-v * 0.2).exp()).collect(), None)?;

    let mut anim = Animator::new(chart);
    anim.schedule(50, |frame, chart| {
        let phase = frame as f64 * 0.2;
        if let Some(wave) = chart.series_named_mut("wave") {
            let xs = wave.x().to_vec();
            for (y, x) in wave.y_mut().iter_mut().zip(xs) {
                *y = (x + phase).sin() * (-x * 0.2).exp();
            }
        }
        chart.update_axes_ranges();
    });

    let opts = RenderOptions::sized(640, 480);
    let mut frame = 0u64;
    let mut failures = 0usize;
    let produced = anim.run(FRAMES, |chart| {
        frame += 1;
        let name = format!("anim_frame_{frame:03}.png");
        let written = out_path(&name).and_then(|p| chart.render_to_png(&opts, &p).map_err(Into::into));
        if let Err(err) = written {
            failures += 1;
            warn!(error = %err, "frame not written");
        }
    });
    info!(frames = produced, failures, "animation finished");

    let last = out_path("anim_last.svg")?;
    anim.into_chart().save(&last, 640, 480)?;
    info!(path = %last.display(), "wrote final frame as svg");
    Ok(())
}
