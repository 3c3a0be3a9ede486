// File: crates/plot-core/src/grid.rs
// Summary: Tick layout helpers: uniform split and "nice number" clean ticks.

/// `steps` evenly spaced values from `start` to `end` inclusive.
/// Fewer than two steps yields just the endpoints.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round-number ticks covering `[min, max]`.
///
/// The step is `(max - min) / (count - 1)` snapped to 1, 2, 5 or 10 times a
/// power of ten. Ticks start at the step multiple at or below `min` and stop
/// once past `max` (1% of a step tolerance on both ends). Each tick is rounded
/// to the step's magnitude so `0.1 + 0.2` prints as `0.3`.
/// Falls back to `[min, max]` when nothing lands in range.
pub fn generate_clean_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if min == max {
        return vec![min];
    }
    if !min.is_finite() || !max.is_finite() || count < 2 {
        return vec![min, max];
    }

    let raw_step = (max - min) / (count as f64 - 1.0);
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = nice * magnitude;
    if !(step > 0.0) || !step.is_finite() {
        return vec![min, max];
    }

    let tol = step * 0.01;
    let start = (min / step).floor() * step;
    let mut ticks = Vec::new();
    let mut i = 0u32;
    loop {
        let tick = start + step * i as f64;
        if tick > max + tol {
            break;
        }
        if tick >= min - tol {
            let clean = snap(tick, magnitude);
            // -0.0 would print as "-0"
            ticks.push(if clean == 0.0 { 0.0 } else { clean });
        }
        i += 1;
    }

    if ticks.is_empty() { vec![min, max] } else { ticks }
}

/// Round `v` to a multiple of `magnitude` (a power of ten). Sub-unit magnitudes
/// divide by the integer inverse, since `3.0 * 0.1` is not `0.3`.
fn snap(v: f64, magnitude: f64) -> f64 {
    let units = (v / magnitude).round();
    if magnitude < 1.0 {
        units / (1.0 / magnitude).round()
    } else {
        units * magnitude
    }
}
