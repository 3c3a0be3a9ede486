// File: crates/plot-core/src/axis.rs
// Summary: Axis model: label, accumulated data range, and tick positions.

use serde::{Deserialize, Serialize};

use crate::grid::{generate_clean_ticks, linspace};

/// Default number of ticks per axis.
pub const DEFAULT_TICKS: usize = 6;

/// Which tick algorithm the draw path uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickMode {
    /// `count` values evenly split between min and max (not snapped).
    #[default]
    Uniform,
    /// Snapped 1/2/5 steps, see [`generate_clean_ticks`].
    Clean,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    merged: usize,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, merged: 0 }
    }

    /// An axis that has not seen any data yet (range 0..1).
    pub fn unbounded(label: impl Into<String>) -> Self {
        Self::new(label, 0.0, 1.0)
    }

    /// Number of non-empty sequences merged so far.
    pub fn merged_count(&self) -> usize { self.merged }

    /// Fold `values` into the range. The first non-empty merge replaces the
    /// range outright; later merges only widen it. Empty input is ignored.
    pub fn merge_range(&mut self, values: &[f64]) {
        let Some((vmin, vmax)) = min_max(values) else { return };
        if self.merged == 0 {
            self.min = vmin;
            self.max = vmax;
        } else {
            self.min = self.min.min(vmin);
            self.max = self.max.max(vmax);
        }
        self.merged += 1;
    }

    /// Replace the range from scratch; `0.0..1.0` when `values` is empty.
    pub fn reset_range(&mut self, values: impl IntoIterator<Item = f64>) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        let mut any = false;
        for v in values {
            lo = lo.min(v);
            hi = hi.max(v);
            any = true;
        }
        if any {
            self.min = lo;
            self.max = hi;
        } else {
            self.min = 0.0;
            self.max = 1.0;
        }
    }

    /// Evenly spaced ticks from min to max inclusive; `[min]` for a degenerate axis.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if self.max == self.min {
            return vec![self.min];
        }
        linspace(self.min, self.max, count)
    }

    /// Round-number ticks over the current range.
    pub fn clean_ticks(&self, count: usize) -> Vec<f64> {
        generate_clean_ticks(self.min, self.max, count)
    }

    pub fn ticks_with(&self, mode: TickMode, count: usize) -> Vec<f64> {
        match mode {
            TickMode::Uniform => self.ticks(count),
            TickMode::Clean => self.clean_ticks(count),
        }
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::unbounded("")
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let (first, rest) = values.split_first()?;
    Some(rest.iter().fold((*first, *first), |(lo, hi), &v| (lo.min(v), hi.max(v))))
}
