// File: crates/plot-core/src/animation.rs
// Summary: Single-threaded fixed-rate animation driver: mutate series, then redraw, once per frame.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::chart::Chart;

/// Default frame rate, in frames per second.
pub const DEFAULT_FPS: u32 = 20;

/// Per-frame mutation hook. Receives the 1-based frame index and the chart.
pub type FrameCallback = Box<dyn FnMut(u64, &mut Chart)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    /// Scheduled (or not) but never started.
    Idle,
    Running,
    Paused,
    Stopped,
}

/// Drives a chart at a fixed frame interval.
///
/// Each frame invokes the scheduled callback, which may overwrite series
/// values in place (and call [`Chart::update_axes_ranges`]), then hands the
/// chart to the caller's redraw closure.
pub struct Animator {
    chart: Chart,
    interval: Duration,
    callback: Option<FrameCallback>,
    state: AnimationState,
    frame: u64,
}

impl Animator {
    pub fn new(chart: Chart) -> Self {
        Self::with_fps(chart, DEFAULT_FPS)
    }

    pub fn with_fps(chart: Chart, fps: u32) -> Self {
        let interval = Duration::from_millis(1000 / u64::from(fps.max(1)));
        Self { chart, interval, callback: None, state: AnimationState::Idle, frame: 0 }
    }

    /// Install the per-frame callback and set the frame interval.
    pub fn schedule(&mut self, interval_ms: u64, callback: impl FnMut(u64, &mut Chart) + 'static) {
        self.interval = Duration::from_millis(interval_ms.max(1));
        self.callback = Some(Box::new(callback));
    }

    /// Begin producing frames. Starting after `stop` restarts the frame count.
    pub fn start(&mut self) {
        if self.state == AnimationState::Stopped {
            self.frame = 0;
        }
        self.state = AnimationState::Running;
        debug!(interval_ms = self.interval.as_millis() as u64, "animation started");
    }

    pub fn pause(&mut self) {
        if self.state == AnimationState::Running {
            self.state = AnimationState::Paused;
            debug!(frame = self.frame, "animation paused");
        }
    }

    pub fn resume(&mut self) {
        if self.state == AnimationState::Paused {
            self.state = AnimationState::Running;
            debug!(frame = self.frame, "animation resumed");
        }
    }

    pub fn stop(&mut self) {
        self.state = AnimationState::Stopped;
        debug!(frame = self.frame, "animation stopped");
    }

    pub fn state(&self) -> AnimationState { self.state }
    pub fn is_running(&self) -> bool { self.state == AnimationState::Running }
    /// Number of frames produced since the last (re)start.
    pub fn frame(&self) -> u64 { self.frame }
    pub fn interval(&self) -> Duration { self.interval }
    pub fn chart(&self) -> &Chart { &self.chart }
    pub fn chart_mut(&mut self) -> &mut Chart { &mut self.chart }
    pub fn into_chart(self) -> Chart { self.chart }

    /// Produce one frame now if running: callback, then `redraw`.
    /// Returns whether a frame was produced.
    pub fn tick(&mut self, mut redraw: impl FnMut(&Chart)) -> bool {
        if self.state != AnimationState::Running {
            return false;
        }
        self.frame += 1;
        if let Some(cb) = self.callback.as_mut() {
            cb(self.frame, &mut self.chart);
        }
        redraw(&self.chart);
        true
    }

    /// Block for up to `frames` frames at the scheduled rate. Sleeps until each
    /// frame's deadline rather than a fixed delay, so slow redraws do not drift
    /// the schedule. Starts the animation if it is idle. Returns frames produced.
    pub fn run(&mut self, frames: u64, mut redraw: impl FnMut(&Chart)) -> u64 {
        if self.state == AnimationState::Idle {
            self.start();
        }
        let mut produced = 0;
        let mut deadline = Instant::now();
        while produced < frames && self.tick(&mut redraw) {
            produced += 1;
            if produced == frames {
                break;
            }
            deadline += self.interval;
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            } else {
                // Fell behind; restart the schedule from now.
                deadline = now;
            }
        }
        produced
    }
}
