// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod animation;
pub mod axis;
pub mod chart;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod mapper;
pub mod plan;
pub mod raster;
pub mod series;
pub mod svg;
pub mod text;
pub mod theme;
pub mod types;

pub use animation::{AnimationState, Animator};
pub use axis::{Axis, TickMode};
pub use chart::{Chart, RenderOptions};
pub use error::{PlotError, Result};
pub use format::format_tick;
pub use grid::generate_clean_ticks;
pub use mapper::CoordinateMapper;
pub use plan::{DrawPlan, Primitive};
pub use series::{Series, Style};
pub use theme::{AxisFormat, Theme};
pub use types::{Insets, Rgba};
