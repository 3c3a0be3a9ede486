// File: crates/plot-core/src/error.rs
// Summary: Library error type; construction, surface, encoding, I/O and theme config failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    /// A series sequence does not match the length of `x`.
    #[error("series '{series}': {field} has {actual} values, expected {expected}")]
    LengthMismatch {
        series: String,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("failed to create or read a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid theme configuration: {0}")]
    Theme(#[from] serde_json::Error),
}

pub type Result<T, E = PlotError> = std::result::Result<T, E>;
