// File: crates/chart-core/src/error.rs
// Summary: Error type for chart configuration and output backends.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// Margins leave no room for the plot area.
    #[error("canvas {width}x{height} leaves no plot area inside the margins")]
    InvalidCanvas { width: u32, height: u32 },

    /// The value axis needs at least one tick interval.
    #[error("tick count must be at least 1")]
    InvalidTickCount,

    /// A drawing surface could not be created.
    #[error("surface error: {0}")]
    Surface(String),

    /// Encoding the rendered output failed.
    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
