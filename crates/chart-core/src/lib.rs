// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the dataset, scales, generators, scene and SVG output.

pub mod chart;
pub mod data;
pub mod axis;
pub mod ticks;
pub mod types;
pub mod scale;
pub mod shape;
pub mod scene;
pub mod svg;
pub mod error;

pub use chart::{ChartOptions, MixedChart};
pub use data::{Bubble, Dataset, Observation};
pub use axis::{Axis, Orient, Tick};
pub use scale::{BandScale, LinearScale};
pub use shape::{AreaGenerator, AreaGeometry, Curve, LineGenerator, PathCommand, PathGeometry};
pub use scene::{Primitive, Scene, Stroke, Style};
pub use types::{Color, Insets, Point};
pub use error::{ChartError, Result};
