// File: crates/chart-core/src/axis.rs
// Summary: Axis decorations (domain line, ticks, labels) derived from scales.

use serde::Serialize;

use crate::scale::{BandScale, LinearScale};
use crate::types::Point;

/// Side of the plot the axis is drawn for; ticks point away from the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tick {
    /// Offset along the axis, in plot pixels.
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    pub orient: Orient,
    /// Where the axis group is anchored inside the plot group.
    pub origin: Point,
    /// Extent of the domain line along the axis.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
}

impl Axis {
    pub const TICK_SIZE: f64 = 6.0;
    pub const TICK_PADDING: f64 = 3.0;

    fn with_ticks(orient: Orient, origin: Point, range: (f64, f64), ticks: Vec<Tick>) -> Self {
        Self {
            orient,
            origin,
            range,
            ticks,
            tick_size_inner: Self::TICK_SIZE,
            tick_size_outer: Self::TICK_SIZE,
            tick_padding: Self::TICK_PADDING,
        }
    }

    /// Bottom axis for a band scale: one tick per label at its band center.
    pub fn bottom(scale: &BandScale, y: f64) -> Self {
        let ticks = scale
            .domain()
            .iter()
            .filter_map(|l| scale.center(l).map(|offset| Tick { offset, label: l.clone() }))
            .collect();
        Self::with_ticks(Orient::Bottom, Point::new(0.0, y), scale.range(), ticks)
    }

    /// Left axis for a linear scale with about `count` round ticks.
    pub fn left(scale: &LinearScale, count: usize) -> Self {
        let format = scale.tick_format(count);
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|v| Tick { offset: scale.map(v), label: format(v) })
            .collect();
        Self::with_ticks(Orient::Left, Point::new(0.0, 0.0), scale.range(), ticks)
    }

    /// Unit vector pointing from the axis line toward the tick labels.
    pub fn outward(&self) -> (f64, f64) {
        match self.orient {
            Orient::Bottom => (0.0, 1.0),
            Orient::Left => (-1.0, 0.0),
        }
    }
}
