// File: crates/chart-core/src/chart.rs
// Summary: Mixed chart definition and the render pass building a scene from the dataset.

use tracing::debug;

use crate::axis::Axis;
use crate::data::{is_defined, Dataset, Observation};
use crate::error::{ChartError, Result};
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Primitive, Scene, Stroke, Style};
use crate::shape::{AreaGenerator, AreaGeometry, Curve, LineGenerator, PathCommand, PathGeometry};
use crate::types::{Color, Insets, Point, HEIGHT, WIDTH};

pub const BUBBLE_FILL: Color = Color::rgba(255, 0, 0, 0.5);
pub const AREA_FILL: Color = Color::rgba(0, 128, 0, 0.3);
pub const DASH: [f32; 2] = [5.0, 5.0];

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    /// Canvas width including margins.
    pub width: u32,
    /// Canvas height including margins.
    pub height: u32,
    pub insets: Insets,
    /// Fraction of each band step left as gap.
    pub band_padding: f64,
    /// Approximate tick count of the value axis (also drives `nice`).
    pub tick_count: usize,
    pub background: Option<Color>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            band_padding: 0.1,
            tick_count: 10,
            background: Some(Color::WHITE),
        }
    }
}

impl ChartOptions {
    pub fn plot_width(&self) -> f64 {
        self.width.saturating_sub(self.insets.hsum()) as f64
    }

    pub fn plot_height(&self) -> f64 {
        self.height.saturating_sub(self.insets.vsum()) as f64
    }

    pub fn validate(&self) -> Result<()> {
        if self.width <= self.insets.hsum() || self.height <= self.insets.vsum() {
            return Err(ChartError::InvalidCanvas { width: self.width, height: self.height });
        }
        if self.tick_count == 0 {
            return Err(ChartError::InvalidTickCount);
        }
        Ok(())
    }
}

pub struct MixedChart {
    pub title: String,
    pub data: Dataset,
    pub options: ChartOptions,
}

impl MixedChart {
    pub const DEFAULT_TITLE: &'static str = "Mixed Chart Example";

    pub fn new(data: Dataset) -> Self {
        Self { title: Self::DEFAULT_TITLE.to_string(), data, options: ChartOptions::default() }
    }

    /// The chart over the built-in dataset.
    pub fn sample() -> Self {
        Self::new(Dataset::sample())
    }

    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Horizontal band scale and niced vertical value scale; `None` for an
    /// empty dataset.
    pub fn scales(&self) -> Option<(BandScale, LinearScale)> {
        if self.data.is_empty() { return None; }
        let x = BandScale::new(self.data.categories(), (0.0, self.options.plot_width()))
            .padding(self.options.band_padding);
        let max = self.data.primary_max().unwrap_or(0.0);
        let y = LinearScale::new((0.0, max), (self.options.plot_height(), 0.0))
            .nice(self.options.tick_count);
        Some((x, y))
    }

    /// One render pass: validates options and lays out every primitive.
    /// An empty dataset yields an empty scene of the configured size.
    pub fn scene(&self) -> Result<Scene> {
        self.options.validate()?;
        let o = &self.options;
        let mut scene = Scene::empty(o.width, o.height, o.insets);
        scene.background = o.background;

        let Some((x, y)) = self.scales() else {
            debug!("empty dataset, nothing to draw");
            return Ok(scene);
        };
        debug!(
            bands = x.len(),
            bandwidth = x.bandwidth(),
            y_domain = ?y.domain(),
            "scales built"
        );
        let rows = self.data.observations();

        for (center, radius) in bubbles(rows, &x, &y) {
            scene.primitives.push(Primitive::Circle { center, radius, style: Style::fill(BUBBLE_FILL) });
        }

        let dashed = revenue_line(rows, &x, &y);
        scene.primitives.push(path("line", dashed.to_commands(), Style::stroke(Stroke::dashed(Color::BLUE, &DASH))));

        let c1 = curve_line(rows, &x, &y, |o| o.curve1);
        scene.primitives.push(path("curve-line-1", c1.to_commands(), Style::stroke(Stroke::solid(Color::GREEN))));

        let c2 = curve_line(rows, &x, &y, |o| o.curve2);
        scene.primitives.push(path("curve-line-2", c2.to_commands(), Style::stroke(Stroke::solid(Color::ORANGE))));

        let band = range_area(rows, &x, &y);
        scene.primitives.push(path("area", band.to_commands(), Style::fill(AREA_FILL)));

        scene.primitives.push(Primitive::Axis { class: "x-axis".into(), axis: Axis::bottom(&x, o.plot_height()) });
        scene.primitives.push(Primitive::Axis { class: "y-axis".into(), axis: Axis::left(&y, o.tick_count) });

        debug!(primitives = scene.primitives.len(), "scene built");
        Ok(scene)
    }
}

fn path(class: &str, commands: Vec<PathCommand>, style: Style) -> Primitive {
    Primitive::Path { class: class.to_string(), commands, style }
}

fn defined(v: f64) -> Option<f64> {
    is_defined(v).then_some(v)
}

/// Dashed revenue line through band centers, linear, broken at NaN.
pub fn revenue_line(rows: &[Observation], x: &BandScale, y: &LinearScale) -> PathGeometry {
    LineGenerator::new(
        |o: &Observation| x.center(&o.category),
        |o: &Observation| defined(o.revenue).map(|v| y.map(v)),
    )
    .generate(rows)
}

/// Cardinal-spline overlay over the auxiliary series picked by `value`.
pub fn curve_line<F>(rows: &[Observation], x: &BandScale, y: &LinearScale, value: F) -> PathGeometry
where
    F: Fn(&Observation) -> f64,
{
    LineGenerator::new(
        |o: &Observation| x.center(&o.category),
        |o: &Observation| defined(value(o)).map(|v| y.map(v)),
    )
    .curve(Curve::cardinal())
    .generate(rows)
}

/// Shaded band between min and max range, anchored at band starts.
pub fn range_area(rows: &[Observation], x: &BandScale, y: &LinearScale) -> AreaGeometry {
    AreaGenerator::new(
        |o: &Observation| x.position(&o.category),
        |o: &Observation| defined(o.min_range).map(|v| y.map(v)),
        |o: &Observation| defined(o.max_range).map(|v| y.map(v)),
    )
    .generate(rows)
}

/// Bubble centers and raw radii. Bubbles whose category is unknown to the
/// band scale, or whose y/size is absent, are skipped.
pub fn bubbles(rows: &[Observation], x: &BandScale, y: &LinearScale) -> Vec<(Point, f64)> {
    let mut out = Vec::with_capacity(rows.len());
    for o in rows {
        let b = &o.bubble;
        let Some(cx) = x.center(&b.category) else {
            debug!(row = %o.category, bubble = %b.category, "bubble category not on axis, skipped");
            continue;
        };
        if !is_defined(b.y) || !(b.size >= 0.0) {
            debug!(row = %o.category, "bubble without position or size, skipped");
            continue;
        }
        out.push((Point::new(cx, y.map(b.y)), b.size));
    }
    out
}
