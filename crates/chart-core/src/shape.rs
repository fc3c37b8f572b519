// File: crates/chart-core/src/shape.rs
// Summary: Line and area generators turning samples into path geometry and drawing commands.
// Notes:
// - A sample is "defined" when its accessor yields a position; undefined
//   samples end the current segment, so gaps are never bridged.
// - A segment with a single vertex is kept (it expands to a lone MoveTo) but
//   draws nothing.

use serde::Serialize;

use crate::types::Point;

/// Interpolation between consecutive vertices of a segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Curve {
    Linear,
    /// Cardinal spline through every vertex; tension 0 is the classic
    /// Catmull-Rom-like shape, tension 1 degenerates to straight lines.
    Cardinal { tension: f64 },
}

impl Curve {
    pub const fn cardinal() -> Self { Curve::Cardinal { tension: 0.0 } }
}

/// Primitive drawing command in plot coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
    Close,
}

/// Open polyline geometry: disconnected runs of defined vertices plus the
/// interpolation used within each run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathGeometry {
    pub segments: Vec<Vec<Point>>,
    pub curve: Curve,
}

impl PathGeometry {
    /// Number of runs with at least two vertices (the ones that show up).
    pub fn visible_segments(&self) -> usize {
        self.segments.iter().filter(|s| s.len() >= 2).count()
    }

    pub fn to_commands(&self) -> Vec<PathCommand> {
        let mut out = Vec::new();
        for seg in &self.segments {
            emit_segment(&mut out, seg, self.curve, false);
        }
        out
    }
}

/// Closed band between an upper and a lower boundary sharing x positions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AreaRegion {
    pub upper: Vec<Point>,
    pub lower: Vec<Point>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AreaGeometry {
    pub regions: Vec<AreaRegion>,
    pub curve: Curve,
}

impl AreaGeometry {
    /// Upper boundary forward, lower boundary backward, then close.
    pub fn to_commands(&self) -> Vec<PathCommand> {
        let mut out = Vec::new();
        for r in &self.regions {
            if r.upper.is_empty() { continue; }
            emit_segment(&mut out, &r.upper, self.curve, false);
            let back: Vec<Point> = r.lower.iter().rev().copied().collect();
            emit_segment(&mut out, &back, self.curve, true);
            out.push(PathCommand::Close);
        }
        out
    }
}

/// Line generator: `x`/`y` return `None` for samples that are undefined.
pub struct LineGenerator<X, Y> {
    x: X,
    y: Y,
    curve: Curve,
}

impl<X, Y> LineGenerator<X, Y> {
    pub fn new(x: X, y: Y) -> Self {
        Self { x, y, curve: Curve::Linear }
    }

    pub fn curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    pub fn generate<T>(&self, data: &[T]) -> PathGeometry
    where
        X: Fn(&T) -> Option<f64>,
        Y: Fn(&T) -> Option<f64>,
    {
        let mut segments: Vec<Vec<Point>> = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        for d in data {
            match ((self.x)(d), (self.y)(d)) {
                (Some(x), Some(y)) => current.push(Point::new(x, y)),
                _ => {
                    if !current.is_empty() { segments.push(std::mem::take(&mut current)); }
                }
            }
        }
        if !current.is_empty() { segments.push(current); }
        PathGeometry { segments, curve: self.curve }
    }
}

/// Area generator: one x and two y accessors (lower `y0`, upper `y1`).
/// Both bounds must be defined for a sample to contribute.
pub struct AreaGenerator<X, Y0, Y1> {
    x: X,
    y0: Y0,
    y1: Y1,
    curve: Curve,
}

impl<X, Y0, Y1> AreaGenerator<X, Y0, Y1> {
    pub fn new(x: X, y0: Y0, y1: Y1) -> Self {
        Self { x, y0, y1, curve: Curve::Linear }
    }

    pub fn curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    pub fn generate<T>(&self, data: &[T]) -> AreaGeometry
    where
        X: Fn(&T) -> Option<f64>,
        Y0: Fn(&T) -> Option<f64>,
        Y1: Fn(&T) -> Option<f64>,
    {
        let mut regions: Vec<AreaRegion> = Vec::new();
        let mut upper: Vec<Point> = Vec::new();
        let mut lower: Vec<Point> = Vec::new();
        for d in data {
            match ((self.x)(d), (self.y0)(d), (self.y1)(d)) {
                (Some(x), Some(y0), Some(y1)) => {
                    upper.push(Point::new(x, y1));
                    lower.push(Point::new(x, y0));
                }
                _ => {
                    if !upper.is_empty() {
                        regions.push(AreaRegion {
                            upper: std::mem::take(&mut upper),
                            lower: std::mem::take(&mut lower),
                        });
                    }
                }
            }
        }
        if !upper.is_empty() { regions.push(AreaRegion { upper, lower }); }
        AreaGeometry { regions, curve: self.curve }
    }
}

// ---- interpolation ----------------------------------------------------------

fn emit_segment(out: &mut Vec<PathCommand>, pts: &[Point], curve: Curve, continue_path: bool) {
    let Some(&first) = pts.first() else { return };
    out.push(if continue_path { PathCommand::LineTo(first) } else { PathCommand::MoveTo(first) });
    match curve {
        Curve::Linear => {
            for &p in &pts[1..] { out.push(PathCommand::LineTo(p)); }
        }
        Curve::Cardinal { tension } => cardinal(out, pts, tension),
    }
}

/// Cubic pieces for a cardinal spline; the caller already moved to `pts[0]`.
/// End tangents reuse the neighbouring vertex, so the first control point
/// sits on the first vertex and the last on the last.
fn cardinal(out: &mut Vec<PathCommand>, pts: &[Point], tension: f64) {
    let n = pts.len();
    if n < 2 { return; }
    if n == 2 {
        out.push(PathCommand::LineTo(pts[1]));
        return;
    }
    let k = (1.0 - tension) / 6.0;
    for i in 0..n - 1 {
        let p1 = pts[i];
        let p2 = pts[i + 1];
        let c1 = if i == 0 {
            p1
        } else {
            let p0 = pts[i - 1];
            Point::new(p1.x + k * (p2.x - p0.x), p1.y + k * (p2.y - p0.y))
        };
        let c2 = if i + 2 >= n {
            p2
        } else {
            let p3 = pts[i + 2];
            Point::new(p2.x + k * (p1.x - p3.x), p2.y + k * (p1.y - p3.y))
        };
        out.push(PathCommand::CubicTo(c1, c2, p2));
    }
}
