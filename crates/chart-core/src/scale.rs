// File: crates/chart-core/src/scale.rs
// Summary: Band (categorical X) and linear (value Y) scales.

use serde::Serialize;

use crate::ticks;

/// Leftover range is split evenly before the first and after the last band.
const BAND_ALIGN: f64 = 0.5;

/// Categorical scale mapping each distinct label to a uniform pixel band.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl BandScale {
    /// Labels keep their order; duplicates collapse to the first occurrence.
    pub fn new<I, S>(labels: I, range: (f64, f64)) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut domain: Vec<String> = Vec::new();
        for l in labels {
            let l = l.into();
            if !domain.contains(&l) { domain.push(l); }
        }
        let mut s = Self {
            domain,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            step: 0.0,
            bandwidth: 0.0,
            start: range.0,
        };
        s.rescale();
        s
    }

    /// Set inner and outer padding together (fraction of the step).
    pub fn padding(mut self, p: f64) -> Self {
        let p = p.clamp(0.0, 1.0);
        self.padding_inner = p;
        self.padding_outer = p;
        self.rescale();
        self
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        let (lo, hi) = if r1 < r0 { (r1, r0) } else { (r0, r1) };
        self.step = (hi - lo) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        self.start = lo + (hi - lo - self.step * (n - self.padding_inner)) * BAND_ALIGN;
        self.bandwidth = self.step * (1.0 - self.padding_inner);
    }

    fn index_of(&self, label: &str) -> Option<usize> {
        self.domain.iter().position(|d| d == label)
    }

    /// Start offset of the band for `label`; `None` for labels outside the domain.
    pub fn position(&self, label: &str) -> Option<f64> {
        let i = self.index_of(label)?;
        let (r0, r1) = self.range;
        if r1 < r0 {
            let n = self.domain.len();
            Some(self.start + self.step * (n - 1 - i) as f64)
        } else {
            Some(self.start + self.step * i as f64)
        }
    }

    /// Center of the band for `label`.
    pub fn center(&self, label: &str) -> Option<f64> {
        self.position(label).map(|p| p + self.bandwidth * 0.5)
    }

    pub fn bandwidth(&self) -> f64 { self.bandwidth }
    pub fn step(&self) -> f64 { self.step }
    pub fn domain(&self) -> &[String] { &self.domain }
    pub fn range(&self) -> (f64, f64) { self.range }
    pub fn len(&self) -> usize { self.domain.len() }
    pub fn is_empty(&self) -> bool { self.domain.is_empty() }
}

/// Continuous scale mapping a value domain linearly onto a pixel range.
/// Inverted ranges (e.g. `(height, 0)`) put larger values nearer the top.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (d0, mut d1) = domain;
        if (d1 - d0).abs() < 1e-12 { d1 = d0 + 1.0; }
        Self { d0, d1, r0: range.0, r1: range.1 }
    }

    /// Extend the domain outward to round tick values. Repeats until the step
    /// settles, at most ten times.
    pub fn nice(mut self, count: usize) -> Self {
        if count == 0 { return self; }
        let reversed = self.d1 < self.d0;
        let (mut start, mut stop) = if reversed { (self.d1, self.d0) } else { (self.d0, self.d1) };
        let mut prestep: Option<f64> = None;
        for _ in 0..10 {
            let step = ticks::tick_increment(start, stop, count);
            if prestep == Some(step) {
                break;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
        if reversed { self.d0 = stop; self.d1 = start; } else { self.d0 = start; self.d1 = stop; }
        self
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let span = self.r1 - self.r0;
        if span.abs() < 1e-12 { return self.d0; }
        self.d0 + (px - self.r0) / span * (self.d1 - self.d0)
    }

    pub fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    pub fn range(&self) -> (f64, f64) { (self.r0, self.r1) }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks::ticks(self.d0, self.d1, count)
    }

    /// Label for each tick, printed with the precision of the tick step.
    pub fn tick_format(&self, count: usize) -> impl Fn(f64) -> String {
        let precision = ticks::precision_fixed(ticks::tick_step(self.d0, self.d1, count));
        move |v| ticks::format_fixed(v, precision)
    }
}
