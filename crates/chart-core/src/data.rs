// File: crates/chart-core/src/data.rs
// Summary: Observation model (one row per category) and the built-in dataset.
// Notes:
// - Numeric fields use NaN for "absent"; generators skip those points and
//   break path continuity instead of failing.
// - The bubble carries its own category reference which is resolved against
//   the band scale independently of the row's own category.

use serde::Serialize;

/// True when a sample value is present (not NaN).
#[inline]
pub fn is_defined(v: f64) -> bool {
    !v.is_nan()
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bubble {
    pub category: String,
    pub y: f64,
    /// Radius in pixels, applied without a scale.
    pub size: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Observation {
    pub category: String,
    pub revenue: f64,
    pub profit: f64,
    pub min_range: f64,
    pub max_range: f64,
    pub bubble: Bubble,
    pub curve1: f64,
    pub curve2: f64,
}

impl Observation {
    /// Row for `category` with every numeric field absent.
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            revenue: f64::NAN,
            profit: f64::NAN,
            min_range: f64::NAN,
            max_range: f64::NAN,
            bubble: Bubble { category: String::new(), y: f64::NAN, size: f64::NAN },
            curve1: f64::NAN,
            curve2: f64::NAN,
        }
    }

    pub fn with_primary(mut self, revenue: f64, profit: f64) -> Self {
        self.revenue = revenue;
        self.profit = profit;
        self
    }

    pub fn with_range(mut self, min_range: f64, max_range: f64) -> Self {
        self.min_range = min_range;
        self.max_range = max_range;
        self
    }

    pub fn with_bubble(mut self, category: impl Into<String>, y: f64, size: f64) -> Self {
        self.bubble = Bubble { category: category.into(), y, size };
        self
    }

    pub fn with_curves(mut self, curve1: f64, curve2: f64) -> Self {
        self.curve1 = curve1;
        self.curve2 = curve2;
        self
    }

    /// Largest defined primary value of this row. A NaN in either primary
    /// series makes the whole row contribute nothing.
    pub fn primary_max(&self) -> Option<f64> {
        let m = self.revenue.max(self.profit);
        if is_defined(self.revenue) && is_defined(self.profit) { Some(m) } else { None }
    }
}

/// Ordered, immutable sequence of observations.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// The three-month literal the chart ships with.
    pub fn sample() -> Self {
        Self::new(vec![
            Observation::new("Jan")
                .with_primary(30.0, 10.0)
                .with_range(10.0, 20.0)
                .with_bubble("Apr", 40.0, 15.0)
                .with_curves(25.0, 15.0),
            Observation::new("Feb")
                .with_primary(40.0, 20.0)
                .with_range(15.0, 25.0)
                .with_bubble("May", 50.0, 20.0)
                .with_curves(30.0, 20.0),
            Observation::new("Mar")
                .with_primary(25.0, 10.0)
                .with_range(20.0, 30.0)
                .with_bubble("Jun", 60.0, 25.0)
                .with_curves(35.0, 25.0),
        ])
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize { self.observations.len() }

    pub fn is_empty(&self) -> bool { self.observations.is_empty() }

    /// Distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(self.observations.len());
        for o in &self.observations {
            if !out.iter().any(|c| c == &o.category) {
                out.push(o.category.clone());
            }
        }
        out
    }

    /// Maximum over both primary series; `None` when no row is defined.
    pub fn primary_max(&self) -> Option<f64> {
        self.observations
            .iter()
            .filter_map(Observation::primary_max)
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }
}
