// File: crates/chart-core/src/scene.rs
// Summary: Renderer-agnostic drawing primitives with styles, in draw order.

use serde::Serialize;

use crate::axis::Axis;
use crate::shape::PathCommand;
use crate::types::{Color, Insets, Point};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    /// On/off lengths in pixels; empty for a solid stroke.
    pub dash: Vec<f32>,
}

impl Stroke {
    pub fn solid(color: Color) -> Self {
        Self { color, width: 1.0, dash: Vec::new() }
    }

    pub fn dashed(color: Color, dash: &[f32]) -> Self {
        Self { color, width: 1.0, dash: dash.to_vec() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl Style {
    pub fn fill(color: Color) -> Self {
        Self { fill: Some(color), stroke: None }
    }

    pub fn stroke(stroke: Stroke) -> Self {
        Self { fill: None, stroke: Some(stroke) }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Primitive {
    Circle { center: Point, radius: f64, style: Style },
    Path { class: String, commands: Vec<PathCommand>, style: Style },
    Axis { class: String, axis: Axis },
}

/// Everything needed to draw one chart: canvas size, the margin translation
/// of the plot group, and primitives in paint order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub margin: Insets,
    pub background: Option<Color>,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn empty(width: u32, height: u32, margin: Insets) -> Self {
        Self { width, height, margin, background: None, primitives: Vec::new() }
    }

    pub fn is_empty(&self) -> bool { self.primitives.is_empty() }

    /// Plot-group translation (left, top).
    pub fn translate(&self) -> (f64, f64) {
        (self.margin.left as f64, self.margin.top as f64)
    }

    pub fn circles(&self) -> impl Iterator<Item = (&Point, f64)> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Circle { center, radius, .. } => Some((center, *radius)),
            _ => None,
        })
    }

    /// Path commands for the path primitive tagged with `class`.
    pub fn path(&self, class: &str) -> Option<&[PathCommand]> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Path { class: c, commands, .. } if c == class => Some(commands.as_slice()),
            _ => None,
        })
    }

    pub fn axis(&self, class: &str) -> Option<&Axis> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Axis { class: c, axis } if c == class => Some(axis),
            _ => None,
        })
    }
}
