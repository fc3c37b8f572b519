// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, colors, margins, points).

use serde::Serialize;

/// Default canvas width in pixels (plot + margins).
pub const WIDTH: u32 = 600;
/// Default canvas height in pixels (plot + margins).
pub const HEIGHT: u32 = 400;

/// Canvas margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right), saturating at `u32::MAX`.
    pub const fn hsum(&self) -> u32 { self.left.saturating_add(self.right) }
    /// Total vertical inset (top + bottom), saturating at `u32::MAX`.
    pub const fn vsum(&self) -> u32 { self.top.saturating_add(self.bottom) }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(50, 30, 20, 40)
    }
}

/// A point in plot coordinates (origin top-left of the translated group).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// Straight RGBA color; `a` is opacity in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// CSS `green`.
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    /// CSS `orange`.
    pub const ORANGE: Color = Color::rgb(255, 165, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Alpha as an 8-bit channel.
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// CSS color string: `#rrggbb` when opaque, `rgba(...)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}
