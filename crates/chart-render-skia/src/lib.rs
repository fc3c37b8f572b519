// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster backend; draws a chart-core Scene and encodes PNG or raw RGBA.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::{debug, info};

use chart_core::{Axis, ChartError, Color, Orient, PathCommand, Primitive, Scene, Style};

const AXIS_OFFSET: f32 = 0.5;

pub struct SkiaRenderer {
    /// Draw tick labels. Off gives platform-independent pixels.
    pub draw_labels: bool,
    pub font_size: f32,
    /// Used when the scene has no background of its own.
    pub fallback_background: skia::Color,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self {
            draw_labels: true,
            font_size: 10.0,
            fallback_background: skia::Color::WHITE,
        }
    }
}

impl SkiaRenderer {
    pub fn new() -> Self { Self::default() }

    pub fn with_labels(mut self, draw_labels: bool) -> Self {
        self.draw_labels = draw_labels;
        self
    }

    /// Render the scene to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, scene: &Scene, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(scene)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ChartError::from)?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }

    /// Render the scene and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let mut surface = self.draw(scene)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Encode("PNG encoding returned no data".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the scene and return unpremultiplied RGBA8 pixels as
    /// `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, scene: &Scene) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.draw(scene)?;
        let (w, h) = (scene.width, scene.height);
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::Surface("reading back raster pixels failed".into()).into());
        }
        Ok((pixels, w, h, row_bytes))
    }

    fn draw(&self, scene: &Scene) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((scene.width as i32, scene.height as i32))
            .ok_or_else(|| ChartError::Surface(format!("failed to create {}x{} raster surface", scene.width, scene.height)))?;
        let canvas = surface.canvas();

        canvas.clear(scene.background.map(to_skia).unwrap_or(self.fallback_background));

        let (tx, ty) = scene.translate();
        canvas.save();
        canvas.translate((tx as f32, ty as f32));
        for p in &scene.primitives {
            match p {
                Primitive::Circle { center, radius, style } => {
                    for paint in paints(style) {
                        canvas.draw_circle((center.x as f32, center.y as f32), *radius as f32, &paint);
                    }
                }
                Primitive::Path { commands, style, .. } => {
                    let path = build_path(commands);
                    for paint in paints(style) {
                        canvas.draw_path(&path, &paint);
                    }
                }
                Primitive::Axis { axis, .. } => self.draw_axis(canvas, axis),
            }
        }
        canvas.restore();
        debug!(primitives = scene.primitives.len(), "raster pass done");
        Ok(surface)
    }

    fn draw_axis(&self, canvas: &skia::Canvas, axis: &Axis) {
        let mut line = skia::Paint::default();
        line.set_anti_alias(true);
        line.set_style(skia::paint::Style::Stroke);
        line.set_stroke_width(1.0);
        line.set_color(skia::Color::BLACK);

        let (dx, dy) = axis.outward();
        let k = (dx + dy) as f32;
        let outer = k * axis.tick_size_outer as f32;
        let inner = k * axis.tick_size_inner as f32;
        let r0 = axis.range.0 as f32 + AXIS_OFFSET;
        let r1 = axis.range.1 as f32 + AXIS_OFFSET;

        canvas.save();
        canvas.translate((axis.origin.x as f32, axis.origin.y as f32));

        let mut domain = skia::Path::new();
        match axis.orient {
            Orient::Bottom => {
                domain.move_to((r0, outer));
                domain.line_to((r0, AXIS_OFFSET));
                domain.line_to((r1, AXIS_OFFSET));
                domain.line_to((r1, outer));
            }
            Orient::Left => {
                domain.move_to((outer, r0));
                domain.line_to((AXIS_OFFSET, r0));
                domain.line_to((AXIS_OFFSET, r1));
                domain.line_to((outer, r1));
            }
        }
        canvas.draw_path(&domain, &line);

        let font = self.font();
        let mut text = skia::Paint::default();
        text.set_anti_alias(true);
        text.set_color(skia::Color::BLACK);
        let spacing = k * (axis.tick_size_inner.max(0.0) + axis.tick_padding) as f32;

        for t in &axis.ticks {
            let pos = t.offset as f32 + AXIS_OFFSET;
            match axis.orient {
                Orient::Bottom => {
                    canvas.draw_line((pos, 0.0), (pos, inner), &line);
                    if self.draw_labels {
                        let (w, _) = font.measure_str(&t.label, Some(&text));
                        canvas.draw_str(&t.label, (pos - w * 0.5, spacing + 0.71 * self.font_size), &font, &text);
                    }
                }
                Orient::Left => {
                    canvas.draw_line((0.0, pos), (inner, pos), &line);
                    if self.draw_labels {
                        let (w, _) = font.measure_str(&t.label, Some(&text));
                        canvas.draw_str(&t.label, (spacing - w, pos + 0.32 * self.font_size), &font, &text);
                    }
                }
            }
        }
        canvas.restore();
    }

    fn font(&self) -> skia::Font {
        let mgr = skia::FontMgr::default();
        match mgr.legacy_make_typeface(None::<&str>, skia::FontStyle::default()) {
            Some(typeface) => skia::Font::new(typeface, self.font_size),
            None => {
                let mut font = skia::Font::default();
                font.set_size(self.font_size);
                font
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.alpha_u8(), c.r, c.g, c.b)
}

/// Fill first, then stroke, matching SVG paint order.
fn paints(style: &Style) -> Vec<skia::Paint> {
    let mut out = Vec::with_capacity(2);
    if let Some(fill) = style.fill {
        let mut p = skia::Paint::default();
        p.set_anti_alias(true);
        p.set_style(skia::paint::Style::Fill);
        p.set_color(to_skia(fill));
        out.push(p);
    }
    if let Some(stroke) = &style.stroke {
        let mut p = skia::Paint::default();
        p.set_anti_alias(true);
        p.set_style(skia::paint::Style::Stroke);
        p.set_stroke_width(stroke.width);
        p.set_color(to_skia(stroke.color));
        if !stroke.dash.is_empty() {
            p.set_path_effect(skia::PathEffect::dash(&stroke.dash, 0.0));
        }
        out.push(p);
    }
    out
}

fn build_path(commands: &[PathCommand]) -> skia::Path {
    let pt = |p: &chart_core::Point| (p.x as f32, p.y as f32);
    let mut path = skia::Path::new();
    for c in commands {
        match c {
            PathCommand::MoveTo(p) => { path.move_to(pt(p)); }
            PathCommand::LineTo(p) => { path.line_to(pt(p)); }
            PathCommand::CubicTo(a, b, p) => { path.cubic_to(pt(a), pt(b), pt(p)); }
            PathCommand::Close => { path.close(); }
        }
    }
    path
}
