// File: crates/chart-core/src/svg.rs
// Summary: SVG backend; serialises a scene into standalone SVG markup.
// Notes:
// - Axis lines are shifted by half a pixel so 1px strokes land on pixel
//   centers.
// - Output is a pure function of the scene, so identical scenes produce
//   identical strings.

use std::fmt::Write as _;

use crate::axis::{Axis, Orient};
use crate::scene::{Primitive, Scene, Style};
use crate::shape::PathCommand;

const AXIS_OFFSET: f64 = 0.5;

/// Render `scene` to an `<svg>` document.
pub fn render(scene: &Scene) -> String {
    let mut out = String::with_capacity(4096);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        scene.width, scene.height
    );
    if let Some(bg) = scene.background {
        let _ = write!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, bg.to_css());
    }
    let (tx, ty) = scene.translate();
    let _ = write!(out, r#"<g transform="translate({},{})">"#, num(tx), num(ty));
    for p in &scene.primitives {
        match p {
            Primitive::Circle { center, radius, style } => {
                let _ = write!(
                    out,
                    r#"<circle cx="{}" cy="{}" r="{}" style="{}"/>"#,
                    num(center.x),
                    num(center.y),
                    num(*radius),
                    style_css(style)
                );
            }
            Primitive::Path { class, commands, style } => {
                let _ = write!(
                    out,
                    r#"<path class="{}" d="{}" style="{}"/>"#,
                    escape(class),
                    path_data(commands),
                    style_css(style)
                );
            }
            Primitive::Axis { class, axis } => write_axis(&mut out, class, axis),
        }
    }
    out.push_str("</g></svg>");
    out
}

/// SVG path data (`d` attribute) for a command list.
pub fn path_data(commands: &[PathCommand]) -> String {
    let mut d = String::new();
    for c in commands {
        match *c {
            PathCommand::MoveTo(p) => { let _ = write!(d, "M{},{}", num(p.x), num(p.y)); }
            PathCommand::LineTo(p) => { let _ = write!(d, "L{},{}", num(p.x), num(p.y)); }
            PathCommand::CubicTo(a, b, p) => {
                let _ = write!(
                    d,
                    "C{},{},{},{},{},{}",
                    num(a.x), num(a.y), num(b.x), num(b.y), num(p.x), num(p.y)
                );
            }
            PathCommand::Close => d.push('Z'),
        }
    }
    d
}

fn style_css(style: &Style) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(s) = &style.stroke {
        parts.push(format!("stroke: {}", s.color.to_css()));
        if (s.width - 1.0).abs() > f32::EPSILON {
            parts.push(format!("stroke-width: {}", num(s.width as f64)));
        }
        if !s.dash.is_empty() {
            let dash: Vec<String> = s.dash.iter().map(|v| num(*v as f64)).collect();
            parts.push(format!("stroke-dasharray: {}", dash.join(",")));
        }
    }
    match style.fill {
        Some(c) => parts.push(format!("fill: {}", c.to_css())),
        None => parts.push("fill: none".to_string()),
    }
    parts.join("; ")
}

fn write_axis(out: &mut String, class: &str, axis: &Axis) {
    let anchor = match axis.orient {
        Orient::Bottom => "middle",
        Orient::Left => "end",
    };
    let (dx, dy) = axis.outward();
    let k = dx + dy;
    let r0 = axis.range.0 + AXIS_OFFSET;
    let r1 = axis.range.1 + AXIS_OFFSET;
    let outer = num(k * axis.tick_size_outer);
    let _ = write!(out, r#"<g class="{}""#, escape(class));
    if axis.origin.x != 0.0 || axis.origin.y != 0.0 {
        let _ = write!(out, r#" transform="translate({},{})""#, num(axis.origin.x), num(axis.origin.y));
    }
    let _ = write!(out, r#" fill="none" font-size="10" font-family="sans-serif" text-anchor="{anchor}">"#);

    let domain = match axis.orient {
        Orient::Bottom => format!("M{},{}V{}H{}V{}", num(r0), outer, num(AXIS_OFFSET), num(r1), outer),
        Orient::Left => format!("M{},{}H{}V{}H{}", outer, num(r0), num(AXIS_OFFSET), num(r1), outer),
    };
    let _ = write!(out, r#"<path class="domain" stroke="currentColor" d="{domain}"/>"#);

    let inner = num(k * axis.tick_size_inner);
    let spacing = num(k * (axis.tick_size_inner.max(0.0) + axis.tick_padding));
    for t in &axis.ticks {
        let pos = num(t.offset + AXIS_OFFSET);
        match axis.orient {
            Orient::Bottom => {
                let _ = write!(
                    out,
                    r#"<g class="tick" transform="translate({pos},0)"><line stroke="currentColor" y2="{inner}"/><text fill="currentColor" y="{spacing}" dy="0.71em">{}</text></g>"#,
                    escape(&t.label)
                );
            }
            Orient::Left => {
                let _ = write!(
                    out,
                    r#"<g class="tick" transform="translate(0,{pos})"><line stroke="currentColor" x2="{inner}"/><text fill="currentColor" x="{spacing}" dy="0.32em">{}</text></g>"#,
                    escape(&t.label)
                );
            }
        }
    }
    out.push_str("</g>");
}

/// Shortest decimal form, rounded to 1/1000 px.
fn num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    let r = if r == 0.0 { 0.0 } else { r };
    let s = format!("{r:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
