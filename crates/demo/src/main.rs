// File: crates/demo/src/main.rs
// Summary: Demo renders the built-in mixed chart to PNG (Skia), SVG and a JSON scene dump.

use anyhow::{Context, Result};
use chart_core::{svg, ChartOptions, MixedChart, Scene};
use chart_render_skia::SkiaRenderer;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Png,
    Svg,
    Json,
    All,
}

#[derive(Parser, Debug)]
#[command(name = "mixed-chart-demo")]
#[command(about = "Render the mixed chart example to image files")]
#[command(version)]
struct Args {
    /// Directory the output files are written to
    #[arg(short, long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::All)]
    format: Format,

    /// Canvas width in pixels, margins included
    #[arg(long, default_value_t = chart_core::types::WIDTH)]
    width: u32,

    /// Canvas height in pixels, margins included
    #[arg(long, default_value_t = chart_core::types::HEIGHT)]
    height: u32,

    /// Skip axis labels in the PNG (deterministic pixels across platforms)
    #[arg(long)]
    no_labels: bool,
}

impl Args {
    fn chart_options(&self) -> ChartOptions {
        ChartOptions { width: self.width, height: self.height, ..ChartOptions::default() }
    }

    fn wants(&self, f: Format) -> bool {
        self.format == Format::All || self.format == f
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mixed_chart_demo=info,chart_core=info,chart_render_skia=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let chart = MixedChart::sample().with_options(args.chart_options());
    info!(title = %chart.title, rows = chart.data.len(), "rendering chart");

    let scene = chart.scene().context("building chart scene")?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    if args.wants(Format::Png) {
        let out = args.out_dir.join("mixed_chart.png");
        SkiaRenderer::new().with_labels(!args.no_labels).render_to_png(&scene, &out)?;
    }
    if args.wants(Format::Svg) {
        write_svg(&scene, &args.out_dir.join("mixed_chart.svg"))?;
    }
    if args.wants(Format::Json) {
        write_json(&scene, &args.out_dir.join("mixed_chart.json"))?;
    }
    Ok(())
}

fn write_svg(scene: &Scene, out: &Path) -> Result<()> {
    let markup = svg::render(scene);
    std::fs::write(out, &markup).with_context(|| format!("writing {}", out.display()))?;
    info!(path = %out.display(), bytes = markup.len(), "wrote svg");
    Ok(())
}

fn write_json(scene: &Scene, out: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(scene).context("serialising scene")?;
    std::fs::write(out, &json).with_context(|| format!("writing {}", out.display()))?;
    info!(path = %out.display(), bytes = json.len(), "wrote scene dump");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_chart_options() {
        let args = Args::try_parse_from(["mixed-chart-demo"]).expect("parse");
        assert_eq!(args.format, Format::All);
        assert_eq!(args.out_dir, PathBuf::from("target/out"));
        assert_eq!(args.chart_options(), ChartOptions::default());
        assert!(args.wants(Format::Png) && args.wants(Format::Svg) && args.wants(Format::Json));
    }

    #[test]
    fn single_format_and_size_override() {
        let args = Args::try_parse_from(["mixed-chart-demo", "--format", "svg", "--width", "800", "--height", "500"])
            .expect("parse");
        assert!(args.wants(Format::Svg));
        assert!(!args.wants(Format::Png));
        let opts = args.chart_options();
        assert_eq!((opts.width, opts.height), (800, 500));
    }

    #[test]
    fn svg_and_json_outputs_are_written() {
        let dir = PathBuf::from("target/test_out/demo");
        std::fs::create_dir_all(&dir).unwrap();
        let scene = MixedChart::sample().scene().unwrap();
        write_svg(&scene, &dir.join("mixed_chart.svg")).unwrap();
        write_json(&scene, &dir.join("mixed_chart.json")).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.join("mixed_chart.json")).unwrap()).unwrap();
        assert_eq!(json["height"], 400);
        let markup = std::fs::read_to_string(dir.join("mixed_chart.svg")).unwrap();
        assert!(markup.starts_with("<svg"));
    }
}
