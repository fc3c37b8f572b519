// File: crates/chart-dioxus/src/lib.rs
// Summary: Dioxus UI element for the mixed chart: a title and an SVG drawing surface (desktop only).
// Notes:
// - This crate keeps UI deps behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - The render pass runs once per mount (`use_hook`); remounting builds a fresh
//   surface, nothing is carried between mounts.

use chart_core::{svg, ChartOptions, MixedChart};

/// SVG markup for the drawing surface of the built-in chart.
pub fn surface_markup(options: &ChartOptions) -> chart_core::Result<String> {
    let scene = MixedChart::sample().with_options(options.clone()).scene()?;
    tracing::debug!(primitives = scene.primitives.len(), "surface rendered");
    Ok(svg::render(&scene))
}

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use dioxus::prelude::*;

    /// Title plus drawing surface. The chart is laid out when the component
    /// mounts and never redrawn afterwards.
    #[component]
    pub fn MixedChartView(
        #[props(default = MixedChart::DEFAULT_TITLE.to_string())] title: String,
        #[props(default)] options: ChartOptions,
    ) -> Element {
        let surface = use_hook(|| match surface_markup(&options) {
            Ok(markup) => markup,
            Err(e) => {
                tracing::error!(error = %e, "chart render failed");
                String::new()
            }
        });

        rsx! {
            div {
                h1 { "{title}" }
                div {
                    class: "chart-surface",
                    style: format!("width:{}px; height:{}px;", options.width, options.height),
                    dangerous_inner_html: "{surface}",
                }
            }
        }
    }

    /// Tiny demo launcher so consumers can quickly mount the component.
    pub fn run_demo_ui() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            rsx! { super::ui::MixedChartView {} }
        }

        let opts = ChartOptions::default();
        let window = dioxus_desktop::WindowBuilder::new()
            .with_title(MixedChart::DEFAULT_TITLE)
            .with_inner_size(dioxus_desktop::LogicalSize::new(opts.width as f64 + 40.0, opts.height as f64 + 120.0));
        let cfg = dioxus_desktop::Config::new()
            .with_window(window)
            .with_prerendered("<style>html,body{margin:0;font-family:sans-serif}</style>".to_string());

        // Dioxus 0.6 launch with explicit providers vec
        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("chart-dioxus built without `desktop` feature; enable features to run UI demo")
}
