// File: crates/chart-render-skia/tests/snapshot.rs
// Purpose: Golden PNG snapshot for the Skia backend with UPDATE_SNAPSHOTS bless flow.
// Behavior:
// - Renders the built-in chart without labels (font-independent pixels).
// - UPDATE_SNAPSHOTS=1 rewrites the golden file.
// - Otherwise compares decoded RGBA pixels when a golden file exists, else skips.

use chart_core::MixedChart;
use chart_render_skia::SkiaRenderer;

#[test]
fn golden_mixed_chart_png() {
    let scene = MixedChart::sample().scene().expect("scene");
    let bytes = SkiaRenderer::new().with_labels(false).render_to_png_bytes(&scene).expect("render");

    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("mixed_chart.png");
    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if !snap_path.exists() {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        return;
    }

    let got = image::load_from_memory(&bytes).expect("decode render").to_rgba8();
    let want = image::open(&snap_path).expect("decode snapshot").to_rgba8();
    assert_eq!(got.dimensions(), want.dimensions(), "snapshot size differs");
    assert!(got.as_raw() == want.as_raw(), "rendered PNG differs from golden snapshot: {}", snap_path.display());
}
