// File: crates/figure-core/tests/smoke.rs
// Purpose: End-to-end renders writing one page per request in each output format.

use figure_core::{render, AxisSpec, Dataset, LegendPosition, LegendSpec, RenderRequest, StyleSpec};

fn request(out: &std::path::Path, style: StyleSpec) -> RenderRequest {
    let dataset = Dataset::with_categories("cumulative", [1, 2, 4, 6, 8])
        .series("Kafka", vec![26.66, 51.32, 83.4, 103.99, 109.15])
        .series("FastPS", vec![33.06, 65.85, 132.24, 197.18, 251.76]);
    RenderRequest::new(
        dataset,
        AxisSpec::new("No. of Consumers"),
        AxisSpec::new("Throughput (Mbps)").with_max(260.0),
        style.with_legend(LegendSpec::new(LegendPosition::Above, 2)),
        out,
    )
}

#[test]
fn render_smoke_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("bars.pdf");

    render(request(&out, StyleSpec::grouped_bar())).expect("render should succeed");
    let bytes = std::fs::read(&out).expect("output exists");
    assert!(bytes.starts_with(b"%PDF"), "should be a PDF document");

    // exactly one file, no leftover temp files
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn render_smoke_svg_and_png() {
    let dir = tempfile::tempdir().unwrap();

    let svg = dir.path().join("lines.svg");
    render(request(&svg, StyleSpec::line_with_markers())).expect("svg render");
    let text = std::fs::read_to_string(&svg).expect("svg exists");
    assert!(text.contains("<svg"), "should be an SVG document");

    let png = dir.path().join("lines.png");
    render(request(&png, StyleSpec::line_with_markers())).expect("png render");
    let bytes = std::fs::read(&png).expect("png exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("again.pdf");
    std::fs::write(&out, b"stale").unwrap();

    render(request(&out, StyleSpec::grouped_bar())).expect("render should succeed");
    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn documents_are_titled_after_the_dataset() {
    let dir = tempfile::tempdir().unwrap();

    let pdf = dir.path().join("titled.pdf");
    render(request(&pdf, StyleSpec::grouped_bar())).expect("pdf render");
    let bytes = std::fs::read(&pdf).unwrap();
    assert!(contains(&bytes, b"/Title"), "PDF info has no title");
    assert!(contains(&bytes, b"cumulative"), "PDF title should name the dataset");
    assert!(!contains(&bytes, b"/CreationDate"), "dates would break reproducible output");

    let svg = dir.path().join("titled.svg");
    render(request(&svg, StyleSpec::grouped_bar())).expect("svg render");
    let text = std::fs::read_to_string(&svg).unwrap();
    let root = text.find("<svg").unwrap();
    let title = text.find("<title>cumulative</title>").expect("svg title");
    assert!(title > root);
}

#[cfg(unix)]
#[test]
fn written_pages_are_not_private_temp_files() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("mode.pdf");
    render(request(&out, StyleSpec::grouped_bar())).expect("render should succeed");
    let mode = std::fs::metadata(&out).unwrap().permissions().mode() & 0o777;
    // 0o644 under the usual 022 umask
    assert_ne!(mode, 0o600, "page kept the temp-file mode");
    assert_eq!(mode & 0o600, 0o600);
}
