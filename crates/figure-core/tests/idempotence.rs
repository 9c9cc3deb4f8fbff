// File: crates/figure-core/tests/idempotence.rs
// Purpose: Rendering the same request twice yields byte-identical pages.

use figure_core::{render, AxisSpec, Dataset, LegendPosition, LegendSpec, RenderRequest, StyleSpec};

fn one_consumer(out: &std::path::Path) -> RenderRequest {
    let dataset = Dataset::with_x_values("one-consumer", vec![1.0, 2.0, 4.0, 6.0, 8.0])
        .series("Kafka", vec![26.66, 25.5, 20.94, 17.55, 13.63])
        .series("FastPS", vec![33.06, 32.7032, 33.9304, 32.6408, 31.7496]);
    RenderRequest::new(
        dataset,
        AxisSpec::new("No. of Consumers").with_font_sizes(24.0, 20.0),
        AxisSpec::new("Throughput (Mbps)").with_font_sizes(24.0, 20.0).with_max(35.0),
        StyleSpec::line_with_markers().with_legend(LegendSpec::new(LegendPosition::Above, 2).with_font_size(14.0)),
        out,
    )
}

fn render_twice(name: &str) -> (Vec<u8>, Vec<u8>) {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join(name);
    render(one_consumer(&out)).expect("first render");
    let first = std::fs::read(&out).unwrap();
    render(one_consumer(&out)).expect("second render");
    let second = std::fs::read(&out).unwrap();
    (first, second)
}

#[test]
fn pdf_output_is_deterministic() {
    let (a, b) = render_twice("one_consumer.pdf");
    assert!(!a.is_empty());
    assert_eq!(a, b, "PDF bytes differ between identical renders");
}

#[test]
fn svg_output_is_deterministic() {
    let (a, b) = render_twice("one_consumer.svg");
    assert_eq!(a, b, "SVG bytes differ between identical renders");
}

#[test]
fn png_output_is_deterministic() {
    let (a, b) = render_twice("one_consumer.png");
    assert_eq!(a, b, "PNG bytes differ between identical renders");
}
