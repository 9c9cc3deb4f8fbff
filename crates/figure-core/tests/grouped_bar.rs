// File: crates/figure-core/tests/grouped_bar.rs
// Purpose: Grouped-bar placement: N groups of K bars, labels under group centers.

use figure_core::bars::{extent, group_layout};
use figure_core::{render, AxisSpec, Chart, Dataset, RenderRequest, StyleSpec};

fn cumulative_request(out: &std::path::Path) -> RenderRequest {
    let dataset = Dataset::with_categories("cumulative", [1, 2, 4, 6, 8])
        .series("Kafka", vec![26.66, 51.32, 83.4, 103.99, 109.15])
        .series("FastPS", vec![33.06, 65.85, 132.24, 197.18, 251.76]);
    RenderRequest::new(
        dataset,
        AxisSpec::new("No. of Consumers"),
        AxisSpec::new("Throughput (Mbps)"),
        StyleSpec::grouped_bar(),
        out,
    )
}

#[test]
fn five_groups_of_two_bars() {
    let req = cumulative_request(std::path::Path::new("unused.pdf"));
    let chart = Chart::new(&req).expect("valid request");

    let groups = chart.bar_groups();
    assert_eq!(groups.len(), 5);
    assert!(groups.iter().all(|g| g.bars.len() == 2));

    // evenly spaced groups, bars one bar-width apart around each center
    for (i, g) in groups.iter().enumerate() {
        assert!((g.center - i as f64 * 0.75).abs() < 1e-12);
        assert!((g.bars[1] - g.bars[0] - 0.25).abs() < 1e-12);
        assert!(((g.bars[0] + g.bars[1]) * 0.5 - g.center).abs() < 1e-12);
    }

    let labels: Vec<&str> = chart.x_ticks().iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["1", "2", "4", "6", "8"]);
    for (tick, group) in chart.x_ticks().iter().zip(groups) {
        assert_eq!(tick.value, group.center);
    }
}

#[test]
fn grouped_bar_renders_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("cumulative.pdf");
    render(cumulative_request(&out)).expect("render should succeed");
    assert!(out.exists());
}

#[test]
fn layout_centers_odd_group_sizes() {
    let groups = group_layout(2, 3, 0.2, 1.0);
    assert_eq!(groups[1].bars.len(), 3);
    assert!((groups[1].bars[1] - 1.0).abs() < 1e-12);
    assert!((groups[1].bars[0] - 0.8).abs() < 1e-12);

    let (lo, hi) = extent(&groups, 0.2).unwrap();
    assert!((lo - -0.3).abs() < 1e-12);
    assert!((hi - 1.3).abs() < 1e-12);
}

#[test]
fn single_series_bar_chart() {
    // peak CPU figure: one series over four categories
    let dataset = Dataset::with_categories("peak-cpu", [2, 4, 6, 8])
        .series("", vec![2.224489796, 2.469387755, 3.887755102, 4.142857143]);
    let req = RenderRequest::new(
        dataset,
        AxisSpec::new("No. of Consumers"),
        AxisSpec::new("Factor of increase").with_max(5.0),
        StyleSpec::grouped_bar().with_bar_geometry(0.25, 0.5),
        "unused.pdf",
    );
    let chart = Chart::new(&req).expect("valid request");
    assert_eq!(chart.bar_groups().len(), 4);
    assert!(chart.layout().legend.is_none());
    assert_eq!(chart.view().y_min, 0.0);
    assert_eq!(chart.view().y_max, 5.0);
}

#[test]
fn bars_far_above_the_upper_bound_are_cut_at_the_frame() {
    use figure_core::{Hatch, OutputFormat, SeriesStyle};

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("clipped.pdf");
    let dataset = Dataset::with_categories("clipped", ["a", "b"])
        .series("tall", vec![1e7, 1.0])
        .series("wide", vec![1.5, 3e9]);
    let style = StyleSpec::grouped_bar()
        .with_series_style(SeriesStyle::new().hatch(Hatch::ForwardDiagonal))
        .with_series_style(SeriesStyle::new().hatch(Hatch::Cross))
        .with_labels(false)
        .with_raster_scale(1.0);
    let req = RenderRequest::new(dataset, AxisSpec::new("x"), AxisSpec::new("y").with_max(2.0), style, &out);

    let chart = Chart::new(&req).expect("valid request");
    let png = chart.render_bytes(OutputFormat::Png).expect("png render finishes");
    let img = image::load_from_memory(&png).unwrap().to_rgba8();

    // just above the frame, over the tall bar, the page background shows
    let plot = chart.plot_rect();
    let x = chart.x_scale().to_px(chart.bar_groups()[0].bars[0]).round() as u32;
    let above = img.get_pixel(x, (plot.top - 3.0).floor() as u32);
    assert_eq!(above.0, [255, 255, 255, 255]);

    render(req).expect("pdf render finishes");
    assert!(std::fs::read(&out).unwrap().starts_with(b"%PDF"));
}
