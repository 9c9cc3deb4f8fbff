// File: crates/figure-core/tests/autoscale.rs
// Purpose: Validate range resolution: data padding, zero floor for bars, explicit bounds.

use figure_core::{AxisSpec, Chart, Dataset, RenderRequest, StyleSpec};

fn chart_view(dataset: Dataset, x: AxisSpec, y: AxisSpec, style: StyleSpec) -> figure_core::ViewState {
    let req = RenderRequest::new(dataset, x, y, style, "unused.pdf");
    *Chart::new(&req).expect("valid request").view()
}

#[test]
fn bars_keep_zero_floor() {
    let dataset = Dataset::with_categories("b", ["a", "b"]).series("s", vec![10.0, 20.0]);
    let view = chart_view(dataset, AxisSpec::new("x"), AxisSpec::new("y"), StyleSpec::grouped_bar());
    assert_eq!(view.y_min, 0.0);
    assert!((view.y_max - 21.0).abs() < 1e-9);
}

#[test]
fn bars_with_negative_values_include_zero() {
    let dataset = Dataset::with_categories("b", ["a", "b"]).series("s", vec![-10.0, 10.0]);
    let view = chart_view(dataset, AxisSpec::new("x"), AxisSpec::new("y"), StyleSpec::grouped_bar());
    assert!((view.y_min - -11.0).abs() < 1e-9);
    assert!((view.y_max - 11.0).abs() < 1e-9);
}

#[test]
fn lines_pad_both_ends() {
    let dataset = Dataset::with_x_values("l", vec![0.0, 10.0]).series("s", vec![1.0, 3.0]);
    let view = chart_view(dataset, AxisSpec::new("x"), AxisSpec::new("y"), StyleSpec::line_with_markers());
    assert!((view.x_min - -0.5).abs() < 1e-9);
    assert!((view.x_max - 10.5).abs() < 1e-9);
    assert!((view.y_min - 0.9).abs() < 1e-9);
    assert!((view.y_max - 3.1).abs() < 1e-9);
}

#[test]
fn explicit_bounds_override_one_end() {
    let dataset = Dataset::with_x_values("l", vec![1.0, 2.0, 4.0, 6.0, 8.0])
        .series("Kafka", vec![26.66, 25.5, 20.94, 17.55, 13.63]);
    let view = chart_view(
        dataset,
        AxisSpec::new("x"),
        AxisSpec::new("y").with_max(28.0),
        StyleSpec::line_with_markers(),
    );
    assert_eq!(view.y_max, 28.0);
    assert!(view.y_min < 13.63);
}

#[test]
fn single_point_gets_a_unit_range() {
    let dataset = Dataset::with_categories("one", ["only"]).series("s", vec![5.0]);
    let view = chart_view(dataset, AxisSpec::new("x"), AxisSpec::new("y"), StyleSpec::line_with_markers());
    assert!(view.x_min < 0.0 && view.x_max > 0.0);
    assert!(view.y_min < 5.0 && view.y_max > 5.0);
}

#[test]
fn linear_ticks_are_nice() {
    let ticks = figure_core::grid::linear_ticks(0.0, 260.0, 6);
    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["0", "50", "100", "150", "200", "250"]);

    let ticks = figure_core::grid::linear_ticks(0.9, 3.1, 6);
    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["1.0", "1.5", "2.0", "2.5", "3.0"]);
}
