// File: crates/figure-cli/src/paper.rs
// Summary: The built-in paper figures (Kafka vs FastPS throughput, micro-benchmarks, CPU factor).

use figure_core::{
    AxisSpec, Dataset, Hatch, LegendPosition, LegendSpec, Marker, OutputFormat, RenderRequest, SeriesStyle, StyleSpec,
};
use skia_safe as skia;
use std::path::Path;

const RED: skia::Color = skia::Color::from_rgb(0xe4, 0x1a, 0x1c);
const BLUE: skia::Color = skia::Color::from_rgb(0x37, 0x7e, 0xb8);
const LINE_RED: skia::Color = skia::Color::from_rgb(0xff, 0x00, 0x00);
const LINE_BLUE: skia::Color = skia::Color::from_rgb(0x00, 0x00, 0xff);

const CONSUMERS: [f64; 5] = [1.0, 2.0, 4.0, 6.0, 8.0];
const KAFKA_ONE_CONSUMER: [f64; 5] = [26.66, 25.5, 20.94, 17.55, 13.63];

const RECORD_SIZES: [f64; 10] = [16.0, 32.0, 96.0, 256.0, 512.0, 1024.0, 10240.0, 51240.0, 102400.0, 1024000.0];

/// Consumer throughput in MB/s per record size.
const CONSUMER_TP_MBYTES: [f64; 10] = [
    0.662279, 1.320513, 4.027352, 10.614479, 21.993128, 42.863121, 300.117223, 1059.8821, 1000.791642, 910.5783595,
];

const INDIVIDUAL_LATENCY_US: [f64; 10] = [23.3, 24.23, 23.837, 24.118, 23.28, 23.89, 34.12, 48.345, 102.319, 1124.56];

/// Every figure, with output `<out_dir>/<name>.<ext>`.
pub fn figures(out_dir: &Path, format: OutputFormat) -> Vec<RenderRequest> {
    let builders: [(&str, fn() -> (Dataset, AxisSpec, AxisSpec, StyleSpec)); 6] = [
        ("kafka_vs_fastps_cumulative_tp", cumulative_tp),
        ("kafka_vs_fastps_one_consumer_tp", one_consumer_tp),
        ("micro_consumer_throughput", micro_consumer_throughput),
        ("micro_individual_latency", micro_individual_latency),
        ("one_consumer_tp_kafka", one_consumer_tp_kafka),
        ("peak_cpu_kafka", peak_cpu_kafka),
    ];
    builders
        .iter()
        .map(|(name, build)| {
            let (dataset, x, y, style) = build();
            let output = out_dir.join(format!("{name}.{}", format.extension()));
            RenderRequest::new(dataset, x, y, style, output)
        })
        .collect()
}

fn above_legend() -> LegendSpec {
    LegendSpec::new(LegendPosition::Above, 2).with_font_size(14.0).with_frame(false)
}

fn cumulative_tp() -> (Dataset, AxisSpec, AxisSpec, StyleSpec) {
    let dataset = Dataset::with_categories("kafka_vs_fastps_cumulative_tp", CONSUMERS.iter().map(|c| *c as u32))
        .series("Kafka", vec![26.66, 51.32, 83.4, 103.99, 109.15])
        .series("FastPS", vec![33.06, 65.8544, 132.2368, 197.184, 251.7576]);
    let x = AxisSpec::new("No. of Consumers").with_font_sizes(24.0, 20.0);
    let y = AxisSpec::new("Throughput (Mbps)").with_font_sizes(24.0, 20.0).with_max(260.0);
    let style = StyleSpec::grouped_bar()
        .with_bar_geometry(0.25, 0.75)
        .with_series_style(SeriesStyle::new().color(RED).hatch(Hatch::ForwardDiagonal))
        .with_series_style(SeriesStyle::new().color(BLUE).hatch(Hatch::BackDiagonal))
        .with_legend(above_legend());
    (dataset, x, y, style)
}

fn one_consumer_tp() -> (Dataset, AxisSpec, AxisSpec, StyleSpec) {
    let dataset = Dataset::with_x_values("kafka_vs_fastps_one_consumer_tp", CONSUMERS.to_vec())
        .series("Kafka", KAFKA_ONE_CONSUMER.to_vec())
        .series("FastPS", vec![33.06, 32.7032, 33.9304, 32.6408, 31.7496]);
    let x = AxisSpec::new("No. of Consumers").with_font_sizes(24.0, 20.0);
    let y = AxisSpec::new("Throughput (Mbps)").with_font_sizes(24.0, 20.0).with_max(35.0);
    let style = StyleSpec::line_with_markers()
        .with_series_style(SeriesStyle::new().color(LINE_RED).marker(Marker::Circle))
        .with_series_style(SeriesStyle::new().color(LINE_BLUE).marker(Marker::Cross))
        .with_legend(above_legend());
    (dataset, x, y, style)
}

fn micro_consumer_throughput() -> (Dataset, AxisSpec, AxisSpec, StyleSpec) {
    // MB/s to Mbps
    let mbps = CONSUMER_TP_MBYTES.iter().map(|v| v * 8.0).collect();
    let dataset = Dataset::with_x_values("micro_consumer_throughput", RECORD_SIZES.to_vec()).series("Throughput", mbps);
    let x = AxisSpec::new("Record Size (bytes)").with_font_sizes(22.0, 18.0).log10();
    let y = AxisSpec::new("Consumer\nThroughput (Mbps)").with_font_sizes(18.0, 18.0).log10();
    let style = StyleSpec::line_with_markers()
        .with_series_style(SeriesStyle::new().color(LINE_RED).marker(Marker::Circle));
    (dataset, x, y, style)
}

fn micro_individual_latency() -> (Dataset, AxisSpec, AxisSpec, StyleSpec) {
    let dataset = Dataset::with_x_values("micro_individual_latency", RECORD_SIZES.to_vec())
        .series("Latency", INDIVIDUAL_LATENCY_US.to_vec());
    let x = AxisSpec::new("Record size (bytes)").with_font_sizes(22.0, 18.0).log10();
    let y = AxisSpec::new("Individual Latency (us)").with_font_sizes(22.0, 18.0).log10();
    let style = StyleSpec::line_with_markers()
        .with_series_style(SeriesStyle::new().color(LINE_RED).marker(Marker::Circle));
    (dataset, x, y, style)
}

fn one_consumer_tp_kafka() -> (Dataset, AxisSpec, AxisSpec, StyleSpec) {
    let dataset =
        Dataset::with_x_values("one_consumer_tp_kafka", CONSUMERS.to_vec()).series("Kafka", KAFKA_ONE_CONSUMER.to_vec());
    let x = AxisSpec::new("No. of Consumers").with_font_sizes(22.0, 18.0);
    let y = AxisSpec::new("Throughput (Mbps)").with_font_sizes(22.0, 18.0).with_max(28.0);
    let style = StyleSpec::line_with_markers()
        .with_series_style(SeriesStyle::new().color(LINE_RED).marker(Marker::Circle));
    (dataset, x, y, style)
}

fn peak_cpu_kafka() -> (Dataset, AxisSpec, AxisSpec, StyleSpec) {
    let dataset = Dataset::with_categories("peak_cpu_kafka", [2, 4, 6, 8])
        .series("Kafka", vec![2.224489796, 2.469387755, 3.887755102, 4.142857143]);
    let x = AxisSpec::new("No. of Consumers").with_font_sizes(22.0, 18.0);
    let y = AxisSpec::new("Factor of increase").with_font_sizes(22.0, 18.0).with_max(5.0);
    let style = StyleSpec::grouped_bar()
        .with_bar_geometry(0.25, 0.5)
        .with_series_style(SeriesStyle::new().color(RED).hatch(Hatch::ForwardDiagonal));
    (dataset, x, y, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figure_core::{Chart, ChartKind};

    #[test]
    fn six_figures_named_after_their_output() {
        let figs = figures(Path::new("plots"), OutputFormat::Svg);
        assert_eq!(figs.len(), 6);
        for req in &figs {
            let stem = req.output().file_stem().unwrap().to_string_lossy();
            assert_eq!(stem, req.dataset().name);
            assert_eq!(req.format().unwrap(), OutputFormat::Svg);
        }
    }

    #[test]
    fn every_figure_plans_without_error() {
        for req in figures(Path::new("plots"), OutputFormat::Pdf) {
            if let Err(e) = Chart::new(&req) {
                panic!("{}: {e}", req.dataset().name);
            }
        }
    }

    #[test]
    fn cumulative_figure_has_five_groups_of_two() {
        let figs = figures(Path::new("plots"), OutputFormat::Pdf);
        let req = &figs[0];
        assert_eq!(req.style().kind, ChartKind::GroupedBar);
        let chart = Chart::new(req).unwrap();
        let groups = chart.bar_groups();
        assert_eq!(groups.len(), 5);
        assert!(groups.iter().all(|g| g.bars.len() == 2));
    }

    #[test]
    fn micro_figures_are_log_log() {
        let figs = figures(Path::new("plots"), OutputFormat::Pdf);
        for req in &figs[2..4] {
            assert!(req.x_axis().is_log() && req.y_axis().is_log(), "{}", req.dataset().name);
        }
        assert!((figs[2].dataset().series[0].values[0] - 0.662279 * 8.0).abs() < 1e-12);
    }
}
