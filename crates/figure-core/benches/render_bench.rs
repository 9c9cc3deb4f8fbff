use figure_core::{AxisSpec, Chart, Dataset, LegendPosition, LegendSpec, OutputFormat, RenderError, RenderRequest, StyleSpec};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_request(groups: usize, series: usize, style: StyleSpec) -> RenderRequest {
    let mut dataset = Dataset::with_categories("bench", (0..groups).map(|i| i + 1));
    for s in 0..series {
        let values = (0..groups).map(|i| ((i + 1) * (s + 2)) as f64 * 1.5).collect();
        dataset = dataset.series(format!("series {s}"), values);
    }
    RenderRequest::new(
        dataset,
        AxisSpec::new("X"),
        AxisSpec::new("Y"),
        style.with_legend(LegendSpec::new(LegendPosition::Above, 3)),
        "bench.pdf",
    )
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_page_bytes");
    for &(name, format) in &[("pdf", OutputFormat::Pdf), ("png", OutputFormat::Png)] {
        group.bench_function(format!("bars_8x3_{name}"), |b| {
            let req = build_request(8, 3, StyleSpec::grouped_bar().with_labels(false));
            b.iter(|| -> Result<(), RenderError> {
                let chart = Chart::new(&req)?;
                black_box(chart.render_bytes(format)?);
                Ok(())
            });
        });
        group.bench_function(format!("lines_200x4_{name}"), |b| {
            let req = build_request(200, 4, StyleSpec::line_with_markers().with_labels(false));
            b.iter(|| -> Result<(), RenderError> {
                let chart = Chart::new(&req)?;
                black_box(chart.render_bytes(format)?);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
