// File: crates/figure-core/tests/snapshot.rs
// Purpose: Golden PNG previews for both chart kinds with bless flow.
// Behavior:
// - Renders deterministic charts to PNG bytes with text disabled.
// - Always checks pixels that follow from the planned layout, and that a second
//   render decodes to the same pixels.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note; set UPDATE_SNAPSHOTS=1 once to record the goldens.

use figure_core::{
    AxisSpec, Chart, Dataset, Hatch, LegendPosition, LegendSpec, Marker, OutputFormat, RenderRequest, SeriesStyle,
    StyleSpec,
};
use image::RgbaImage;

const WHITE: [u8; 4] = [255, 255, 255, 255];
const SET1_RED: [u8; 4] = [0xe4, 0x1a, 0x1c, 255];
const SET1_BLUE: [u8; 4] = [0x37, 0x7e, 0xb8, 255];

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

/// Encode the page and check a fresh render decodes to the same pixels.
fn stable_png(req: &RenderRequest) -> (Vec<u8>, RgbaImage) {
    let first = Chart::new(req).expect("valid request").render_bytes(OutputFormat::Png).expect("render bytes");
    let second = Chart::new(req).expect("valid request").render_bytes(OutputFormat::Png).expect("render bytes");
    let img = image::load_from_memory(&first).expect("decode").to_rgba8();
    let again = image::load_from_memory(&second).expect("decode").to_rgba8();
    assert_eq!(img.as_raw(), again.as_raw(), "preview pixels changed between renders");
    (first, img)
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

/// Share of pixels in the integer box [x0, x1) x [y0, y1) equal to `color`.
fn coverage(img: &RgbaImage, (x0, y0, x1, y1): (u32, u32, u32, u32), color: [u8; 4]) -> f64 {
    let mut hits = 0usize;
    let mut total = 0usize;
    for y in y0..y1 {
        for x in x0..x1 {
            total += 1;
            if img.get_pixel(x, y).0 == color {
                hits += 1;
            }
        }
    }
    hits as f64 / total.max(1) as f64
}

#[test]
fn golden_grouped_bars() {
    let dataset = Dataset::with_categories("cumulative", [1, 2, 4, 6, 8])
        .series("Kafka", vec![26.66, 51.32, 83.4, 103.99, 109.15])
        .series("FastPS", vec![33.06, 65.8544, 132.2368, 197.184, 251.7576]);
    let style = StyleSpec::grouped_bar()
        .with_series_style(SeriesStyle::new().hatch(Hatch::ForwardDiagonal))
        .with_series_style(SeriesStyle::new().hatch(Hatch::BackDiagonal))
        .with_legend(LegendSpec::new(LegendPosition::Above, 2))
        .with_labels(false) // deterministic
        .with_raster_scale(1.0);
    let req = RenderRequest::new(
        dataset,
        AxisSpec::new("No. of Consumers"),
        AxisSpec::new("Throughput (Mbps)").with_max(260.0),
        style,
        "bars.png",
    );
    let chart = Chart::new(&req).expect("valid request");
    let (bytes, img) = stable_png(&req);

    let xs = chart.x_scale();
    let ys = chart.y_scale();
    let half = 0.25 * 0.5;
    let colors = [SET1_RED, SET1_BLUE];
    for (j, color) in colors.iter().enumerate() {
        let values = &req.dataset().series[j].values;
        for (group, &v) in chart.bar_groups().iter().zip(values) {
            let x = group.bars[j];
            // inner box, two pixels away from the edge stroke
            let (l, r) = (xs.to_px(x - half).ceil() as u32 + 2, xs.to_px(x + half).floor() as u32 - 2);
            let (t, b) = (ys.to_px(v).ceil() as u32 + 2, ys.to_px(0.0).floor() as u32 - 2);
            let filled = coverage(&img, (l, t, r, b), *color);
            assert!(filled > 0.3, "bar {j} at {x}: only {filled:.2} of its area is {color:?}");
        }
    }

    // between the first two groups, above both bars, the page shows through
    let gap_x = ((xs.to_px(chart.bar_groups()[0].bars[1] + half) + xs.to_px(chart.bar_groups()[1].bars[0] - half)) * 0.5)
        .round() as u32;
    let top = chart.plot_rect().top.ceil() as u32 + 2;
    assert_eq!(img.get_pixel(gap_x, top).0, WHITE);

    write_or_compare(&snapshot_path("grouped_bars.png"), &bytes);
}

#[test]
fn golden_log_lines() {
    let dataset = Dataset::with_x_values(
        "throughput",
        vec![16.0, 32.0, 96.0, 256.0, 512.0, 1024.0, 10240.0, 51240.0, 102400.0, 1024000.0],
    )
    .series("tp", vec![0.662279, 1.320513, 4.027352, 10.614479, 21.993128, 42.863121, 300.117223, 1059.8821, 1000.791642, 910.5783595])
    .series("latency", vec![23.3, 24.23, 23.837, 24.118, 23.28, 23.89, 34.12, 48.345, 102.319, 1124.56]);
    let style = StyleSpec::line_with_markers()
        .with_series_style(SeriesStyle::new().marker(Marker::Circle))
        .with_series_style(SeriesStyle::new().marker(Marker::Cross))
        .with_legend(LegendSpec::new(LegendPosition::UpperLeft, 1))
        .with_grid(true)
        .with_labels(false)
        .with_raster_scale(1.0);
    let req = RenderRequest::new(
        dataset,
        AxisSpec::new("Record Size (bytes)").log10(),
        AxisSpec::new("Throughput").log10(),
        style,
        "lines.png",
    );
    let chart = Chart::new(&req).expect("valid request");
    let (bytes, img) = stable_png(&req);

    // filled circle markers: their centers carry the first series color
    let xs = chart.x_scale();
    let ys = chart.y_scale();
    let dataset = req.dataset();
    let figure_core::XDomain::Values(x_values) = &dataset.x else {
        panic!("numeric x domain expected");
    };
    let centered = x_values
        .iter()
        .zip(&dataset.series[0].values)
        .filter(|&(&x, &y)| {
            let (px, py) = (xs.to_px(x).floor() as u32, ys.to_px(y).floor() as u32);
            img.get_pixel(px, py).0 == SET1_RED
        })
        .count();
    assert!(centered >= 8, "only {centered} of 10 circle markers found");

    write_or_compare(&snapshot_path("log_lines.png"), &bytes);
}
