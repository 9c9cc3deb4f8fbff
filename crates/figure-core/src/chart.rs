// File: crates/figure-core/src/chart.rs
// Summary: Validated chart plan and the Skia drawing pipeline behind PDF, SVG and PNG pages.

use log::debug;
use skia_safe as skia;

use crate::axis::{AxisSpec, ScaleKind};
use crate::bars::{self, BarGroup};
use crate::dataset::{format_number, XDomain};
use crate::error::{RenderError, Result};
use crate::geometry::RectF;
use crate::grid::{linear_ticks, log_ticks, Tick};
use crate::layout::{LegendLayout, PageLayout, LABEL_PAD, TICK_LEN, TICK_PAD};
use crate::request::{OutputFormat, RenderRequest};
use crate::scale::AxisScale;
use crate::style::{ChartKind, Hatch, Marker, ResolvedSeriesStyle, StyleSpec};
use crate::text::{estimate_height, Anchor, TextShaper};
use crate::view::ViewState;

/// Target number of intervals on a linear axis.
const TICK_TARGET: usize = 6;
/// Distance between hatch strokes, in points.
const HATCH_SPACING: f32 = 5.0;

/// A request that passed validation, with ranges, ticks and page geometry resolved.
pub struct Chart<'a> {
    request: &'a RenderRequest,
    view: ViewState,
    groups: Vec<BarGroup>,
    x_ticks: Vec<Tick>,
    y_ticks: Vec<Tick>,
    layout: PageLayout,
}

impl<'a> Chart<'a> {
    /// Validate `request` and plan the page. Nothing is drawn yet.
    pub fn new(request: &'a RenderRequest) -> Result<Self> {
        request.validate()?;
        let dataset = request.dataset();
        let style = request.style();

        let groups = match style.kind {
            ChartKind::GroupedBar => {
                bars::group_layout(dataset.len(), dataset.series.len(), style.bar_width, style.group_spacing)
            }
            ChartKind::LineWithMarkers => Vec::new(),
        };
        let view = ViewState::resolve(dataset, request.x_axis(), request.y_axis(), style, &groups)?;
        debug!(
            "chart '{}': x [{}, {}], y [{}, {}], {} group(s)",
            dataset.name, view.x_min, view.x_max, view.y_min, view.y_max, groups.len()
        );

        let x_ticks = x_ticks(request, &view, &groups);
        let y_ticks = axis_ticks(request.y_axis().scale, view.y_min, view.y_max);

        let legend_labels: Vec<(usize, String)> = dataset
            .series
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.name.trim().is_empty())
            .map(|(i, s)| (i, s.name.clone()))
            .collect();
        let layout = PageLayout::compute(
            style,
            request.x_axis(),
            request.y_axis(),
            &x_ticks,
            &y_ticks,
            &legend_labels,
        )?;

        Ok(Self { request, view, groups, x_ticks, y_ticks, layout })
    }

    pub fn view(&self) -> &ViewState { &self.view }
    pub fn bar_groups(&self) -> &[BarGroup] { &self.groups }
    pub fn x_ticks(&self) -> &[Tick] { &self.x_ticks }
    pub fn y_ticks(&self) -> &[Tick] { &self.y_ticks }
    pub fn layout(&self) -> &PageLayout { &self.layout }
    pub fn plot_rect(&self) -> RectF { self.layout.plot }

    fn style(&self) -> &StyleSpec { self.request.style() }

    pub fn x_scale(&self) -> AxisScale {
        let plot = self.layout.plot;
        // categorical positions are always linear
        let kind = match (self.style().kind, &self.request.dataset().x) {
            (ChartKind::LineWithMarkers, XDomain::Values(_)) => self.request.x_axis().scale,
            _ => ScaleKind::Linear,
        };
        AxisScale::new(kind, plot.left, plot.right, self.view.x_min, self.view.x_max)
    }

    pub fn y_scale(&self) -> AxisScale {
        let plot = self.layout.plot;
        AxisScale::new(self.request.y_axis().scale, plot.bottom, plot.top, self.view.y_min, self.view.y_max)
    }

    /// Encode the page in `format`.
    pub fn render_bytes(&self, format: OutputFormat) -> Result<Vec<u8>> {
        match format {
            OutputFormat::Pdf => self.render_to_pdf_bytes(),
            OutputFormat::Svg => self.render_to_svg_bytes(),
            OutputFormat::Png => self.render_to_png_bytes(),
        }
    }

    /// Single-page PDF document titled after the dataset. No dates are
    /// recorded, so identical requests give identical bytes.
    pub fn render_to_pdf_bytes(&self) -> Result<Vec<u8>> {
        let metadata = skia::pdf::Metadata {
            title: self.request.dataset().name.clone(),
            creation: None,
            modified: None,
            ..Default::default()
        };
        let mut out: Vec<u8> = Vec::new();
        {
            let document = skia::pdf::new_document(&mut out, Some(&metadata));
            let mut page = document.begin_page((self.style().width, self.style().height), None);
            self.draw(page.canvas());
            let document = page.end_page();
            document.close();
        }
        if out.is_empty() {
            return Err(RenderError::Backend("PDF backend produced no output".into()));
        }
        Ok(out)
    }

    pub fn render_to_svg_bytes(&self) -> Result<Vec<u8>> {
        let bounds = skia::Rect::from_wh(self.style().width, self.style().height);
        let canvas = skia::svg::Canvas::new(bounds, None);
        self.draw(&canvas);
        let data = canvas.end();
        Ok(with_svg_title(data.as_bytes(), &self.request.dataset().name))
    }

    /// Raster preview at `raster_scale` pixels per point.
    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let scale = self.style().raster_scale;
        let w = (self.style().width * scale).round().max(1.0) as i32;
        let h = (self.style().height * scale).round().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| RenderError::Backend(format!("failed to create {w}x{h} raster surface")))?;
        let canvas = surface.canvas();
        canvas.scale((scale, scale));
        self.draw(canvas);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| RenderError::Backend("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    fn draw(&self, canvas: &skia::Canvas) {
        let style = self.style();
        let theme = &style.theme;
        let plot = self.layout.plot;
        let xs = self.x_scale();
        let ys = self.y_scale();

        let mut bg = skia::Paint::default();
        bg.set_color(theme.background);
        canvas.draw_rect(self.layout.page.to_skia(), &bg);

        if style.grid {
            draw_grid(canvas, &plot, &self.x_ticks, &self.y_ticks, &xs, &ys, theme.grid);
        }

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        match style.kind {
            ChartKind::GroupedBar => self.draw_bars(canvas, &xs, &ys),
            ChartKind::LineWithMarkers => self.draw_lines(canvas, &xs, &ys),
        }
        canvas.restore();

        let mut frame = stroke_paint(theme.frame, 0.8);
        frame.set_anti_alias(true);
        canvas.draw_rect(plot.to_skia(), &frame);
        draw_tick_marks(canvas, &plot, &self.x_ticks, &self.y_ticks, &xs, &ys, theme.tick);

        let shaper = if style.draw_labels { Some(TextShaper::new()) } else { None };
        if let Some(shaper) = &shaper {
            self.draw_axis_text(canvas, shaper, &xs, &ys);
        }
        if let Some(legend) = &self.layout.legend {
            self.draw_legend(canvas, shaper.as_ref(), legend);
        }
    }

    fn draw_bars(&self, canvas: &skia::Canvas, xs: &AxisScale, ys: &AxisScale) {
        let style = self.style();
        let dataset = self.request.dataset();
        let half = style.bar_width * 0.5;
        // log axes have no zero, so bars start at the bottom of the range
        let base = if self.request.y_axis().is_log() { self.view.y_min } else { 0.0 };
        let y_base = ys.to_px(base);
        // explicit bounds may cut bars; keep geometry inside the frame
        let plot = self.layout.plot.to_skia();

        for (j, series) in dataset.series.iter().enumerate() {
            let look = style.resolve_series(j);
            for (group, &v) in self.groups.iter().zip(&series.values) {
                let x = group.bars[j];
                let (l, r) = (xs.to_px(x - half), xs.to_px(x + half));
                let y_v = ys.to_px(v);
                let mut rect = skia::Rect::from_ltrb(l, y_v.min(y_base), r, y_v.max(y_base));
                if rect.intersect(plot) {
                    draw_bar(canvas, rect, &look, style.theme.bar_edge);
                }
            }
        }
    }

    fn draw_lines(&self, canvas: &skia::Canvas, xs: &AxisScale, ys: &AxisScale) {
        let style = self.style();
        let dataset = self.request.dataset();
        let positions: Vec<f64> = match &dataset.x {
            XDomain::Values(v) => v.clone(),
            XDomain::Categories(c) => (0..c.len()).map(|i| i as f64).collect(),
        };

        for (j, series) in dataset.series.iter().enumerate() {
            let look = style.resolve_series(j);
            let points: Vec<skia::Point> = positions
                .iter()
                .zip(&series.values)
                .map(|(&x, &y)| skia::Point::new(xs.to_px(x), ys.to_px(y)))
                .collect();

            if points.len() >= 2 {
                let mut path = skia::Path::new();
                path.move_to(points[0]);
                for p in points.iter().skip(1) {
                    path.line_to(*p);
                }
                let mut stroke = stroke_paint(look.color, style.line_width);
                stroke.set_anti_alias(true);
                stroke.set_stroke_join(skia::paint::Join::Round);
                canvas.draw_path(&path, &stroke);
            }
            for p in &points {
                draw_marker(canvas, look.marker, *p, style.marker_size, look.color);
            }
        }
    }

    fn draw_axis_text(&self, canvas: &skia::Canvas, shaper: &TextShaper, xs: &AxisScale, ys: &AxisScale) {
        let plot = self.layout.plot;
        let x_axis: &AxisSpec = self.request.x_axis();
        let y_axis: &AxisSpec = self.request.y_axis();
        let color = self.style().theme.axis_label;
        let tick_color = self.style().theme.tick;

        let label_y = plot.bottom + TICK_LEN + TICK_PAD;
        for t in &self.x_ticks {
            shaper.draw(canvas, &t.label, xs.to_px(t.value), label_y, x_axis.tick_font_size, tick_color, Anchor::TopCenter);
        }
        let label_x = plot.left - TICK_LEN - TICK_PAD;
        for t in &self.y_ticks {
            shaper.draw(canvas, &t.label, label_x, ys.to_px(t.value), y_axis.tick_font_size, tick_color, Anchor::CenterRight);
        }

        let x_tick_h = self
            .x_ticks
            .iter()
            .map(|t| estimate_height(&t.label, x_axis.tick_font_size))
            .fold(0.0, f32::max);
        shaper.draw(
            canvas,
            &x_axis.label,
            plot.center_x(),
            label_y + x_tick_h + LABEL_PAD,
            x_axis.font_size,
            color,
            Anchor::TopCenter,
        );
        let y_label_x = self.layout.page.left + crate::types::Insets::default().left
            + estimate_height(&y_axis.label, y_axis.font_size) * 0.5;
        shaper.draw_vertical(canvas, &y_axis.label, y_label_x, plot.center_y(), y_axis.font_size, color);
    }

    fn draw_legend(&self, canvas: &skia::Canvas, shaper: Option<&TextShaper>, legend: &LegendLayout) {
        let style = self.style();
        let theme = &style.theme;
        if legend.frame {
            let mut fill = skia::Paint::default();
            fill.set_color(theme.background);
            canvas.draw_rect(legend.rect.to_skia(), &fill);
            canvas.draw_rect(legend.rect.to_skia(), &stroke_paint(theme.legend_frame, 0.8));
        }
        for entry in &legend.entries {
            let look = style.resolve_series(entry.series);
            let h = entry.handle;
            match style.kind {
                ChartKind::GroupedBar => {
                    let w = h.width() * 0.7;
                    let swatch = skia::Rect::from_xywh(h.left + (h.width() - w) * 0.5, h.top, w, h.height());
                    draw_bar(canvas, swatch, &look, theme.bar_edge);
                }
                ChartKind::LineWithMarkers => {
                    let mut stroke = stroke_paint(look.color, style.line_width);
                    stroke.set_anti_alias(true);
                    canvas.draw_line((h.left, h.center_y()), (h.right, h.center_y()), &stroke);
                    draw_marker(canvas, look.marker, skia::Point::new(h.center_x(), h.center_y()), style.marker_size, look.color);
                }
            }
            if let Some(shaper) = shaper {
                shaper.draw(canvas, &entry.label, entry.text_x, h.center_y(), legend.font_size, theme.axis_label, Anchor::CenterLeft);
            }
        }
    }
}

/// Insert `<title>` as the first child of the root `<svg>` element.
fn with_svg_title(svg: &[u8], title: &str) -> Vec<u8> {
    let root_end = svg
        .windows(4)
        .position(|w| w == b"<svg")
        .and_then(|start| svg[start..].iter().position(|&c| c == b'>').map(|end| start + end + 1));
    let Some(at) = root_end else {
        return svg.to_vec();
    };
    let mut escaped = String::with_capacity(title.len());
    for c in title.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    let mut out = Vec::with_capacity(svg.len() + escaped.len() + 15);
    out.extend_from_slice(&svg[..at]);
    out.extend_from_slice(format!("<title>{escaped}</title>").as_bytes());
    out.extend_from_slice(&svg[at..]);
    out
}

// ---- ticks -------------------------------------------------------------------

fn x_ticks(request: &RenderRequest, view: &ViewState, groups: &[BarGroup]) -> Vec<Tick> {
    let dataset = request.dataset();
    match (request.style().kind, &dataset.x) {
        (ChartKind::GroupedBar, _) => groups
            .iter()
            .enumerate()
            .map(|(i, g)| Tick { value: g.center, label: dataset.x.label(i) })
            .collect(),
        (ChartKind::LineWithMarkers, XDomain::Categories(c)) => c
            .iter()
            .enumerate()
            .map(|(i, l)| Tick { value: i as f64, label: l.clone() })
            .collect(),
        (ChartKind::LineWithMarkers, XDomain::Values(_)) => {
            axis_ticks(request.x_axis().scale, view.x_min, view.x_max)
        }
    }
}

fn axis_ticks(kind: ScaleKind, lo: f64, hi: f64) -> Vec<Tick> {
    match kind {
        ScaleKind::Linear => linear_ticks(lo, hi, TICK_TARGET),
        ScaleKind::Log10 => {
            let ticks = log_ticks(lo, hi);
            if ticks.len() >= 2 {
                ticks
            } else {
                // range inside a single decade: label the ends instead
                vec![
                    Tick { value: lo, label: format_number(lo) },
                    Tick { value: hi, label: format_number(hi) },
                ]
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectF,
    x_ticks: &[Tick],
    y_ticks: &[Tick],
    xs: &AxisScale,
    ys: &AxisScale,
    color: skia::Color,
) {
    let paint = stroke_paint(color, 0.5);
    // verticals
    for t in x_ticks.iter().filter(|t| xs.contains(t.value)) {
        let x = xs.to_px(t.value);
        canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
    }
    // horizontals
    for t in y_ticks.iter().filter(|t| ys.contains(t.value)) {
        let y = ys.to_px(t.value);
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
}

fn draw_tick_marks(
    canvas: &skia::Canvas,
    plot: &RectF,
    x_ticks: &[Tick],
    y_ticks: &[Tick],
    xs: &AxisScale,
    ys: &AxisScale,
    color: skia::Color,
) {
    let paint = stroke_paint(color, 0.8);
    for t in x_ticks.iter().filter(|t| xs.contains(t.value)) {
        let x = xs.to_px(t.value);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + TICK_LEN), &paint);
    }
    for t in y_ticks.iter().filter(|t| ys.contains(t.value)) {
        let y = ys.to_px(t.value);
        canvas.draw_line((plot.left - TICK_LEN, y), (plot.left, y), &paint);
    }
}

fn draw_bar(canvas: &skia::Canvas, rect: skia::Rect, look: &ResolvedSeriesStyle, edge: skia::Color) {
    canvas.draw_rect(rect, &fill_paint(look.color));
    if look.hatch != Hatch::None {
        canvas.save();
        canvas.clip_rect(rect, skia::ClipOp::Intersect, true);
        draw_hatch(canvas, rect, look.hatch, edge);
        canvas.restore();
    }
    canvas.draw_rect(rect, &stroke_paint(edge, 0.8));
}

fn draw_hatch(canvas: &skia::Canvas, rect: skia::Rect, hatch: Hatch, color: skia::Color) {
    let mut paint = stroke_paint(color, 0.6);
    paint.set_anti_alias(true);
    let (l, t, r, b) = (rect.left, rect.top, rect.right, rect.bottom);
    let (w, h) = (r - l, b - t);
    if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
        return;
    }
    // diagonals start at offset -h and run past the right edge
    let diagonals = ((w + h) / HATCH_SPACING).ceil() as usize + 1;
    let offset = |k: usize| -h + k as f32 * HATCH_SPACING;

    let forward = |canvas: &skia::Canvas| {
        for k in 0..diagonals {
            let d = offset(k);
            canvas.draw_line((l + d, b), (l + d + h, t), &paint);
        }
    };
    let back = |canvas: &skia::Canvas| {
        for k in 0..diagonals {
            let d = offset(k);
            canvas.draw_line((l + d, t), (l + d + h, b), &paint);
        }
    };

    match hatch {
        Hatch::None => {}
        Hatch::ForwardDiagonal => forward(canvas),
        Hatch::BackDiagonal => back(canvas),
        Hatch::Cross => {
            forward(canvas);
            back(canvas);
        }
        Hatch::Horizontal => {
            let rows = (h / HATCH_SPACING).ceil() as usize;
            for k in 0..rows {
                let y = t + (k as f32 + 0.5) * HATCH_SPACING;
                canvas.draw_line((l, y), (r, y), &paint);
            }
        }
        Hatch::Vertical => {
            let cols = (w / HATCH_SPACING).ceil() as usize;
            for k in 0..cols {
                let x = l + (k as f32 + 0.5) * HATCH_SPACING;
                canvas.draw_line((x, t), (x, b), &paint);
            }
        }
    }
}

fn draw_marker(canvas: &skia::Canvas, marker: Marker, c: skia::Point, size: f32, color: skia::Color) {
    let r = size * 0.5;
    let fill = fill_paint(color);
    let mut stroke = stroke_paint(color, 1.5);
    stroke.set_anti_alias(true);
    match marker {
        Marker::None => {}
        Marker::Circle => {
            canvas.draw_circle(c, r, &fill);
        }
        Marker::Square => {
            canvas.draw_rect(skia::Rect::from_xywh(c.x - r, c.y - r, size, size), &fill);
        }
        Marker::Cross => {
            canvas.draw_line((c.x - r, c.y - r), (c.x + r, c.y + r), &stroke);
            canvas.draw_line((c.x - r, c.y + r), (c.x + r, c.y - r), &stroke);
        }
        Marker::Plus => {
            canvas.draw_line((c.x - r, c.y), (c.x + r, c.y), &stroke);
            canvas.draw_line((c.x, c.y - r), (c.x, c.y + r), &stroke);
        }
        Marker::Triangle => {
            let mut path = skia::Path::new();
            path.move_to((c.x, c.y - r));
            path.line_to((c.x + r, c.y + r));
            path.line_to((c.x - r, c.y + r));
            path.close();
            canvas.draw_path(&path, &fill);
        }
        Marker::Diamond => {
            let mut path = skia::Path::new();
            path.move_to((c.x, c.y - r));
            path.line_to((c.x + r, c.y));
            path.line_to((c.x, c.y + r));
            path.line_to((c.x - r, c.y));
            path.close();
            canvas.draw_path(&path, &fill);
        }
    }
}
