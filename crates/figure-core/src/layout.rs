// File: crates/figure-core/src/layout.rs
// Summary: Page geometry: plot frame position from label sizes, and legend placement.
// Notes:
// - Sizes come from `text::estimate_*`, never from loaded fonts, so the frame lands
//   at the same place whether or not labels are drawn.

use crate::axis::AxisSpec;
use crate::error::{RenderError, Result};
use crate::geometry::RectF;
use crate::grid::Tick;
use crate::style::{LegendPosition, LegendSpec, StyleSpec};
use crate::text::{estimate_height, estimate_width};
use crate::types::Insets;

/// Length of the outward tick marks.
pub const TICK_LEN: f32 = 3.5;
/// Gap between a tick mark and its label.
pub const TICK_PAD: f32 = 3.5;
/// Gap between tick labels and the axis label.
pub const LABEL_PAD: f32 = 4.0;
/// Distance between an inside legend and the frame.
pub const LEGEND_MARGIN: f32 = 6.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub series: usize,
    pub label: String,
    /// Box holding the series sample (bar swatch or line with marker).
    pub handle: RectF,
    /// Left edge of the label text, vertically centered on `handle`.
    pub text_x: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    pub rect: RectF,
    pub font_size: f32,
    pub frame: bool,
    pub entries: Vec<LegendEntry>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageLayout {
    pub page: RectF,
    pub plot: RectF,
    pub legend: Option<LegendLayout>,
}

impl PageLayout {
    pub fn compute(
        style: &StyleSpec,
        x_axis: &AxisSpec,
        y_axis: &AxisSpec,
        x_ticks: &[Tick],
        y_ticks: &[Tick],
        legend_labels: &[(usize, String)],
    ) -> Result<Self> {
        let page = RectF::from_ltwh(0.0, 0.0, style.width, style.height);
        let insets = Insets::default();

        let x_tick_h = x_ticks
            .iter()
            .map(|t| estimate_height(&t.label, x_axis.tick_font_size))
            .fold(0.0, f32::max);
        let y_tick_w = y_ticks
            .iter()
            .map(|t| estimate_width(&t.label, y_axis.tick_font_size))
            .fold(0.0, f32::max);
        let last_x_tick_w = x_ticks
            .last()
            .map(|t| estimate_width(&t.label, x_axis.tick_font_size))
            .unwrap_or(0.0);

        let bottom = insets.bottom
            + TICK_LEN
            + TICK_PAD
            + x_tick_h
            + LABEL_PAD
            + estimate_height(&x_axis.label, x_axis.font_size);
        // the y label is rotated, so its height is a width here
        let left = insets.left
            + estimate_height(&y_axis.label, y_axis.font_size)
            + LABEL_PAD
            + y_tick_w
            + TICK_PAD
            + TICK_LEN;
        let right = insets.right.max(last_x_tick_w * 0.5 + 2.0);

        let legend_size = style
            .legend
            .as_ref()
            .filter(|_| !legend_labels.is_empty())
            .map(|spec| (spec, legend_box_size(spec, legend_labels)));

        let mut top = insets.top.max(y_axis.tick_font_size * 0.6);
        if let Some((spec, (_, h))) = &legend_size {
            if spec.position.is_outside() {
                top += h + LEGEND_MARGIN;
            }
        }

        let plot = RectF::from_ltrb(left, top, page.right - right, page.bottom - bottom);
        if plot.is_empty() || plot.width() < 16.0 || plot.height() < 16.0 {
            return Err(RenderError::config(format!(
                "page {}x{} pt is too small for the configured labels",
                style.width, style.height
            )));
        }

        let legend = legend_size.map(|(spec, size)| place_legend(spec, size, &plot, legend_labels));
        Ok(Self { page, plot, legend })
    }
}

struct LegendMetrics {
    row_h: f32,
    handle_w: f32,
    gap: f32,
    col_gap: f32,
    pad: f32,
    entry_w: f32,
    cols: usize,
    rows: usize,
}

fn metrics(spec: &LegendSpec, labels: &[(usize, String)]) -> LegendMetrics {
    let fs = spec.font_size;
    let handle_w = fs * 2.0;
    let gap = fs * 0.5;
    let text_w = labels
        .iter()
        .map(|(_, l)| estimate_width(l, fs))
        .fold(0.0, f32::max);
    let cols = spec.columns.clamp(1, labels.len().max(1));
    let rows = labels.len().div_ceil(cols);
    LegendMetrics {
        row_h: fs * 1.4,
        handle_w,
        gap,
        col_gap: fs * 1.2,
        pad: if spec.frame { fs * 0.5 } else { 0.0 },
        entry_w: handle_w + gap + text_w,
        cols,
        rows,
    }
}

fn legend_box_size(spec: &LegendSpec, labels: &[(usize, String)]) -> (f32, f32) {
    let m = metrics(spec, labels);
    let w = m.cols as f32 * m.entry_w + (m.cols as f32 - 1.0) * m.col_gap + 2.0 * m.pad;
    let h = m.rows as f32 * m.row_h + 2.0 * m.pad;
    (w, h)
}

fn place_legend(spec: &LegendSpec, (w, h): (f32, f32), plot: &RectF, labels: &[(usize, String)]) -> LegendLayout {
    let m = metrics(spec, labels);
    let (left, top) = match spec.position {
        LegendPosition::Above => (plot.center_x() - w * 0.5, plot.top - LEGEND_MARGIN - h),
        LegendPosition::UpperRight => (plot.right - LEGEND_MARGIN - w, plot.top + LEGEND_MARGIN),
        LegendPosition::UpperLeft => (plot.left + LEGEND_MARGIN, plot.top + LEGEND_MARGIN),
        LegendPosition::LowerRight => (plot.right - LEGEND_MARGIN - w, plot.bottom - LEGEND_MARGIN - h),
        LegendPosition::LowerLeft => (plot.left + LEGEND_MARGIN, plot.bottom - LEGEND_MARGIN - h),
        LegendPosition::UpperCenter => (plot.center_x() - w * 0.5, plot.top + LEGEND_MARGIN),
        LegendPosition::LowerCenter => (plot.center_x() - w * 0.5, plot.bottom - LEGEND_MARGIN - h),
    };
    let rect = RectF::from_ltwh(left, top, w, h);

    let entries = labels
        .iter()
        .enumerate()
        .map(|(k, (series, label))| {
            let (row, col) = (k / m.cols, k % m.cols);
            let x = rect.left + m.pad + col as f32 * (m.entry_w + m.col_gap);
            let y = rect.top + m.pad + row as f32 * m.row_h;
            let hh = spec.font_size * 0.8;
            let handle = RectF::from_ltwh(x, y + (m.row_h - hh) * 0.5, m.handle_w, hh);
            LegendEntry { series: *series, label: label.clone(), handle, text_x: x + m.handle_w + m.gap }
        })
        .collect();

    LegendLayout { rect, font_size: spec.font_size, frame: spec.frame, entries }
}
