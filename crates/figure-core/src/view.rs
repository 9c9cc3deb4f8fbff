// File: crates/figure-core/src/view.rs
// Summary: Resolved data ranges for both axes: autoscale from the dataset, then explicit bounds.

use crate::axis::AxisSpec;
use crate::bars::{self, BarGroup};
use crate::dataset::{Dataset, XDomain};
use crate::error::{RenderError, Result};
use crate::grid::{pad_linear, pad_log};
use crate::style::{ChartKind, StyleSpec};

/// Share of the data span added on each side of a linear axis.
pub const MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Resolve ranges for a validated request. `groups` is the bar layout for
    /// grouped-bar charts and empty otherwise.
    pub fn resolve(
        dataset: &Dataset,
        x_axis: &AxisSpec,
        y_axis: &AxisSpec,
        style: &StyleSpec,
        groups: &[BarGroup],
    ) -> Result<Self> {
        let (x_min, x_max) = apply_bounds(auto_x(dataset, x_axis, style, groups), x_axis);
        let (y_min, y_max) = apply_bounds(auto_y(dataset, y_axis, style), y_axis);
        check_range("x", x_min, x_max, x_axis)?;
        check_range("y", y_min, y_max, y_axis)?;
        Ok(Self { x_min, x_max, y_min, y_max })
    }
}

fn auto_x(dataset: &Dataset, axis: &AxisSpec, style: &StyleSpec, groups: &[BarGroup]) -> (f64, f64) {
    match (style.kind, &dataset.x) {
        (ChartKind::GroupedBar, _) => {
            let (lo, hi) = bars::extent(groups, style.bar_width).unwrap_or((0.0, 1.0));
            pad_linear(lo, hi, MARGIN)
        }
        (ChartKind::LineWithMarkers, XDomain::Categories(c)) => {
            pad_linear(0.0, c.len().saturating_sub(1) as f64, MARGIN)
        }
        (ChartKind::LineWithMarkers, XDomain::Values(_)) => {
            let (lo, hi) = dataset.x_range().unwrap_or((0.0, 1.0));
            if axis.is_log() { pad_log(lo, hi) } else { pad_linear(lo, hi, MARGIN) }
        }
    }
}

fn auto_y(dataset: &Dataset, axis: &AxisSpec, style: &StyleSpec) -> (f64, f64) {
    let (lo, hi) = dataset.value_range().unwrap_or((0.0, 1.0));
    if axis.is_log() {
        return pad_log(lo, hi);
    }
    match style.kind {
        // bars grow from zero, so zero stays the floor for non-negative data
        ChartKind::GroupedBar if lo >= 0.0 => {
            let top = if hi > 0.0 { hi + hi * MARGIN } else { 1.0 };
            (0.0, top)
        }
        ChartKind::GroupedBar => pad_linear(lo.min(0.0), hi.max(0.0), MARGIN),
        ChartKind::LineWithMarkers => pad_linear(lo, hi, MARGIN),
    }
}

fn apply_bounds((lo, hi): (f64, f64), axis: &AxisSpec) -> (f64, f64) {
    (axis.min.unwrap_or(lo), axis.max.unwrap_or(hi))
}

fn check_range(name: &str, lo: f64, hi: f64, axis: &AxisSpec) -> Result<()> {
    if !(lo.is_finite() && hi.is_finite()) {
        return Err(RenderError::axis(format!("{name} axis range [{lo}, {hi}] is not finite")));
    }
    if lo >= hi {
        return Err(RenderError::axis(format!(
            "{name} axis range [{lo}, {hi}] is empty; check the configured bounds"
        )));
    }
    if axis.is_log() && lo <= 0.0 {
        return Err(RenderError::axis(format!("{name} axis is logarithmic but starts at {lo}")));
    }
    Ok(())
}
