// File: crates/figure-core/src/scale.rs
// Summary: Linear and log10 transforms from data values to page coordinates.

use crate::axis::ScaleKind;

/// Maps the data range [vmin, vmax] onto [start_px, end_px].
/// For the y axis pass the bottom edge as `start_px` so values grow upward.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: f64,
    pub vmax: f64,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl AxisScale {
    pub fn new(kind: ScaleKind, start_px: f32, end_px: f32, vmin: f64, vmax: f64) -> Self {
        match kind {
            ScaleKind::Linear => Self::new_linear(start_px, end_px, vmin, vmax),
            ScaleKind::Log10 => Self::new_log10(start_px, end_px, vmin, vmax),
        }
    }

    pub fn new_linear(start_px: f32, end_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { start_px, end_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn new_log10(start_px: f32, end_px: f32, mut vmin: f64, mut vmax: f64) -> Self {
        // Ranges are validated upstream; clamp anyway so the transform stays finite.
        let eps = 1e-12;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        let log_min = vmin.log10();
        let log_max = vmax.log10();
        Self { start_px, end_px, vmin, vmax, log: true, log_min, log_max }
    }

    /// Position of `v` as a fraction of the axis length (0 at vmin, 1 at vmax).
    #[inline]
    pub fn fraction(&self, v: f64) -> f64 {
        if self.log {
            let vv = v.max(1e-12).log10();
            (vv - self.log_min) / (self.log_max - self.log_min).max(1e-12)
        } else {
            (v - self.vmin) / (self.vmax - self.vmin).max(1e-12)
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.start_px + self.fraction(v) as f32 * (self.end_px - self.start_px)
    }

    /// True when `v` lies inside the axis range (inclusive, with float slack).
    pub fn contains(&self, v: f64) -> bool {
        let f = self.fraction(v);
        (-1e-9..=1.0 + 1e-9).contains(&f)
    }
}
