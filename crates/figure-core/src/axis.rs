// File: crates/figure-core/src/axis.rs
// Summary: Axis model with label, font sizes, scale mode and optional bounds.

use std::str::FromStr;

use crate::error::RenderError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleKind {
    #[default]
    Linear,
    Log10,
}

impl FromStr for ScaleKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "lin" => Ok(ScaleKind::Linear),
            "log" | "log10" | "logarithmic" => Ok(ScaleKind::Log10),
            other => Err(RenderError::config(format!("unknown axis scale '{other}'"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisSpec {
    pub label: String,
    /// Axis label size in points.
    pub font_size: f32,
    /// Tick label size in points.
    pub tick_font_size: f32,
    pub scale: ScaleKind,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AxisSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            font_size: 14.0,
            tick_font_size: 11.0,
            scale: ScaleKind::Linear,
            min: None,
            max: None,
        }
    }

    pub fn with_font_sizes(mut self, label: f32, ticks: f32) -> Self {
        self.font_size = label;
        self.tick_font_size = ticks;
        self
    }

    pub fn log10(mut self) -> Self {
        self.scale = ScaleKind::Log10;
        self
    }

    pub fn with_scale(mut self, scale: ScaleKind) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn is_log(&self) -> bool {
        self.scale == ScaleKind::Log10
    }

    pub fn has_bounds(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Label presence and font sizes; `name` is "x" or "y" for messages.
    pub(crate) fn validate(&self, name: &str) -> Result<(), RenderError> {
        if self.label.trim().is_empty() {
            return Err(RenderError::config(format!("{name} axis label is required")));
        }
        if !(self.font_size > 0.0 && self.tick_font_size > 0.0) {
            return Err(RenderError::config(format!("{name} axis font sizes must be positive")));
        }
        Ok(())
    }

    /// Bound sanity, checked together with the data values.
    pub(crate) fn validate_bounds(&self, name: &str) -> Result<(), RenderError> {
        for b in [self.min, self.max].into_iter().flatten() {
            if !b.is_finite() {
                return Err(RenderError::axis(format!("{name} axis bound {b} is not finite")));
            }
        }
        if let (Some(lo), Some(hi)) = (self.min, self.max) {
            if lo >= hi {
                return Err(RenderError::axis(format!("{name} axis lower bound {lo} is not below upper bound {hi}")));
            }
        }
        if self.is_log() {
            if let Some(lo) = self.min {
                if lo <= 0.0 {
                    return Err(RenderError::axis(format!("{name} axis is logarithmic but lower bound is {lo}")));
                }
            }
            if let Some(hi) = self.max {
                if hi <= 0.0 {
                    return Err(RenderError::axis(format!("{name} axis is logarithmic but upper bound is {hi}")));
                }
            }
        }
        Ok(())
    }
}
