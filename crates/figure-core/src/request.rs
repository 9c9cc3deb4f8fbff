// File: crates/figure-core/src/request.rs
// Summary: RenderRequest (dataset + axes + style + output path) and its validation.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::axis::AxisSpec;
use crate::dataset::{Dataset, XDomain};
use crate::error::{RenderError, Result};
use crate::style::{ChartKind, StyleSpec};

/// Page encoding, chosen from the output extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Pdf,
    Svg,
    Png,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| RenderError::config(format!("output {} has no file extension", path.display())))?;
        ext.parse()
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(OutputFormat::Pdf),
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            other => Err(RenderError::config(format!("unsupported output format '{other}'"))),
        }
    }
}

/// Everything one render needs. Built once, consumed by [`crate::render`].
#[derive(Clone, Debug)]
pub struct RenderRequest {
    dataset: Dataset,
    x_axis: AxisSpec,
    y_axis: AxisSpec,
    style: StyleSpec,
    output: PathBuf,
}

impl RenderRequest {
    pub fn new(
        dataset: Dataset,
        x_axis: AxisSpec,
        y_axis: AxisSpec,
        style: StyleSpec,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self { dataset, x_axis, y_axis, style, output: output.into() }
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn x_axis(&self) -> &AxisSpec { &self.x_axis }
    pub fn y_axis(&self) -> &AxisSpec { &self.y_axis }
    pub fn style(&self) -> &StyleSpec { &self.style }
    pub fn output(&self) -> &Path { &self.output }

    /// Same request writing somewhere else.
    pub fn with_output(self, output: impl Into<PathBuf>) -> Self {
        Self { output: output.into(), ..self }
    }

    pub fn format(&self) -> Result<OutputFormat> {
        OutputFormat::from_path(&self.output)
    }

    /// Every check that can fail before drawing starts. Shape and naming
    /// problems report `Config`; value problems report `InvalidAxis`.
    pub fn validate(&self) -> Result<()> {
        self.dataset.validate_shape()?;
        self.x_axis.validate("x")?;
        self.y_axis.validate("y")?;
        self.style.validate()?;
        self.validate_x_domain()?;
        self.format()?;
        self.dataset.validate_finite()?;
        self.x_axis.validate_bounds("x")?;
        self.y_axis.validate_bounds("y")?;
        self.validate_log_values()
    }

    fn validate_x_domain(&self) -> Result<()> {
        match (self.style.kind, &self.dataset.x) {
            (ChartKind::GroupedBar, _) if self.x_axis.is_log() => {
                Err(RenderError::config("a grouped-bar x axis is categorical and cannot be logarithmic"))
            }
            (ChartKind::GroupedBar, _) if self.x_axis.has_bounds() => {
                Err(RenderError::config("a grouped-bar x axis is categorical and cannot take bounds"))
            }
            (ChartKind::LineWithMarkers, XDomain::Categories(_)) if self.x_axis.is_log() => {
                Err(RenderError::config("a categorical x axis cannot be logarithmic; supply numeric x-values"))
            }
            _ => Ok(()),
        }
    }

    fn validate_log_values(&self) -> Result<()> {
        if self.y_axis.is_log() {
            for s in &self.dataset.series {
                if let Some(bad) = s.values.iter().find(|v| **v <= 0.0) {
                    return Err(RenderError::axis(format!(
                        "y axis is logarithmic but series '{}' contains {bad}",
                        s.name
                    )));
                }
            }
        }
        if self.x_axis.is_log() {
            if let XDomain::Values(xs) = &self.dataset.x {
                if let Some(bad) = xs.iter().find(|v| **v <= 0.0) {
                    return Err(RenderError::axis(format!("x axis is logarithmic but contains x-value {bad}")));
                }
            }
        }
        Ok(())
    }
}
