// File: crates/figure-core/src/dataset.rs
// Summary: Dataset model: a shared x domain (categories or numeric values) and equally long series.
// Notes:
// - Shape checks live here so they run before any layout or drawing.

use crate::error::{RenderError, Result};
use crate::series::{self, Series};

/// Ordered positions every series is paired with.
#[derive(Clone, Debug, PartialEq)]
pub enum XDomain {
    /// Text labels, drawn at evenly spaced positions.
    Categories(Vec<String>),
    /// Numeric x-values, drawn on a continuous axis.
    Values(Vec<f64>),
}

impl XDomain {
    pub fn len(&self) -> usize {
        match self {
            XDomain::Categories(c) => c.len(),
            XDomain::Values(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Label shown under position `i`.
    pub fn label(&self, i: usize) -> String {
        match self {
            XDomain::Categories(c) => c[i].clone(),
            XDomain::Values(v) => format_number(v[i]),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub name: String,
    pub x: XDomain,
    pub series: Vec<Series>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, x: XDomain) -> Self {
        Self { name: name.into(), x, series: Vec::new() }
    }

    pub fn with_categories<I, S>(name: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let labels = labels.into_iter().map(|l| l.to_string()).collect();
        Self::new(name, XDomain::Categories(labels))
    }

    pub fn with_x_values(name: impl Into<String>, xs: Vec<f64>) -> Self {
        Self::new(name, XDomain::Values(xs))
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Builder-style `add_series`.
    pub fn series(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.add_series(Series::new(name, values));
        self
    }

    /// Number of positions in the shared domain.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Check the equal-length invariant and that there is something to draw.
    pub fn validate_shape(&self) -> Result<()> {
        if self.series.is_empty() {
            return Err(RenderError::config(format!("dataset '{}' has no series", self.name)));
        }
        if self.x.is_empty() {
            return Err(RenderError::config(format!("dataset '{}' has an empty x domain", self.name)));
        }
        let n = self.x.len();
        for s in &self.series {
            if s.len() != n {
                return Err(RenderError::config(format!(
                    "series '{}' has {} values but dataset '{}' has {} positions",
                    s.name,
                    s.len(),
                    self.name,
                    n
                )));
            }
        }
        Ok(())
    }

    /// Reject NaN and infinities anywhere in the dataset.
    pub fn validate_finite(&self) -> Result<()> {
        if let XDomain::Values(xs) = &self.x {
            if let Some(bad) = xs.iter().find(|v| !v.is_finite()) {
                return Err(RenderError::axis(format!("x-value {bad} is not finite")));
            }
        }
        for s in &self.series {
            if let Some(bad) = s.values.iter().find(|v| !v.is_finite()) {
                return Err(RenderError::axis(format!("series '{}' contains non-finite value {bad}", s.name)));
            }
        }
        Ok(())
    }

    /// (min, max) over every series value.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .filter_map(Series::min_max)
            .reduce(|(a_lo, a_hi), (b_lo, b_hi)| (a_lo.min(b_lo), a_hi.max(b_hi)))
    }

    /// (min, max) over numeric x-values; `None` for categories.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        match &self.x {
            XDomain::Values(xs) => series::min_max(xs),
            XDomain::Categories(_) => None,
        }
    }
}

/// Compact label for a number: integers without a fraction, others trimmed.
pub fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{v:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
