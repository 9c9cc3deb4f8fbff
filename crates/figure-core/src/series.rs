// File: crates/figure-core/src/series.rs
// Summary: Named numeric series, one value per category or x-value of the dataset.

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self { name: name.into(), values }
    }

    /// Same values multiplied by `factor` (e.g. bytes/s to bits/s).
    pub fn scaled(mut self, factor: f64) -> Self {
        for v in &mut self.values {
            *v *= factor;
        }
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// (min, max) over the values, `None` when empty.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        min_max(&self.values)
    }
}

pub(crate) fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
}
