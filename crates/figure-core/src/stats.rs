// File: crates/figure-core/src/stats.rs
// Summary: Latency summary statistics (mean and tail percentiles) over per-record samples.

/// Summary of one measurement file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub p50: f64,
    pub p99: f64,
    pub p99_5: f64,
    pub p99_9: f64,
}

impl Summary {
    /// `None` when there are no finite samples. Non-finite samples are ignored.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        Some(Self {
            count: n,
            mean,
            min: sorted[0],
            max: sorted[n - 1],
            p50: percentile(&sorted, 50.0),
            p99: percentile(&sorted, 99.0),
            p99_5: percentile(&sorted, 99.5),
            p99_9: percentile(&sorted, 99.9),
        })
    }
}

/// Percentile `p` (0..=100) of ascending `sorted`, interpolating linearly
/// between the two closest ranks. Empty input yields NaN.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let p = p.clamp(0.0, 100.0);
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
