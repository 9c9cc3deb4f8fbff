// File: crates/figure-core/src/grid.rs
// Summary: Tick layout helpers: nice linear steps, decade ticks, and their labels.

/// Tick position with its rendered label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Step from {1, 2, 2.5, 5} x 10^k giving roughly `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if span <= 0.0 || !span.is_finite() { return 1.0; }
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Ticks at multiples of a nice step inside [lo, hi].
pub fn linear_ticks(lo: f64, hi: f64, target: usize) -> Vec<Tick> {
    let step = nice_step(hi - lo, target);
    let decimals = decimals_for_step(step);
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|k| {
            let value = k as f64 * step;
            // avoid "-0"
            let value = if value.abs() < step * 1e-9 { 0.0 } else { value };
            Tick { value, label: format!("{value:.decimals$}") }
        })
        .collect()
}

/// One tick per power of ten inside [lo, hi], labeled as 10ⁿ.
pub fn log_ticks(lo: f64, hi: f64) -> Vec<Tick> {
    let first = (lo.log10() - 1e-9).ceil() as i32;
    let last = (hi.log10() + 1e-9).floor() as i32;
    (first..=last)
        .map(|e| Tick { value: 10f64.powi(e), label: format!("10{}", superscript(e)) })
        .collect()
}

fn decimals_for_step(step: f64) -> usize {
    if step >= 1.0 { return 0; }
    let mut d = 0usize;
    let mut s = step;
    while (s - s.round()).abs() > 1e-9 && d < 8 {
        s *= 10.0;
        d += 1;
    }
    d
}

/// Unicode superscript rendering of an integer exponent.
pub fn superscript(e: i32) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    let mut out = String::new();
    if e < 0 { out.push('⁻'); }
    for c in e.unsigned_abs().to_string().chars() {
        if let Some(d) = c.to_digit(10) {
            out.push(DIGITS[d as usize]);
        }
    }
    out
}

/// Pad a linear data range by `margin` of its span on both ends.
/// A degenerate range widens to one unit around the value.
pub fn pad_linear(lo: f64, hi: f64, margin: f64) -> (f64, f64) {
    if (hi - lo).abs() < 1e-12 {
        let d = if lo.abs() > 1e-12 { lo.abs() * 0.5 } else { 0.5 };
        return (lo - d, hi + d);
    }
    let m = (hi - lo) * margin;
    (lo - m, hi + m)
}

/// Expand a strictly positive range to whole decades.
pub fn pad_log(lo: f64, hi: f64) -> (f64, f64) {
    let mut a = 10f64.powf(lo.log10().floor());
    let mut b = 10f64.powf(hi.log10().ceil());
    if (b / a - 1.0).abs() < 1e-12 {
        a /= 10.0;
        b *= 10.0;
    }
    (a, b)
}
