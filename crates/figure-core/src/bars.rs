// File: crates/figure-core/src/bars.rs
// Summary: Grouped-bar placement in group-position units.

/// One category position holding one bar per series.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGroup {
    /// Center of the group; the category label sits here.
    pub center: f64,
    /// Center of each bar, in series order.
    pub bars: Vec<f64>,
}

/// Place `groups` groups of `per_group` bars. Group `i` is centered at
/// `i * group_spacing`; bars are laid side by side, `bar_width` wide, around it.
pub fn group_layout(groups: usize, per_group: usize, bar_width: f64, group_spacing: f64) -> Vec<BarGroup> {
    let offset = (per_group as f64 - 1.0) * 0.5;
    (0..groups)
        .map(|i| {
            let center = i as f64 * group_spacing;
            let bars = (0..per_group).map(|j| center + (j as f64 - offset) * bar_width).collect();
            BarGroup { center, bars }
        })
        .collect()
}

/// Data extent covered by the bars: (left edge of first bar, right edge of last bar).
pub fn extent(groups: &[BarGroup], bar_width: f64) -> Option<(f64, f64)> {
    let first = groups.first()?.bars.first()?;
    let last = groups.last()?.bars.last()?;
    Some((first - bar_width * 0.5, last + bar_width * 0.5))
}
