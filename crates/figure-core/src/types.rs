// File: crates/figure-core/src/types.rs
// Summary: Shared page constants and margins.

/// Default page width in points (6 in).
pub const PAGE_WIDTH: f32 = 432.0;
/// Default page height in points (4 in).
pub const PAGE_HEIGHT: f32 = 288.0;

/// Page margins around the plot frame, in points.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(12.0, 14.0, 12.0, 8.0)
    }
}
