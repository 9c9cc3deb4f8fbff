// File: crates/figure-core/src/geometry.rs
// Summary: Lightweight geometry helpers for page-space math.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }
    pub fn is_empty(&self) -> bool { self.width() <= 0.0 || self.height() <= 0.0 }

    pub fn to_skia(self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}
