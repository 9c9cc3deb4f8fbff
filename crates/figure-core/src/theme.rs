// File: crates/figure-core/src/theme.rs
// Summary: Page themes: frame, text and default series colors.

use std::str::FromStr;

use skia_safe as skia;

use crate::error::RenderError;

/// Number of entries in each theme's series palette.
pub const PALETTE_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub frame: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub bar_edge: skia::Color,
    pub legend_frame: skia::Color,
    pub palette: [skia::Color; PALETTE_LEN],
}

impl Theme {
    /// White page with the Set1-style palette used by the paper figures.
    pub fn paper() -> Self {
        Self {
            name: "paper",
            background: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 225, 225, 225),
            frame: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            bar_edge: skia::Color::BLACK,
            legend_frame: skia::Color::from_argb(255, 204, 204, 204),
            palette: [
                skia::Color::from_rgb(0xe4, 0x1a, 0x1c), // red
                skia::Color::from_rgb(0x37, 0x7e, 0xb8), // blue
                skia::Color::from_rgb(0x4d, 0xaf, 0x4a), // green
                skia::Color::from_rgb(0x98, 0x4e, 0xa3), // purple
                skia::Color::from_rgb(0xff, 0x7f, 0x00), // orange
                skia::Color::from_rgb(0xa6, 0x56, 0x28), // brown
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            bar_edge: skia::Color::from_argb(255, 200, 200, 210),
            legend_frame: skia::Color::from_argb(255, 80, 80, 90),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 255, 120, 90),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 200, 140, 255),
                skia::Color::from_argb(255, 255, 200, 60),
                skia::Color::from_argb(255, 160, 160, 170),
            ],
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            grid: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            frame: skia::Color::from_argb(255, 0x65, 0x7b, 0x83),      // base00
            axis_label: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            tick: skia::Color::from_argb(255, 0x58, 0x6e, 0x75),       // base01
            bar_edge: skia::Color::from_argb(255, 0x07, 0x36, 0x42),   // base02
            legend_frame: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),
            palette: [
                skia::Color::from_argb(255, 0xdc, 0x32, 0x2f), // red
                skia::Color::from_argb(255, 0x26, 0x8b, 0xd2), // blue
                skia::Color::from_argb(255, 0x85, 0x99, 0x00), // green
                skia::Color::from_argb(255, 0x6c, 0x71, 0xc4), // violet
                skia::Color::from_argb(255, 0xcb, 0x4b, 0x16), // orange
                skia::Color::from_argb(255, 0xb5, 0x89, 0x00), // yellow
            ],
        }
    }

    /// Palette color for series `i`, cycling.
    pub fn series_color(&self, i: usize) -> skia::Color {
        self.palette[i % PALETTE_LEN]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::paper()
    }
}

impl FromStr for Theme {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find(s).ok_or_else(|| RenderError::config(format!("unknown theme '{s}'")))
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::paper(), Theme::dark(), Theme::solarized_light()]
}

/// Find a theme by its `name`.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name.trim()))
}
