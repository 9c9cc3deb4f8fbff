// File: crates/figure-core/src/style.rs
// Summary: Immutable style description threaded through each render: chart kind, per-series
// look, legend, bar geometry, page size and theme.

use std::str::FromStr;

use skia_safe as skia;

use crate::error::RenderError;
use crate::theme::Theme;
use crate::types::{PAGE_HEIGHT, PAGE_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    GroupedBar,
    LineWithMarkers,
}

impl FromStr for ChartKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grouped-bar" | "grouped_bar" | "bar" | "bars" => Ok(ChartKind::GroupedBar),
            "line-with-markers" | "line_with_markers" | "line" | "lines" => Ok(ChartKind::LineWithMarkers),
            other => Err(RenderError::config(format!("unknown chart kind '{other}'"))),
        }
    }
}

/// Fill pattern drawn over a bar, clipped to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hatch {
    None,
    ForwardDiagonal,
    BackDiagonal,
    Cross,
    Horizontal,
    Vertical,
}

impl FromStr for Hatch {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(Hatch::None),
            "/" | "//" | "///" => Ok(Hatch::ForwardDiagonal),
            "\\" | "\\\\" | "\\\\\\" => Ok(Hatch::BackDiagonal),
            "x" | "xx" | "X" => Ok(Hatch::Cross),
            "-" | "--" => Ok(Hatch::Horizontal),
            "|" | "||" => Ok(Hatch::Vertical),
            other => Err(RenderError::config(format!("unknown hatch pattern '{other}'"))),
        }
    }
}

/// Glyph drawn at every data point of a line series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
    Cross,
    Square,
    Triangle,
    Diamond,
    Plus,
}

impl FromStr for Marker {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(Marker::None),
            "o" | "circle" => Ok(Marker::Circle),
            "x" | "cross" => Ok(Marker::Cross),
            "s" | "square" => Ok(Marker::Square),
            "^" | "triangle" => Ok(Marker::Triangle),
            "D" | "d" | "diamond" => Ok(Marker::Diamond),
            "+" | "plus" => Ok(Marker::Plus),
            other => Err(RenderError::config(format!("unknown marker '{other}'"))),
        }
    }
}

const HATCH_CYCLE: [Hatch; 6] = [
    Hatch::ForwardDiagonal,
    Hatch::BackDiagonal,
    Hatch::Cross,
    Hatch::Horizontal,
    Hatch::Vertical,
    Hatch::None,
];

const MARKER_CYCLE: [Marker; 6] = [
    Marker::Circle,
    Marker::Cross,
    Marker::Square,
    Marker::Triangle,
    Marker::Diamond,
    Marker::Plus,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendPosition {
    UpperRight,
    UpperLeft,
    LowerRight,
    LowerLeft,
    UpperCenter,
    LowerCenter,
    /// Outside the frame, centered over the plot area.
    Above,
}

impl LegendPosition {
    pub fn is_outside(&self) -> bool {
        matches!(self, LegendPosition::Above)
    }
}

impl FromStr for LegendPosition {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(' ', "-").as_str() {
            "upper-right" => Ok(LegendPosition::UpperRight),
            "upper-left" => Ok(LegendPosition::UpperLeft),
            "lower-right" => Ok(LegendPosition::LowerRight),
            "lower-left" => Ok(LegendPosition::LowerLeft),
            "upper-center" => Ok(LegendPosition::UpperCenter),
            "lower-center" => Ok(LegendPosition::LowerCenter),
            "above" | "outside-top" => Ok(LegendPosition::Above),
            other => Err(RenderError::config(format!("unknown legend position '{other}'"))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendSpec {
    pub position: LegendPosition,
    pub columns: usize,
    pub font_size: f32,
    pub frame: bool,
}

impl LegendSpec {
    pub fn new(position: LegendPosition, columns: usize) -> Self {
        Self { position, columns, font_size: 11.0, frame: !position.is_outside() }
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_frame(mut self, frame: bool) -> Self {
        self.frame = frame;
        self
    }
}

/// Look of one series; unset fields fall back to the theme and default cycles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SeriesStyle {
    pub color: Option<skia::Color>,
    pub hatch: Option<Hatch>,
    pub marker: Option<Marker>,
}

impl SeriesStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn hatch(mut self, hatch: Hatch) -> Self {
        self.hatch = Some(hatch);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }
}

/// Fully resolved look for series `index`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedSeriesStyle {
    pub color: skia::Color,
    pub hatch: Hatch,
    pub marker: Marker,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StyleSpec {
    pub kind: ChartKind,
    pub series: Vec<SeriesStyle>,
    pub legend: Option<LegendSpec>,
    /// Bar width in group-position units.
    pub bar_width: f64,
    /// Distance between consecutive group centers, same units as `bar_width`.
    pub group_spacing: f64,
    /// Page size in points.
    pub width: f32,
    pub height: f32,
    pub theme: Theme,
    pub grid: bool,
    pub line_width: f32,
    pub marker_size: f32,
    /// Text can be switched off for font-independent output.
    pub draw_labels: bool,
    /// Pixels per point for PNG previews.
    pub raster_scale: f32,
}

impl StyleSpec {
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            series: Vec::new(),
            legend: None,
            bar_width: 0.25,
            group_spacing: 0.75,
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
            theme: Theme::paper(),
            grid: false,
            line_width: 1.5,
            marker_size: 6.0,
            draw_labels: true,
            raster_scale: 2.0,
        }
    }

    pub fn grouped_bar() -> Self {
        Self::new(ChartKind::GroupedBar)
    }

    pub fn line_with_markers() -> Self {
        Self::new(ChartKind::LineWithMarkers)
    }

    pub fn with_series_style(mut self, style: SeriesStyle) -> Self {
        self.series.push(style);
        self
    }

    pub fn with_legend(mut self, legend: LegendSpec) -> Self {
        self.legend = Some(legend);
        self
    }

    pub fn with_bar_geometry(mut self, bar_width: f64, group_spacing: f64) -> Self {
        self.bar_width = bar_width;
        self.group_spacing = group_spacing;
        self
    }

    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_labels(mut self, draw_labels: bool) -> Self {
        self.draw_labels = draw_labels;
        self
    }

    pub fn with_raster_scale(mut self, raster_scale: f32) -> Self {
        self.raster_scale = raster_scale;
        self
    }

    pub fn resolve_series(&self, index: usize) -> ResolvedSeriesStyle {
        let given = self.series.get(index).copied().unwrap_or_default();
        ResolvedSeriesStyle {
            color: given.color.unwrap_or_else(|| self.theme.series_color(index)),
            hatch: given.hatch.unwrap_or(HATCH_CYCLE[index % HATCH_CYCLE.len()]),
            marker: given.marker.unwrap_or(MARKER_CYCLE[index % MARKER_CYCLE.len()]),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), RenderError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(RenderError::config(format!("page size {}x{} must be positive", self.width, self.height)));
        }
        if !(self.bar_width > 0.0 && self.bar_width.is_finite()) {
            return Err(RenderError::config(format!("bar width {} must be positive", self.bar_width)));
        }
        if !(self.group_spacing > 0.0 && self.group_spacing.is_finite()) {
            return Err(RenderError::config(format!("group spacing {} must be positive", self.group_spacing)));
        }
        if !(self.line_width > 0.0 && self.marker_size >= 0.0) {
            return Err(RenderError::config("line width must be positive and marker size non-negative"));
        }
        if !(self.raster_scale > 0.0) {
            return Err(RenderError::config(format!("raster scale {} must be positive", self.raster_scale)));
        }
        if let Some(legend) = &self.legend {
            if legend.columns == 0 {
                return Err(RenderError::config("legend needs at least one column"));
            }
            if !(legend.font_size > 0.0) {
                return Err(RenderError::config("legend font size must be positive"));
            }
        }
        Ok(())
    }
}

/// Parse `#rrggbb`, `#aarrggbb` or one of the palette names.
pub fn parse_color(s: &str) -> Result<skia::Color, RenderError> {
    let t = s.trim();
    let named = match t.to_ascii_lowercase().as_str() {
        "red" => Some(0),
        "blue" => Some(1),
        "green" => Some(2),
        "purple" => Some(3),
        "orange" => Some(4),
        "brown" => Some(5),
        "black" => return Ok(skia::Color::BLACK),
        "white" => return Ok(skia::Color::WHITE),
        _ => None,
    };
    if let Some(i) = named {
        return Ok(Theme::paper().series_color(i));
    }
    let hex = t
        .strip_prefix('#')
        .ok_or_else(|| RenderError::config(format!("unknown color '{t}'")))?;
    let bad = || RenderError::config(format!("malformed hex color '{t}'"));
    let v = u32::from_str_radix(hex, 16).map_err(|_| bad())?;
    match hex.len() {
        6 => Ok(skia::Color::new(0xff00_0000 | v)),
        8 => Ok(skia::Color::new(v)),
        _ => Err(bad()),
    }
}
