// File: crates/figure-core/src/text.rs
// Summary: Label shaping and placement using Skia textlayout, plus font-independent width estimates.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

/// Which point of the text box sits on the given coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    TopCenter,
    BottomCenter,
    CenterLeft,
    CenterRight,
    Center,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Helvetica", "Arial", "Liberation Sans", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, align: TextAlign) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(align);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        if align != TextAlign::Left {
            // shrink the box to the text so centered lines center on each other
            let w = paragraph.max_intrinsic_width().ceil() + 1.0;
            paragraph.layout(w);
        }
        paragraph
    }

    /// Draw `text` with the `anchor` point of its box at (x, y).
    #[allow(clippy::too_many_arguments)]
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, anchor: Anchor) {
        let align = match anchor {
            Anchor::CenterLeft => TextAlign::Left,
            Anchor::CenterRight => TextAlign::Right,
            _ => TextAlign::Center,
        };
        let p = self.layout(text, size, color, align);
        let w = if align == TextAlign::Left { p.longest_line() } else { p.max_width() };
        let h = p.height();
        let (dx, dy) = match anchor {
            Anchor::TopCenter => (-w * 0.5, 0.0),
            Anchor::BottomCenter => (-w * 0.5, -h),
            Anchor::CenterLeft => (0.0, -h * 0.5),
            Anchor::CenterRight => (-w, -h * 0.5),
            Anchor::Center => (-w * 0.5, -h * 0.5),
        };
        p.paint(canvas, (x + dx, y + dy));
    }

    /// Draw `text` rotated 90° counter-clockwise, centered on (x, y).
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-90.0, None);
        self.draw(canvas, text, 0.0, 0.0, size, color, Anchor::Center);
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

/// Width estimate for layout; keeps page geometry identical across machines and fonts.
pub fn estimate_width(text: &str, size: f32) -> f32 {
    text.lines()
        .map(|line| line.chars().map(|c| glyph_advance(c) * size).sum::<f32>())
        .fold(0.0, f32::max)
}

/// Height estimate for a (possibly multi-line) label.
pub fn estimate_height(text: &str, size: f32) -> f32 {
    let lines = text.lines().count().max(1) as f32;
    lines * size * 1.2
}

fn glyph_advance(c: char) -> f32 {
    match c {
        'i' | 'l' | 'j' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 0.28,
        'f' | 't' | 'r' | '(' | ')' | '[' | ']' | ' ' | '-' => 0.36,
        'm' | 'w' | 'M' | 'W' => 0.86,
        'A'..='Z' => 0.68,
        '0'..='9' => 0.56,
        c if !c.is_ascii() => 0.45,
        _ => 0.54,
    }
}
