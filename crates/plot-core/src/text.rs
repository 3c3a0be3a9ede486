// File: crates/plot-core/src/text.rs
// Summary: Text shaper for the raster backend using Skia textlayout with theme font families.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use tracing::warn;

use crate::plan::{self, Baseline, TextAnchor};

const SANS: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "Liberation Sans", "sans-serif"];
const SERIF: &[&str] = &["Times New Roman", "Georgia", "DejaVu Serif", "Liberation Serif", "serif"];
const MONO: &[&str] = &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mgr = skia::FontMgr::default();
        if mgr.count_families() == 0 {
            warn!("no system typefaces found; raster text will not be drawn");
        }
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(mgr, None);
        Self { fonts: fc }
    }

    /// Concrete families to try for a theme family name such as `SansSerif` or `Serif`.
    pub fn families_for(family: &str) -> Vec<&str> {
        match family.to_ascii_lowercase().as_str() {
            "serif" => SERIF.to_vec(),
            "sansserif" | "sans-serif" | "sans" => SANS.to_vec(),
            "monospaced" | "monospace" | "mono" => MONO.to_vec(),
            _ => std::iter::once(family).chain(SANS.iter().copied()).collect(),
        }
    }

    fn make_style(style: &plan::TextStyle) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(style.size.max(1.0));
        ts.set_color(crate::raster::to_skia(style.color));
        ts.set_font_families(&Self::families_for(&style.family));
        if style.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, style: &plan::TextStyle) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(style));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, style: &plan::TextStyle) -> f32 {
        self.layout(text, style).longest_line()
    }

    /// Draw `text` anchored at `(x, y)`, optionally rotated about that point.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        style: &plan::TextStyle,
        anchor: TextAnchor,
        baseline: Baseline,
        rotation: f32,
    ) {
        if text.is_empty() {
            return;
        }
        let mut p = self.layout(text, style);
        let w = p.longest_line();
        let dx = match anchor {
            TextAnchor::Start => 0.0,
            TextAnchor::Middle => -w * 0.5,
            TextAnchor::End => -w,
        };
        // Paragraph paints from its top-left corner.
        let dy = match baseline {
            Baseline::Alphabetic => -p.alphabetic_baseline(),
            Baseline::Middle => -p.height() * 0.5,
        };
        if rotation != 0.0 {
            canvas.save();
            canvas.rotate(rotation, Some(skia::Point::new(x, y)));
            p.paint(canvas, (x + dx, y + dy));
            canvas.restore();
        } else {
            p.paint(canvas, (x + dx, y + dy));
        }
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
