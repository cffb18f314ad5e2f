use crate::render::{TextExtent, TextMeasurer, TextStyle};

/// Deterministic text measurer for headless layout and tests.
///
/// Widths are estimated from character count, so results are stable across
/// platforms and font installations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateTextMeasurer {
    /// Average glyph advance as a fraction of the font size.
    pub char_width_ratio: f64,
    /// Line height as a fraction of the font size.
    pub line_height_ratio: f64,
}

impl Default for ApproximateTextMeasurer {
    fn default() -> Self {
        Self {
            char_width_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

impl TextMeasurer for ApproximateTextMeasurer {
    fn measure_text(&self, text: &str, style: &TextStyle) -> TextExtent {
        if text.is_empty() {
            return TextExtent::default();
        }
        let weight_factor = if style.is_bold() { 1.1 } else { 1.0 };
        let widest_line = text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let line_count = text.lines().count().max(1);
        TextExtent {
            width: widest_line as f64 * style.font_size * self.char_width_ratio * weight_factor,
            height: line_count as f64 * style.font_size * self.line_height_ratio,
        }
    }
}
