mod approximate_measurer;
mod text;

pub use approximate_measurer::ApproximateTextMeasurer;
pub use text::{TextExtent, TextStyle, rotated_extent};

/// Text-measurement capability supplied by the drawing backend.
///
/// Margin estimation only needs label and title extents, so axis code stays
/// independent of any concrete font or graphics stack.
pub trait TextMeasurer {
    fn measure_text(&self, text: &str, style: &TextStyle) -> TextExtent;

    /// Bounding box of `text` drawn at `angle_degrees`.
    fn measure_rotated(&self, text: &str, style: &TextStyle, angle_degrees: f64) -> TextExtent {
        rotated_extent(self.measure_text(text, style), angle_degrees)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure_text(&self, text: &str, style: &TextStyle) -> TextExtent {
        (**self).measure_text(text, style)
    }
}
