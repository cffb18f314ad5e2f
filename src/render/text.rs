use serde::{Deserialize, Serialize};

/// Font description handed to the text-measurement collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub font_family: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// CSS-like weight (400 normal, 700 bold).
    pub font_weight: u16,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_owned(),
            font_size: 12.0,
            font_weight: 400,
        }
    }
}

impl TextStyle {
    #[must_use]
    pub fn new(font_family: impl Into<String>, font_size: f64, font_weight: u16) -> Self {
        Self {
            font_family: font_family.into(),
            font_size,
            font_weight,
        }
    }

    #[must_use]
    pub fn with_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.font_weight >= 600
    }
}

/// Measured text box in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

impl TextExtent {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}

/// Axis-aligned bounding box of `extent` rotated by `angle_degrees`.
#[must_use]
pub fn rotated_extent(extent: TextExtent, angle_degrees: f64) -> TextExtent {
    if angle_degrees == 0.0 || !angle_degrees.is_finite() {
        return extent;
    }
    let radians = angle_degrees.to_radians();
    let (sin, cos) = (radians.sin().abs(), radians.cos().abs());
    TextExtent {
        width: extent.width * cos + extent.height * sin,
        height: extent.width * sin + extent.height * cos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_swaps_dimensions() {
        let rotated = rotated_extent(TextExtent::new(40.0, 10.0), 90.0);
        assert!((rotated.width - 10.0).abs() <= 1e-9);
        assert!((rotated.height - 40.0).abs() <= 1e-9);
    }

    #[test]
    fn diagonal_rotation_grows_both_sides() {
        let rotated = rotated_extent(TextExtent::new(40.0, 10.0), -45.0);
        let expected = 50.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert!((rotated.width - expected).abs() <= 1e-9);
        assert!((rotated.height - expected).abs() <= 1e-9);
    }
}
