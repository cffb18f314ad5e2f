use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Point in screen space (pixels, y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned screen rectangle, typically the plot area of one update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Builds a rectangle from its four edges.
    #[must_use]
    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            width: right - left,
            height: bottom - top,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center(self) -> ScreenPoint {
        ScreenPoint::new(
            self.left + self.width * 0.5,
            self.top + self.height * 0.5,
        )
    }

    #[must_use]
    pub fn contains(self, point: ScreenPoint) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Rejects non-finite geometry and negative sizes. Zero-sized areas are valid.
    pub fn validate(self) -> ChartResult<Self> {
        let finite = self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        if !finite || self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidPlotArea {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Per-side screen-space thickness (margins reserved around the plot area).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Thickness {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Thickness {
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Side-wise maximum, used when several axes share one plot edge.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}
