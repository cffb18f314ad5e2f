//! Pure range arithmetic shared by range resolution and pan/zoom.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Hard limits a resolved range must respect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeConstraints {
    pub absolute_minimum: f64,
    pub absolute_maximum: f64,
    pub minimum_range: f64,
    pub maximum_range: f64,
}

impl Default for RangeConstraints {
    fn default() -> Self {
        Self {
            absolute_minimum: f64::MIN,
            absolute_maximum: f64::MAX,
            minimum_range: 0.0,
            maximum_range: f64::MAX,
        }
    }
}

impl RangeConstraints {
    /// Checks that some range can satisfy all constraints at once.
    ///
    /// Violations are configuration bugs, not data conditions.
    pub fn validate(self) -> ChartResult<Self> {
        if self.absolute_minimum.is_nan() || self.absolute_maximum.is_nan() {
            return Err(ChartError::InvalidConfiguration(
                "absolute bounds must not be NaN".to_owned(),
            ));
        }
        if self.absolute_minimum >= self.absolute_maximum {
            return Err(ChartError::InvalidConfiguration(format!(
                "absolute minimum ({}) must be < absolute maximum ({})",
                self.absolute_minimum, self.absolute_maximum
            )));
        }
        if self.minimum_range.is_nan() || self.minimum_range < 0.0 {
            return Err(ChartError::InvalidConfiguration(
                "minimum range must be >= 0".to_owned(),
            ));
        }
        if self.maximum_range.is_nan() || self.maximum_range <= 0.0 {
            return Err(ChartError::InvalidConfiguration(
                "maximum range must be > 0".to_owned(),
            ));
        }
        if self.minimum_range > self.maximum_range {
            return Err(ChartError::InvalidConfiguration(format!(
                "minimum range ({}) must be <= maximum range ({})",
                self.minimum_range, self.maximum_range
            )));
        }
        if self.absolute_span() < self.minimum_range {
            return Err(ChartError::InvalidConfiguration(format!(
                "absolute span ({}) is smaller than minimum range ({})",
                self.absolute_span(),
                self.minimum_range
            )));
        }
        Ok(self)
    }

    /// Width of the absolute window; infinite for the default extremes.
    #[must_use]
    pub fn absolute_span(self) -> f64 {
        self.absolute_maximum - self.absolute_minimum
    }

    #[must_use]
    pub fn contains(self, minimum: f64, maximum: f64) -> bool {
        minimum >= self.absolute_minimum && maximum <= self.absolute_maximum
    }
}

/// Midpoint that cannot overflow for bounds near `f64::MAX`.
#[must_use]
pub fn midpoint(lhs: f64, rhs: f64) -> f64 {
    lhs * 0.5 + rhs * 0.5
}

/// Widens an empty or inverted data span around its maximum.
///
/// The synthetic span is the value's magnitude (1 at zero), split evenly
/// across both ends.
#[must_use]
pub fn synthesize_degenerate_span(minimum: f64, maximum: f64) -> (f64, f64) {
    if maximum - minimum > 0.0 {
        return (minimum, maximum);
    }
    let zero_range = if maximum != 0.0 { maximum.abs() } else { 1.0 };
    (maximum - zero_range * 0.5, maximum + zero_range * 0.5)
}

/// Enforces min/max span by re-centering, then moves the window back inside
/// the absolute bounds.
///
/// Expects finite bounds with `minimum < maximum`.
#[must_use]
pub fn coerce_range(minimum: f64, maximum: f64, constraints: RangeConstraints) -> (f64, f64) {
    let (mut minimum, mut maximum) = (minimum, maximum);

    if maximum - minimum < constraints.minimum_range {
        let center = midpoint(minimum, maximum);
        let half = constraints.minimum_range * 0.5;
        minimum = center - half;
        maximum = center + half;
    }

    if maximum - minimum > constraints.maximum_range {
        let center = midpoint(minimum, maximum);
        let half = constraints.maximum_range * 0.5;
        minimum = center - half;
        maximum = center + half;
    }

    shift_into_bounds(minimum, maximum, constraints)
}

/// Moves `[minimum, maximum]` inside the absolute bounds without resizing it,
/// pinning to the violated bound. A window wider than the absolute span is
/// clamped to the absolute span.
#[must_use]
pub fn shift_into_bounds(minimum: f64, maximum: f64, constraints: RangeConstraints) -> (f64, f64) {
    let span = maximum - minimum;
    let (mut minimum, mut maximum) = (minimum, maximum);

    if minimum < constraints.absolute_minimum {
        minimum = constraints.absolute_minimum;
        maximum = (minimum + span).min(constraints.absolute_maximum);
    }
    if maximum > constraints.absolute_maximum {
        maximum = constraints.absolute_maximum;
        minimum = (maximum - span).max(constraints.absolute_minimum);
    }

    (minimum, maximum)
}
