use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::api::axis_label_format::{format_fraction, format_numeric_label};
use crate::api::{AxisConfig, AxisKind, AxisPosition, FormatContext, TickContext};
use crate::core::primitives::approx_equal;
use crate::core::{ScreenRect, TickValues};
use crate::error::{ChartError, ChartResult};

/// Angular axis of a polar plot; the range maps onto `[start_angle, end_angle]`
/// degrees, counter-clockwise from the positive x direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Angle {
    pub start_angle: f64,
    pub end_angle: f64,
    pub format_as_fractions: bool,
    pub fraction_unit: f64,
    pub fraction_unit_symbol: String,
}

impl Default for Angle {
    fn default() -> Self {
        Self {
            start_angle: 0.0,
            end_angle: 360.0,
            format_as_fractions: false,
            fraction_unit: PI,
            fraction_unit_symbol: "π".to_owned(),
        }
    }
}

impl Angle {
    /// Angle axis over `[0, 2π]` labelled as fractions of π.
    #[must_use]
    pub fn radians() -> Self {
        Self {
            format_as_fractions: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_angles(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    fn is_full_circle(&self) -> bool {
        (self.end_angle - self.start_angle).abs() >= 360.0 - 1e-9
    }
}

impl AxisKind for Angle {
    fn name(&self) -> &'static str {
        "angle"
    }

    fn validate(&self) -> ChartResult<()> {
        if !self.start_angle.is_finite()
            || !self.end_angle.is_finite()
            || self.start_angle == self.end_angle
        {
            return Err(ChartError::InvalidConfiguration(format!(
                "angle axis needs distinct finite angles, got [{}, {}]",
                self.start_angle, self.end_angle
            )));
        }
        if self.format_as_fractions && (!self.fraction_unit.is_finite() || self.fraction_unit == 0.0) {
            return Err(ChartError::InvalidConfiguration(
                "fraction unit must be finite and non-zero".to_owned(),
            ));
        }
        Ok(())
    }

    fn fallback_range(&self) -> (f64, f64) {
        (0.0, 360.0)
    }

    /// Arc length swept by the axis on the inscribed circle.
    fn interval_extent(&self, _config: &AxisConfig, plot_area: ScreenRect) -> f64 {
        let diameter = plot_area.width.min(plot_area.height);
        PI * diameter * (self.end_angle - self.start_angle).abs() / 360.0
    }

    fn screen_extent(&self, _config: &AxisConfig, _plot_area: ScreenRect) -> Option<(f64, f64)> {
        Some((self.start_angle, self.end_angle))
    }

    fn is_polar(&self) -> bool {
        true
    }

    /// On a full circle the last major tick coincides with the first.
    fn tick_values(&self, context: &TickContext) -> ChartResult<TickValues> {
        let mut ticks = context.numeric_ticks()?;
        if self.is_full_circle() {
            let span = context.clip_maximum - context.clip_minimum;
            let tolerance = context.minor_tolerance();
            let wraps = match ticks.major_tick_values.as_slice() {
                [first, .., last] => approx_equal(last - first, span, tolerance),
                _ => false,
            };
            if wraps {
                ticks.major_tick_values.pop();
                ticks.major_label_values.pop();
            }
        }
        Ok(ticks)
    }

    fn format_value(&self, value: f64, context: &FormatContext) -> String {
        if self.format_as_fractions {
            return format_fraction(
                value,
                self.fraction_unit,
                &self.fraction_unit_symbol,
                context.locale,
            );
        }
        format_numeric_label(value, context.major_step, context.locale)
    }

    fn default_config(&self) -> AxisConfig {
        AxisConfig {
            minimum_padding: 0.0,
            maximum_padding: 0.0,
            ..AxisConfig::default()
        }
        .with_position(AxisPosition::None)
        .with_interaction(false, false)
    }
}
