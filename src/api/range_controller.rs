use rust_decimal::Decimal;
use tracing::{debug, trace, warn};

use crate::core::primitives::decimal_to_f64;
use crate::core::{coerce_range, synthesize_degenerate_span};
use crate::error::ChartResult;

use super::{Axis, AxisKind, DataBounds, ViewBounds};

impl<K: AxisKind> Axis<K> {
    /// Widens the data range with `value`.
    ///
    /// Values the kind cannot represent (NaN, non-positive on log axes) or
    /// outside the filter bounds are ignored.
    pub fn include(&mut self, value: f64) {
        if !self.kind.is_valid_value(value)
            || value < self.config.filter_min_value
            || value > self.config.filter_max_value
        {
            trace!(axis = self.kind.name(), value, "ignoring value outside axis filter");
            return;
        }
        self.data.include(value);
    }

    pub fn include_values<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        for value in values {
            self.include(value);
        }
    }

    /// Includes an exact decimal value.
    pub fn include_decimal(&mut self, value: Decimal) -> ChartResult<()> {
        let value = decimal_to_f64(value, "axis value")?;
        self.include(value);
        Ok(())
    }

    /// Forgets collected data bounds before series re-include their values.
    pub fn reset_data_max_min(&mut self) {
        self.data = DataBounds::default();
    }

    /// Resolves the actual range from view, explicit and data bounds.
    ///
    /// Configuration errors are returned and leave the committed state as is.
    pub fn update_actual_max_min(&mut self) -> ChartResult<()> {
        let (minimum, maximum) = self.resolve_actual_range(self.view)?;

        let mut state = self.state;
        state.actual_minimum = minimum;
        state.actual_maximum = maximum;
        state.clip_minimum = minimum;
        state.clip_maximum = maximum;
        state.check_invariants(self.config.range_constraints())?;
        self.state = state;

        debug!(
            axis = self.kind.name(),
            actual_minimum = minimum,
            actual_maximum = maximum,
            "resolved axis range"
        );
        Ok(())
    }

    /// Pure range resolution for a given view override.
    ///
    /// Maximum resolves first: the data-derived minimum pads relative to the
    /// resolved maximum, with the maximum padding factored back out.
    pub(super) fn resolve_actual_range(&self, view: ViewBounds) -> ChartResult<(f64, f64)> {
        self.config.validate()?;
        self.kind.validate()?;
        let constraints = self.config.range_constraints();
        let kind = &self.kind;
        let valid = |value: &f64| value.is_finite() && kind.is_valid_value(*value);

        let data = kind
            .adjust_data_bounds(self.data)
            .as_pair()
            .map(|(low, high)| synthesize_degenerate_span(low, high));
        let minimum_padding = self.config.minimum_padding;
        let maximum_padding = self.config.maximum_padding;

        let (maximum, maximum_from_data) = match view.maximum.filter(valid).or(self.config.maximum) {
            Some(value) => (Some(value), false),
            None => {
                let padded = data.map(|(low, high)| {
                    let (x0, x1) = (kind.pre_transform(low), kind.pre_transform(high));
                    kind.post_inverse_transform(x1 + maximum_padding * (x1 - x0))
                });
                (padded, true)
            }
        };

        let (minimum, minimum_from_data) = match view.minimum.filter(valid).or(self.config.minimum) {
            Some(value) => (Some(value), false),
            None => {
                let padded = data.zip(maximum).map(|((low, _), maximum)| {
                    let (x0, x1) = (kind.pre_transform(low), kind.pre_transform(maximum));
                    let dx = minimum_padding * ((x1 - x0) / (1.0 + maximum_padding));
                    kind.post_inverse_transform(x0 - dx)
                });
                (padded, true)
            }
        };

        let (fallback_minimum, fallback_maximum) = kind.fallback_range();
        let mut minimum = minimum.filter(valid).unwrap_or(fallback_minimum);
        let mut maximum = maximum.filter(valid).unwrap_or(fallback_maximum);

        if minimum_from_data || maximum_from_data {
            let (snapped_minimum, snapped_maximum) = kind.snap_resolved_range(minimum, maximum);
            if minimum_from_data && valid(&snapped_minimum) {
                minimum = snapped_minimum;
            }
            if maximum_from_data && valid(&snapped_maximum) {
                maximum = snapped_maximum;
            }
        }

        if maximum <= minimum {
            (minimum, maximum) = synthesize_degenerate_span(minimum, maximum);
        }

        let (minimum, maximum) = coerce_range(minimum, maximum, constraints);
        if valid(&minimum) && valid(&maximum) && minimum < maximum {
            return Ok((minimum, maximum));
        }

        warn!(
            axis = kind.name(),
            minimum,
            maximum,
            "coerced range is not representable on this axis, using fallback"
        );
        Ok(coerce_range(fallback_minimum, fallback_maximum, constraints))
    }
}
