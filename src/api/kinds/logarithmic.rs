use serde::{Deserialize, Serialize};

use crate::api::axis_label_format::{
    format_numeric_label, format_plain_number, format_superscript_exponential,
};
use crate::api::{
    AxisKind, FormatContext, IntervalContext, Intervals, TickContext, TickUnit,
};
use crate::core::{TickValues, calculate_nice_interval, remove_noise};
use crate::error::{ChartError, ChartResult};

/// Logarithmic axis; only strictly positive values are representable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Logarithmic {
    pub base: f64,
    /// Rounds data-derived bounds out to whole powers of the base.
    pub power_padding: bool,
    /// Formats labels as `base^{k}`; plain numbers when unset.
    pub use_superscript: bool,
}

impl Default for Logarithmic {
    fn default() -> Self {
        Self {
            base: 10.0,
            power_padding: true,
            use_superscript: true,
        }
    }
}

impl Logarithmic {
    #[must_use]
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = base;
        self
    }

    #[must_use]
    pub fn with_superscript(mut self, use_superscript: bool) -> Self {
        self.use_superscript = use_superscript;
        self
    }

    fn log(&self, value: f64) -> f64 {
        if self.base == 10.0 {
            value.log10()
        } else {
            value.log(self.base)
        }
    }
}

impl AxisKind for Logarithmic {
    fn name(&self) -> &'static str {
        "logarithmic"
    }

    fn validate(&self) -> ChartResult<()> {
        if !self.base.is_finite() || self.base <= 1.0 {
            return Err(ChartError::InvalidConfiguration(format!(
                "logarithm base must be finite and > 1, got {}",
                self.base
            )));
        }
        Ok(())
    }

    fn pre_transform(&self, value: f64) -> f64 {
        self.log(value)
    }

    fn post_inverse_transform(&self, value: f64) -> f64 {
        self.base.powf(value)
    }

    fn is_valid_value(&self, value: f64) -> bool {
        value.is_finite() && value > 0.0
    }

    fn fallback_range(&self) -> (f64, f64) {
        (1.0, 100.0)
    }

    fn snap_resolved_range(&self, minimum: f64, maximum: f64) -> (f64, f64) {
        if !self.power_padding {
            return (minimum, maximum);
        }
        (
            self.base.powf(remove_noise(self.log(minimum)).floor()),
            self.base.powf(remove_noise(self.log(maximum)).ceil()),
        )
    }

    /// Whole-decade steps when at least two decades are visible, otherwise
    /// plain numeric steps over the value range.
    fn calculate_intervals(&self, context: &IntervalContext) -> ChartResult<Intervals> {
        let decades =
            remove_noise(self.log(context.actual_maximum) - self.log(context.actual_minimum));
        if !decades.is_finite() || decades < 2.0 {
            return context.numeric_intervals();
        }
        let step = calculate_nice_interval(context.nice_input(decades))?
            .round()
            .max(1.0);
        Ok(Intervals {
            major_step: step,
            minor_step: 1.0,
            major_unit: TickUnit::LogExponent,
            minor_unit: TickUnit::LogExponent,
        })
    }

    fn tick_values(&self, context: &TickContext) -> ChartResult<TickValues> {
        if context.intervals.major_unit != TickUnit::LogExponent {
            return context.numeric_ticks();
        }
        let step = context.intervals.major_step;
        let (minimum, maximum) = (context.clip_minimum, context.clip_maximum);
        let low = remove_noise(self.log(minimum));
        let high = remove_noise(self.log(maximum));
        if !low.is_finite() || !high.is_finite() || step <= 0.0 {
            return Ok(TickValues::default());
        }
        let inside = |value: f64| value >= minimum * (1.0 - 1e-9) && value <= maximum * (1.0 + 1e-9);

        let mut major = Vec::new();
        let mut minor = Vec::new();
        let first_decade = low.floor() as i64;
        let last_decade = high.ceil() as i64;
        for exponent in first_decade..=last_decade {
            if major.len() + minor.len() >= context.max_ticks {
                break;
            }
            let decade = remove_noise(self.base.powf(exponent as f64));
            let on_major = (exponent as f64 / step).fract() == 0.0;
            if on_major {
                if inside(decade) {
                    major.push(decade);
                }
            } else if inside(decade) {
                minor.push(decade);
            }

            if step == 1.0 && self.base >= 3.0 {
                let mut multiple = 2.0;
                while multiple < self.base && major.len() + minor.len() < context.max_ticks {
                    let value = remove_noise(multiple * decade);
                    if inside(value) {
                        minor.push(value);
                    }
                    multiple += 1.0;
                }
            }
        }
        Ok(TickValues::with_labels_on_major(major, minor))
    }

    fn format_value(&self, value: f64, context: &FormatContext) -> String {
        if self.use_superscript {
            return format_superscript_exponential(value, self.base, context.locale);
        }
        match context.unit {
            TickUnit::LogExponent => format_plain_number(value, context.locale),
            _ => format_numeric_label(value, context.major_step, context.locale),
        }
    }
}
