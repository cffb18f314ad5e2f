use std::fmt;

use crate::core::{
    NiceIntervalInput, ScreenRect, TickValues, calculate_minor_interval, calculate_nice_interval,
    create_tick_values, filter_redundant_minor_ticks,
};
use crate::error::ChartResult;

use super::axis_label_format::format_numeric_label;
use super::{AxisConfig, AxisLabelLocale, DataBounds, Intervals, TickUnit};

/// Inputs of one interval calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalContext {
    pub actual_minimum: f64,
    pub actual_maximum: f64,
    /// Screen length available to the axis, in pixels.
    pub available_size: f64,
    pub interval_length: f64,
    pub minimum_interval_count: usize,
    pub maximum_interval_count: usize,
}

impl IntervalContext {
    /// Interval-calculator input over `range`.
    #[must_use]
    pub fn nice_input(&self, range: f64) -> NiceIntervalInput {
        NiceIntervalInput::new(self.available_size, self.interval_length, range)
            .with_count_bounds(self.minimum_interval_count, self.maximum_interval_count)
    }

    /// Numeric 1-2-5 intervals over the actual range.
    pub fn numeric_intervals(&self) -> ChartResult<Intervals> {
        let major = calculate_nice_interval(self.nice_input(self.actual_maximum - self.actual_minimum))?;
        Ok(Intervals::numeric(major, calculate_minor_interval(major)))
    }
}

/// Inputs of one tick enumeration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub clip_minimum: f64,
    pub clip_maximum: f64,
    pub intervals: Intervals,
    /// Minor ticks within `ratio * major_step` of a major tick are dropped.
    pub minor_tick_tolerance: f64,
    pub max_ticks: usize,
}

impl TickContext {
    #[must_use]
    pub fn minor_tolerance(&self) -> f64 {
        self.minor_tick_tolerance * self.intervals.major_step
    }

    /// Evenly strided ticks with redundant minors removed.
    pub fn numeric_ticks(&self) -> ChartResult<TickValues> {
        let major = create_tick_values(
            self.clip_minimum,
            self.clip_maximum,
            self.intervals.major_step,
            self.max_ticks,
        )?;
        let minor = create_tick_values(
            self.clip_minimum,
            self.clip_maximum,
            self.intervals.minor_step,
            self.max_ticks,
        )?;
        let minor = filter_redundant_minor_ticks(&major, &minor, self.minor_tolerance());
        Ok(TickValues::with_labels_on_major(major, minor))
    }
}

/// Context handed to kind-specific label formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatContext {
    pub major_step: f64,
    pub unit: TickUnit,
    pub locale: AxisLabelLocale,
    pub actual_minimum: f64,
    pub actual_maximum: f64,
}

/// Numeric hooks that distinguish one axis kind from another.
///
/// The shared range, transform and interaction logic in `Axis` works in
/// pre-transformed space, so a kind expressible as "apply f, solve affine,
/// apply f⁻¹" only overrides `pre_transform`/`post_inverse_transform`.
pub trait AxisKind: fmt::Debug {
    fn name(&self) -> &'static str;

    /// Rejects kind settings no range can be resolved with.
    fn validate(&self) -> ChartResult<()> {
        Ok(())
    }

    fn pre_transform(&self, value: f64) -> f64 {
        value
    }

    fn post_inverse_transform(&self, value: f64) -> f64 {
        value
    }

    /// Whether `value` may contribute to the data range.
    fn is_valid_value(&self, value: f64) -> bool {
        value.is_finite()
    }

    /// Range used when resolution yields nothing usable for this kind.
    fn fallback_range(&self) -> (f64, f64) {
        (0.0, 100.0)
    }

    /// Rewrites collected data bounds before padding is applied.
    fn adjust_data_bounds(&self, bounds: DataBounds) -> DataBounds {
        bounds
    }

    /// Rounds a data-derived range (log power padding).
    fn snap_resolved_range(&self, minimum: f64, maximum: f64) -> (f64, f64) {
        (minimum, maximum)
    }

    /// Pixels available for interval calculation.
    fn interval_extent(&self, config: &AxisConfig, plot_area: ScreenRect) -> f64 {
        let length = if config.is_horizontal() {
            plot_area.width
        } else {
            plot_area.height
        };
        length * (config.end_position - config.start_position).abs()
    }

    /// Screen endpoints for kinds not laid along a plot edge; `None` keeps
    /// the edge-based extent with margins.
    fn screen_extent(&self, _config: &AxisConfig, _plot_area: ScreenRect) -> Option<(f64, f64)> {
        None
    }

    fn is_polar(&self) -> bool {
        false
    }

    fn calculate_intervals(&self, context: &IntervalContext) -> ChartResult<Intervals> {
        context.numeric_intervals()
    }

    fn tick_values(&self, context: &TickContext) -> ChartResult<TickValues> {
        context.numeric_ticks()
    }

    fn format_value(&self, value: f64, context: &FormatContext) -> String {
        format_numeric_label(value, context.major_step, context.locale)
    }

    /// Configuration a freshly constructed axis of this kind starts from.
    fn default_config(&self) -> AxisConfig {
        AxisConfig::default()
    }
}

impl<K: AxisKind + ?Sized> AxisKind for Box<K> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn validate(&self) -> ChartResult<()> {
        (**self).validate()
    }

    fn pre_transform(&self, value: f64) -> f64 {
        (**self).pre_transform(value)
    }

    fn post_inverse_transform(&self, value: f64) -> f64 {
        (**self).post_inverse_transform(value)
    }

    fn is_valid_value(&self, value: f64) -> bool {
        (**self).is_valid_value(value)
    }

    fn fallback_range(&self) -> (f64, f64) {
        (**self).fallback_range()
    }

    fn adjust_data_bounds(&self, bounds: DataBounds) -> DataBounds {
        (**self).adjust_data_bounds(bounds)
    }

    fn snap_resolved_range(&self, minimum: f64, maximum: f64) -> (f64, f64) {
        (**self).snap_resolved_range(minimum, maximum)
    }

    fn interval_extent(&self, config: &AxisConfig, plot_area: ScreenRect) -> f64 {
        (**self).interval_extent(config, plot_area)
    }

    fn screen_extent(&self, config: &AxisConfig, plot_area: ScreenRect) -> Option<(f64, f64)> {
        (**self).screen_extent(config, plot_area)
    }

    fn is_polar(&self) -> bool {
        (**self).is_polar()
    }

    fn calculate_intervals(&self, context: &IntervalContext) -> ChartResult<Intervals> {
        (**self).calculate_intervals(context)
    }

    fn tick_values(&self, context: &TickContext) -> ChartResult<TickValues> {
        (**self).tick_values(context)
    }

    fn format_value(&self, value: f64, context: &FormatContext) -> String {
        (**self).format_value(value, context)
    }

    fn default_config(&self) -> AxisConfig {
        (**self).default_config()
    }
}
