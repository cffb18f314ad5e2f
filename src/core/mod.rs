pub mod calendar;
pub mod nice_interval;
pub mod primitives;
pub mod range;
pub mod tick_values;
pub mod types;

pub use calendar::{
    DateTimeIntervalType, create_calendar_tick_values, default_minor_interval_type,
    select_calendar_interval,
};
pub use nice_interval::{
    NiceIntervalInput, calculate_minor_interval, calculate_nice_interval, interval_count,
};
pub use primitives::{
    NOISE_SIGNIFICANT_DIGITS, axis_value_to_datetime, datetime_to_axis_value, remove_noise,
};
pub use range::{RangeConstraints, coerce_range, shift_into_bounds, synthesize_degenerate_span};
pub use tick_values::{
    DEFAULT_MAX_TICKS, DEFAULT_TICK_TOLERANCE_RATIO, TickValues, create_tick_values,
    filter_redundant_minor_ticks,
};
pub use types::{ScreenPoint, ScreenRect, Thickness};
