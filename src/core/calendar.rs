//! Calendar-aware interval selection and tick stepping for date/time axes.
//!
//! Axis values are days since 1970-01-01T00:00:00Z. Fixed-duration units
//! (milliseconds through days) stride numerically; weeks, months and years
//! snap to a calendar boundary in local time and stride with calendar
//! arithmetic so month lengths do not skew the spacing.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::nice_interval::{NiceIntervalInput, calculate_minor_interval, calculate_nice_interval};
use crate::core::primitives::{MILLIS_PER_DAY, axis_value_to_datetime};
use crate::core::tick_values::create_tick_values;
use crate::error::{ChartError, ChartResult};

pub const MILLISECOND: f64 = 1.0 / MILLIS_PER_DAY;
pub const SECOND: f64 = 1.0 / 86_400.0;
pub const MINUTE: f64 = 1.0 / 1_440.0;
pub const HOUR: f64 = 1.0 / 24.0;
pub const DAY: f64 = 1.0;
pub const WEEK: f64 = 7.0;
/// Average month used for interval sizing; tick placement uses real months.
pub const MONTH: f64 = 30.5;
pub const YEAR: f64 = 365.25;

/// Ordered candidate steps for automatic interval selection, in days.
const CALENDAR_INTERVALS: [f64; 29] = [
    MILLISECOND,
    2.0 * MILLISECOND,
    10.0 * MILLISECOND,
    100.0 * MILLISECOND,
    SECOND,
    2.0 * SECOND,
    5.0 * SECOND,
    10.0 * SECOND,
    30.0 * SECOND,
    MINUTE,
    2.0 * MINUTE,
    5.0 * MINUTE,
    10.0 * MINUTE,
    30.0 * MINUTE,
    HOUR,
    4.0 * HOUR,
    8.0 * HOUR,
    12.0 * HOUR,
    DAY,
    2.0 * DAY,
    5.0 * DAY,
    WEEK,
    2.0 * WEEK,
    MONTH,
    2.0 * MONTH,
    3.0 * MONTH,
    4.0 * MONTH,
    6.0 * MONTH,
    YEAR,
];

/// Unit in which date/time ticks are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DateTimeIntervalType {
    #[default]
    Auto,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl DateTimeIntervalType {
    /// Nominal length of one unit in days; `None` for `Auto`.
    #[must_use]
    pub fn unit_days(self) -> Option<f64> {
        match self {
            Self::Auto => None,
            Self::Milliseconds => Some(MILLISECOND),
            Self::Seconds => Some(SECOND),
            Self::Minutes => Some(MINUTE),
            Self::Hours => Some(HOUR),
            Self::Days => Some(DAY),
            Self::Weeks => Some(WEEK),
            Self::Months => Some(MONTH),
            Self::Years => Some(YEAR),
        }
    }

    #[must_use]
    pub fn is_calendar_unit(self) -> bool {
        matches!(self, Self::Weeks | Self::Months | Self::Years)
    }
}

/// Classifies an automatically selected step.
#[must_use]
pub fn auto_interval_type(step_days: f64) -> DateTimeIntervalType {
    if step_days < SECOND {
        DateTimeIntervalType::Milliseconds
    } else if step_days < MINUTE {
        DateTimeIntervalType::Seconds
    } else if step_days < HOUR {
        DateTimeIntervalType::Minutes
    } else if step_days < DAY {
        DateTimeIntervalType::Hours
    } else if step_days < 30.0 {
        if step_days >= WEEK && (step_days / WEEK).fract() == 0.0 {
            DateTimeIntervalType::Weeks
        } else {
            DateTimeIntervalType::Days
        }
    } else if step_days < 365.0 {
        DateTimeIntervalType::Months
    } else {
        DateTimeIntervalType::Years
    }
}

/// Minor unit implied by a major unit.
#[must_use]
pub fn default_minor_interval_type(major: DateTimeIntervalType) -> DateTimeIntervalType {
    match major {
        DateTimeIntervalType::Years => DateTimeIntervalType::Months,
        DateTimeIntervalType::Months | DateTimeIntervalType::Weeks => DateTimeIntervalType::Days,
        DateTimeIntervalType::Days => DateTimeIntervalType::Hours,
        DateTimeIntervalType::Hours => DateTimeIntervalType::Minutes,
        DateTimeIntervalType::Minutes => DateTimeIntervalType::Seconds,
        DateTimeIntervalType::Seconds => DateTimeIntervalType::Milliseconds,
        DateTimeIntervalType::Milliseconds | DateTimeIntervalType::Auto => {
            DateTimeIntervalType::Auto
        }
    }
}

/// Picks a major step (in days) and its unit for `input.range` days.
///
/// `Auto` walks the calendar table and takes the first entry whose interval
/// count drops below the count budget. Month and year results, and every
/// explicitly requested unit, are re-resolved through the numeric
/// calculator in that unit and rounded up to a whole unit count.
pub fn select_calendar_interval(
    input: NiceIntervalInput,
    requested: DateTimeIntervalType,
) -> ChartResult<(f64, DateTimeIntervalType)> {
    if !input.range.is_finite() || input.range == 0.0 {
        return Err(ChartError::InvalidIntervalInput(
            "date/time range must be finite and non-zero".to_owned(),
        ));
    }
    let range = input.range.abs();

    let interval_type = match requested {
        DateTimeIntervalType::Auto => {
            let max_count = input.effective_max_count();
            let mut step = CALENDAR_INTERVALS
                .iter()
                .copied()
                .find(|candidate| range / candidate < max_count)
                .unwrap_or(YEAR);
            while range / step >= max_count && step.is_finite() {
                step *= 2.0;
            }
            let interval_type = auto_interval_type(step);
            if !matches!(
                interval_type,
                DateTimeIntervalType::Months | DateTimeIntervalType::Years
            ) {
                return Ok((step, interval_type));
            }
            interval_type
        }
        explicit => explicit,
    };

    let unit = interval_type.unit_days().unwrap_or(DAY);
    let count = calculate_nice_interval(NiceIntervalInput {
        range: range / unit,
        ..input
    })?;
    Ok((count.ceil().max(1.0) * unit, interval_type))
}

/// Minor step (in days) for a major step of the given unit.
#[must_use]
pub fn calendar_minor_step(
    major_step: f64,
    major_type: DateTimeIntervalType,
    minor_type: DateTimeIntervalType,
) -> f64 {
    match minor_type {
        DateTimeIntervalType::Months => {
            let months = (major_step / MONTH).round().max(1.0);
            calculate_minor_interval(months).ceil().max(1.0) * MONTH
        }
        DateTimeIntervalType::Days if major_type.is_calendar_unit() => {
            calculate_minor_interval(major_step).ceil().max(1.0)
        }
        _ => calculate_minor_interval(major_step),
    }
}

/// Enumerates date/time tick values in `[minimum, maximum]`.
///
/// `utc_offset_minutes` places calendar boundaries (and day-or-longer
/// numeric strides) at local midnight.
pub fn create_calendar_tick_values(
    minimum: f64,
    maximum: f64,
    step: f64,
    interval_type: DateTimeIntervalType,
    first_day_of_week: Weekday,
    utc_offset_minutes: i32,
    max_ticks: usize,
) -> ChartResult<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(ChartError::InvalidIntervalInput(
            "date/time tick step must be finite and > 0".to_owned(),
        ));
    }
    let (minimum, maximum) = (minimum.min(maximum), minimum.max(maximum));
    let offset_days = f64::from(utc_offset_minutes) * MINUTE;

    let stepper = match interval_type {
        DateTimeIntervalType::Weeks => CalendarStride::Days((step.round().max(1.0)) as u64),
        DateTimeIntervalType::Months => CalendarStride::Months((step / MONTH).round().max(1.0) as u32),
        DateTimeIntervalType::Years => {
            CalendarStride::Months(((step / YEAR).round().max(1.0) as u32).saturating_mul(12))
        }
        _ => {
            let shift = if step >= DAY { offset_days } else { 0.0 };
            let values = create_tick_values(minimum + shift, maximum + shift, step, max_ticks)?;
            return Ok(values.into_iter().map(|value| value - shift).collect());
        }
    };

    let Some(local_start) = to_local(minimum, utc_offset_minutes) else {
        return Ok(Vec::new());
    };
    let Some(mut date) = snap_to_boundary(local_start.date(), stepper, first_day_of_week) else {
        return Ok(Vec::new());
    };

    let epsilon = MILLISECOND;
    let mut values = Vec::new();
    let mut reached_end = false;
    for _ in 0..max_ticks {
        let value = from_local(date.and_time(NaiveTime::default()), utc_offset_minutes);
        if value > maximum + epsilon {
            reached_end = true;
            break;
        }
        if value >= minimum - epsilon {
            values.push(value);
        }
        match stepper.advance(date) {
            Some(next) => date = next,
            None => {
                reached_end = true;
                break;
            }
        }
    }

    if !reached_end && max_ticks > 0 {
        warn!(minimum, maximum, step, max_ticks, "calendar tick enumeration truncated at safety cap");
    }
    Ok(values)
}

#[derive(Debug, Clone, Copy)]
enum CalendarStride {
    Days(u64),
    Months(u32),
}

impl CalendarStride {
    fn advance(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Days(days) => date.checked_add_days(Days::new(days)),
            Self::Months(months) => date.checked_add_months(Months::new(months)),
        }
    }
}

/// Moves `date` back to the first day of its week, month group or year group.
fn snap_to_boundary(date: NaiveDate, stride: CalendarStride, first_day_of_week: Weekday) -> Option<NaiveDate> {
    match stride {
        CalendarStride::Days(_) => {
            let back = (date.weekday().num_days_from_monday() + 7
                - first_day_of_week.num_days_from_monday())
                % 7;
            date.checked_sub_days(Days::new(u64::from(back)))
        }
        CalendarStride::Months(months) if months >= 12 && months % 12 == 0 => {
            let years = i32::try_from(months / 12).ok()?;
            let year = date.year().div_euclid(years) * years;
            NaiveDate::from_ymd_opt(year, 1, 1)
        }
        CalendarStride::Months(months) => {
            let months = months.max(1);
            let month0 = (date.month0() / months) * months;
            NaiveDate::from_ymd_opt(date.year(), month0 + 1, 1)
        }
    }
}

fn to_local(value: f64, utc_offset_minutes: i32) -> Option<NaiveDateTime> {
    let utc = axis_value_to_datetime(value)?;
    utc.naive_utc()
        .checked_add_signed(chrono::Duration::minutes(i64::from(utc_offset_minutes)))
}

fn from_local(local: NaiveDateTime, utc_offset_minutes: i32) -> f64 {
    let millis = local.and_utc().timestamp_millis() - i64::from(utc_offset_minutes) * 60_000;
    millis as f64 / MILLIS_PER_DAY
}
