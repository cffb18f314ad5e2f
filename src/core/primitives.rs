use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

/// Significant digits kept by [`remove_noise`].
///
/// Repeated division in the interval search accumulates representation error
/// (`0.1 / 2.0 / 2.5` is not exactly `0.02`); comparisons against tick counts
/// only behave once those trailing digits are discarded.
pub const NOISE_SIGNIFICANT_DIGITS: usize = 14;

pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Rounds `value` to [`NOISE_SIGNIFICANT_DIGITS`] significant digits.
#[must_use]
pub fn remove_noise(value: f64) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    format!("{:.*e}", NOISE_SIGNIFICANT_DIGITS - 1, value)
        .parse::<f64>()
        .unwrap_or(value)
}

/// Converts a UTC timestamp to a date/time axis value (days since 1970-01-01).
#[must_use]
pub fn datetime_to_axis_value(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / MILLIS_PER_DAY
}

/// Converts a date/time axis value back to UTC, rounding to whole milliseconds.
///
/// Returns `None` for non-finite values or values outside chrono's range.
#[must_use]
pub fn axis_value_to_datetime(value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }
    let millis = (value * MILLIS_PER_DAY).round();
    if millis > (i64::MAX as f64) || millis < (i64::MIN as f64) {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
}

pub(crate) fn approx_equal(lhs: f64, rhs: f64, tolerance: f64) -> bool {
    (lhs - rhs).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn remove_noise_collapses_division_error() {
        let noisy = 0.1 / 2.0 / 2.5;
        assert_eq!(remove_noise(noisy), 0.02);
        assert_eq!(remove_noise(0.1 + 0.2), 0.3);
    }

    #[test]
    fn remove_noise_keeps_special_values() {
        assert_eq!(remove_noise(0.0), 0.0);
        assert!(remove_noise(f64::NAN).is_nan());
        assert_eq!(remove_noise(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn datetime_round_trip_is_millisecond_exact() {
        let time = Utc.with_ymd_and_hms(2024, 2, 29, 13, 45, 10).unwrap();
        let value = datetime_to_axis_value(time);
        assert_eq!(axis_value_to_datetime(value), Some(time));
    }

    #[test]
    fn epoch_maps_to_zero() {
        let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(datetime_to_axis_value(epoch), 0.0);
        assert_eq!(axis_value_to_datetime(1.0), Some(epoch + chrono::Duration::days(1)));
    }

    #[test]
    fn non_finite_axis_value_has_no_datetime() {
        assert_eq!(axis_value_to_datetime(f64::NAN), None);
    }
}
