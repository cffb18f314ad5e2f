//! "Nice" major/minor step selection for numeric ranges.
//!
//! Steps follow the 1-2-5 cadence over powers of ten
//! (`…, 10, 5, 2, 1, 0.5, 0.2, 0.1, …`). The search starts at the smallest
//! power of ten covering the range and walks down that cadence while the
//! resulting interval count still fits the count budget.

use crate::core::primitives::remove_noise;
use crate::error::{ChartError, ChartResult};

/// Inputs of a single interval search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NiceIntervalInput {
    /// Screen length available to the axis, in pixels.
    pub available_size: f64,
    /// Target pixels per major interval.
    pub interval_size: f64,
    /// Data span to subdivide (sign is ignored).
    pub range: f64,
    pub min_interval_count: usize,
    pub max_interval_count: usize,
}

impl NiceIntervalInput {
    #[must_use]
    pub fn new(available_size: f64, interval_size: f64, range: f64) -> Self {
        Self {
            available_size,
            interval_size,
            range,
            min_interval_count: 2,
            max_interval_count: 20,
        }
    }

    #[must_use]
    pub fn with_count_bounds(mut self, min_interval_count: usize, max_interval_count: usize) -> Self {
        self.min_interval_count = min_interval_count;
        self.max_interval_count = max_interval_count;
        self
    }

    /// Upper bound on interval count: the pixel budget, capped by
    /// `max_interval_count` and never below `min_interval_count`.
    #[must_use]
    pub fn effective_max_count(self) -> f64 {
        let pixel_count = if self.available_size.is_finite() && self.available_size > 0.0 {
            self.available_size / self.interval_size.abs()
        } else {
            0.0
        };
        pixel_count
            .min(self.max_interval_count as f64)
            .max(self.min_interval_count as f64)
    }
}

/// Returns the coarsest 1-2-5 step whose interval count stays within
/// [`NiceIntervalInput::effective_max_count`], refined as far as the budget allows.
///
/// A zero interval size or a zero/non-finite range is a caller bug and fails
/// instead of looping.
pub fn calculate_nice_interval(input: NiceIntervalInput) -> ChartResult<f64> {
    if !input.interval_size.is_finite() || input.interval_size == 0.0 {
        return Err(ChartError::InvalidIntervalInput(
            "maximum interval size must be finite and non-zero".to_owned(),
        ));
    }
    if !input.range.is_finite() || input.range == 0.0 {
        return Err(ChartError::InvalidIntervalInput(
            "interval range must be finite and non-zero".to_owned(),
        ));
    }

    let range = input.range.abs();
    let max_count = input.effective_max_count();

    let mut interval = remove_noise(10.0_f64.powf(range.log10().ceil()));
    loop {
        let candidate = remove_noise(next_smaller_step(interval));
        if !candidate.is_finite() || candidate <= 0.0 {
            break;
        }
        if remove_noise(range / candidate) > max_count {
            break;
        }
        interval = candidate;
    }

    Ok(interval)
}

/// Minor step for a major step: quarters for a mantissa of 2, fifths otherwise.
#[must_use]
pub fn calculate_minor_interval(major_interval: f64) -> f64 {
    if !major_interval.is_finite() || major_interval <= 0.0 {
        return major_interval;
    }
    if mantissa(major_interval).round() as i64 == 2 {
        remove_noise(major_interval / 4.0)
    } else {
        remove_noise(major_interval / 5.0)
    }
}

/// Number of whole-or-partial intervals `step` produces over `range`.
#[must_use]
pub fn interval_count(range: f64, step: f64) -> f64 {
    remove_noise(range.abs() / step.abs())
}

fn exponent(value: f64) -> f64 {
    value.log10().ceil()
}

/// Leading digits scaled into `(1, 10]`.
fn mantissa(value: f64) -> f64 {
    value / 10.0_f64.powf(exponent(value) - 1.0)
}

fn next_smaller_step(step: f64) -> f64 {
    if mantissa(step).round() as i64 == 5 {
        step / 2.5
    } else {
        step / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nice(available: f64, size: f64, range: f64, min: usize, max: usize) -> f64 {
        calculate_nice_interval(
            NiceIntervalInput::new(available, size, range).with_count_bounds(min, max),
        )
        .expect("valid interval input")
    }

    #[test]
    fn cadence_visits_one_two_five() {
        let mut step = 100.0;
        let mut visited = Vec::new();
        for _ in 0..7 {
            step = remove_noise(next_smaller_step(step));
            visited.push(step);
        }
        assert_eq!(visited, vec![50.0, 20.0, 10.0, 5.0, 2.0, 1.0, 0.5]);
    }

    #[test]
    fn hundred_over_six_hundred_pixels_picks_ten() {
        assert_eq!(nice(600.0, 60.0, 100.0, 2, 20), 10.0);
    }

    #[test]
    fn tight_count_bounds_pick_matching_step() {
        assert_eq!(nice(10_000.0, 1.0, 100.0, 5, 5), 20.0);
    }

    #[test]
    fn narrow_axis_still_honours_minimum_count() {
        assert_eq!(nice(100.0, 60.0, 100.0, 2, 20), 50.0);
        assert_eq!(nice(0.0, 60.0, 100.0, 2, 20), 50.0);
    }

    #[test]
    fn handles_extreme_magnitudes() {
        assert_eq!(nice(600.0, 60.0, 1e-12, 2, 10), 1e-13);
        assert_eq!(nice(600.0, 60.0, 1e300, 2, 10), 1e299);
    }

    #[test]
    fn zero_straddling_range_uses_span() {
        assert_eq!(nice(500.0, 100.0, 7.0 - (-3.0), 2, 20), 2.0);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert!(calculate_nice_interval(NiceIntervalInput::new(600.0, 0.0, 10.0)).is_err());
        assert!(calculate_nice_interval(NiceIntervalInput::new(600.0, 60.0, 0.0)).is_err());
        assert!(calculate_nice_interval(NiceIntervalInput::new(600.0, 60.0, f64::NAN)).is_err());
    }

    #[test]
    fn minor_interval_follows_major_mantissa() {
        assert_eq!(calculate_minor_interval(10.0), 2.0);
        assert_eq!(calculate_minor_interval(20.0), 5.0);
        assert_eq!(calculate_minor_interval(50.0), 10.0);
        assert_eq!(calculate_minor_interval(0.2), 0.05);
    }
}
