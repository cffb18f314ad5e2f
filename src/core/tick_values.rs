use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::primitives::remove_noise;
use crate::error::{ChartError, ChartResult};

/// Safety cap on the number of values one enumeration may produce.
pub const DEFAULT_MAX_TICKS: usize = 1000;

/// Default tick snap tolerance, as a fraction of the step.
pub const DEFAULT_TICK_TOLERANCE_RATIO: f64 = 1e-3;

/// Tick lists consumed by axis renderers.
///
/// Label positions usually equal major tick positions; category axes place
/// labels between ticks, so the two lists are kept separate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickValues {
    pub major_label_values: Vec<f64>,
    pub major_tick_values: Vec<f64>,
    pub minor_tick_values: Vec<f64>,
}

impl TickValues {
    /// Builds tick lists whose labels sit on the major ticks.
    #[must_use]
    pub fn with_labels_on_major(major: Vec<f64>, minor: Vec<f64>) -> Self {
        Self {
            major_label_values: major.clone(),
            major_tick_values: major,
            minor_tick_values: minor,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.major_label_values.is_empty()
            && self.major_tick_values.is_empty()
            && self.minor_tick_values.is_empty()
    }
}

/// Enumerates multiples of `step` inside `[from, to]` (order-insensitive).
///
/// Values within `step * 1e-3` outside the range are still included so that a
/// tick sitting exactly on a bound survives floating error.
pub fn create_tick_values(from: f64, to: f64, step: f64, max_ticks: usize) -> ChartResult<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(ChartError::InvalidIntervalInput(
            "tick step must be finite and > 0".to_owned(),
        ));
    }
    if !from.is_finite() || !to.is_finite() {
        return Ok(Vec::new());
    }

    let (from, to) = (from.min(to), from.max(to));
    let epsilon = step * DEFAULT_TICK_TOLERANCE_RATIO;
    let start_index = (from / step).round();
    if !start_index.is_finite() {
        return Ok(Vec::new());
    }

    let mut values = Vec::with_capacity(((to - from) / step).clamp(1.0, max_ticks as f64) as usize + 1);
    let mut reached_end = false;
    for k in 0..max_ticks {
        let value = remove_noise((start_index + k as f64) * step);
        if value > to + epsilon {
            reached_end = true;
            break;
        }
        if value >= from - epsilon {
            values.push(if value == 0.0 { 0.0 } else { value });
        }
    }

    if !reached_end && max_ticks > 0 {
        warn!(from, to, step, max_ticks, "tick enumeration truncated at safety cap");
    }
    Ok(values)
}

/// Removes every minor tick lying within `tolerance` of a major tick.
///
/// Both slices must be sorted ascending.
#[must_use]
pub fn filter_redundant_minor_ticks(major: &[f64], minor: &[f64], tolerance: f64) -> Vec<f64> {
    if major.is_empty() || minor.is_empty() {
        return minor.to_vec();
    }

    let tolerance = tolerance.abs();
    let mut filtered = Vec::with_capacity(minor.len());
    let mut cursor = 0;
    for &value in minor {
        while cursor < major.len() && major[cursor] < value - tolerance {
            cursor += 1;
        }
        let coincides = cursor < major.len() && major[cursor] <= value + tolerance;
        if !coincides {
            filtered.push(value);
        }
    }
    filtered
}
