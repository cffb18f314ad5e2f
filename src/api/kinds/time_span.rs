use serde::{Deserialize, Serialize};

use crate::api::axis_label_format::format_time_span;
use crate::api::{AxisKind, FormatContext, IntervalContext, Intervals};
use crate::core::calculate_minor_interval;
use crate::error::{ChartError, ChartResult};

/// Steps (in seconds) that read well on a clock face.
const GOOD_INTERVALS: [f64; 12] = [
    1.0, 5.0, 10.0, 30.0, 60.0, 120.0, 300.0, 600.0, 900.0, 1_200.0, 1_800.0, 3_600.0,
];

/// Duration axis; values are seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeSpan;

impl AxisKind for TimeSpan {
    fn name(&self) -> &'static str {
        "time_span"
    }

    fn calculate_intervals(&self, context: &IntervalContext) -> ChartResult<Intervals> {
        let range = (context.actual_maximum - context.actual_minimum).abs();
        if range < 1.0 {
            return context.numeric_intervals();
        }
        if !range.is_finite() {
            return Err(ChartError::InvalidIntervalInput(
                "time span range must be finite".to_owned(),
            ));
        }

        let max_count = context.nice_input(range).effective_max_count();
        let mut step = GOOD_INTERVALS
            .iter()
            .copied()
            .find(|candidate| range / candidate < max_count)
            .unwrap_or(GOOD_INTERVALS[GOOD_INTERVALS.len() - 1]);
        while range / step >= max_count {
            step *= 2.0;
        }
        Ok(Intervals::numeric(step, calculate_minor_interval(step)))
    }

    fn format_value(&self, value: f64, context: &FormatContext) -> String {
        format_time_span(value, context.major_step)
    }
}
