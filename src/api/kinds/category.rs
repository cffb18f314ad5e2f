use serde::{Deserialize, Serialize};

use crate::api::{
    AxisConfig, AxisKind, AxisPosition, DataBounds, FormatContext, IntervalContext, Intervals,
    TickContext, TickUnit,
};
use crate::core::{TickValues, calculate_nice_interval};
use crate::error::ChartResult;

/// Discrete axis; item `i` sits at value `i`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub labels: Vec<String>,
    /// Ticks on the items instead of on the boundaries between them.
    pub is_tick_centered: bool,
}

impl Category {
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            is_tick_centered: false,
        }
    }

    #[must_use]
    pub fn with_tick_centered(mut self, is_tick_centered: bool) -> Self {
        self.is_tick_centered = is_tick_centered;
        self
    }
}

impl AxisKind for Category {
    fn name(&self) -> &'static str {
        "category"
    }

    /// Widens the range to half a slot around every item.
    fn adjust_data_bounds(&self, bounds: DataBounds) -> DataBounds {
        let from_data = bounds
            .maximum
            .map_or(0.0, |maximum| (maximum.round() + 1.0).max(0.0));
        let count = (self.labels.len() as f64).max(from_data);
        if count == 0.0 {
            return bounds;
        }
        DataBounds::new(-0.5, count - 0.5)
    }

    fn calculate_intervals(&self, context: &IntervalContext) -> ChartResult<Intervals> {
        let range = context.actual_maximum - context.actual_minimum;
        let major_step = calculate_nice_interval(context.nice_input(range))?
            .ceil()
            .max(1.0);
        Ok(Intervals {
            major_step,
            minor_step: 1.0,
            major_unit: TickUnit::Category,
            minor_unit: TickUnit::Category,
        })
    }

    fn tick_values(&self, context: &TickContext) -> ChartResult<TickValues> {
        let step = context.intervals.major_step.max(1.0);
        let first = (context.clip_minimum / step).ceil() * step;

        let mut labels = Vec::new();
        let mut index = first;
        while index <= context.clip_maximum && labels.len() < context.max_ticks {
            labels.push(index);
            index += step;
        }

        let major_ticks = if self.is_tick_centered {
            labels.clone()
        } else {
            let mut boundaries: Vec<f64> = labels.iter().map(|label| label - 0.5).collect();
            if let Some(last) = labels.last() {
                boundaries.push(last + 0.5);
            }
            boundaries
        };
        Ok(TickValues {
            major_label_values: labels,
            major_tick_values: major_ticks,
            minor_tick_values: Vec::new(),
        })
    }

    fn format_value(&self, value: f64, _context: &FormatContext) -> String {
        let index = value.round();
        if !index.is_finite() || index < 0.0 {
            return String::new();
        }
        self.labels.get(index as usize).cloned().unwrap_or_default()
    }

    fn default_config(&self) -> AxisConfig {
        AxisConfig {
            minimum_padding: 0.0,
            maximum_padding: 0.0,
            ..AxisConfig::default()
        }
        .with_position(AxisPosition::Bottom)
    }
}
