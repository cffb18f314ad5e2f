use tracing::debug;

use crate::core::{ScreenRect, calculate_minor_interval};
use crate::error::ChartResult;

use super::{Axis, AxisKind, IntervalContext};

impl<K: AxisKind> Axis<K> {
    /// Computes major and minor steps for the resolved range on `plot_area`.
    ///
    /// Explicit `major_step`/`minor_step` in the configuration override the
    /// kind's calculation; a missing minor step is derived from the major one.
    pub fn update_intervals(&mut self, plot_area: ScreenRect) -> ChartResult<()> {
        let plot_area = plot_area.validate()?;
        let context = self.interval_context(plot_area);

        let mut intervals = self.kind.calculate_intervals(&context)?;
        if let Some(major_step) = self.config.major_step {
            intervals.major_step = major_step;
            intervals.minor_step = self
                .config
                .minor_step
                .unwrap_or_else(|| calculate_minor_interval(major_step));
        } else if let Some(minor_step) = self.config.minor_step {
            intervals.minor_step = minor_step;
        }

        debug!(
            axis = self.kind.name(),
            major_step = intervals.major_step,
            minor_step = intervals.minor_step,
            "updated axis intervals"
        );
        self.state.intervals = intervals;
        Ok(())
    }

    pub(super) fn interval_context(&self, plot_area: ScreenRect) -> IntervalContext {
        IntervalContext {
            actual_minimum: self.state.actual_minimum,
            actual_maximum: self.state.actual_maximum,
            available_size: self.kind.interval_extent(&self.config, plot_area),
            interval_length: self.config.interval_length,
            minimum_interval_count: self.config.minimum_major_interval_count,
            maximum_interval_count: self.config.maximum_major_interval_count,
        }
    }
}
