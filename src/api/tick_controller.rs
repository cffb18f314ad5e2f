use crate::core::{DEFAULT_MAX_TICKS, TickValues};
use crate::error::ChartResult;

use super::{Axis, AxisKind, TickContext};

impl<K: AxisKind> Axis<K> {
    /// Major label, major tick and minor tick positions over the clip range.
    pub fn get_tick_values(&self) -> ChartResult<TickValues> {
        self.kind.tick_values(&self.tick_context())
    }

    /// Major label values paired with their formatted text.
    pub fn tick_labels(&self) -> ChartResult<Vec<(f64, String)>> {
        let ticks = self.get_tick_values()?;
        Ok(ticks
            .major_label_values
            .into_iter()
            .map(|value| (value, self.format_value(value)))
            .collect())
    }

    pub(super) fn tick_context(&self) -> TickContext {
        TickContext {
            clip_minimum: self.state.clip_minimum,
            clip_maximum: self.state.clip_maximum,
            intervals: self.state.intervals,
            minor_tick_tolerance: self.config.minor_tick_tolerance,
            max_ticks: DEFAULT_MAX_TICKS,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{Axis, AxisConfig, AxisPosition, Linear};
    use crate::core::ScreenRect;

    #[test]
    fn ticks_cover_clip_range_without_duplicate_minors() {
        let config = AxisConfig::default()
            .with_position(AxisPosition::Bottom)
            .with_bounds(0.0, 100.0);
        let mut axis = Axis::with_config(Linear, config).expect("axis");
        axis.update(ScreenRect::new(0.0, 0.0, 600.0, 400.0))
            .expect("update");

        let ticks = axis.get_tick_values().expect("ticks");
        assert_eq!(ticks.major_tick_values.first().copied(), Some(0.0));
        assert_eq!(ticks.major_tick_values.last().copied(), Some(100.0));
        assert_eq!(ticks.major_label_values, ticks.major_tick_values);

        let tolerance = axis.actual_major_step() * 1e-3;
        for minor in &ticks.minor_tick_values {
            assert!(
                ticks
                    .major_tick_values
                    .iter()
                    .all(|major| (major - minor).abs() > tolerance)
            );
        }
    }

    #[test]
    fn tick_labels_use_axis_formatting() {
        let config = AxisConfig::default()
            .with_position(AxisPosition::Bottom)
            .with_bounds(0.0, 1.0);
        let mut axis = Axis::with_config(Linear, config).expect("axis");
        axis.update(ScreenRect::new(0.0, 0.0, 600.0, 400.0))
            .expect("update");
        let labels = axis.tick_labels().expect("labels");
        assert!(labels.iter().any(|(_, text)| text == "0.5"));
    }
}
