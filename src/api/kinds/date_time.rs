use chrono::{Utc, Weekday};

use crate::api::axis_label_format::{date_pattern, format_date_value};
use crate::api::{
    Axis, AxisKind, FormatContext, IntervalContext, Intervals, TickContext, TickUnit,
};
use crate::core::calendar::calendar_minor_step;
use crate::core::{
    DateTimeIntervalType, TickValues, create_calendar_tick_values, datetime_to_axis_value,
    default_minor_interval_type, filter_redundant_minor_ticks, select_calendar_interval,
};
use crate::error::{ChartError, ChartResult};

/// Date/time axis over days since the Unix epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct DateTime {
    /// Major unit; `Auto` picks one from the calendar interval table.
    pub interval_type: DateTimeIntervalType,
    /// Minor unit; derived from the major unit when unset.
    pub minor_interval_type: Option<DateTimeIntervalType>,
    pub first_day_of_week: Weekday,
    /// Offset of the displayed local time from UTC.
    pub utc_offset_minutes: i32,
    /// chrono pattern overriding the unit-based default.
    pub string_format: Option<String>,
}

impl Default for DateTime {
    fn default() -> Self {
        Self {
            interval_type: DateTimeIntervalType::Auto,
            minor_interval_type: None,
            first_day_of_week: Weekday::Mon,
            utc_offset_minutes: 0,
            string_format: None,
        }
    }
}

impl DateTime {
    #[must_use]
    pub fn with_interval_type(mut self, interval_type: DateTimeIntervalType) -> Self {
        self.interval_type = interval_type;
        self
    }

    #[must_use]
    pub fn with_string_format(mut self, string_format: impl Into<String>) -> Self {
        self.string_format = Some(string_format.into());
        self
    }

    #[must_use]
    pub fn with_utc_offset_minutes(mut self, utc_offset_minutes: i32) -> Self {
        self.utc_offset_minutes = utc_offset_minutes;
        self
    }

    fn calendar_unit(unit: TickUnit) -> DateTimeIntervalType {
        match unit {
            TickUnit::Calendar(interval_type) => interval_type,
            _ => DateTimeIntervalType::Auto,
        }
    }
}

impl AxisKind for DateTime {
    fn name(&self) -> &'static str {
        "date_time"
    }

    fn validate(&self) -> ChartResult<()> {
        if self.utc_offset_minutes.unsigned_abs() >= 24 * 60 {
            return Err(ChartError::InvalidConfiguration(format!(
                "utc offset must be within one day, got {} minutes",
                self.utc_offset_minutes
            )));
        }
        Ok(())
    }

    fn calculate_intervals(&self, context: &IntervalContext) -> ChartResult<Intervals> {
        let range = context.actual_maximum - context.actual_minimum;
        let (major_step, major_type) =
            select_calendar_interval(context.nice_input(range), self.interval_type)?;
        let minor_type = self
            .minor_interval_type
            .unwrap_or_else(|| default_minor_interval_type(major_type));
        Ok(Intervals {
            major_step,
            minor_step: calendar_minor_step(major_step, major_type, minor_type),
            major_unit: TickUnit::Calendar(major_type),
            minor_unit: TickUnit::Calendar(minor_type),
        })
    }

    fn tick_values(&self, context: &TickContext) -> ChartResult<TickValues> {
        let intervals = context.intervals;
        let ticks = |step: f64, unit: TickUnit| {
            create_calendar_tick_values(
                context.clip_minimum,
                context.clip_maximum,
                step,
                Self::calendar_unit(unit),
                self.first_day_of_week,
                self.utc_offset_minutes,
                context.max_ticks,
            )
        };
        let major = ticks(intervals.major_step, intervals.major_unit)?;
        let minor = ticks(intervals.minor_step, intervals.minor_unit)?;
        let minor = filter_redundant_minor_ticks(&major, &minor, context.minor_tolerance());
        Ok(TickValues::with_labels_on_major(major, minor))
    }

    fn format_value(&self, value: f64, context: &FormatContext) -> String {
        let pattern = match &self.string_format {
            Some(pattern) => pattern.as_str(),
            None => date_pattern(Self::calendar_unit(context.unit), context.locale),
        };
        format_date_value(value, pattern, self.utc_offset_minutes)
    }
}

impl Axis<DateTime> {
    /// Includes a timestamp in the data range.
    pub fn include_datetime(&mut self, time: chrono::DateTime<Utc>) {
        self.include(datetime_to_axis_value(time));
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, TimeZone};

    use super::*;
    use crate::api::{AxisConfig, AxisPosition};
    use crate::core::{ScreenRect, axis_value_to_datetime};

    fn day(year: i32, month: u32, day: u32) -> f64 {
        datetime_to_axis_value(
            Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
                .single()
                .expect("valid date"),
        )
    }

    fn date_axis(kind: DateTime, minimum: f64, maximum: f64) -> Axis<DateTime> {
        let config = AxisConfig::default()
            .with_position(AxisPosition::Bottom)
            .with_bounds(minimum, maximum);
        let mut axis = Axis::with_config(kind, config).expect("axis");
        axis.update(ScreenRect::new(0.0, 0.0, 800.0, 400.0))
            .expect("update");
        axis
    }

    #[test]
    fn month_ticks_start_on_first_of_month() {
        let axis = date_axis(
            DateTime::default().with_interval_type(DateTimeIntervalType::Months),
            day(2024, 1, 15),
            day(2024, 4, 15),
        );
        let ticks = axis.get_tick_values().expect("ticks");
        let first = axis_value_to_datetime(ticks.major_tick_values[0]).expect("date");
        assert_eq!((first.month(), first.day()), (2, 1));
        assert_eq!(axis.format_value(ticks.major_tick_values[0]), "2024-02");
    }

    #[test]
    fn auto_interval_for_a_few_days_uses_day_steps() {
        let axis = date_axis(DateTime::default(), day(2024, 3, 1), day(2024, 3, 8));
        assert_eq!(
            axis.intervals().major_unit,
            TickUnit::Calendar(DateTimeIntervalType::Days)
        );
        assert_eq!(axis.actual_major_step(), 1.0);
        assert_eq!(axis.format_value(day(2024, 3, 5)), "2024-03-05");
    }

    #[test]
    fn string_format_overrides_pattern() {
        let axis = date_axis(
            DateTime::default().with_string_format("%d %b"),
            day(2024, 3, 1),
            day(2024, 3, 8),
        );
        assert_eq!(axis.format_value(day(2024, 3, 5)), "05 Mar");
    }

    #[test]
    fn include_datetime_tracks_days() {
        let mut axis = Axis::new(DateTime::default()).expect("axis");
        axis.include_datetime(Utc.with_ymd_and_hms(1970, 1, 2, 12, 0, 0).single().expect("date"));
        assert_eq!(axis.data_bounds().as_pair(), Some((1.5, 1.5)));
    }
}
