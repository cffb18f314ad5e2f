use chart_axis::api::{Axis, AxisConfig, AxisPosition, DateTime, TickUnit};
use chart_axis::core::{
    DateTimeIntervalType, ScreenRect, axis_value_to_datetime, datetime_to_axis_value,
};
use chrono::{Datelike, TimeZone, Timelike, Utc, Weekday};

fn day(year: i32, month: u32, day: u32) -> f64 {
    datetime_to_axis_value(
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .expect("valid date"),
    )
}

fn date_axis(kind: DateTime, minimum: f64, maximum: f64, width: f64) -> Axis<DateTime> {
    let config = AxisConfig::default()
        .with_position(AxisPosition::Bottom)
        .with_bounds(minimum, maximum);
    let mut axis = Axis::with_config(kind, config).expect("axis");
    axis.update(ScreenRect::new(0.0, 0.0, width, 300.0))
        .expect("update");
    axis
}

#[test]
fn three_month_range_ticks_on_first_of_month() {
    let axis = date_axis(
        DateTime::default().with_interval_type(DateTimeIntervalType::Months),
        day(2023, 5, 17),
        day(2023, 8, 17),
        900.0,
    );
    let ticks = axis.get_tick_values().expect("ticks");
    let months: Vec<(u32, u32)> = ticks
        .major_tick_values
        .iter()
        .map(|value| {
            let date = axis_value_to_datetime(*value).expect("date");
            (date.month(), date.day())
        })
        .collect();
    assert_eq!(months, vec![(6, 1), (7, 1), (8, 1)]);
    assert!(ticks.major_tick_values[0] > axis.actual_minimum());
}

#[test]
fn auto_selection_over_years_uses_year_unit() {
    let axis = date_axis(DateTime::default(), day(2000, 3, 1), day(2020, 3, 1), 800.0);
    assert_eq!(
        axis.intervals().major_unit,
        TickUnit::Calendar(DateTimeIntervalType::Years)
    );
    let ticks = axis.get_tick_values().expect("ticks");
    for value in &ticks.major_tick_values {
        let date = axis_value_to_datetime(*value).expect("date");
        assert_eq!((date.month(), date.day()), (1, 1));
    }
    assert_eq!(axis.format_value(day(2010, 1, 1)), "2010");
}

#[test]
fn auto_selection_within_a_day_uses_hours() {
    let start = day(2024, 6, 3);
    let axis = date_axis(DateTime::default(), start, start + 1.0, 600.0);
    assert_eq!(
        axis.intervals().major_unit,
        TickUnit::Calendar(DateTimeIntervalType::Hours)
    );
    let ticks = axis.get_tick_values().expect("ticks");
    let first = axis_value_to_datetime(ticks.major_tick_values[1]).expect("date");
    assert_eq!(first.minute(), 0);
    assert_eq!(axis.format_value(start + 0.5), "12:00");
}

#[test]
fn week_ticks_follow_first_day_of_week() {
    let kind = DateTime {
        interval_type: DateTimeIntervalType::Weeks,
        first_day_of_week: Weekday::Sun,
        ..DateTime::default()
    };
    let axis = date_axis(kind, day(2024, 1, 3), day(2024, 3, 1), 900.0);
    let ticks = axis.get_tick_values().expect("ticks");
    assert!(!ticks.major_tick_values.is_empty());
    for value in &ticks.major_tick_values {
        let date = axis_value_to_datetime(*value).expect("date");
        assert_eq!(date.weekday(), Weekday::Sun);
    }
}

#[test]
fn auto_week_steps_snap_to_first_day_of_week() {
    let axis = date_axis(DateTime::default(), day(2024, 1, 1), day(2024, 3, 11), 600.0);
    assert_eq!(
        axis.intervals().major_unit,
        TickUnit::Calendar(DateTimeIntervalType::Weeks)
    );
    assert_eq!(axis.actual_major_step(), 14.0);

    let ticks = axis.get_tick_values().expect("ticks");
    assert_eq!(ticks.major_tick_values.first().copied(), Some(day(2024, 1, 1)));
    for value in &ticks.major_tick_values {
        let date = axis_value_to_datetime(*value).expect("date");
        assert_eq!(date.weekday(), Weekday::Mon);
    }
}

#[test]
fn utc_offset_moves_boundaries_to_local_midnight() {
    let kind = DateTime::default()
        .with_interval_type(DateTimeIntervalType::Months)
        .with_utc_offset_minutes(120);
    let axis = date_axis(kind, day(2024, 1, 10), day(2024, 4, 10), 900.0);
    let ticks = axis.get_tick_values().expect("ticks");
    let first = axis_value_to_datetime(ticks.major_tick_values[0]).expect("date");
    // Local 2024-02-01T00:00+02:00 is 2024-01-31T22:00Z.
    assert_eq!((first.month(), first.day(), first.hour()), (1, 31, 22));
    assert_eq!(axis.format_value(ticks.major_tick_values[0]), "2024-02");
}

#[test]
fn minor_ticks_skip_major_positions() {
    let axis = date_axis(
        DateTime::default().with_interval_type(DateTimeIntervalType::Months),
        day(2023, 1, 1),
        day(2023, 12, 31),
        1_200.0,
    );
    let ticks = axis.get_tick_values().expect("ticks");
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
