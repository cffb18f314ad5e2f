use approx::assert_relative_eq;
use chart_axis::api::{Axis, AxisConfig, Linear, Logarithmic, ViewBounds};
use chart_axis::error::ChartError;
use rust_decimal::Decimal;

#[test]
fn padding_follows_maximum_first_order() {
    let mut axis = Axis::with_config(Linear, AxisConfig::default().with_padding(0.05, 0.2))
        .expect("axis");
    axis.include_values([10.0, 60.0]);
    axis.update_actual_max_min().expect("resolve");

    assert_relative_eq!(axis.actual_maximum(), 70.0, epsilon = 1e-9);
    // Unpadded span is (70 - 10) / 1.2 = 50; 5% of it goes below.
    assert_relative_eq!(axis.actual_minimum(), 7.5, epsilon = 1e-9);
}

#[test]
fn explicit_bound_mixes_with_data_bound() {
    let mut config = AxisConfig::default().with_padding(0.0, 0.0);
    config.minimum = Some(0.0);
    let mut axis = Axis::with_config(Linear, config).expect("axis");
    axis.include_values([20.0, 40.0]);
    axis.update_actual_max_min().expect("resolve");
    assert_eq!(axis.actual_minimum(), 0.0);
    assert_eq!(axis.actual_maximum(), 40.0);
}

#[test]
fn zero_only_data_gets_unit_span() {
    let mut axis = Axis::with_config(Linear, AxisConfig::default().with_padding(0.0, 0.0))
        .expect("axis");
    axis.include(0.0);
    axis.update_actual_max_min().expect("resolve");
    assert_eq!(axis.actual_minimum(), -0.5);
    assert_eq!(axis.actual_maximum(), 0.5);
}

#[test]
fn absolute_bounds_pin_the_range() {
    let config = AxisConfig::default()
        .with_absolute_bounds(0.0, 50.0)
        .with_padding(0.0, 0.0);
    let mut axis = Axis::with_config(Linear, config).expect("axis");
    axis.include_values([30.0, 80.0]);
    axis.update_actual_max_min().expect("resolve");
    assert_eq!(axis.actual_minimum(), 0.0);
    assert_eq!(axis.actual_maximum(), 50.0);
}

#[test]
fn minimum_range_recenters_narrow_data() {
    let config = AxisConfig::default()
        .with_range_limits(10.0, f64::MAX)
        .with_padding(0.0, 0.0);
    let mut axis = Axis::with_config(Linear, config).expect("axis");
    axis.include_values([49.0, 51.0]);
    axis.update_actual_max_min().expect("resolve");
    assert_relative_eq!(axis.actual_minimum(), 45.0, epsilon = 1e-9);
    assert_relative_eq!(axis.actual_maximum(), 55.0, epsilon = 1e-9);
}

#[test]
fn maximum_range_recenters_wide_data() {
    let config = AxisConfig::default()
        .with_range_limits(0.0, 20.0)
        .with_padding(0.0, 0.0);
    let mut axis = Axis::with_config(Linear, config).expect("axis");
    axis.include_values([0.0, 100.0]);
    axis.update_actual_max_min().expect("resolve");
    assert_relative_eq!(axis.actual_minimum(), 40.0, epsilon = 1e-9);
    assert_relative_eq!(axis.actual_maximum(), 60.0, epsilon = 1e-9);
}

#[test]
fn inconsistent_configuration_is_fatal() {
    let config = AxisConfig::default()
        .with_absolute_bounds(0.0, 10.0)
        .with_range_limits(20.0, 30.0);
    assert!(matches!(
        Axis::with_config(Linear, config),
        Err(ChartError::InvalidConfiguration(_))
    ));

    let config = AxisConfig::default().with_range_limits(5.0, 1.0);
    assert!(matches!(
        Axis::with_config(Linear, config),
        Err(ChartError::InvalidConfiguration(_))
    ));
}

#[test]
fn invalid_set_config_keeps_previous_configuration() {
    let mut axis = Axis::new(Linear).expect("axis");
    let before = axis.config().clone();
    let bad = AxisConfig::default().with_absolute_bounds(5.0, 5.0);
    assert!(axis.set_config(bad).is_err());
    assert_eq!(axis.config(), &before);
}

#[test]
fn reset_data_forgets_previous_values() {
    let mut axis = Axis::with_config(Linear, AxisConfig::default().with_padding(0.0, 0.0))
        .expect("axis");
    axis.include_values([-100.0, 100.0]);
    axis.reset_data_max_min();
    axis.include_values([1.0, 2.0]);
    axis.update_actual_max_min().expect("resolve");
    assert_eq!(axis.actual_minimum(), 1.0);
    assert_eq!(axis.actual_maximum(), 2.0);
}

#[test]
fn decimal_values_are_included() {
    let mut axis = Axis::with_config(Linear, AxisConfig::default().with_padding(0.0, 0.0))
        .expect("axis");
    axis.include_decimal(Decimal::new(125, 1)).expect("decimal");
    axis.include_decimal(Decimal::new(-5, 0)).expect("decimal");
    assert_eq!(axis.data_bounds().as_pair(), Some((-5.0, 12.5)));
}

#[test]
fn log_axis_ignores_non_positive_values() {
    let mut axis = Axis::new(Logarithmic::default()).expect("axis");
    axis.include_values([-1.0, 0.0, f64::NAN]);
    assert!(axis.data_bounds().is_empty());
    axis.update_actual_max_min().expect("resolve");
    assert_eq!(axis.actual_minimum(), 1.0);
    assert_eq!(axis.actual_maximum(), 100.0);
}

#[test]
fn view_bounds_start_unset() {
    let axis = Axis::new(Linear).expect("axis");
    assert_eq!(axis.view_bounds(), ViewBounds::default());
}
