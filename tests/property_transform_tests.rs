use chart_axis::api::{Axis, AxisConfig, AxisKind, AxisPosition, DateTime, Linear, Logarithmic};
use chart_axis::core::ScreenRect;
use proptest::prelude::*;

const PLOT: ScreenRect = ScreenRect {
    left: 40.0,
    top: 20.0,
    width: 900.0,
    height: 500.0,
};

fn updated_axis<K: AxisKind>(kind: K, config: AxisConfig) -> Axis<K> {
    let mut axis = Axis::with_config(kind, config).expect("axis");
    axis.update(PLOT).expect("update");
    axis
}

fn assert_round_trip<K: AxisKind>(axis: &Axis<K>, fraction: f64) -> Result<(), TestCaseError> {
    let screen = axis.screen_min() + fraction * (axis.screen_max() - axis.screen_min());
    let back = axis.transform(axis.inverse_transform(screen));
    prop_assert!(
        (back - screen).abs() <= 1e-9 * screen.abs().max(1.0),
        "screen {screen} came back as {back}"
    );
    Ok(())
}

proptest! {
    #[test]
    fn linear_round_trip_and_monotonicity(
        minimum in -1e3f64..1e3,
        span in 1.0f64..1e6,
        fraction in 0.0f64..1.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
        reversed in any::<bool>(),
        vertical in any::<bool>()
    ) {
        let position = if vertical { AxisPosition::Left } else { AxisPosition::Bottom };
        let (start, end) = if reversed { (1.0, 0.0) } else { (0.0, 1.0) };
        let config = AxisConfig::default()
            .with_position(position)
            .with_screen_positions(start, end)
            .with_bounds(minimum, minimum + span);
        let axis = updated_axis(Linear, config);
        assert_round_trip(&axis, fraction)?;

        let (x1, x2) = (minimum + a.min(b) * span, minimum + a.max(b) * span);
        prop_assume!(x2 - x1 > span * 1e-6);
        let (s1, s2) = (axis.transform(x1), axis.transform(x2));
        // Screen y grows downwards, so a vertical axis runs the other way.
        let increasing = reversed == vertical;
        if increasing {
            prop_assert!(s1 < s2);
        } else {
            prop_assert!(s1 > s2);
        }
    }

    #[test]
    fn log_round_trip_and_monotonicity(
        low_exponent in -6.0f64..6.0,
        decades in 0.5f64..8.0,
        fraction in 0.0f64..1.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0
    ) {
        let minimum = 10f64.powf(low_exponent);
        let maximum = 10f64.powf(low_exponent + decades);
        let config = AxisConfig::default()
            .with_position(AxisPosition::Bottom)
            .with_bounds(minimum, maximum);
        let axis = updated_axis(Logarithmic::default(), config);
        assert_round_trip(&axis, fraction)?;

        let x1 = 10f64.powf(low_exponent + a.min(b) * decades);
        let x2 = 10f64.powf(low_exponent + a.max(b) * decades);
        prop_assume!(x2 > x1 * (1.0 + 1e-6));
        prop_assert!(axis.transform(x1) < axis.transform(x2));
    }

    #[test]
    fn date_round_trip_and_monotonicity(
        start_day in -20_000.0f64..40_000.0,
        span_days in 1.0f64..20_000.0,
        fraction in 0.0f64..1.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0
    ) {
        let config = AxisConfig::default()
            .with_position(AxisPosition::Bottom)
            .with_bounds(start_day, start_day + span_days);
        let axis = updated_axis(DateTime::default(), config);
        assert_round_trip(&axis, fraction)?;

        let (x1, x2) = (start_day + a.min(b) * span_days, start_day + a.max(b) * span_days);
        prop_assume!(x2 - x1 > span_days * 1e-6);
        prop_assert!(axis.transform(x1) < axis.transform(x2));
    }
}
