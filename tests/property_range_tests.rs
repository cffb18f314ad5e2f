use chart_axis::api::{Axis, AxisConfig, AxisPosition, Linear};
use chart_axis::core::ScreenRect;
use proptest::prelude::*;

const EPSILON: f64 = 1e-6;

fn constrained_config(
    absolute_minimum: f64,
    absolute_span: f64,
    minimum_range: f64,
    maximum_range: f64,
) -> AxisConfig {
    AxisConfig::default()
        .with_position(AxisPosition::Bottom)
        .with_absolute_bounds(absolute_minimum, absolute_minimum + absolute_span)
        .with_range_limits(minimum_range, maximum_range)
}

proptest! {
    #[test]
    fn resolved_range_stays_inside_absolute_bounds(
        absolute_minimum in -1_000.0f64..1_000.0,
        absolute_span in 10.0f64..5_000.0,
        data_low in -10_000.0f64..10_000.0,
        data_width in 0.0f64..10_000.0,
        padding in 0.0f64..0.5,
        use_explicit_minimum in any::<bool>()
    ) {
        let mut config = constrained_config(absolute_minimum, absolute_span, 0.0, f64::MAX)
            .with_padding(padding, padding);
        if use_explicit_minimum {
            config.minimum = Some(data_low - 1.0);
        }
        let mut axis = Axis::with_config(Linear, config).expect("axis");
        axis.include_values([data_low, data_low + data_width]);
        axis.update_actual_max_min().expect("resolve");

        prop_assert!(axis.actual_minimum() >= absolute_minimum - EPSILON);
        prop_assert!(axis.actual_maximum() <= absolute_minimum + absolute_span + EPSILON);
        prop_assert!(axis.actual_minimum() < axis.actual_maximum());
    }

    #[test]
    fn span_limits_hold_after_pan_and_zoom(
        minimum_range in 1.0f64..50.0,
        extra_range in 10.0f64..500.0,
        pan_delta in -2_000.0f64..2_000.0,
        zoom_factor in 0.05f64..20.0,
        anchor_fraction in 0.0f64..1.0
    ) {
        let maximum_range = minimum_range + extra_range;
        let config = constrained_config(-1_000.0, 3_000.0, minimum_range, maximum_range)
            .with_bounds(0.0, minimum_range + extra_range * 0.5);
        let mut axis = Axis::with_config(Linear, config).expect("axis");
        axis.update(ScreenRect::new(0.0, 0.0, 800.0, 600.0)).expect("update");

        axis.pan(pan_delta).expect("pan");
        let span = axis.actual_maximum() - axis.actual_minimum();
        prop_assert!(span >= minimum_range - EPSILON && span <= maximum_range + EPSILON);

        let anchor = axis.actual_minimum() + anchor_fraction * span;
        axis.zoom_at(zoom_factor, anchor).expect("zoom");
        let span = axis.actual_maximum() - axis.actual_minimum();
        prop_assert!(span >= minimum_range - EPSILON && span <= maximum_range + EPSILON);
        prop_assert!(axis.actual_minimum() >= -1_000.0 - EPSILON);
        prop_assert!(axis.actual_maximum() <= 2_000.0 + EPSILON);
    }
}
