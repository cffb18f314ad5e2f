use serde::{Deserialize, Serialize};

use crate::api::{Axis, AxisConfig, AxisKind, AxisPosition};
use crate::core::{ScreenPoint, ScreenRect};

/// Radial axis of a polar plot; the range maps onto a radius around the
/// plot mid-point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Magnitude;

fn radius(config: &AxisConfig, plot_area: ScreenRect) -> (f64, f64) {
    let half = plot_area.width.min(plot_area.height) * 0.5;
    (config.start_position * half, config.end_position * half)
}

impl AxisKind for Magnitude {
    fn name(&self) -> &'static str {
        "magnitude"
    }

    fn interval_extent(&self, config: &AxisConfig, plot_area: ScreenRect) -> f64 {
        let (inner, outer) = radius(config, plot_area);
        (outer - inner).abs()
    }

    fn screen_extent(&self, config: &AxisConfig, plot_area: ScreenRect) -> Option<(f64, f64)> {
        Some(radius(config, plot_area))
    }

    fn is_polar(&self) -> bool {
        true
    }

    fn default_config(&self) -> AxisConfig {
        AxisConfig {
            minimum_padding: 0.0,
            ..AxisConfig::default()
        }
        .with_position(AxisPosition::None)
    }
}

impl Axis<Magnitude> {
    /// Screen point of `(magnitude, angle)`, with `angle` resolved through
    /// `angle_axis` into degrees.
    #[must_use]
    pub fn transform_polar<A: AxisKind>(
        &self,
        magnitude: f64,
        angle: f64,
        angle_axis: &Axis<A>,
    ) -> ScreenPoint {
        let radius = self.transform(magnitude);
        let theta = angle_axis.transform(angle).to_radians();
        let mid = self.mid_point();
        ScreenPoint::new(mid.x + radius * theta.cos(), mid.y - radius * theta.sin())
    }

    /// Inverse of [`Axis::transform_polar`], returning `(magnitude, angle)`.
    ///
    /// The screen angle is normalised into one turn starting at the angle
    /// axis' start angle.
    #[must_use]
    pub fn inverse_transform_polar<A: AxisKind>(
        &self,
        point: ScreenPoint,
        angle_axis: &Axis<A>,
    ) -> (f64, f64) {
        let mid = self.mid_point();
        let dx = point.x - mid.x;
        let dy = mid.y - point.y;
        let radius = dx.hypot(dy);

        let start = angle_axis.screen_min().min(angle_axis.screen_max());
        let theta = start + (dy.atan2(dx).to_degrees() - start).rem_euclid(360.0);
        (
            self.inverse_transform(radius),
            angle_axis.inverse_transform(theta),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Angle;

    const PLOT: ScreenRect = ScreenRect {
        left: 0.0,
        top: 0.0,
        width: 400.0,
        height: 300.0,
    };

    fn polar_pair() -> (Axis<Magnitude>, Axis<Angle>) {
        let mut magnitude = Axis::with_config(
            Magnitude,
            Magnitude.default_config().with_bounds(0.0, 10.0),
        )
        .expect("magnitude axis");
        magnitude.update(PLOT).expect("update");
        let mut angle = Axis::new(Angle::default()).expect("angle axis");
        angle.update(PLOT).expect("update");
        (magnitude, angle)
    }

    #[test]
    fn magnitude_maps_to_radius_from_mid_point() {
        let (magnitude, angle) = polar_pair();
        assert!((magnitude.transform(10.0) - 150.0).abs() <= 1e-9);

        let point = magnitude.transform_polar(10.0, 90.0, &angle);
        assert!((point.x - 200.0).abs() <= 1e-9);
        assert!((point.y - 0.0).abs() <= 1e-9);
    }

    #[test]
    fn polar_round_trip() {
        let (magnitude, angle) = polar_pair();
        for (r, theta) in [(2.5, 30.0), (7.0, 200.0), (9.0, 359.0)] {
            let point = magnitude.transform_polar(r, theta, &angle);
            let (r_back, theta_back) = magnitude.inverse_transform_polar(point, &angle);
            assert!((r_back - r).abs() <= 1e-9);
            assert!((theta_back - theta).abs() <= 1e-9);
        }
    }
}
