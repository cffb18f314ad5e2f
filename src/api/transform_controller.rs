#[cfg(feature = "parallel-transform")]
use rayon::prelude::*;
use tracing::debug;

use crate::core::{ScreenPoint, ScreenRect};
use crate::error::{ChartError, ChartResult};

use super::{Axis, AxisKind, AxisTransform};

impl<K: AxisKind> Axis<K> {
    /// Solves `scale`/`offset` for the current actual range on `plot_area`.
    ///
    /// The plot area is remembered so pan and zoom can refresh the transform
    /// before the next full update cycle.
    pub fn update_transform(&mut self, plot_area: ScreenRect) -> ChartResult<()> {
        let plot_area = plot_area.validate()?;
        let kind = &self.kind;
        let config = &self.config;
        let mut state = self.state;

        let pre_minimum = kind.pre_transform(state.actual_minimum);
        let pre_maximum = kind.pre_transform(state.actual_maximum);

        if let Some((a0, a1)) = kind.screen_extent(config, plot_area) {
            state.transform = AxisTransform::solve(pre_minimum, pre_maximum, a0, a1);
            state.clip_minimum = state.actual_minimum;
            state.clip_maximum = state.actual_maximum;
            state.screen_min = a0;
            state.screen_max = a1;
        } else {
            let horizontal = config.is_horizontal();
            let along = |fraction: f64| {
                if horizontal {
                    plot_area.left + fraction * plot_area.width
                } else {
                    plot_area.bottom() - fraction * plot_area.height
                }
            };
            let a0 = along(config.start_position);
            let a1 = along(config.end_position);

            let direction = config.end_position - config.start_position;
            let direction = if direction == 0.0 { 0.0 } else { direction.signum() };
            let margin_sign = if horizontal { direction } else { -direction };

            let outer_a0 = a0 + config.minimum_margin * margin_sign;
            let outer_a1 = a1 - config.maximum_margin * margin_sign;

            let transform = AxisTransform::solve(pre_minimum, pre_maximum, outer_a0, outer_a1);
            state.transform = transform;
            let has_data_margins =
                config.minimum_data_margin != 0.0 || config.maximum_data_margin != 0.0;
            if has_data_margins && transform.scale != 0.0 {
                // Clip range sits inside the actual range by the data margins.
                let inner_a0 = outer_a0 + config.minimum_data_margin * margin_sign;
                let inner_a1 = outer_a1 - config.maximum_data_margin * margin_sign;
                let clip_a = kind.post_inverse_transform(transform.invert(inner_a0));
                let clip_b = kind.post_inverse_transform(transform.invert(inner_a1));
                state.clip_minimum = clip_a.min(clip_b);
                state.clip_maximum = clip_a.max(clip_b);
            } else {
                state.clip_minimum = state.actual_minimum;
                state.clip_maximum = state.actual_maximum;
            }
            state.screen_min = a0;
            state.screen_max = a1;
        }
        state.mid_point = plot_area.center();

        if !state.clip_minimum.is_finite() || !state.clip_maximum.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "clip range [{}, {}] is not finite",
                state.clip_minimum, state.clip_maximum
            )));
        }
        state.check_invariants(config.range_constraints())?;

        debug!(
            axis = kind.name(),
            scale = state.transform.scale,
            offset = state.transform.offset,
            "updated axis transform"
        );
        self.state = state;
        self.plot_area = Some(plot_area);
        Ok(())
    }

    /// Data value to screen coordinate.
    #[must_use]
    pub fn transform(&self, value: f64) -> f64 {
        self.state.transform.apply(self.kind.pre_transform(value))
    }

    /// Screen coordinate to data value. A zero scale maps every coordinate
    /// onto the actual minimum.
    #[must_use]
    pub fn inverse_transform(&self, screen: f64) -> f64 {
        self.kind
            .post_inverse_transform(self.state.transform.invert(screen))
    }

    /// Transforms a batch of values.
    #[cfg(not(feature = "parallel-transform"))]
    #[must_use]
    pub fn transform_values(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|value| self.transform(*value)).collect()
    }

    /// Transforms a batch of values on the rayon pool.
    #[cfg(feature = "parallel-transform")]
    #[must_use]
    pub fn transform_values(&self, values: &[f64]) -> Vec<f64>
    where
        K: Sync,
    {
        let transform = self.state.transform;
        let kind = &self.kind;
        values
            .par_iter()
            .map(|value| transform.apply(kind.pre_transform(*value)))
            .collect()
    }

    /// Maps `(x, y)` onto the screen with `self` as one of the two axes.
    ///
    /// `x` always belongs to the horizontal axis of the pair.
    #[must_use]
    pub fn transform_point<P: AxisKind>(&self, x: f64, y: f64, perpendicular: &Axis<P>) -> ScreenPoint {
        if self.is_vertical() && !perpendicular.is_vertical() {
            ScreenPoint::new(perpendicular.transform(x), self.transform(y))
        } else {
            ScreenPoint::new(self.transform(x), perpendicular.transform(y))
        }
    }

    /// Inverse of [`Axis::transform_point`], returning `(x, y)` data values.
    #[must_use]
    pub fn inverse_transform_point<P: AxisKind>(
        &self,
        point: ScreenPoint,
        perpendicular: &Axis<P>,
    ) -> (f64, f64) {
        if self.is_vertical() && !perpendicular.is_vertical() {
            (
                perpendicular.inverse_transform(point.x),
                self.inverse_transform(point.y),
            )
        } else {
            (
                self.inverse_transform(point.x),
                perpendicular.inverse_transform(point.y),
            )
        }
    }

    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.config.is_horizontal()
    }

    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.config.is_vertical()
    }

    /// Whether the axis runs from its end position back to its start.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.config.start_position > self.config.end_position
    }

    #[must_use]
    pub fn is_polar(&self) -> bool {
        self.kind.is_polar()
    }
}
