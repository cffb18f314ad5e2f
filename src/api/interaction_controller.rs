use tracing::debug;

use crate::core::ScreenPoint;
use crate::core::range::midpoint;
use crate::core::shift_into_bounds;
use crate::error::{ChartError, ChartResult};

use super::{Axis, AxisChange, AxisChangeKind, AxisKind, ViewBounds};

impl<K: AxisKind> Axis<K> {
    /// Pans by `delta` screen units; content follows the pointer.
    ///
    /// Returns `Ok(None)` when panning is disabled.
    pub fn pan(&mut self, delta: f64) -> ChartResult<Option<AxisChange>> {
        if !self.config.is_pan_enabled {
            debug!(axis = self.kind.name(), "pan ignored: panning disabled");
            return Ok(None);
        }
        if !delta.is_finite() {
            return Err(ChartError::InvalidData("pan delta must be finite".to_owned()));
        }
        let scale = self.nonzero_scale()?;

        let dx = delta / scale;
        let shifted = |bound: f64| {
            self.kind
                .post_inverse_transform(self.kind.pre_transform(bound) - dx)
        };
        let first = shifted(self.state.actual_minimum);
        let second = shifted(self.state.actual_maximum);
        let (minimum, maximum) = shift_into_bounds(
            first.min(second),
            first.max(second),
            self.config.range_constraints(),
        );
        self.apply_view_change(AxisChangeKind::Pan, ViewBounds::new(minimum, maximum))
    }

    /// Pans by the pointer movement between two screen points, along this
    /// axis' direction.
    pub fn pan_between(
        &mut self,
        previous: ScreenPoint,
        current: ScreenPoint,
    ) -> ChartResult<Option<AxisChange>> {
        let delta = if self.is_horizontal() {
            current.x - previous.x
        } else {
            current.y - previous.y
        };
        self.pan(delta)
    }

    /// Shows `[min(x0, x1), max(x0, x1)]`, clamped to the absolute bounds.
    pub fn zoom(&mut self, x0: f64, x1: f64) -> ChartResult<Option<AxisChange>> {
        if !self.config.is_zoom_enabled {
            debug!(axis = self.kind.name(), "zoom ignored: zooming disabled");
            return Ok(None);
        }
        for value in [x0, x1] {
            if !value.is_finite() || !self.kind.is_valid_value(value) {
                return Err(ChartError::InvalidData(format!(
                    "zoom bound {value} is not valid on a {} axis",
                    self.kind.name()
                )));
            }
        }
        let constraints = self.config.range_constraints();
        let minimum = x0.min(x1).max(constraints.absolute_minimum);
        let maximum = x0.max(x1).min(constraints.absolute_maximum);
        self.apply_view_change(AxisChangeKind::Zoom, ViewBounds::new(minimum, maximum))
    }

    /// Zooms by `factor` keeping `x` at the same screen position.
    ///
    /// `factor > 1` zooms in. The result is re-centred into the range limits
    /// and then clamped to the absolute bounds.
    pub fn zoom_at(&mut self, factor: f64, x: f64) -> ChartResult<Option<AxisChange>> {
        if !self.config.is_zoom_enabled {
            debug!(axis = self.kind.name(), "zoom ignored: zooming disabled");
            return Ok(None);
        }
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "zoom factor must be finite and > 0, got {factor}"
            )));
        }
        if !x.is_finite() || !self.kind.is_valid_value(x) {
            return Err(ChartError::InvalidData(format!(
                "zoom anchor {x} is not valid on a {} axis",
                self.kind.name()
            )));
        }

        let kind = &self.kind;
        let anchor = kind.pre_transform(x);
        let rescaled =
            |bound: f64| kind.post_inverse_transform(anchor + (kind.pre_transform(bound) - anchor) / factor);
        let mut minimum = rescaled(self.state.actual_minimum);
        let mut maximum = rescaled(self.state.actual_maximum);

        let constraints = self.config.range_constraints();
        let span = maximum - minimum;
        if span > constraints.maximum_range {
            let center = midpoint(minimum, maximum);
            minimum = center - constraints.maximum_range * 0.5;
            maximum = center + constraints.maximum_range * 0.5;
        }
        if span < constraints.minimum_range {
            let center = midpoint(minimum, maximum);
            minimum = center - constraints.minimum_range * 0.5;
            maximum = center + constraints.minimum_range * 0.5;
        }
        let minimum = minimum.max(constraints.absolute_minimum);
        let maximum = maximum.min(constraints.absolute_maximum);
        self.apply_view_change(AxisChangeKind::Zoom, ViewBounds::new(minimum, maximum))
    }

    /// Zooms around the middle of the actual range (in transformed space).
    pub fn zoom_at_center(&mut self, factor: f64) -> ChartResult<Option<AxisChange>> {
        let center = self.kind.post_inverse_transform(midpoint(
            self.kind.pre_transform(self.state.actual_minimum),
            self.kind.pre_transform(self.state.actual_maximum),
        ));
        self.zoom_at(factor, center)
    }

    /// Sets the magnitude of the scale (pixels per pre-transformed unit),
    /// keeping the centre of the range fixed on screen.
    pub fn zoom_scale(&mut self, new_scale: f64) -> ChartResult<Option<AxisChange>> {
        if !self.config.is_zoom_enabled {
            debug!(axis = self.kind.name(), "zoom ignored: zooming disabled");
            return Ok(None);
        }
        if !new_scale.is_finite() || new_scale <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "zoom scale must be finite and > 0, got {new_scale}"
            )));
        }
        let scale = self.nonzero_scale()?;

        let kind = &self.kind;
        let transform = self.state.transform;
        let pre_minimum = kind.pre_transform(self.state.actual_minimum);
        let pre_maximum = kind.pre_transform(self.state.actual_maximum);
        let screen_minimum = transform.apply(pre_minimum);
        let screen_maximum = transform.apply(pre_maximum);

        let pre_mid = midpoint(pre_minimum, pre_maximum);
        let screen_mid = transform.apply(pre_mid);
        let scale = scale.signum() * new_scale;
        let offset = pre_mid - screen_mid / scale;

        let first = kind.post_inverse_transform(screen_minimum / scale + offset);
        let second = kind.post_inverse_transform(screen_maximum / scale + offset);
        let constraints = self.config.range_constraints();
        let minimum = first.min(second).max(constraints.absolute_minimum);
        let maximum = first.max(second).min(constraints.absolute_maximum);
        self.apply_view_change(AxisChangeKind::Zoom, ViewBounds::new(minimum, maximum))
    }

    /// Drops pan/zoom overrides and returns to rule-based resolution.
    pub fn reset(&mut self) -> ChartResult<Option<AxisChange>> {
        self.apply_view_change(AxisChangeKind::Reset, ViewBounds::default())
    }

    fn nonzero_scale(&self) -> ChartResult<f64> {
        let scale = self.state.transform.scale;
        if scale == 0.0 || !scale.is_finite() {
            return Err(ChartError::InvalidData(
                "axis transform is degenerate; run an update cycle first".to_owned(),
            ));
        }
        Ok(scale)
    }

    /// Commits `view`, re-resolves the range and notifies observers.
    ///
    /// Any failure restores the previous view and state.
    fn apply_view_change(
        &mut self,
        kind: AxisChangeKind,
        view: ViewBounds,
    ) -> ChartResult<Option<AxisChange>> {
        let previous_view = self.view;
        let previous_state = self.state;

        self.view = view;
        let result = self.update_actual_max_min().and_then(|()| match self.plot_area {
            Some(plot_area) => self.update_transform(plot_area),
            None => Ok(()),
        });
        if let Err(err) = result {
            self.view = previous_view;
            self.state = previous_state;
            return Err(err);
        }

        let change = AxisChange {
            kind,
            delta_minimum: self.state.actual_minimum - previous_state.actual_minimum,
            delta_maximum: self.state.actual_maximum - previous_state.actual_maximum,
        };
        debug!(
            axis = self.kind.name(),
            kind = ?change.kind,
            actual_minimum = self.state.actual_minimum,
            actual_maximum = self.state.actual_maximum,
            "axis view changed"
        );
        self.emit_axis_change(change);
        Ok(Some(change))
    }
}
