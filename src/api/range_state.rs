use serde::{Deserialize, Serialize};

use crate::core::{DateTimeIntervalType, RangeConstraints, ScreenPoint, Thickness};
use crate::error::{ChartError, ChartResult};

/// Running data bounds collected by `Axis::include`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DataBounds {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

impl DataBounds {
    #[must_use]
    pub fn new(minimum: f64, maximum: f64) -> Self {
        Self {
            minimum: Some(minimum),
            maximum: Some(maximum),
        }
    }

    pub fn include(&mut self, value: f64) {
        self.minimum = Some(self.minimum.map_or(value, |current| current.min(value)));
        self.maximum = Some(self.maximum.map_or(value, |current| current.max(value)));
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.minimum.is_none() || self.maximum.is_none()
    }

    #[must_use]
    pub fn as_pair(self) -> Option<(f64, f64)> {
        Some((self.minimum?, self.maximum?))
    }
}

/// Session-scoped pan/zoom overrides. `None` means not overridden.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewBounds {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

impl ViewBounds {
    #[must_use]
    pub fn new(minimum: f64, maximum: f64) -> Self {
        Self {
            minimum: Some(minimum),
            maximum: Some(maximum),
        }
    }

    #[must_use]
    pub fn is_overridden(self) -> bool {
        self.minimum.is_some() || self.maximum.is_some()
    }
}

/// Affine map from pre-transformed data to screen: `screen = (pre - offset) * scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTransform {
    pub scale: f64,
    pub offset: f64,
}

impl Default for AxisTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: 0.0,
        }
    }
}

impl AxisTransform {
    /// Solves the transform mapping `pre_min -> a0` and `pre_max -> a1`.
    #[must_use]
    pub fn solve(pre_min: f64, pre_max: f64, a0: f64, a1: f64) -> Self {
        let span = pre_max - pre_min;
        if span == 0.0 || !span.is_finite() {
            return Self {
                scale: 0.0,
                offset: pre_min,
            };
        }
        let scale = (a1 - a0) / span;
        let offset = if scale == 0.0 { pre_min } else { pre_min - a0 / scale };
        Self { scale, offset }
    }

    #[must_use]
    pub fn apply(self, pre_value: f64) -> f64 {
        (pre_value - self.offset) * self.scale
    }

    /// Inverse in pre-transformed space. A zero scale collapses onto `offset`.
    #[must_use]
    pub fn invert(self, screen: f64) -> f64 {
        if self.scale == 0.0 {
            return self.offset;
        }
        screen / self.scale + self.offset
    }
}

/// Unit a tick step is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TickUnit {
    #[default]
    Numeric,
    /// Step counts powers of the logarithm base.
    LogExponent,
    Calendar(DateTimeIntervalType),
    Category,
}

/// Resolved major/minor tick spacing in data units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intervals {
    pub major_step: f64,
    pub minor_step: f64,
    pub major_unit: TickUnit,
    pub minor_unit: TickUnit,
}

impl Default for Intervals {
    fn default() -> Self {
        Self::numeric(20.0, 5.0)
    }
}

impl Intervals {
    #[must_use]
    pub fn numeric(major_step: f64, minor_step: f64) -> Self {
        Self {
            major_step,
            minor_step,
            major_unit: TickUnit::Numeric,
            minor_unit: TickUnit::Numeric,
        }
    }
}

/// Derived axis state, recomputed wholesale every update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeState {
    pub actual_minimum: f64,
    pub actual_maximum: f64,
    pub clip_minimum: f64,
    pub clip_maximum: f64,
    pub intervals: Intervals,
    pub transform: AxisTransform,
    /// Screen coordinate of the axis start (position-adjusted, before margins).
    pub screen_min: f64,
    /// Screen coordinate of the axis end (position-adjusted, before margins).
    pub screen_max: f64,
    pub mid_point: ScreenPoint,
    pub desired_margin: Thickness,
}

impl RangeState {
    #[must_use]
    pub fn initial(minimum: f64, maximum: f64) -> Self {
        Self {
            actual_minimum: minimum,
            actual_maximum: maximum,
            clip_minimum: minimum,
            clip_maximum: maximum,
            intervals: Intervals::default(),
            transform: AxisTransform::default(),
            screen_min: 0.0,
            screen_max: 0.0,
            mid_point: ScreenPoint::default(),
            desired_margin: Thickness::default(),
        }
    }

    /// Checks the range invariants that must hold after every update.
    pub fn check_invariants(&self, constraints: RangeConstraints) -> ChartResult<()> {
        let RangeState {
            actual_minimum,
            actual_maximum,
            ..
        } = *self;
        if !actual_minimum.is_finite() || !actual_maximum.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "resolved range [{actual_minimum}, {actual_maximum}] is not finite"
            )));
        }
        if actual_minimum > actual_maximum {
            return Err(ChartError::InvalidData(format!(
                "resolved minimum {actual_minimum} exceeds maximum {actual_maximum}"
            )));
        }
        if actual_minimum < constraints.absolute_minimum
            || actual_maximum > constraints.absolute_maximum
        {
            return Err(ChartError::InvalidData(format!(
                "resolved range [{actual_minimum}, {actual_maximum}] escapes absolute bounds"
            )));
        }

        let span = actual_maximum - actual_minimum;
        let slack = 1e-9 * span.abs().max(constraints.minimum_range).max(1.0);
        if span + slack < constraints.minimum_range || span - slack > constraints.maximum_range {
            return Err(ChartError::InvalidData(format!(
                "resolved span {span} violates range limits [{}, {}]",
                constraints.minimum_range, constraints.maximum_range
            )));
        }
        if !self.transform.scale.is_finite() || !self.transform.offset.is_finite() {
            return Err(ChartError::InvalidData(
                "axis transform is not finite".to_owned(),
            ));
        }
        Ok(())
    }
}
