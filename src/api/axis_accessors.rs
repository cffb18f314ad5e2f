use crate::core::{ScreenPoint, ScreenRect, Thickness};
use crate::error::ChartResult;

use super::{
    Axis, AxisConfig, AxisKind, AxisSnapshot, DataBounds, Intervals, RangeState, ViewBounds,
};

impl<K: AxisKind> Axis<K> {
    #[must_use]
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// Mutable access to kind settings; cached labels are dropped.
    pub fn kind_mut(&mut self) -> &mut K {
        self.label_cache.borrow_mut().clear();
        &mut self.kind
    }

    #[must_use]
    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    /// Replaces the configuration after validating it.
    ///
    /// Takes effect on the next update cycle.
    pub fn set_config(&mut self, config: AxisConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        self.label_cache.borrow_mut().clear();
        Ok(())
    }

    #[must_use]
    pub fn data_bounds(&self) -> DataBounds {
        self.data
    }

    #[must_use]
    pub fn view_bounds(&self) -> ViewBounds {
        self.view
    }

    #[must_use]
    pub fn state(&self) -> &RangeState {
        &self.state
    }

    #[must_use]
    pub fn actual_minimum(&self) -> f64 {
        self.state.actual_minimum
    }

    #[must_use]
    pub fn actual_maximum(&self) -> f64 {
        self.state.actual_maximum
    }

    #[must_use]
    pub fn clip_minimum(&self) -> f64 {
        self.state.clip_minimum
    }

    #[must_use]
    pub fn clip_maximum(&self) -> f64 {
        self.state.clip_maximum
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.transform.scale
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.state.transform.offset
    }

    #[must_use]
    pub fn screen_min(&self) -> f64 {
        self.state.screen_min
    }

    #[must_use]
    pub fn screen_max(&self) -> f64 {
        self.state.screen_max
    }

    #[must_use]
    pub fn mid_point(&self) -> ScreenPoint {
        self.state.mid_point
    }

    #[must_use]
    pub fn intervals(&self) -> Intervals {
        self.state.intervals
    }

    #[must_use]
    pub fn actual_major_step(&self) -> f64 {
        self.state.intervals.major_step
    }

    #[must_use]
    pub fn actual_minor_step(&self) -> f64 {
        self.state.intervals.minor_step
    }

    #[must_use]
    pub fn desired_margin(&self) -> Thickness {
        self.state.desired_margin
    }

    #[must_use]
    pub fn plot_area(&self) -> Option<ScreenRect> {
        self.plot_area
    }

    #[must_use]
    pub fn snapshot(&self) -> AxisSnapshot {
        AxisSnapshot {
            kind_name: self.kind.name().to_owned(),
            actual_minimum: self.state.actual_minimum,
            actual_maximum: self.state.actual_maximum,
            clip_minimum: self.state.clip_minimum,
            clip_maximum: self.state.clip_maximum,
            scale: self.state.transform.scale,
            offset: self.state.transform.offset,
            view_minimum: self.view.minimum,
            view_maximum: self.view.maximum,
            is_reversed: self.is_reversed(),
        }
    }
}
