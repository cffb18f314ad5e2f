use std::cell::RefCell;
use std::fmt;

use indexmap::IndexMap;

use crate::core::ScreenRect;
use crate::error::ChartResult;

use super::label_cache::{LabelCache, LabelFormatterFn};
use super::{AxisConfig, AxisKind, AxisObserver, DataBounds, RangeState, ViewBounds};

/// One chart axis: range state machine, affine transform and tick source.
///
/// The host calls one update cycle per render pass:
/// `reset_data_max_min` → `include`... → `update_actual_max_min` →
/// `update_intervals` → `update_transform` (or `update` for the last three).
pub struct Axis<K: AxisKind> {
    pub(super) kind: K,
    pub(super) config: AxisConfig,
    pub(super) data: DataBounds,
    pub(super) view: ViewBounds,
    pub(super) state: RangeState,
    /// Plot area of the last transform update, reused after pan/zoom.
    pub(super) plot_area: Option<ScreenRect>,
    pub(super) observers: IndexMap<String, Box<dyn AxisObserver>>,
    pub(super) label_formatter: Option<LabelFormatterFn>,
    pub(super) label_cache: RefCell<LabelCache>,
}

impl<K: AxisKind> Axis<K> {
    /// Creates an axis with the kind's default configuration.
    pub fn new(kind: K) -> ChartResult<Self> {
        let config = kind.default_config();
        Self::with_config(kind, config)
    }

    /// Creates an axis; inconsistent configuration is rejected here.
    pub fn with_config(kind: K, config: AxisConfig) -> ChartResult<Self> {
        config.validate()?;
        kind.validate()?;
        let (minimum, maximum) = kind.fallback_range();
        let mut axis = Self {
            kind,
            config,
            data: DataBounds::default(),
            view: ViewBounds::default(),
            state: RangeState::initial(minimum, maximum),
            plot_area: None,
            observers: IndexMap::new(),
            label_formatter: None,
            label_cache: RefCell::new(LabelCache::default()),
        };
        axis.update_actual_max_min()?;
        Ok(axis)
    }

    /// Runs range resolution, interval calculation and transform update.
    ///
    /// On error the previously committed state is kept.
    pub fn update(&mut self, plot_area: ScreenRect) -> ChartResult<()> {
        let previous = self.state;
        let result = self
            .update_actual_max_min()
            .and_then(|()| self.update_intervals(plot_area))
            .and_then(|()| self.update_transform(plot_area));
        if result.is_err() {
            self.state = previous;
        }
        result
    }
}

impl<K: AxisKind> fmt::Debug for Axis<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Axis")
            .field("kind", &self.kind)
            .field("config", &self.config)
            .field("data", &self.data)
            .field("view", &self.view)
            .field("state", &self.state)
            .field("observers", &self.observers.keys().collect::<Vec<_>>())
            .field("has_label_formatter", &self.label_formatter.is_some())
            .finish_non_exhaustive()
    }
}
