mod axis;
mod axis_accessors;
mod axis_config;
mod axis_events;
mod axis_kind;
mod axis_label_format;
pub mod axis_layout;
mod interaction_controller;
mod interval_controller;
pub mod kinds;
mod label_cache;
mod label_formatter_controller;
mod margin_estimator;
mod observer_dispatch;
mod observer_registry;
mod range_controller;
mod range_state;
mod tick_controller;
mod transform_controller;

pub use axis::Axis;
pub use axis_config::{AxisConfig, AxisLabelLocale, AxisPosition, TickStyle};
pub use axis_events::{AxisChange, AxisChangeKind, AxisObserver, AxisSnapshot};
pub use axis_kind::{AxisKind, FormatContext, IntervalContext, TickContext};
pub use axis_layout::{axis_line_position, position_tier_shifts};
pub use kinds::{Angle, Category, DateTime, Linear, Logarithmic, Magnitude, TimeSpan};
pub use label_cache::{LabelCacheStats, LabelFormatterFn};
pub use range_state::{AxisTransform, DataBounds, Intervals, RangeState, TickUnit, ViewBounds};

/// Axis holding any kind, for hosts that keep heterogeneous axes together.
pub type DynAxis = Axis<Box<dyn AxisKind>>;
