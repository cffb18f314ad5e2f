//! chart-axis: axis range, coordinate-transform and tick-generation engine.
//!
//! An [`Axis`] turns a stream of data values and a plot rectangle into a
//! resolved range, an affine screen transform, "nice" tick positions and
//! formatted labels. Drawing is left to the host; text measurement is
//! plugged in through [`render::TextMeasurer`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{
    Angle, Axis, AxisChange, AxisChangeKind, AxisConfig, AxisKind, AxisObserver, AxisPosition,
    AxisSnapshot, Category, DateTime, DynAxis, Linear, Logarithmic, Magnitude, TickStyle,
    TimeSpan,
};
pub use crate::core::{ScreenPoint, ScreenRect, Thickness, TickValues};
pub use error::{ChartError, ChartResult};
