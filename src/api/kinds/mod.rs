//! Concrete axis kinds.
//!
//! Each kind only supplies the numeric hooks of [`AxisKind`](super::AxisKind);
//! range resolution, transform and interaction stay shared in `Axis`.

mod angle;
mod category;
mod date_time;
mod linear;
mod logarithmic;
mod magnitude;
mod time_span;

pub use angle::Angle;
pub use category::Category;
pub use date_time::DateTime;
pub use linear::Linear;
pub use logarithmic::Logarithmic;
pub use magnitude::Magnitude;
pub use time_span::TimeSpan;
